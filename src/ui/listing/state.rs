use crate::brewery::BreweryListing;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready(BreweryListing),
}

impl UiState for ListingState {}

impl ListingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn listing(&self) -> Option<&BreweryListing> {
        match self {
            Self::Ready(listing) => Some(listing),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_default() {
        assert_eq!(ListingState::default(), ListingState::Loading);
        assert!(ListingState::default().is_loading());
    }

    #[test]
    fn accessors_match_variant() {
        let failed = ListingState::Failed {
            message: "boom".to_string(),
        };
        assert_eq!(failed.error_message(), Some("boom"));
        assert!(failed.listing().is_none());

        let ready = ListingState::Ready(BreweryListing::new(Vec::new(), 5));
        assert!(ready.listing().is_some());
        assert!(ready.error_message().is_none());
    }
}
