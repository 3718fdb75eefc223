use crate::brewery::{BreweryRecord, FetchError, ListingQuery};
use crate::ui::listing::{ListingIntent, ListingReducer, ListingState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct App {
    should_quit: bool,
    /// Listing lifecycle and view state (MVI pattern).
    listing: ListingState,
    page_size: usize,
    /// Query applied once the records arrive.
    initial_query: ListingQuery,
    ticks: usize,
}

impl App {
    pub fn new(page_size: usize, initial_query: ListingQuery) -> Self {
        Self {
            should_quit: false,
            listing: ListingState::default(),
            page_size,
            initial_query,
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn on_tick(&mut self) {
        if self.listing.is_loading() {
            self.ticks = self.ticks.wrapping_add(1);
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.ticks % SPINNER_FRAMES.len()]
    }

    /// Feed the fetch outcome into the listing state machine.
    pub fn on_fetched(&mut self, result: Result<Vec<BreweryRecord>, FetchError>) {
        let intent = match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "listing ready");
                ListingIntent::Loaded {
                    records,
                    page_size: self.page_size,
                    query: std::mem::take(&mut self.initial_query),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing failed to load");
                ListingIntent::LoadFailed {
                    message: err.user_message(),
                }
            }
        };
        self.dispatch(intent);
    }

    /// Dispatch an intent to the listing reducer.
    pub fn dispatch(&mut self, intent: ListingIntent) {
        dispatch_mvi!(self, listing, ListingReducer, intent);
    }
}
