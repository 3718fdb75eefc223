use crate::brewery::BreweryListing;
use crate::ui::mvi::Reducer;

use super::intent::ListingIntent;
use super::state::ListingState;

/// Loading → Ready | Failed. Both outcomes are final; user intents only act
/// on Ready.
pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (
                ListingState::Loading,
                ListingIntent::Loaded {
                    records,
                    page_size,
                    query,
                },
            ) => ListingState::Ready(BreweryListing::with_query(records, page_size, query)),
            (ListingState::Loading, ListingIntent::LoadFailed { message }) => {
                ListingState::Failed { message }
            }
            (ListingState::Ready(mut listing), intent) => {
                apply(&mut listing, intent);
                ListingState::Ready(listing)
            }
            (other, _) => other,
        }
    }
}

fn apply(listing: &mut BreweryListing, intent: ListingIntent) {
    match intent {
        ListingIntent::SearchChanged { term } => listing.set_search(term),
        ListingIntent::SearchAppend(ch) => listing.push_search_char(ch),
        ListingIntent::SearchBackspace => listing.pop_search_char(),
        ListingIntent::SortColumn(key) => listing.sort_by(key),
        ListingIntent::PageChanged(page) => listing.go_to_page(page),
        ListingIntent::NextPage => listing.next_page(),
        ListingIntent::PreviousPage => listing.previous_page(),
        ListingIntent::FirstPage => listing.go_to_page(0),
        ListingIntent::LastPage => listing.go_to_page(listing.last_page()),
        // Fetch outcomes after the first one are ignored.
        ListingIntent::Loaded { .. } | ListingIntent::LoadFailed { .. } => {}
    }
}
