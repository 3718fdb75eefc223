//! Brewery data: the wire record, the one-shot fetch, and the pure
//! filter/sort/paginate pipeline that derives the visible view.

mod client;
mod listing;
mod query;
mod record;

pub use client::{
    fetch_until_shutdown, retain_category, BreweryClient, FetchError, DEFAULT_ENDPOINT,
    MICRO_CATEGORY,
};
pub use listing::{BreweryListing, ListingQuery};
pub use query::{
    compare_records, filter_records, matches_term, page_count, paginate, sort_records, Page,
    SortDirection, SortKey, SortSpec, DEFAULT_PAGE_SIZE,
};
pub use record::BreweryRecord;
