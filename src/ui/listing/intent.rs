use crate::brewery::{BreweryRecord, ListingQuery, SortKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListingIntent {
    /// Fetch succeeded; records are already narrowed to the kept category.
    Loaded {
        records: Vec<BreweryRecord>,
        page_size: usize,
        query: ListingQuery,
    },
    /// Fetch failed; `message` is shown verbatim.
    LoadFailed { message: String },
    SearchChanged { term: String },
    SearchAppend(char),
    SearchBackspace,
    /// Header click: same column flips, new column sorts ascending.
    SortColumn(SortKey),
    PageChanged(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
}

impl Intent for ListingIntent {}
