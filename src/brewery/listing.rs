use super::query::{
    filter_records, page_count, paginate, sort_records, Page, SortKey, SortSpec,
};
use super::record::BreweryRecord;

/// Query a listing starts from: search term, ordering and page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub search: String,
    pub sort: SortSpec,
    pub page: usize,
}

/// The fetched source list together with the view derived from it.
///
/// `visible` is always `sort(filter(source, search), sort)`. Any change to
/// the search term or sort spec recomputes it and moves back to page 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreweryListing {
    source: Vec<BreweryRecord>,
    search: String,
    sort: SortSpec,
    page: usize,
    page_size: usize,
    visible: Vec<BreweryRecord>,
}

impl BreweryListing {
    pub fn new(source: Vec<BreweryRecord>, page_size: usize) -> Self {
        Self::with_query(source, page_size, ListingQuery::default())
    }

    /// Build a listing and apply `query`. The page is clamped to the view.
    pub fn with_query(source: Vec<BreweryRecord>, page_size: usize, query: ListingQuery) -> Self {
        let mut listing = Self {
            source,
            search: query.search,
            sort: query.sort,
            page: 0,
            page_size,
            visible: Vec::new(),
        };
        listing.recompute();
        listing.go_to_page(query.page);
        listing
    }

    pub fn source(&self) -> &[BreweryRecord] {
        &self.source
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The filtered, ordered view across all pages.
    pub fn visible(&self) -> &[BreweryRecord] {
        &self.visible
    }

    pub fn page_count(&self) -> usize {
        page_count(self.visible.len(), self.page_size)
    }

    pub fn current_page(&self) -> Page<'_> {
        paginate(&self.visible, self.page_size, self.page)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.recompute();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
        self.recompute();
    }

    pub fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.recompute();
        }
    }

    /// Header click on `key`: flip if already active, else sort ascending by it.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
        self.recompute();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.min(self.last_page());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    fn recompute(&mut self) {
        let filtered = filter_records(&self.source, &self.search);
        self.visible = sort_records(&filtered, self.sort);
        self.page = 0;
    }
}
