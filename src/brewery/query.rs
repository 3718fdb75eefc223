//! Pure filter, sort and pagination over an in-memory brewery list.
//!
//! Every function here is total: none of them can fail, and none mutate
//! their input. The listing recomputes its view from scratch on each query
//! change, so these are called once per keystroke.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorBorrowed};

use super::record::BreweryRecord;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Column the view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    State,
}

impl SortKey {
    fn field(self, record: &BreweryRecord) -> &str {
        match self {
            SortKey::Name => &record.name,
            SortKey::State => &record.state,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Indicator drawn next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Result of clicking the `key` column header.
    ///
    /// The same column flips direction; a different column starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Direction shown on `key`'s header, `None` when it is not the active column.
    pub fn direction_for(self, key: SortKey) -> Option<SortDirection> {
        (self.key == key).then_some(self.direction)
    }
}

/// Records whose name or state contains `term`, ignoring case.
///
/// An empty term keeps everything.
pub fn filter_records(records: &[BreweryRecord], term: &str) -> Vec<BreweryRecord> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_term(record, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_term(record: &BreweryRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle) || record.state.to_lowercase().contains(needle)
}

/// A new sequence ordered by `spec`. Ties keep no particular order.
pub fn sort_records(records: &[BreweryRecord], spec: SortSpec) -> Vec<BreweryRecord> {
    let collator = root_collator();
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_with(collator.as_ref(), a, b, spec));
    sorted
}

/// Case-insensitive, locale-aware comparison of two records on `spec.key`.
pub fn compare_records(a: &BreweryRecord, b: &BreweryRecord, spec: SortSpec) -> Ordering {
    compare_with(root_collator().as_ref(), a, b, spec)
}

/// Root-locale collator. `None` only when the collation data fails to load.
fn root_collator() -> Option<CollatorBorrowed<'static>> {
    Collator::try_new(Default::default(), Default::default())
        .map_err(|err| tracing::warn!(%err, "collation data unavailable, sorting by code point"))
        .ok()
}

fn compare_with(
    collator: Option<&CollatorBorrowed<'_>>,
    a: &BreweryRecord,
    b: &BreweryRecord,
    spec: SortSpec,
) -> Ordering {
    let left = spec.key.field(a).to_lowercase();
    let right = spec.key.field(b).to_lowercase();
    let ordering = match collator {
        Some(collator) => collator.compare(&left, &right),
        None => left.cmp(&right),
    };
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// One page window of a filtered, ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: &'a [BreweryRecord],
    pub index: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Page<'_> {
    /// `"from-to of count"`, 1-based and inclusive. Empty windows show `0-0 of count`.
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0-0 of {}", self.total);
        }
        let from = self.index * self.page_size + 1;
        let to = from + self.items.len() - 1;
        format!("{from}-{to} of {}", self.total)
    }
}

/// Number of pages needed for `total` rows. Zero rows need zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice of `records` shown on page `index`. Out-of-range pages are empty.
pub fn paginate(records: &[BreweryRecord], page_size: usize, index: usize) -> Page<'_> {
    let start = index.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    Page {
        items: &records[start..end],
        index,
        page_size,
        total: records.len(),
    }
}
