use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitekit_shared::Amount;
use tracing::debug;

/// Sort column selected in the dashboard table header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Total,
    Customer,
    /// Any other column, addressed by its raw field name.
    Field(String),
}

impl SortKey {
    /// Map a table column name to a key. `total`/`totalPrice` and
    /// `customer`/`clientName` are aliases from the two dashboard tables.
    pub fn from_column(name: &str) -> Self {
        match name {
            "date" => SortKey::Date,
            "total" | "totalPrice" => SortKey::Total,
            "customer" | "clientName" => SortKey::Customer,
            other => SortKey::Field(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort selection. Clicking the active column flips direction;
/// clicking a new column resets to descending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            *self = Self::descending(key);
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::descending(SortKey::Date)
    }
}

/// Status dropdown value; `all` passes every record through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(String),
}

impl StatusFilter {
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    fn matches(&self, label: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => status == label,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Comparable value a record exposes for a sort key.
///
/// Records substitute `""`/`0`/epoch for missing fields so comparisons
/// never fail on absent data.
#[derive(Debug, Clone)]
pub enum SortValue {
    Text(String),
    Amount(Amount),
    Time(DateTime<Utc>),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortValue::Amount(a), SortValue::Amount(b)) => a.cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            // A record always yields the same variant for a given key, so
            // mismatches only arise from a misbehaving implementation.
            _ => Ordering::Equal,
        }
    }
}

/// Record shape the admin tables know how to list.
pub trait AdminRecord {
    /// Field values scanned by the free-text search box.
    fn search_fields(&self) -> Vec<String>;

    /// Status label for exact-match filtering.
    fn status_label(&self) -> &str;

    /// Value to order by for the given sort key.
    fn sort_value(&self, key: &SortKey) -> SortValue;
}

/// Page selection, 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub per_page: usize,
}

/// Everything the dashboard list view is parameterized by.
#[derive(Debug, Clone, Default)]
pub struct AdminListQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortState,
    pub page: Option<Page>,
}

/// Produce the filtered, sorted, paginated view of a record collection.
///
/// An empty result is a valid empty state at every stage, never an error.
pub fn apply<R: AdminRecord + Clone>(records: &[R], query: &AdminListQuery) -> Vec<R> {
    let needle = query.search.trim().to_lowercase();

    let mut view: Vec<R> = records
        .iter()
        .filter(|record| matches_search(*record, &needle) && query.status.matches(record.status_label()))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = a
            .sort_value(&query.sort.key)
            .compare(&b.sort_value(&query.sort.key));
        match query.sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    debug!(matched = view.len(), total = records.len(), "admin list view recomputed");

    match query.page {
        Some(page) => paginate(view, page),
        None => view,
    }
}

/// A record matches when the query is empty or any search field contains
/// it, case-insensitively.
fn matches_search<R: AdminRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn paginate<R>(view: Vec<R>, page: Page) -> Vec<R> {
    let start = page.number.saturating_sub(1).saturating_mul(page.per_page);
    view.into_iter().skip(start).take(page.per_page).collect()
}
