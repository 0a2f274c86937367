//! Per-screen search, filter, sort and page state.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use libris_model::Value;

use crate::error::ViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}

/// Field plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Selection in one categorical filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterSelection {
    /// The "all" sentinel: the filter passes every record.
    #[default]
    All,
    /// Only records whose field equals this value.
    Only(Value),
}

impl FilterSelection {
    /// True for the sentinel spellings `all`, `ALL` and the empty string.
    pub fn is_sentinel(raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all")
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterSelection::All)
    }
}

/// Split a `FIELD=VALUE` argument.
pub fn split_filter_arg(raw: &str) -> Result<(&str, &str), ViewError> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim(), value.trim()))
        .filter(|(field, _)| !field.is_empty())
        .ok_or_else(|| ViewError::MalformedFilter(raw.to_string()))
}

/// Search, filter, sort and page state for one screen.
///
/// Changing the search text, any filter or the sort returns to the first
/// page. Setting the page directly is not validated against the page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    search: String,
    filters: BTreeMap<String, FilterSelection>,
    sort: Option<SortKey>,
    page: usize,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
        }
    }
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.set_search(query);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, selection: FilterSelection) -> Self {
        self.set_filter(field, selection);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
        self.set_sort(sort);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Raw search text as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Trimmed, lower-cased search text used for matching.
    pub fn normalized_query(&self) -> String {
        self.search.trim().to_lowercase()
    }

    pub fn filters(&self) -> &BTreeMap<String, FilterSelection> {
        &self.filters
    }

    pub fn filter(&self, field: &str) -> &FilterSelection {
        self.filters.get(field).unwrap_or(&FilterSelection::All)
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// True when neither search nor any filter narrows the collection.
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_query().is_empty() && self.filters.values().all(FilterSelection::is_all)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, field: impl Into<String>, selection: FilterSelection) {
        let field = field.into();
        match selection {
            FilterSelection::All => {
                self.filters.remove(&field);
            }
            selection => {
                self.filters.insert(field, selection);
            }
        }
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        self.page = 1;
    }

    /// Column-header click: same field flips direction, a new field sorts
    /// ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(current) if current.field == field => SortKey {
                direction: current.direction.toggled(),
                ..current
            },
            _ => SortKey::asc(field),
        });
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }
}
