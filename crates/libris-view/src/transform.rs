//! The list-view transformer.
//!
//! Search, category filters, sort and pagination run in that order over a
//! raw collection. The result borrows from the collection and is recomputed
//! on demand, so it can never outlive or go stale against the data it was
//! derived from.

use std::ops::Range;

use tracing::debug;

use libris_model::{RawCollection, Record};

use crate::criteria::{Criteria, FilterSelection, SortKey};
use crate::error::Result;
use crate::filter::matches_all;
use crate::paginate::{PageInfo, page_range};
use crate::screen::ScreenConfig;
use crate::search::matches_search;
use crate::sort::sort_records;

/// Filtered, sorted and paginated view of a raw collection.
#[derive(Debug, Clone)]
pub struct DerivedView<'a> {
    matches: Vec<&'a Record>,
    range: Range<usize>,
    page: PageInfo,
}

impl<'a> DerivedView<'a> {
    /// Records on the requested page.
    pub fn items(&self) -> &[&'a Record] {
        &self.matches[self.range.clone()]
    }

    /// Every record passing search and filters, in sorted order.
    pub fn matches(&self) -> &[&'a Record] {
        &self.matches
    }

    pub fn page(&self) -> PageInfo {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Derive the view for `records` under `criteria`.
///
/// Sorting uses the screen's declared kind for the sort field; fields the
/// screen does not declare compare as text.
pub fn derive<'a>(
    records: &'a [Record],
    config: &ScreenConfig,
    criteria: &Criteria,
) -> DerivedView<'a> {
    let query = criteria.normalized_query();
    let mut matches: Vec<&Record> = records
        .iter()
        .filter(|record| matches_search(record, &config.search_fields, &query))
        .filter(|record| matches_all(record, criteria.filters()))
        .collect();

    if let Some(sort) = criteria.sort() {
        let kind = config.sort_kind(&sort.field);
        sort_records(&mut matches, &sort.field, kind, sort.direction);
    }

    let range = page_range(matches.len(), criteria.page(), config.page_size);
    let page = PageInfo::new(matches.len(), criteria.page(), config.page_size);
    debug!(
        screen = config.name(),
        raw = records.len(),
        matched = matches.len(),
        page = page.page,
        total_pages = page.total_pages,
        "derived list view"
    );
    DerivedView {
        matches,
        range,
        page,
    }
}

/// One screen's list state: configuration, raw collection and criteria.
#[derive(Debug, Clone)]
pub struct ListView {
    config: ScreenConfig,
    raw: RawCollection,
    criteria: Criteria,
}

impl ListView {
    /// Mount a screen: empty collection, default criteria.
    pub fn new(config: ScreenConfig) -> Self {
        let criteria = config.initial_criteria();
        Self {
            config,
            raw: RawCollection::empty(),
            criteria,
        }
    }

    #[must_use]
    pub fn with_collection(mut self, raw: RawCollection) -> Self {
        self.replace_collection(raw);
        self
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn raw(&self) -> &RawCollection {
        &self.raw
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Swap in a freshly loaded collection. Criteria are kept.
    pub fn replace_collection(&mut self, raw: RawCollection) {
        debug!(
            screen = self.config.name(),
            previous = self.raw.len(),
            current = raw.len(),
            "replaced raw collection"
        );
        self.raw = raw;
    }

    pub fn view(&self) -> DerivedView<'_> {
        derive(self.raw.records(), &self.config, &self.criteria)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.criteria.set_search(query);
    }

    /// Apply a dropdown value to a configured filter field.
    pub fn set_filter(&mut self, field: &str, raw: &str) -> Result<()> {
        let selection = self.config.resolve_filter(field, raw)?;
        self.criteria.set_filter(field, selection);
        Ok(())
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.criteria.set_filter(field, FilterSelection::All);
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) -> Result<()> {
        let sort = sort.map(|key| self.config.resolve_sort(key)).transpose()?;
        self.criteria.set_sort(sort);
        Ok(())
    }

    /// Column-header click on a sortable field.
    pub fn toggle_sort(&mut self, field: &str) -> Result<()> {
        self.config.sort_field(field)?;
        self.criteria.toggle_sort(field);
        Ok(())
    }

    pub fn set_page(&mut self, page: usize) {
        self.criteria.set_page(page);
    }

    /// Back to mount-time criteria.
    pub fn reset(&mut self) {
        self.criteria = self.config.initial_criteria();
    }
}
