//! Catalog availability figures.

use serde::Serialize;

use libris_model::Record;

/// Availability counts for the book catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
    /// Share of available books, rounded to the nearest whole percent.
    pub availability_percent: u8,
}

impl BookStats {
    /// Only `availability == true` counts as available; missing or
    /// non-boolean values count as unavailable.
    pub fn compute(books: &[Record]) -> Self {
        let total = books.len();
        let available = books
            .iter()
            .filter(|book| book.flag("availability") == Some(true))
            .count();
        Self {
            total,
            available,
            unavailable: total - available,
            availability_percent: percent(available, total),
        }
    }
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let share = (part as f64 / whole as f64 * 100.0).round();
    share.clamp(0.0, 100.0) as u8
}
