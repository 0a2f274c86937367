//! Pagination slicer.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

/// Number of pages needed for `count` items; zero when there are none.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Index range `[(page-1)*size, page*size)` clamped to `count`.
///
/// Page numbers are 1-based. Page 0 and pages past the end give an empty
/// range rather than being corrected.
pub fn page_range(count: usize, page: usize, page_size: NonZeroUsize) -> Range<usize> {
    let Some(index) = page.checked_sub(1) else {
        return 0..0;
    };
    let start = index.saturating_mul(page_size.get());
    if start >= count {
        return count..count;
    }
    let end = start.saturating_add(page_size.get()).min(count);
    start..end
}

/// Slice one page out of `items`.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Pagination summary for rendering controls and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page (1-based, not clamped).
    pub page: usize,
    pub page_size: usize,
    /// Items matching search and filters, across all pages.
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based position of the first row shown, 0 when the page is empty.
    pub first_row: usize,
    /// 1-based position of the last row shown, 0 when the page is empty.
    pub last_row: usize,
}

impl PageInfo {
    pub fn new(total_items: usize, page: usize, page_size: NonZeroUsize) -> Self {
        let range = page_range(total_items, page, page_size);
        let (first_row, last_row) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        Self {
            page,
            page_size: page_size.get(),
            total_items,
            total_pages: total_pages(total_items, page_size),
            first_row,
            last_row,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_out_of_range(&self) -> bool {
        self.page == 0 || self.page > self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(0, size(10)), 0);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, 3, size(10)), &[20, 21, 22]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(paginate(&items, 0, size(10)).is_empty());
        assert!(paginate(&items, 2, size(10)).is_empty());
        assert!(paginate(&items, usize::MAX, size(10)).is_empty());
    }

    #[test]
    fn page_info_reports_row_span() {
        let info = PageInfo::new(23, 3, size(10));
        assert_eq!((info.first_row, info.last_row), (21, 23));
        assert_eq!(info.total_pages, 3);
        assert!(info.has_previous());
        assert!(!info.has_next());

        let empty = PageInfo::new(0, 1, size(10));
        assert_eq!((empty.first_row, empty.last_row), (0, 0));
        assert!(empty.is_out_of_range());
    }
}
