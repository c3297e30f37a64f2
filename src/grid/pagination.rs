//! Pagination
//!
//! Page navigation state for the grid. Pages are 1-based; an empty store
//! still has one (empty) page so "Page 1 of 1" is always displayable.

use std::ops::Range;

use tracing::{debug, warn};

use crate::constants::DEFAULT_PAGE_SIZE;

/// Number of pages for `row_count` rows, never less than 1
pub fn page_count(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1)).max(1)
}

/// Rows of page `current_page` (1-based), truncated at the end of `rows`
pub fn page_slice<T>(rows: &[T], current_page: usize, page_size: usize) -> &[T] {
    let range = page_range(rows.len(), current_page, page_size);
    &rows[range]
}

fn page_range(row_count: usize, current_page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(row_count);
    let end = start.saturating_add(page_size).min(row_count);
    start..end
}

/// Pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    /// Create pagination on page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        if page_size == 0 {
            warn!("Page size 0 requested, using 1");
        }
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, row_count: usize) -> usize {
        page_count(row_count, self.page_size)
    }

    /// Jump to page `n`, clamped into `[1, total_pages]`
    pub fn go_to(&mut self, n: usize, row_count: usize) {
        let total = self.total_pages(row_count);
        let page = n.clamp(1, total);
        if page != n {
            debug!(requested = n, page, total, "Page request clamped");
        }
        self.current_page = page;
    }

    pub fn next(&mut self, row_count: usize) {
        if self.can_next(row_count) {
            self.current_page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.can_previous() {
            self.current_page -= 1;
        }
    }

    pub fn can_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.current_page < self.total_pages(row_count)
    }

    /// Keep the current page in bounds after the row count changed
    pub fn clamp(&mut self, row_count: usize) {
        self.go_to(self.current_page, row_count);
    }

    /// Absolute row range of the current page
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        page_range(row_count, self.current_page, self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut p = Pagination::new(10);
        p.go_to(5, 25);
        assert_eq!(p.current_page(), 3);
        p.go_to(0, 25);
        assert_eq!(p.current_page(), 1);
        p.go_to(7, 0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_next_previous_do_not_wrap() {
        let mut p = Pagination::new(10);
        p.previous();
        assert_eq!(p.current_page(), 1);
        p.next(25);
        p.next(25);
        p.next(25);
        assert_eq!(p.current_page(), 3);
        assert!(!p.can_next(25));
        assert!(p.can_previous());
    }

    #[test]
    fn test_last_page_slice() {
        let rows: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&rows, 3, 10), &rows[20..25]);
        assert!(page_slice(&rows, 9, 10).is_empty());
        assert!(page_slice::<usize>(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Pagination::new(10);
        p.go_to(3, 25);
        p.clamp(12);
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.page_range(12), 10..12);
    }

    #[test]
    fn test_zero_page_size_raised() {
        assert_eq!(Pagination::new(0).page_size(), 1);
    }
}
