//! Pagination Controller State
//!
//! Page-index bookkeeping over a fixed page size.

/// Page size used by the remote list endpoint
pub const ITEMS_PER_PAGE: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page currently shown
    pub current_page: usize,
    /// Last known total; adjusted locally by add/delete
    pub total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1, total_items: 0 }
    }
}

impl Pagination {
    pub fn new(total_items: usize) -> Self {
        Self { current_page: 1, total_items }
    }

    /// `max(1, ceil(total_items / ITEMS_PER_PAGE))`
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(ITEMS_PER_PAGE).max(1)
    }

    /// Offset of the first item of the current page
    pub fn skip(&self) -> usize {
        (self.current_page - 1) * ITEMS_PER_PAGE
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Move forward one page. Returns false at the last page.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Move back one page. Returns false at page 1.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn record_added(&mut self) {
        self.total_items += 1;
    }

    pub fn record_removed(&mut self) {
        self.total_items = self.total_items.saturating_sub(1);
    }
}
