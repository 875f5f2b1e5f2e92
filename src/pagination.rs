//! Pagination Engine
//!
//! Fixed-size pages over an ordered list. The list itself is not owned; the
//! paginator only tracks its length so a length change can reset the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
    item_count: usize,
}

impl Paginator {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            item_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// `ceil(count / page size)`; an empty list has no pages.
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.items_per_page)
    }

    /// Record the current list length. Any change, in either direction,
    /// resets to page 1. Returns whether a reset happened.
    pub fn sync_item_count(&mut self, count: usize) -> bool {
        if count == self.item_count {
            return false;
        }
        self.item_count = count;
        self.current_page = 1;
        true
    }

    /// `items[(page-1)*size .. page*size]`, empty when the page is out of range.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.current_page == 0 {
            return &[];
        }
        let start = (self.current_page - 1).saturating_mul(self.items_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.items_per_page).min(items.len());
        &items[start..end]
    }

    /// Jump to any page; bounding against `total_pages` is the caller's job.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.set_page(self.current_page - 1);
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.set_page(self.current_page + 1);
            true
        } else {
            false
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page numbers for the pagination bar: a window of at most
    /// `max_visible` pages kept around the current page.
    pub fn visible_pages(&self, max_visible: usize) -> Vec<usize> {
        let total = self.total_pages();
        let max_visible = max_visible.max(1);
        if total <= max_visible {
            return (1..=total).collect();
        }

        let half = max_visible / 2;
        let first = if self.current_page <= half + 1 {
            1
        } else if self.current_page >= total - half {
            total - max_visible + 1
        } else {
            self.current_page - half
        };
        (first..first + max_visible).collect()
    }

    /// Whether pages exist past the visible window.
    pub fn show_ellipsis(&self, max_visible: usize) -> bool {
        let total = self.total_pages();
        total > max_visible && self.current_page < total - max_visible / 2
    }
}
