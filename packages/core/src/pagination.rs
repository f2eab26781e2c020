//! Page arithmetic for client-side lists.

use std::ops::Range;

/// Rows per page in the admin candidate table.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page over `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    /// Create a pagination, clamping `page` into `1..=page_count()`.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let last = total.div_ceil(page_size).max(1);
        Self {
            page: page.clamp(1, last),
            page_size,
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`; zero for an empty list.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Index range of the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// 1-based position of the first row shown, zero when empty.
    pub fn first_shown(&self) -> usize {
        if self.total == 0 { 0 } else { self.range().start + 1 }
    }

    /// 1-based position of the last row shown.
    pub fn last_shown(&self) -> usize {
        self.range().end
    }
}
