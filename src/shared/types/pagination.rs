use serde::{Deserialize, Serialize};

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// 1-indexed page number. Not clamped: pages outside `1..=total_pages`
    /// produce an empty slice.
    pub page: u32,
    pub limit: u32,
}

impl PaginationParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Index range of this page inside a collection of `len` items,
    /// or `None` when the page lies outside the collection.
    pub fn bounds(&self, len: usize) -> Option<std::ops::Range<usize>> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let limit = self.limit as usize;
        let start = (self.page as usize - 1).checked_mul(limit)?;
        if start >= len {
            return None;
        }
        Some(start..(start + limit).min(len))
    }

    /// Borrow the items of this page out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.bounds(items.len()) {
            Some(range) => &items[range],
            None => &[],
        }
    }
}

/// Where the free-text search is applied relative to pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Filter the whole collection, then paginate the matches.
    #[default]
    Collection,
    /// Paginate the unfiltered collection, then filter within the page.
    Page,
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    /// Number of records the page count is derived from.
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Page numbers offered for navigation.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
