//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values.
    ///
    /// Out-of-range inputs are clamped rather than rejected: a page below 1
    /// becomes page 1, and per_page is bounded to [1, MAX_PER_PAGE].
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.per_page
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Calculate offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.offset() as i64
    }

    /// Calculate limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit() as i64
    }

    /// The zero-based inclusive row window covered by this page.
    ///
    /// Consecutive pages produce contiguous, non-overlapping windows:
    /// `window(page + 1).from == window(page).to + 1`.
    pub fn window(&self) -> PageWindow {
        let from = self.offset();
        PageWindow {
            from,
            to: from + self.per_page - 1,
        }
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// Zero-based inclusive `[from, to]` row range returned for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub from: u32,
    pub to: u32,
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Total number of items matching the query, ignoring pagination
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,

    /// Whether there's a next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,

    /// Whether there's a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_prev: Option<bool>,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let total_pages = Self::calculate_total_pages(total, pagination.per_page);
        let has_next = pagination.page < total_pages;
        let has_prev = pagination.page > 1;

        Self {
            data,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages,
            has_next: Some(has_next),
            has_prev: Some(has_prev),
        }
    }

    /// Create an empty paginated response
    pub fn empty(pagination: Pagination) -> Self {
        Self {
            data: Vec::new(),
            page: pagination.page,
            per_page: pagination.per_page,
            total: 0,
            total_pages: 0,
            has_next: Some(false),
            has_prev: Some(false),
        }
    }

    /// Calculate total pages from total items and items per page
    fn calculate_total_pages(total: u64, per_page: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        ((total + per_page as u64 - 1) / per_page as u64) as u32
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }

    /// Check if the response is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the number of items in this page
    pub fn count(&self) -> usize {
        self.data.len()
    }
}

// Constants
const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 8;
const MIN_PER_PAGE: u32 = 1;
const MAX_PER_PAGE: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_below_one_is_clamped() {
        let pagination = Pagination::new(0, 8);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_window_arithmetic() {
        let pagination = Pagination::new(3, 8);
        let window = pagination.window();
        assert_eq!(window.from, 16);
        assert_eq!(window.to, 23);
    }

    #[test]
    fn test_windows_are_contiguous() {
        let first = Pagination::new(1, 8).window();
        let second = Pagination::new(2, 8).window();
        assert_eq!(second.from, first.to + 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let response = PaginatedResponse::new(vec![1, 2, 3], Pagination::new(1, 8), 20);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.has_next, Some(true));
        assert_eq!(response.has_prev, Some(false));
    }

    #[test]
    fn test_empty_response() {
        let response: PaginatedResponse<u32> = PaginatedResponse::empty(Pagination::default());
        assert!(response.is_empty());
        assert_eq!(response.total, 0);
        assert_eq!(response.total_pages, 0);
    }

    #[test]
    fn test_per_page_defaults_to_listing_page_size() {
        let pagination = Pagination::default();
        assert_eq!(pagination.per_page, 8);
        assert_eq!(pagination.page, 1);
    }
}
