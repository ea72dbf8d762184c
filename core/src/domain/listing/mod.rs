//! Listing query model: the typed request shape for the listing page.
//!
//! A listing fetch is described by three independent parts: a
//! [`PropertyFilter`] (which rows match), a [`SortKey`] (their order) and a
//! [`Pagination`] window (which slice comes back). The repository layer
//! executes all three in one logical query and reports the exact total
//! match count alongside the window.

pub mod filter;
pub mod sort;

pub use filter::PropertyFilter;
pub use sort::{SortDirection, SortKey};

use rn_shared::types::Pagination;
use serde::{Deserialize, Serialize};

/// Complete, immutable description of one listing-page fetch.
///
/// Built fresh from request parameters on every call; the query service
/// holds no state between fetches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Field constraints, all AND-combined
    pub filter: PropertyFilter,

    /// Result ordering
    pub sort: SortKey,

    /// 1-based page and page size
    pub pagination: Pagination,
}

impl ListingQuery {
    /// Create a query with the given filter and defaults elsewhere
    pub fn filtered(filter: PropertyFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Set the sort key
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page, keeping the current page size
    pub fn on_page(mut self, page: u32) -> Self {
        self.pagination = Pagination::new(page, self.pagination.per_page);
        self
    }

    /// Set page and page size together
    pub fn paged(mut self, page: u32, per_page: u32) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }
}
