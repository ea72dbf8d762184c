//! Listing query parameters as they arrive on the wire.

use serde::Deserialize;

use rn_core::domain::listing::{ListingQuery, PropertyFilter, SortKey};
use rn_shared::types::Pagination;

/// Query-string parameters accepted by `GET /api/v1/properties`.
///
/// Absent filters impose no constraint. `sort` accepts the four recognized
/// keys and silently falls back to `newest` for anything else; `page` below
/// 1 is clamped rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingQueryParams {
    /// Free-text search over title, description, address and city
    pub search: Option<String>,

    /// Case-insensitive substring match on city
    pub city: Option<String>,

    /// Inclusive lower bound on monthly rent
    pub min_price: Option<u64>,

    /// Inclusive upper bound on monthly rent
    pub max_price: Option<u64>,

    /// Case-insensitive substring match on property type
    pub property_type: Option<String>,

    /// Inclusive lower bound on bedroom count
    pub min_bedrooms: Option<u32>,

    /// Exact match on the lawn flag
    pub has_lawn: Option<bool>,

    /// Sort key: newest | price-low | price-high | area-high
    pub sort: Option<String>,

    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    8
}

impl From<ListingQueryParams> for ListingQuery {
    fn from(params: ListingQueryParams) -> Self {
        let filter = PropertyFilter {
            search_term: params.search,
            city: params.city,
            min_price: params.min_price,
            max_price: params.max_price,
            property_type: params.property_type,
            min_bedrooms: params.min_bedrooms,
            has_lawn: params.has_lawn,
        };

        let sort = params
            .sort
            .as_deref()
            .map(SortKey::parse_or_default)
            .unwrap_or_default();

        ListingQuery {
            filter,
            sort,
            pagination: Pagination::new(params.page, params.page_size),
        }
    }
}
