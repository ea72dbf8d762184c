//! Sort resolution for listing queries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of a resolved sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Recognized listing sort keys.
///
/// Each key resolves to one column and direction. Ties within the sort
/// column are broken by the store's natural order, which is not guaranteed
/// stable across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Creation timestamp, newest first (the default)
    Newest,
    /// Monthly rent, cheapest first
    PriceLow,
    /// Monthly rent, most expensive first
    PriceHigh,
    /// Area, largest first
    AreaHigh,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Newest
    }
}

impl SortKey {
    /// Column the key sorts by
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Newest => "created_at",
            SortKey::PriceLow | SortKey::PriceHigh => "price",
            SortKey::AreaHigh => "area",
        }
    }

    /// Resolved sort direction
    pub fn direction(&self) -> SortDirection {
        match self {
            SortKey::PriceLow => SortDirection::Ascending,
            SortKey::Newest | SortKey::PriceHigh | SortKey::AreaHigh => SortDirection::Descending,
        }
    }

    /// The wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::AreaHigh => "area-high",
        }
    }

    /// Parse a sort key, falling back to `Newest` for anything
    /// unrecognized. Clamping instead of erroring matches the listing
    /// page's permissive handling of stale or hand-edited URLs.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "area-high" => SortKey::AreaHigh,
            _ => SortKey::Newest,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse_or_default(s))
    }
}
