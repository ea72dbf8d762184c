//! Filter predicate for listing queries.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Property;

/// Field constraints narrowing the candidate set of listings.
///
/// Every option is independent; an unset option imposes no constraint.
/// All set options are AND-combined, except that `search_term` matches when
/// ANY of title, description, address or city contains it (case-insensitive
/// substring) before being AND-combined with the rest. Malformed
/// combinations are never rejected: `min_price > max_price` simply matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Free-text search over title, description, address and city
    pub search_term: Option<String>,

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
}

impl PropertyFilter {
    /// A filter with no constraints (matches every listing)
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_min_price(mut self, price: u64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn with_max_price(mut self, price: u64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.min_bedrooms = Some(bedrooms);
        self
    }

    pub fn with_has_lawn(mut self, has_lawn: bool) -> Self {
        self.has_lawn = Some(has_lawn);
        self
    }

    /// Check whether any constraint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluate the predicate against a single property.
    ///
    /// This is the reference semantics for the filter; the SQL translation
    /// in the infrastructure layer must agree with it. Status is NOT part
    /// of the filter — Available-only scoping is the search contract.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(city) = &self.city {
            if !contains_ci(&property.city, city) {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if property.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if property.price > max_price {
                return false;
            }
        }

        if let Some(property_type) = &self.property_type {
            if !contains_ci(&property.property_type, property_type) {
                return false;
            }
        }

        if let Some(min_bedrooms) = self.min_bedrooms {
            if property.bedrooms < min_bedrooms {
                return false;
            }
        }

        if let Some(has_lawn) = self.has_lawn {
            if property.has_lawn != has_lawn {
                return false;
            }
        }

        if let Some(term) = &self.search_term {
            let hit = contains_ci(&property.title, term)
                || contains_ci(&property.description, term)
                || contains_ci(&property.address, term)
                || contains_ci(&property.city, term);
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring containment
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AreaUnit, NewProperty, Property};
    use uuid::Uuid;

    fn property(city: &str, price: u64, bedrooms: u32, has_lawn: bool) -> Property {
        Property::from_submission(NewProperty {
            title: "Corner house".to_string(),
            description: "Newly renovated".to_string(),
            price,
            area: 10.0,
            area_unit: AreaUnit::Marla,
            bedrooms,
            floors: 1,
            kitchens: 1,
            has_lawn,
            additional_info: None,
            address: "DHA Phase 5, Street 12".to_string(),
            city: city.to_string(),
            property_type: "House".to_string(),
            images: vec!["img/1.jpg".to_string()],
            seller_id: Uuid::new_v4(),
            seller_name: "Ali".to_string(),
            seller_phone: "+923330000000".to_string(),
        })
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PropertyFilter::none();
        assert!(filter.is_empty());
        assert!(filter.matches(&property("Lahore", 50_000, 3, true)));
    }

    #[test]
    fn test_city_match_is_case_insensitive_substring() {
        let filter = PropertyFilter::none().with_city("laho");
        assert!(filter.matches(&property("Lahore", 50_000, 3, true)));
        assert!(!filter.matches(&property("Karachi", 50_000, 3, true)));
    }

    #[test]
    fn test_price_bounds_are_inclusive_and_independent() {
        let band = PropertyFilter::none().with_min_price(40_000).with_max_price(80_000);
        assert!(band.matches(&property("Lahore", 40_000, 3, true)));
        assert!(band.matches(&property("Lahore", 80_000, 3, true)));
        assert!(!band.matches(&property("Lahore", 39_999, 3, true)));
        assert!(!band.matches(&property("Lahore", 80_001, 3, true)));

        let floor_only = PropertyFilter::none().with_min_price(40_000);
        assert!(floor_only.matches(&property("Lahore", 1_000_000, 3, true)));
    }

    #[test]
    fn test_inverted_price_band_matches_nothing() {
        let filter = PropertyFilter::none().with_min_price(80_000).with_max_price(40_000);
        assert!(!filter.matches(&property("Lahore", 60_000, 3, true)));
    }

    #[test]
    fn test_search_term_matches_address_alone() {
        // Title and description do not contain the term; address does.
        let filter = PropertyFilter::none().with_search_term("DHA");
        assert!(filter.matches(&property("Lahore", 50_000, 3, true)));

        let filter = PropertyFilter::none().with_search_term("Gulberg");
        assert!(!filter.matches(&property("Lahore", 50_000, 3, true)));
    }

    #[test]
    fn test_search_term_and_other_filters_combine_with_and() {
        let filter = PropertyFilter::none()
            .with_search_term("DHA")
            .with_min_bedrooms(4);
        // Search hits but bedroom bound fails
        assert!(!filter.matches(&property("Lahore", 50_000, 3, true)));
        assert!(filter.matches(&property("Lahore", 50_000, 4, true)));
    }

    #[test]
    fn test_lawn_filter_is_exact() {
        let filter = PropertyFilter::none().with_has_lawn(false);
        assert!(filter.matches(&property("Lahore", 50_000, 3, false)));
        assert!(!filter.matches(&property("Lahore", 50_000, 3, true)));
    }
}
