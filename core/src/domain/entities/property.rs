//! Property entity representing a rental listing in the RentNest system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PropertyError;

/// Unit the property area is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Marla,
    Kanal,
}

impl AreaUnit {
    /// Parse from the stored column value, defaulting to Marla
    pub fn parse(value: &str) -> Self {
        match value {
            "Kanal" => AreaUnit::Kanal,
            _ => AreaUnit::Marla,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Marla => "Marla",
            AreaUnit::Kanal => "Kanal",
        }
    }
}

/// Rental status of a property.
///
/// Only `Available` properties appear in listing-page results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Available,
    Pending,
    Rented,
}

impl PropertyStatus {
    /// Parse from the stored column value, defaulting to Available
    pub fn parse(value: &str) -> Self {
        match value {
            "Pending" => PropertyStatus::Pending,
            "Rented" => PropertyStatus::Rented,
            _ => PropertyStatus::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Rented => "Rented",
        }
    }
}

/// Property entity representing a rental listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier for the property
    pub id: Uuid,

    /// Listing title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Monthly rent in PKR
    pub price: u64,

    /// Area size in `area_unit` units
    pub area: f64,

    /// Unit the area is measured in
    pub area_unit: AreaUnit,

    /// Number of bedrooms
    pub bedrooms: u32,

    /// Number of floors
    pub floors: u32,

    /// Number of kitchens
    pub kitchens: u32,

    /// Whether the property has a lawn or garden
    pub has_lawn: bool,

    /// Extra details supplied by the seller
    pub additional_info: Option<String>,

    /// Street address or housing society
    pub address: String,

    /// City the property is in
    pub city: String,

    /// Property type (free-form, e.g. "House", "Apartment")
    pub property_type: String,

    /// Image reference strings (at least one expected, not enforced)
    pub images: Vec<String>,

    /// Owning seller
    pub seller_id: Uuid,

    /// Seller contact name shown on the listing
    pub seller_name: String,

    /// Seller contact phone shown on the listing
    pub seller_phone: String,

    /// Rental status
    pub status: PropertyStatus,

    /// Date the property was listed
    pub listed_date: NaiveDate,

    /// Timestamp when the record was created (default listing sort key)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub bedrooms: u32,
    pub floors: u32,
    pub kitchens: u32,
    pub has_lawn: bool,
    pub additional_info: Option<String>,
    pub address: String,
    pub city: String,
    pub property_type: String,
    pub images: Vec<String>,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub seller_phone: String,
}

impl Property {
    /// Create a new property from a seller submission.
    ///
    /// New listings start out `Available` with today's listed date.
    pub fn from_submission(input: NewProperty) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            price: input.price,
            area: input.area,
            area_unit: input.area_unit,
            bedrooms: input.bedrooms,
            floors: input.floors,
            kitchens: input.kitchens,
            has_lawn: input.has_lawn,
            additional_info: input.additional_info,
            address: input.address,
            city: input.city,
            property_type: input.property_type,
            images: input.images,
            seller_id: input.seller_id,
            seller_name: input.seller_name,
            seller_phone: input.seller_phone,
            status: PropertyStatus::Available,
            listed_date: now.date_naive(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the property is visible on the listing page
    pub fn is_listed(&self) -> bool {
        self.status == PropertyStatus::Available
    }

    /// Area expressed in Marla (1 Kanal = 20 Marla)
    pub fn area_in_marla(&self) -> f64 {
        match self.area_unit {
            AreaUnit::Marla => self.area,
            AreaUnit::Kanal => self.area * 20.0,
        }
    }

    /// Move the property to a new status.
    ///
    /// A `Rented` property must be re-listed (set back to `Available`)
    /// before it can go `Pending` again.
    pub fn change_status(&mut self, status: PropertyStatus) -> Result<(), PropertyError> {
        if self.status == PropertyStatus::Rented && status == PropertyStatus::Pending {
            return Err(PropertyError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: status.as_str().to_string(),
            });
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewProperty {
        NewProperty {
            title: "3 Bed House in DHA".to_string(),
            description: "Well maintained family home".to_string(),
            price: 65_000,
            area: 10.0,
            area_unit: AreaUnit::Marla,
            bedrooms: 3,
            floors: 2,
            kitchens: 1,
            has_lawn: true,
            additional_info: None,
            address: "DHA Phase 5".to_string(),
            city: "Lahore".to_string(),
            property_type: "House".to_string(),
            images: vec!["img/front.jpg".to_string()],
            seller_id: Uuid::new_v4(),
            seller_name: "Ahmed".to_string(),
            seller_phone: "+923001234567".to_string(),
        }
    }

    #[test]
    fn test_new_listing_is_available() {
        let property = Property::from_submission(submission());
        assert_eq!(property.status, PropertyStatus::Available);
        assert!(property.is_listed());
        assert_eq!(property.listed_date, property.created_at.date_naive());
    }

    #[test]
    fn test_area_conversion() {
        let mut property = Property::from_submission(submission());
        assert_eq!(property.area_in_marla(), 10.0);

        property.area_unit = AreaUnit::Kanal;
        property.area = 2.0;
        assert_eq!(property.area_in_marla(), 40.0);
    }

    #[test]
    fn test_status_change() {
        let mut property = Property::from_submission(submission());
        property.change_status(PropertyStatus::Pending).unwrap();
        assert!(!property.is_listed());
        property.change_status(PropertyStatus::Rented).unwrap();
        assert_eq!(property.status, PropertyStatus::Rented);
    }

    #[test]
    fn test_rented_cannot_go_pending() {
        let mut property = Property::from_submission(submission());
        property.change_status(PropertyStatus::Rented).unwrap();
        let result = property.change_status(PropertyStatus::Pending);
        assert!(result.is_err());

        // Re-listing first makes the transition legal again
        property.change_status(PropertyStatus::Available).unwrap();
        assert!(property.change_status(PropertyStatus::Pending).is_ok());
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            PropertyStatus::Available,
            PropertyStatus::Pending,
            PropertyStatus::Rented,
        ] {
            assert_eq!(PropertyStatus::parse(status.as_str()), status);
        }
        assert_eq!(PropertyStatus::parse("garbage"), PropertyStatus::Available);
    }
}
