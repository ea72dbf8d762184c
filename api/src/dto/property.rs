//! Property DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rn_core::domain::entities::{AreaUnit, NewProperty, Property};

/// Request body for POST /api/v1/properties
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: String,

    pub price: u64,

    pub area: f64,

    /// "Marla" or "Kanal"
    pub area_unit: String,

    pub bedrooms: u32,
    pub floors: u32,
    pub kitchens: u32,
    pub has_lawn: bool,

    pub additional_info: Option<String>,

    #[validate(length(min = 3, max = 300))]
    pub address: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 100))]
    pub property_type: String,

    pub images: Vec<String>,

    pub seller_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub seller_name: String,

    #[validate(length(min = 7, max = 20))]
    pub seller_phone: String,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(request: CreatePropertyRequest) -> Self {
        NewProperty {
            title: request.title,
            description: request.description,
            price: request.price,
            area: request.area,
            area_unit: AreaUnit::parse(&request.area_unit),
            bedrooms: request.bedrooms,
            floors: request.floors,
            kitchens: request.kitchens,
            has_lawn: request.has_lawn,
            additional_info: request.additional_info,
            address: request.address,
            city: request.city,
            property_type: request.property_type,
            images: request.images,
            seller_id: request.seller_id,
            seller_name: request.seller_name,
            seller_phone: request.seller_phone,
        }
    }
}

/// Request body for PATCH /api/v1/properties/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    /// "Available", "Pending" or "Rented"
    pub status: String,
}

/// Property as rendered to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub area: f64,
    pub area_unit: String,
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
    pub status: String,
    pub listed_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            title: property.title,
            description: property.description,
            price: property.price,
            area: property.area,
            area_unit: property.area_unit.as_str().to_string(),
            bedrooms: property.bedrooms,
            floors: property.floors,
            kitchens: property.kitchens,
            has_lawn: property.has_lawn,
            additional_info: property.additional_info,
            address: property.address,
            city: property.city,
            property_type: property.property_type,
            images: property.images,
            seller_id: property.seller_id,
            seller_name: property.seller_name,
            seller_phone: property.seller_phone,
            status: property.status.as_str().to_string(),
            listed_date: property.listed_date,
            created_at: property.created_at,
        }
    }
}
