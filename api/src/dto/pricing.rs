//! Price estimation DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use rn_core::domain::entities::AreaUnit;
use rn_core::services::{EstimateInput, FurnishingStatus, RentEstimate};

/// Request body for POST /api/v1/price-estimate
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PriceEstimateRequest {
    #[validate(length(min = 1, max = 100))]
    pub property_type: String,

    #[validate(range(min = 0.1))]
    pub area: f64,

    /// "Marla" or "Kanal"
    pub area_unit: String,

    #[validate(range(max = 20))]
    pub bedrooms: u32,

    #[validate(range(max = 10))]
    pub floors: u32,

    #[validate(range(max = 10))]
    pub kitchens: u32,

    pub has_lawn: bool,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    /// Whether the property is furnished; defaults to false
    pub furnished: Option<bool>,
}

impl From<PriceEstimateRequest> for EstimateInput {
    fn from(request: PriceEstimateRequest) -> Self {
        EstimateInput {
            property_type: request.property_type,
            area: request.area,
            area_unit: AreaUnit::parse(&request.area_unit),
            bedrooms: request.bedrooms,
            floors: request.floors,
            kitchens: request.kitchens,
            has_lawn: request.has_lawn,
            city: request.city,
            furnishing: if request.furnished.unwrap_or(false) {
                FurnishingStatus::Furnished
            } else {
                FurnishingStatus::Unfurnished
            },
        }
    }
}

/// Response body for a price estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimateResponse {
    /// Suggested monthly rent, rounded to the nearest 1000 PKR
    pub suggested_rent: u64,

    /// Advisable range around the suggestion
    pub range_low: u64,
    pub range_high: u64,

    pub currency: String,
}

impl From<RentEstimate> for PriceEstimateResponse {
    fn from(estimate: RentEstimate) -> Self {
        Self {
            suggested_rent: estimate.suggested_rent,
            range_low: estimate.range_low,
            range_high: estimate.range_high,
            currency: "PKR".to_string(),
        }
    }
}
