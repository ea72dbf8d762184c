//! Rental request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rn_core::domain::entities::{NewRentalRequest, RentalRequest};

/// Request body for POST /api/v1/rental-requests
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRequestRequest {
    pub property_id: Uuid,
    pub buyer_id: Uuid,

    #[validate(range(min = 1))]
    pub proposed_price: u64,

    #[validate(range(min = 1, max = 120))]
    pub duration_months: u32,

    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

impl From<SubmitRequestRequest> for NewRentalRequest {
    fn from(request: SubmitRequestRequest) -> Self {
        NewRentalRequest {
            property_id: request.property_id,
            buyer_id: request.buyer_id,
            proposed_price: request.proposed_price,
            duration_months: request.duration_months,
            message: request.message,
        }
    }
}

/// Request body for POST /api/v1/rental-requests/{id}/review
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequestRequest {
    pub approve: bool,
}

/// Rental request as rendered to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRequestResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub buyer_id: Uuid,
    pub proposed_price: u64,
    pub duration_months: u32,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<RentalRequest> for RentalRequestResponse {
    fn from(request: RentalRequest) -> Self {
        Self {
            id: request.id,
            property_id: request.property_id,
            buyer_id: request.buyer_id,
            proposed_price: request.proposed_price,
            duration_months: request.duration_months,
            message: request.message,
            status: request.status.as_str().to_string(),
            created_at: request.created_at,
        }
    }
}
