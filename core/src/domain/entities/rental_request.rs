//! Rental request entity: a buyer's proposal to rent a listed property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RequestError;

/// Review status of a rental request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Parse from the stored column value, defaulting to Pending
    pub fn parse(value: &str) -> Self {
        match value {
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            _ => RequestStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// Rental request entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// Unique identifier for the request
    pub id: Uuid,

    /// Property the request is for
    pub property_id: Uuid,

    /// Buyer who submitted the request
    pub buyer_id: Uuid,

    /// Monthly rent the buyer proposes, in PKR
    pub proposed_price: u64,

    /// Requested rental duration in months
    pub duration_months: u32,

    /// Optional message to the seller
    pub message: Option<String>,

    /// Review status
    pub status: RequestStatus,

    /// Timestamp when the request was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the request was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for submitting a new rental request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRentalRequest {
    pub property_id: Uuid,
    pub buyer_id: Uuid,
    pub proposed_price: u64,
    pub duration_months: u32,
    pub message: Option<String>,
}

impl RentalRequest {
    /// Creates a new pending rental request
    pub fn new(input: NewRentalRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            property_id: input.property_id,
            buyer_id: input.buyer_id,
            proposed_price: input.proposed_price,
            duration_months: input.duration_months,
            message: input.message,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the request is still awaiting review
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Record the seller's decision. A request can only be reviewed once.
    pub fn review(&mut self, approve: bool) -> Result<(), RequestError> {
        if !self.is_pending() {
            return Err(RequestError::AlreadyReviewed);
        }
        self.status = if approve {
            RequestStatus::Approved
        } else {
            RequestStatus::Rejected
        };
        self.updated_at = Utc::now();
        Ok(())
    }
}
