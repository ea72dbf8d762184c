//! Rental request service implementation.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewRentalRequest, PropertyStatus, RentalRequest};
use crate::errors::{DomainResult, PropertyError, ValidationError};
use crate::repositories::{PropertyRepository, RentalRequestRepository};

/// Service coordinating the rental request workflow between buyers and
/// sellers. Approving a request takes the property off the listing page by
/// moving it to `Pending`.
pub struct RentalService<R, P>
where
    R: RentalRequestRepository,
    P: PropertyRepository,
{
    request_repository: Arc<R>,
    property_repository: Arc<P>,
}

impl<R, P> RentalService<R, P>
where
    R: RentalRequestRepository,
    P: PropertyRepository,
{
    /// Create a new rental service
    pub fn new(request_repository: Arc<R>, property_repository: Arc<P>) -> Self {
        Self {
            request_repository,
            property_repository,
        }
    }

    /// Submit a buyer's rental request for an available property.
    pub async fn submit(&self, input: NewRentalRequest) -> DomainResult<RentalRequest> {
        if input.proposed_price == 0 {
            return Err(ValidationError::OutOfRange {
                field: "proposed_price".to_string(),
                min: "1".to_string(),
                max: "unbounded".to_string(),
            }
            .into());
        }
        if input.duration_months == 0 {
            return Err(ValidationError::OutOfRange {
                field: "duration_months".to_string(),
                min: "1".to_string(),
                max: "unbounded".to_string(),
            }
            .into());
        }

        let property = self
            .property_repository
            .find_by_id(input.property_id)
            .await?
            .ok_or(PropertyError::NotFound)?;
        if !property.is_listed() {
            return Err(PropertyError::NotAvailable.into());
        }

        self.request_repository
            .insert(RentalRequest::new(input))
            .await
    }

    /// Record the seller's decision on a pending request.
    ///
    /// Approval flips the property to `Pending` so it leaves the listing
    /// page; rejection leaves the property untouched.
    pub async fn review(&self, request_id: Uuid, approve: bool) -> DomainResult<RentalRequest> {
        let mut request = self
            .request_repository
            .find_by_id(request_id)
            .await?
            .ok_or(crate::errors::RequestError::NotFound)?;

        request.review(approve)?;
        let request = self.request_repository.update(request).await?;

        if approve {
            self.property_repository
                .update_status(request.property_id, PropertyStatus::Pending)
                .await?;
        }

        Ok(request)
    }

    /// All requests for a property, newest first (seller dashboard)
    pub async fn requests_for_property(
        &self,
        property_id: Uuid,
    ) -> DomainResult<Vec<RentalRequest>> {
        self.request_repository.find_by_property(property_id).await
    }

    /// All requests a buyer has submitted, newest first (buyer dashboard)
    pub async fn requests_of_buyer(&self, buyer_id: Uuid) -> DomainResult<Vec<RentalRequest>> {
        self.request_repository.find_by_buyer(buyer_id).await
    }
}
