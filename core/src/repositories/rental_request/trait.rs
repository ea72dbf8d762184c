//! Rental request repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::RentalRequest;
use crate::errors::DomainError;

/// Repository trait for RentalRequest persistence operations
#[async_trait]
pub trait RentalRequestRepository: Send + Sync {
    /// Find a rental request by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalRequest>, DomainError>;

    /// All requests submitted for a property, newest first
    async fn find_by_property(&self, property_id: Uuid)
        -> Result<Vec<RentalRequest>, DomainError>;

    /// All requests submitted by a buyer, newest first
    async fn find_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<RentalRequest>, DomainError>;

    /// Persist a new rental request
    async fn insert(&self, request: RentalRequest) -> Result<RentalRequest, DomainError>;

    /// Update an existing rental request
    ///
    /// # Returns
    /// * `Ok(RentalRequest)` - the updated request
    /// * `Err(DomainError)` - update failed (e.g. request not found)
    async fn update(&self, request: RentalRequest) -> Result<RentalRequest, DomainError>;
}
