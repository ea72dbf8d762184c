//! Property repository trait defining the interface for property persistence.
//!
//! This module defines the repository pattern interface for Property
//! entities. The trait is async-first and uses Result types for proper
//! error handling; the listing search method is the storage contract the
//! listing query service is built on.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Property, PropertyStatus};
use crate::domain::listing::{PropertyFilter, SortKey};
use crate::errors::DomainError;
use rn_shared::types::Pagination;

/// Repository trait for Property entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Execute a listing search: filter, order, and window in one logical
    /// query.
    ///
    /// The search is scoped to `Available` properties only; rows in any
    /// other status never appear in the result regardless of the filter.
    /// The returned count is the exact number of rows matching the filter
    /// across the whole collection, not the window size, so the caller can
    /// compute the page count. Read-after-write consistency is not
    /// required: a row freshly flipped to Available may surface on a later
    /// call.
    ///
    /// # Arguments
    /// * `filter` - field constraints, AND-combined (see [`PropertyFilter`])
    /// * `sort` - resolved column/direction pair
    /// * `pagination` - 1-based page and page size
    ///
    /// # Returns
    /// * `Ok((rows, total))` - the window's rows and the exact match count
    /// * `Err(DomainError)` - a single opaque failure; no partial results
    async fn search(
        &self,
        filter: &PropertyFilter,
        sort: SortKey,
        pagination: Pagination,
    ) -> Result<(Vec<Property>, u64), DomainError>;

    /// Find a property by its unique identifier, regardless of status
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// All properties owned by a seller, newest first, regardless of status
    async fn find_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>, DomainError>;

    /// Persist a new property
    ///
    /// # Returns
    /// * `Ok(Property)` - the created property
    /// * `Err(DomainError)` - creation failed
    async fn insert(&self, property: Property) -> Result<Property, DomainError>;

    /// Update an existing property
    ///
    /// # Returns
    /// * `Ok(Property)` - the updated property
    /// * `Err(DomainError)` - update failed (e.g. property not found)
    async fn update(&self, property: Property) -> Result<Property, DomainError>;

    /// Update only the status column of a property
    ///
    /// # Returns
    /// * `Ok(true)` - status was changed
    /// * `Ok(false)` - property not found
    async fn update_status(&self, id: Uuid, status: PropertyStatus) -> Result<bool, DomainError>;

    /// Delete a property
    ///
    /// # Returns
    /// * `Ok(true)` - property was deleted
    /// * `Ok(false)` - property not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
