//! Listing query service implementation.

use std::sync::Arc;

use crate::domain::entities::Property;
use crate::domain::listing::ListingQuery;
use crate::errors::DomainResult;
use crate::repositories::PropertyRepository;
use rn_shared::types::PaginatedResponse;

/// Translates listing-page selections into one bounded, ordered, paginated
/// result set with an exact total match count.
///
/// The service is stateless: every [`fetch`](ListingService::fetch) is one
/// independent call against the repository, and nothing is shared between
/// calls. Rapid-fire fetches (a user dragging a price slider) are therefore
/// unordered relative to each other; discarding superseded in-flight
/// results is the caller's responsibility.
pub struct ListingService<P>
where
    P: PropertyRepository,
{
    /// Property repository answering filtered/sorted/windowed queries
    property_repository: Arc<P>,
}

impl<P> ListingService<P>
where
    P: PropertyRepository,
{
    /// Create a new listing service
    pub fn new(property_repository: Arc<P>) -> Self {
        Self {
            property_repository,
        }
    }

    /// Fetch one page of listings.
    ///
    /// The repository contract guarantees every returned row has status
    /// `Available` and that `total` counts all matching rows, not the
    /// window. Any repository failure surfaces as a single opaque error
    /// with no partial results and no retry; the caller decides whether to
    /// retry or render an empty result set.
    pub async fn fetch(&self, query: &ListingQuery) -> DomainResult<PaginatedResponse<Property>> {
        let (rows, total) = self
            .property_repository
            .search(&query.filter, query.sort, query.pagination)
            .await?;

        Ok(PaginatedResponse::new(rows, query.pagination, total))
    }
}
