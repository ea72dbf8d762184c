//! HTTP route handlers, one module per resource.

pub mod pricing;
pub mod properties;
pub mod rentals;
pub mod users;

use std::sync::Arc;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_core::services::{
    ListingService, PriceEstimator, PropertyService, RentalService, UserService,
};

/// Application state holding the shared services.
///
/// Generic over the repository implementations so endpoint tests can wire
/// the same application against in-memory mocks.
pub struct AppState<P, U, R>
where
    P: PropertyRepository,
    U: UserRepository,
    R: RentalRequestRepository,
{
    pub listing_service: Arc<ListingService<P>>,
    pub property_service: Arc<PropertyService<P>>,
    pub rental_service: Arc<RentalService<R, P>>,
    pub user_service: Arc<UserService<U>>,
    pub price_estimator: PriceEstimator,
}

impl<P, U, R> AppState<P, U, R>
where
    P: PropertyRepository,
    U: UserRepository,
    R: RentalRequestRepository,
{
    /// Wire the services from their repositories
    pub fn new(
        property_repository: Arc<P>,
        user_repository: Arc<U>,
        request_repository: Arc<R>,
    ) -> Self {
        Self {
            listing_service: Arc::new(ListingService::new(property_repository.clone())),
            property_service: Arc::new(PropertyService::new(property_repository.clone())),
            rental_service: Arc::new(RentalService::new(
                request_repository,
                property_repository,
            )),
            user_service: Arc::new(UserService::new(user_repository)),
            price_estimator: PriceEstimator::new(),
        }
    }
}
