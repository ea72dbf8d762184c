//! # RentNest Core
//!
//! Core business logic and domain layer for the RentNest backend.
//! This crate contains domain entities, the listing query domain, business
//! services, repository interfaces, and error types that form the foundation
//! of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AreaUnit, NewProperty, NewRentalRequest, NewUser, Property, PropertyStatus, RentalRequest,
    RequestStatus, User, UserRole,
};
pub use domain::listing::{ListingQuery, PropertyFilter, SortDirection, SortKey};
pub use errors::{DomainError, DomainResult};
pub use repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
pub use services::{
    EstimateInput, FurnishingStatus, ListingService, PriceEstimator, PropertyService,
    RentEstimate, RentalService, UserService, UserStats,
};
