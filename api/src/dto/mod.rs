//! Request and response DTOs for the HTTP surface.

pub mod listing;
pub mod pricing;
pub mod property;
pub mod rental;
pub mod user;

pub use listing::ListingQueryParams;
pub use pricing::{PriceEstimateRequest, PriceEstimateResponse};
pub use property::{CreatePropertyRequest, PropertyResponse, UpdateStatusRequest};
pub use rental::{RentalRequestResponse, ReviewRequestRequest, SubmitRequestRequest};
pub use user::{RegisterUserRequest, UpdateRoleRequest, UserResponse};
