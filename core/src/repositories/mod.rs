//! Repository interfaces for data persistence, with in-memory mocks for
//! testing. Concrete SQL implementations live in the infrastructure crate.

pub mod property;
pub mod rental_request;
pub mod user;

pub use property::{MockPropertyRepository, PropertyRepository};
pub use rental_request::{MockRentalRequestRepository, RentalRequestRepository};
pub use user::{MockUserRepository, UserRepository};
