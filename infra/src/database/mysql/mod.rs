//! MySQL repository implementations

pub mod property_repository_impl;
pub mod rental_request_repository_impl;
pub mod user_repository_impl;

pub use property_repository_impl::MySqlPropertyRepository;
pub use rental_request_repository_impl::MySqlRentalRequestRepository;
pub use user_repository_impl::MySqlUserRepository;

use rn_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row};

/// Decode one column from a row, labeling failures with the column name
pub(crate) fn get_column<'r, T>(row: &'r MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(column).map_err(|e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    })
}
