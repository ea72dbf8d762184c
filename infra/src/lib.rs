//! # RentNest Infrastructure
//!
//! Infrastructure layer providing concrete implementations of the core
//! repository traits against MySQL via SQLx, plus connection pool
//! management.

pub mod database;

use rn_core::errors::DomainError;
use thiserror::Error;

/// Errors originating in the infrastructure layer
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Database {
            message: error.to_string(),
        }
    }
}

pub use database::{
    DatabasePool, MySqlPropertyRepository, MySqlRentalRequestRepository, MySqlUserRepository,
};
