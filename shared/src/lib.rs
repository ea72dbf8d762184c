//! Shared utilities and common types for the RentNest server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Pagination primitives
//! - Validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, PageWindow, PaginatedResponse, Pagination};
