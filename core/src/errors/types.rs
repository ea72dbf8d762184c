//! Domain-specific error types for the property marketplace.
//!
//! This module provides error type definitions for property management,
//! rental requests, and input validation. HTTP status mapping lives in the
//! presentation layer.

use thiserror::Error;

/// Property lifecycle errors
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Property is not available for rent")]
    NotAvailable,

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },
}

/// Rental request errors
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Rental request not found")]
    NotFound,

    #[error("Rental request already reviewed")]
    AlreadyReviewed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },
}
