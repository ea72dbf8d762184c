//! Mapping from domain errors to HTTP responses.
//!
//! One table decides the status code for every error the services can
//! produce. Database failures stay opaque: the client learns that the
//! query failed, never why.

use actix_web::HttpResponse;

use rn_core::errors::{DomainError, PropertyError, RequestError};
use rn_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into the appropriate HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message)),

        DomainError::ValidationErr(validation) => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, validation.to_string()),
        ),

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource)),
        ),

        DomainError::Property(property_error) => match property_error {
            PropertyError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                error_codes::NOT_FOUND,
                "Property not found",
            )),
            PropertyError::NotAvailable | PropertyError::InvalidStatusTransition { .. } => {
                HttpResponse::Conflict().json(ErrorResponse::new(
                    error_codes::CONFLICT,
                    property_error.to_string(),
                ))
            }
        },

        DomainError::Request(request_error) => match request_error {
            RequestError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                error_codes::NOT_FOUND,
                "Rental request not found",
            )),
            RequestError::AlreadyReviewed => HttpResponse::Conflict().json(ErrorResponse::new(
                error_codes::CONFLICT,
                request_error.to_string(),
            )),
        },

        DomainError::BusinessRule { message } => {
            HttpResponse::Conflict().json(ErrorResponse::new(error_codes::CONFLICT, message))
        }

        // Opaque executor failure: no detail leaks to the client
        DomainError::Database { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new(error_codes::DATABASE_ERROR, "The query could not be completed"),
        ),

        DomainError::Internal { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        ),
    }
}

/// Convert request-body validation failures into a 400 with field details
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
    );

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    HttpResponse::BadRequest().json(response)
}
