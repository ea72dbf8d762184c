//! Handler for PATCH /api/v1/properties/{id}/status

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::{PropertyResponse, UpdateStatusRequest};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::domain::entities::PropertyStatus;
use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::errors::{error_codes, ErrorResponse};
use rn_shared::types::ApiResponse;

/// Move a property to a new rental status.
///
/// Unlike listing-page inputs, a write with an unknown status is rejected
/// rather than clamped.
pub async fn update_status<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateStatusRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let id = path.into_inner();

    let status = match request.status.as_str() {
        "Available" => PropertyStatus::Available,
        "Pending" => PropertyStatus::Pending,
        "Rented" => PropertyStatus::Rented,
        other => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::VALIDATION_ERROR,
                format!("Unknown property status: {}", other),
            ));
        }
    };

    match state.property_service.change_status(id, status).await {
        Ok(property) => {
            log::info!("Property {} moved to status {}", id, property.status.as_str());
            HttpResponse::Ok().json(ApiResponse::success(PropertyResponse::from(property)))
        }
        Err(error) => domain_error_response(&error),
    }
}
