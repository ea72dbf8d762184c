//! Handler for GET /api/v1/properties/{id}/requests

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::RentalRequestResponse;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// All rental requests for a property, newest first (seller dashboard)
pub async fn requests_for_property<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let property_id = path.into_inner();

    match state.rental_service.requests_for_property(property_id).await {
        Ok(requests) => {
            let responses: Vec<RentalRequestResponse> = requests
                .into_iter()
                .map(RentalRequestResponse::from)
                .collect();
            HttpResponse::Ok().json(ApiResponse::success(responses))
        }
        Err(error) => domain_error_response(&error),
    }
}
