//! Handler for GET /api/v1/properties/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::PropertyResponse;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Fetch one property by id, any status (detail page)
pub async fn get_property<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let id = path.into_inner();

    match state.property_service.get(id).await {
        Ok(property) => {
            HttpResponse::Ok().json(ApiResponse::success(PropertyResponse::from(property)))
        }
        Err(error) => domain_error_response(&error),
    }
}
