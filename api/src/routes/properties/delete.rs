//! Handler for DELETE /api/v1/properties/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};

/// Remove a property entirely (admin action)
pub async fn delete_property<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let id = path.into_inner();

    match state.property_service.remove(id).await {
        Ok(()) => {
            log::info!("Property {} deleted", id);
            HttpResponse::NoContent().finish()
        }
        Err(error) => domain_error_response(&error),
    }
}
