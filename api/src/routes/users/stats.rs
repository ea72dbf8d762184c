//! Handler for GET /api/v1/users/stats

use actix_web::{web, HttpResponse};

use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Per-role user counts for the admin dashboard
pub async fn user_stats<P, U, R>(state: web::Data<AppState<P, U, R>>) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    match state.user_service.stats().await {
        Ok(stats) => HttpResponse::Ok().json(ApiResponse::success(stats)),
        Err(error) => domain_error_response(&error),
    }
}
