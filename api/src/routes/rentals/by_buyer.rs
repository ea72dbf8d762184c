//! Handler for GET /api/v1/buyers/{buyer_id}/requests

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::RentalRequestResponse;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// All requests a buyer has submitted, newest first (buyer dashboard)
pub async fn requests_by_buyer<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let buyer_id = path.into_inner();

    match state.rental_service.requests_of_buyer(buyer_id).await {
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
