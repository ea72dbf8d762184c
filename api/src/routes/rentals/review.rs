//! Handler for POST /api/v1/rental-requests/{id}/review

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::{RentalRequestResponse, ReviewRequestRequest};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Record the seller's decision on a pending request.
///
/// Approval takes the property off the listing page by moving it to
/// `Pending`.
pub async fn review_request<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
    request: web::Json<ReviewRequestRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let id = path.into_inner();
    let approve = request.approve;

    match state.rental_service.review(id, approve).await {
        Ok(rental_request) => {
            log::info!(
                "Rental request {} {}",
                id,
                if approve { "approved" } else { "rejected" }
            );
            HttpResponse::Ok().json(ApiResponse::success(RentalRequestResponse::from(
                rental_request,
            )))
        }
        Err(error) => domain_error_response(&error),
    }
}
