//! Handler for POST /api/v1/rental-requests

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{RentalRequestResponse, SubmitRequestRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Submit a buyer's rental request for an available property
pub async fn submit_request<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    request: web::Json<SubmitRequestRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        log::warn!("Rental request failed validation: {:?}", errors);
        return validation_error_response(&errors);
    }

    match state
        .rental_service
        .submit(request.into_inner().into())
        .await
    {
        Ok(rental_request) => {
            log::info!(
                "Buyer {} requested property {}",
                rental_request.buyer_id,
                rental_request.property_id
            );
            HttpResponse::Created().json(ApiResponse::success(RentalRequestResponse::from(
                rental_request,
            )))
        }
        Err(error) => domain_error_response(&error),
    }
}
