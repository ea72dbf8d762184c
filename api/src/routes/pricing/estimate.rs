//! Handler for POST /api/v1/price-estimate

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{PriceEstimateRequest, PriceEstimateResponse};
use crate::handlers::validation_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Suggest a monthly rent for the described property.
///
/// Estimation is infallible: unknown cities and property types fall back
/// to baseline rates instead of erroring.
pub async fn estimate_price<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    request: web::Json<PriceEstimateRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        log::warn!("Price estimate request failed validation: {:?}", errors);
        return validation_error_response(&errors);
    }

    let city = request.city.clone();
    let estimate = state.price_estimator.estimate(&request.into_inner().into());

    log::info!(
        "Estimated rent for a property in {}: {} PKR",
        city,
        estimate.suggested_rent
    );

    HttpResponse::Ok().json(ApiResponse::success(PriceEstimateResponse::from(estimate)))
}
