//! Handler for GET /api/v1/sellers/{seller_id}/properties

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::PropertyResponse;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// All of a seller's properties, newest first, regardless of status
/// (seller dashboard)
pub async fn properties_by_seller<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let seller_id = path.into_inner();

    match state.property_service.listings_of_seller(seller_id).await {
        Ok(properties) => {
            let responses: Vec<PropertyResponse> =
                properties.into_iter().map(PropertyResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(responses))
        }
        Err(error) => domain_error_response(&error),
    }
}
