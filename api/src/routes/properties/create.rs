//! Handler for POST /api/v1/properties

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{CreatePropertyRequest, PropertyResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Submit a new property listing.
///
/// The listing starts out `Available` with today's listed date.
pub async fn create_property<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    request: web::Json<CreatePropertyRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        log::warn!("Property submission failed validation: {:?}", errors);
        return validation_error_response(&errors);
    }

    let seller_id = request.seller_id;
    match state
        .property_service
        .list_property(request.into_inner().into())
        .await
    {
        Ok(property) => {
            log::info!("Seller {} listed property {}", seller_id, property.id);
            HttpResponse::Created().json(ApiResponse::success(PropertyResponse::from(property)))
        }
        Err(error) => domain_error_response(&error),
    }
}
