//! Handler for POST /api/v1/users

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{RegisterUserRequest, UserResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Register a new user. Email addresses are unique; the role defaults to
/// buyer.
pub async fn register_user<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    request: web::Json<RegisterUserRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        log::warn!("User registration failed validation: {:?}", errors);
        return validation_error_response(&errors);
    }

    match state
        .user_service
        .register(request.into_inner().into())
        .await
    {
        Ok(user) => {
            log::info!("Registered user {} as {}", user.id, user.role.as_str());
            HttpResponse::Created().json(ApiResponse::success(UserResponse::from(user)))
        }
        Err(error) => domain_error_response(&error),
    }
}
