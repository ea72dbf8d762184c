//! Handler for PATCH /api/v1/users/{id}/role

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::{UpdateRoleRequest, UserResponse};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::domain::entities::UserRole;
use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::errors::{error_codes, ErrorResponse};
use rn_shared::types::ApiResponse;

/// Change a user's marketplace role (admin action)
pub async fn update_role<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRoleRequest>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let id = path.into_inner();

    let role = match request.role.as_str() {
        "buyer" => UserRole::Buyer,
        "seller" => UserRole::Seller,
        "admin" => UserRole::Admin,
        other => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::VALIDATION_ERROR,
                format!("Unknown role: {}", other),
            ));
        }
    };

    match state.user_service.change_role(id, role).await {
        Ok(user) => {
            log::info!("User {} role changed to {}", id, user.role.as_str());
            HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user)))
        }
        Err(error) => domain_error_response(&error),
    }
}
