//! Handler for GET /api/v1/users

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::dto::UserResponse;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::domain::entities::UserRole;
use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    /// Restrict to one role: "buyer", "seller" or "admin"
    pub role: Option<String>,
}

/// List users for the admin table, newest first
pub async fn list_users<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    params: web::Query<ListUsersParams>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let role = params.role.as_deref().map(UserRole::parse);

    match state.user_service.list(role).await {
        Ok(users) => {
            let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(responses))
        }
        Err(error) => domain_error_response(&error),
    }
}
