//! User DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rn_core::domain::entities::{NewUser, User, UserRole};

/// Request body for POST /api/v1/users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,

    /// "buyer", "seller" or "admin"; defaults to buyer
    pub role: Option<String>,
}

impl From<RegisterUserRequest> for NewUser {
    fn from(request: RegisterUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            phone: request.phone,
            role: request.role.as_deref().map(UserRole::parse),
        }
    }
}

/// Request body for PATCH /api/v1/users/{id}/role
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    /// "buyer", "seller" or "admin"
    pub role: String,
}

/// User as rendered to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
