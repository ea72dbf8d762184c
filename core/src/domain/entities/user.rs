//! User entity representing a registered user in the RentNest system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user acts in on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses listings and submits rental requests
    Buyer,
    /// Lists properties for rent
    Seller,
    /// Manages users and listings
    Admin,
}

impl UserRole {
    /// Parse from the stored column value, defaulting to Buyer
    pub fn parse(value: &str) -> Self {
        match value {
            "seller" => UserRole::Seller,
            "admin" => UserRole::Admin,
            _ => UserRole::Buyer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "buyer",
            UserRole::Seller => "seller",
            UserRole::Admin => "admin",
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique)
    pub email: String,

    /// Optional contact phone
    pub phone: Option<String>,

    /// Marketplace role
    pub role: UserRole,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
}

impl User {
    /// Creates a new User instance. Role defaults to Buyer.
    pub fn new(input: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            role: input.role.unwrap_or(UserRole::Buyer),
            created_at: Utc::now(),
        }
    }

    /// Changes the marketplace role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    /// Checks if the user may list properties
    pub fn is_seller(&self) -> bool {
        self.role == UserRole::Seller
    }

    /// Checks if the user has administrative access
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_buyer() {
        let user = User::new(NewUser {
            name: "Sana".to_string(),
            email: "sana@example.com".to_string(),
            phone: None,
            role: None,
        });

        assert_eq!(user.role, UserRole::Buyer);
        assert!(!user.is_seller());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_set_role() {
        let mut user = User::new(NewUser {
            name: "Ahmed".to_string(),
            email: "ahmed@example.com".to_string(),
            phone: Some("+923001234567".to_string()),
            role: None,
        });

        user.set_role(UserRole::Seller);
        assert!(user.is_seller());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Seller).unwrap();
        assert_eq!(json, "\"seller\"");

        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn test_role_parse_fallback() {
        assert_eq!(UserRole::parse("seller"), UserRole::Seller);
        assert_eq!(UserRole::parse("unknown"), UserRole::Buyer);
    }
}
