//! User service implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewUser, User, UserRole};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use rn_shared::utils::validation::validators;

/// Per-role user counts for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub buyers: u64,
    pub sellers: u64,
    pub admins: u64,
}

/// Service for user registration and role administration
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Register a new user. Email addresses are unique; the role defaults
    /// to Buyer when unspecified.
    pub async fn register(&self, input: NewUser) -> DomainResult<User> {
        if !validators::not_empty(&input.name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !validators::is_valid_email(&input.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if self.user_repository.find_by_email(&input.email).await?.is_some() {
            return Err(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }
            .into());
        }

        self.user_repository.insert(User::new(input)).await
    }

    /// Fetch one user by id
    pub async fn get(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })
    }

    /// List users, optionally restricted to one role (admin table)
    pub async fn list(&self, role: Option<UserRole>) -> DomainResult<Vec<User>> {
        self.user_repository.list(role).await
    }

    /// Change a user's role (admin action)
    pub async fn change_role(&self, id: Uuid, role: UserRole) -> DomainResult<User> {
        if !self.user_repository.update_role(id, role).await? {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        self.get(id).await
    }

    /// Per-role counts for the admin dashboard
    pub async fn stats(&self) -> DomainResult<UserStats> {
        Ok(UserStats {
            total: self.user_repository.count_by_role(None).await?,
            buyers: self.user_repository.count_by_role(Some(UserRole::Buyer)).await?,
            sellers: self.user_repository.count_by_role(Some(UserRole::Seller)).await?,
            admins: self.user_repository.count_by_role(Some(UserRole::Admin)).await?,
        })
    }

    /// Delete a user (admin action)
    pub async fn remove(&self, id: Uuid) -> DomainResult<()> {
        if self.user_repository.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound {
                resource: "User".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;

    fn service() -> UserService<MockUserRepository> {
        UserService::new(Arc::new(MockUserRepository::new()))
    }

    fn new_user(email: &str, role: Option<UserRole>) -> NewUser {
        NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            phone: None,
            role,
        }
    }

    #[tokio::test]
    async fn register_defaults_to_buyer() {
        let service = service();
        let user = service
            .register(new_user("buyer@example.com", None))
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Buyer);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let service = service();
        service
            .register(new_user("taken@example.com", None))
            .await
            .unwrap();

        let result = service.register(new_user("taken@example.com", None)).await;
        assert!(matches!(result, Err(DomainError::ValidationErr(_))));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let service = service();
        let result = service.register(new_user("not-an-email", None)).await;
        assert!(matches!(result, Err(DomainError::ValidationErr(_))));
    }

    #[tokio::test]
    async fn role_change_and_stats() {
        let service = service();
        let user = service
            .register(new_user("future-seller@example.com", None))
            .await
            .unwrap();
        service
            .register(new_user("admin@example.com", Some(UserRole::Admin)))
            .await
            .unwrap();

        let updated = service.change_role(user.id, UserRole::Seller).await.unwrap();
        assert_eq!(updated.role, UserRole::Seller);

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.sellers, 1);
        assert_eq!(stats.admins, 1);
        assert_eq!(stats.buyers, 0);
    }

    #[tokio::test]
    async fn list_filters_by_role() {
        let service = service();
        service
            .register(new_user("a@example.com", Some(UserRole::Seller)))
            .await
            .unwrap();
        service.register(new_user("b@example.com", None)).await.unwrap();

        let sellers = service.list(Some(UserRole::Seller)).await.unwrap();
        assert_eq!(sellers.len(), 1);
        assert!(sellers.iter().all(|u| u.role == UserRole::Seller));
    }
}
