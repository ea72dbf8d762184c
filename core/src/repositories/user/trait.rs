//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{User, UserRole};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - the created user
    /// * `Err(DomainError)` - creation failed (e.g. duplicate email)
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// List users, optionally restricted to one role, newest first
    async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, DomainError>;

    /// Update a user's role
    ///
    /// # Returns
    /// * `Ok(true)` - role was changed
    /// * `Ok(false)` - user not found
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<bool, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - user was deleted
    /// * `Ok(false)` - user not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count users by role (None counts all users)
    async fn count_by_role(&self, role: Option<UserRole>) -> Result<u64, DomainError>;
}
