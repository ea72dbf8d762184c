//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rn_core::domain::entities::{User, UserRole};
use rn_core::errors::{DomainError, ValidationError};
use rn_core::repositories::UserRepository;

use super::get_column;

const USER_COLUMNS: &str = "id, name, email, phone, role, created_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = get_column(row, "id")?;
        let role: String = get_column(row, "role")?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: get_column(row, "name")?,
            email: get_column(row, "email")?,
            phone: get_column::<Option<String>>(row, "phone")?,
            role: UserRole::parse(&role),
            created_at: get_column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        // Check for duplicate email first
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(DomainError::ValidationErr(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }));
        }

        let query = r#"
            INSERT INTO users (id, name, email, phone, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }

    async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, DomainError> {
        let rows = match role {
            Some(role) => {
                let query = format!(
                    "SELECT {} FROM users WHERE role = ? ORDER BY created_at DESC",
                    USER_COLUMNS
                );
                sqlx::query(&query)
                    .bind(role.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| DomainError::Database {
            message: format!("Database query failed: {}", e),
        })?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<bool, DomainError> {
        let query = "UPDATE users SET role = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(role.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user role: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM users WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete user: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_role(&self, role: Option<UserRole>) -> Result<u64, DomainError> {
        let result = match role {
            Some(role) => {
                sqlx::query("SELECT COUNT(*) as count FROM users WHERE role = ?")
                    .bind(role.as_str())
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT COUNT(*) as count FROM users")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::Database {
            message: format!("Failed to count users: {}", e),
        })?;

        let count: i64 = result.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }
}
