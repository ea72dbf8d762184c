//! MySQL implementation of the RentalRequestRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use rn_core::domain::entities::{RentalRequest, RequestStatus};
use rn_core::errors::DomainError;
use rn_core::repositories::RentalRequestRepository;

use super::get_column;

const REQUEST_COLUMNS: &str = r#"id, property_id, buyer_id, proposed_price,
       duration_months, message, status, created_at, updated_at"#;

/// MySQL implementation of RentalRequestRepository
pub struct MySqlRentalRequestRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRentalRequestRepository {
    /// Create a new MySQL rental request repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a RentalRequest entity
    fn row_to_request(row: &MySqlRow) -> Result<RentalRequest, DomainError> {
        let id: String = get_column(row, "id")?;
        let property_id: String = get_column(row, "property_id")?;
        let buyer_id: String = get_column(row, "buyer_id")?;
        let status: String = get_column(row, "status")?;

        let parse = |value: &str| {
            Uuid::parse_str(value).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })
        };

        Ok(RentalRequest {
            id: parse(&id)?,
            property_id: parse(&property_id)?,
            buyer_id: parse(&buyer_id)?,
            proposed_price: get_column::<u64>(row, "proposed_price")?,
            duration_months: get_column::<u32>(row, "duration_months")?,
            message: get_column::<Option<String>>(row, "message")?,
            status: RequestStatus::parse(&status),
            created_at: get_column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: get_column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn find_all_by(
        &self,
        column: &str,
        id: Uuid,
    ) -> Result<Vec<RentalRequest>, DomainError> {
        let query = format!(
            "SELECT {} FROM rental_requests WHERE {} = ? ORDER BY created_at DESC",
            REQUEST_COLUMNS, column
        );

        let rows = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_request).collect()
    }
}

#[async_trait]
impl RentalRequestRepository for MySqlRentalRequestRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalRequest>, DomainError> {
        let query = format!(
            "SELECT {} FROM rental_requests WHERE id = ? LIMIT 1",
            REQUEST_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_request(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_property(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<RentalRequest>, DomainError> {
        self.find_all_by("property_id", property_id).await
    }

    async fn find_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<RentalRequest>, DomainError> {
        self.find_all_by("buyer_id", buyer_id).await
    }

    async fn insert(&self, request: RentalRequest) -> Result<RentalRequest, DomainError> {
        let query = r#"
            INSERT INTO rental_requests (
                id, property_id, buyer_id, proposed_price,
                duration_months, message, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(request.id.to_string())
            .bind(request.property_id.to_string())
            .bind(request.buyer_id.to_string())
            .bind(request.proposed_price)
            .bind(request.duration_months)
            .bind(&request.message)
            .bind(request.status.as_str())
            .bind(request.created_at)
            .bind(request.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create rental request: {}", e),
            })?;

        Ok(request)
    }

    async fn update(&self, request: RentalRequest) -> Result<RentalRequest, DomainError> {
        let query = r#"
            UPDATE rental_requests SET
                proposed_price = ?, duration_months = ?, message = ?,
                status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(request.proposed_price)
            .bind(request.duration_months)
            .bind(&request.message)
            .bind(request.status.as_str())
            .bind(Utc::now())
            .bind(request.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update rental request: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "RentalRequest".to_string(),
            });
        }

        let mut updated = request;
        updated.updated_at = Utc::now();
        Ok(updated)
    }
}
