//! MySQL implementation of the PropertyRepository trait.
//!
//! The listing search translates a [`PropertyFilter`] into a dynamic WHERE
//! conjunction with `sqlx::QueryBuilder`, then runs a COUNT over the same
//! predicate followed by the windowed SELECT. Both run inside one
//! repository call so the caller always sees a window plus the exact total
//! for that filter.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use rn_core::domain::entities::{AreaUnit, Property, PropertyStatus};
use rn_core::domain::listing::{PropertyFilter, SortDirection, SortKey};
use rn_core::errors::DomainError;
use rn_core::repositories::PropertyRepository;
use rn_shared::types::Pagination;

use super::get_column;

const PROPERTY_COLUMNS: &str = r#"id, title, description, price, area, area_unit,
       bedrooms, floors, kitchens, has_lawn, additional_info,
       address, city, property_type, images,
       seller_id, seller_name, seller_phone,
       status, listed_date, created_at, updated_at"#;

/// MySQL implementation of PropertyRepository
pub struct MySqlPropertyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    /// Create a new MySQL property repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Append the filter conjunction to a query.
    ///
    /// Listing searches are always scoped to Available rows; every set
    /// filter option adds one AND term, and the free-text term expands to
    /// an OR group over title/description/address/city. Matching is kept
    /// case-insensitive by lowering both column and pattern.
    fn push_predicate(builder: &mut QueryBuilder<'_, MySql>, filter: &PropertyFilter) {
        builder.push(" WHERE status = 'Available'");

        if let Some(city) = &filter.city {
            builder
                .push(" AND LOWER(city) LIKE ")
                .push_bind(like_pattern(city));
        }
        if let Some(min_price) = filter.min_price {
            builder.push(" AND price >= ").push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            builder.push(" AND price <= ").push_bind(max_price);
        }
        if let Some(property_type) = &filter.property_type {
            builder
                .push(" AND LOWER(property_type) LIKE ")
                .push_bind(like_pattern(property_type));
        }
        if let Some(min_bedrooms) = filter.min_bedrooms {
            builder.push(" AND bedrooms >= ").push_bind(min_bedrooms);
        }
        if let Some(has_lawn) = filter.has_lawn {
            builder.push(" AND has_lawn = ").push_bind(has_lawn);
        }
        if let Some(term) = &filter.search_term {
            let pattern = like_pattern(term);
            builder
                .push(" AND (LOWER(title) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(description) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(address) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(city) LIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }

    /// Convert a database row to a Property entity
    fn row_to_property(row: &MySqlRow) -> Result<Property, DomainError> {
        let id: String = get_column(row, "id")?;
        let seller_id: String = get_column(row, "seller_id")?;
        let area_unit: String = get_column(row, "area_unit")?;
        let status: String = get_column(row, "status")?;
        let images_json: String = get_column(row, "images")?;

        let images: Vec<String> = serde_json::from_str(&images_json)
            .map_err(|e| DomainError::Database {
                message: format!("Invalid images column: {}", e),
            })?;

        Ok(Property {
            id: parse_uuid(&id)?,
            title: get_column(row, "title")?,
            description: get_column(row, "description")?,
            price: get_column::<u64>(row, "price")?,
            area: get_column::<f64>(row, "area")?,
            area_unit: AreaUnit::parse(&area_unit),
            bedrooms: get_column::<u32>(row, "bedrooms")?,
            floors: get_column::<u32>(row, "floors")?,
            kitchens: get_column::<u32>(row, "kitchens")?,
            has_lawn: get_column::<bool>(row, "has_lawn")?,
            additional_info: get_column::<Option<String>>(row, "additional_info")?,
            address: get_column(row, "address")?,
            city: get_column(row, "city")?,
            property_type: get_column(row, "property_type")?,
            images,
            seller_id: parse_uuid(&seller_id)?,
            seller_name: get_column(row, "seller_name")?,
            seller_phone: get_column(row, "seller_phone")?,
            status: PropertyStatus::parse(&status),
            listed_date: get_column::<NaiveDate>(row, "listed_date")?,
            created_at: get_column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: get_column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    fn encode_images(images: &[String]) -> Result<String, DomainError> {
        serde_json::to_string(images).map_err(|e| DomainError::Database {
            message: format!("Failed to encode images: {}", e),
        })
    }
}

#[async_trait]
impl PropertyRepository for MySqlPropertyRepository {
    async fn search(
        &self,
        filter: &PropertyFilter,
        sort: SortKey,
        pagination: Pagination,
    ) -> Result<(Vec<Property>, u64), DomainError> {
        // Exact total for the filter, independent of the window
        let mut count_query: QueryBuilder<'_, MySql> =
            QueryBuilder::new("SELECT COUNT(*) FROM properties");
        Self::push_predicate(&mut count_query, filter);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Count query failed: {}", e),
            })?;

        let mut select_query: QueryBuilder<'_, MySql> =
            QueryBuilder::new(format!("SELECT {} FROM properties", PROPERTY_COLUMNS));
        Self::push_predicate(&mut select_query, filter);

        // Column and direction come from the resolved SortKey, never from
        // raw request input. No secondary column: ties fall back to the
        // store's natural order.
        let direction = match sort.direction() {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };
        select_query
            .push(" ORDER BY ")
            .push(sort.column())
            .push(" ")
            .push(direction);

        select_query
            .push(" LIMIT ")
            .push_bind(pagination.limit_i64())
            .push(" OFFSET ")
            .push_bind(pagination.offset_i64());

        let rows = select_query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Listing query failed: {}", e),
            })?;

        let properties = rows
            .iter()
            .map(Self::row_to_property)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((properties, total as u64))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE id = ? LIMIT 1",
            PROPERTY_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_property(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE seller_id = ? ORDER BY created_at DESC",
            PROPERTY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(seller_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_property).collect()
    }

    async fn insert(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            INSERT INTO properties (
                id, title, description, price, area, area_unit,
                bedrooms, floors, kitchens, has_lawn, additional_info,
                address, city, property_type, images,
                seller_id, seller_name, seller_phone,
                status, listed_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(property.id.to_string())
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price)
            .bind(property.area)
            .bind(property.area_unit.as_str())
            .bind(property.bedrooms)
            .bind(property.floors)
            .bind(property.kitchens)
            .bind(property.has_lawn)
            .bind(&property.additional_info)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.property_type)
            .bind(Self::encode_images(&property.images)?)
            .bind(property.seller_id.to_string())
            .bind(&property.seller_name)
            .bind(&property.seller_phone)
            .bind(property.status.as_str())
            .bind(property.listed_date)
            .bind(property.created_at)
            .bind(property.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create property: {}", e),
            })?;

        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            UPDATE properties SET
                title = ?, description = ?, price = ?, area = ?, area_unit = ?,
                bedrooms = ?, floors = ?, kitchens = ?, has_lawn = ?,
                additional_info = ?, address = ?, city = ?, property_type = ?,
                images = ?, seller_name = ?, seller_phone = ?,
                status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price)
            .bind(property.area)
            .bind(property.area_unit.as_str())
            .bind(property.bedrooms)
            .bind(property.floors)
            .bind(property.kitchens)
            .bind(property.has_lawn)
            .bind(&property.additional_info)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.property_type)
            .bind(Self::encode_images(&property.images)?)
            .bind(&property.seller_name)
            .bind(&property.seller_phone)
            .bind(property.status.as_str())
            .bind(Utc::now())
            .bind(property.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update property: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Property".to_string(),
            });
        }

        let mut updated = property;
        updated.updated_at = Utc::now();
        Ok(updated)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: PropertyStatus,
    ) -> Result<bool, DomainError> {
        let query = "UPDATE properties SET status = ?, updated_at = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update property status: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM properties WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete property: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Build a lowercase LIKE pattern with escaped wildcards
fn like_pattern(term: &str) -> String {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("DHA"), "%dha%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn test_predicate_includes_only_set_filters() {
        let filter = PropertyFilter::none()
            .with_city("Lahore")
            .with_min_price(40_000);

        let mut builder: QueryBuilder<'_, MySql> =
            QueryBuilder::new("SELECT COUNT(*) FROM properties");
        MySqlPropertyRepository::push_predicate(&mut builder, &filter);
        let sql = builder.sql();

        assert!(sql.contains("status = 'Available'"));
        assert!(sql.contains("LOWER(city) LIKE"));
        assert!(sql.contains("price >="));
        assert!(!sql.contains("price <="));
        assert!(!sql.contains("bedrooms"));
        assert!(!sql.contains("has_lawn"));
    }

    #[test]
    fn test_search_term_expands_to_or_group() {
        let filter = PropertyFilter::none().with_search_term("DHA");

        let mut builder: QueryBuilder<'_, MySql> =
            QueryBuilder::new("SELECT COUNT(*) FROM properties");
        MySqlPropertyRepository::push_predicate(&mut builder, &filter);
        let sql = builder.sql();

        assert!(sql.contains("LOWER(title) LIKE"));
        assert!(sql.contains("OR LOWER(description) LIKE"));
        assert!(sql.contains("OR LOWER(address) LIKE"));
        assert!(sql.contains("OR LOWER(city) LIKE"));
    }
}
