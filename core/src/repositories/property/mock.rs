//! Mock implementation of PropertyRepository for testing.
//!
//! The mock mirrors the SQL implementation's semantics in memory: the same
//! filter predicate, the same sort resolution, the same pagination window,
//! and an exact total count taken before windowing.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Property, PropertyStatus};
use crate::domain::listing::{PropertyFilter, SortDirection, SortKey};
use crate::errors::DomainError;
use rn_shared::types::Pagination;

use super::trait_::PropertyRepository;

/// Mock property repository for testing
pub struct MockPropertyRepository {
    properties: Arc<RwLock<HashMap<Uuid, Property>>>,
}

impl MockPropertyRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            properties: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-seeded with properties
    pub async fn seeded(properties: Vec<Property>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.properties.write().await;
            for property in properties {
                map.insert(property.id, property);
            }
        }
        repo
    }

    fn compare(a: &Property, b: &Property, sort: SortKey) -> Ordering {
        let ordering = match sort {
            SortKey::Newest => a.created_at.cmp(&b.created_at),
            SortKey::PriceLow | SortKey::PriceHigh => a.price.cmp(&b.price),
            SortKey::AreaHigh => a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal),
        };
        match sort.direction() {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Default for MockPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn search(
        &self,
        filter: &PropertyFilter,
        sort: SortKey,
        pagination: Pagination,
    ) -> Result<(Vec<Property>, u64), DomainError> {
        let properties = self.properties.read().await;

        let mut matching: Vec<Property> = properties
            .values()
            .filter(|p| p.is_listed() && filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| Self::compare(a, b, sort));

        let total = matching.len() as u64;
        let window: Vec<Property> = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok((window, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.get(&id).cloned())
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let mut owned: Vec<Property> = properties
            .values()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn insert(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;

        if !properties.contains_key(&property.id) {
            return Err(DomainError::NotFound {
                resource: "Property".to_string(),
            });
        }

        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn update_status(&self, id: Uuid, status: PropertyStatus) -> Result<bool, DomainError> {
        let mut properties = self.properties.write().await;
        match properties.get_mut(&id) {
            Some(property) => {
                property.status = status;
                property.updated_at = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut properties = self.properties.write().await;
        Ok(properties.remove(&id).is_some())
    }
}
