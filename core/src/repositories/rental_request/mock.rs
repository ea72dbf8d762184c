//! Mock implementation of RentalRequestRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::RentalRequest;
use crate::errors::DomainError;

use super::trait_::RentalRequestRepository;

/// Mock rental request repository for testing
pub struct MockRentalRequestRepository {
    requests: Arc<RwLock<HashMap<Uuid, RentalRequest>>>,
}

impl MockRentalRequestRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRentalRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRequestRepository for MockRentalRequestRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalRequest>, DomainError> {
        let requests = self.requests.read().await;
        Ok(requests.get(&id).cloned())
    }

    async fn find_by_property(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<RentalRequest>, DomainError> {
        let requests = self.requests.read().await;
        let mut found: Vec<RentalRequest> = requests
            .values()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<RentalRequest>, DomainError> {
        let requests = self.requests.read().await;
        let mut found: Vec<RentalRequest> = requests
            .values()
            .filter(|r| r.buyer_id == buyer_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn insert(&self, request: RentalRequest) -> Result<RentalRequest, DomainError> {
        let mut requests = self.requests.write().await;
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn update(&self, request: RentalRequest) -> Result<RentalRequest, DomainError> {
        let mut requests = self.requests.write().await;

        if !requests.contains_key(&request.id) {
            return Err(DomainError::NotFound {
                resource: "RentalRequest".to_string(),
            });
        }

        requests.insert(request.id, request.clone());
        Ok(request)
    }
}
