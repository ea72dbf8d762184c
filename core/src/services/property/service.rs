//! Property management service implementation.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewProperty, Property, PropertyStatus};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::PropertyRepository;
use rn_shared::utils::validation::validators;

/// Service for the property lifecycle outside the listing page: seller
/// submissions, dashboards, status changes and removal.
pub struct PropertyService<P>
where
    P: PropertyRepository,
{
    property_repository: Arc<P>,
}

impl<P> PropertyService<P>
where
    P: PropertyRepository,
{
    /// Create a new property service
    pub fn new(property_repository: Arc<P>) -> Self {
        Self {
            property_repository,
        }
    }

    /// Validate and persist a seller's submission. New listings start out
    /// `Available` with today's listed date.
    pub async fn list_property(&self, input: NewProperty) -> DomainResult<Property> {
        Self::validate_submission(&input)?;
        let property = Property::from_submission(input);
        self.property_repository.insert(property).await
    }

    /// Fetch one property by id, any status (detail page)
    pub async fn get(&self, id: Uuid) -> DomainResult<Property> {
        self.property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Property".to_string(),
            })
    }

    /// All of a seller's properties, newest first (seller dashboard)
    pub async fn listings_of_seller(&self, seller_id: Uuid) -> DomainResult<Vec<Property>> {
        self.property_repository.find_by_seller(seller_id).await
    }

    /// Move a property to a new status, enforcing transition rules
    pub async fn change_status(&self, id: Uuid, status: PropertyStatus) -> DomainResult<Property> {
        let mut property = self.get(id).await?;
        property.change_status(status)?;
        self.property_repository.update(property).await
    }

    /// Delete a property (admin action)
    pub async fn remove(&self, id: Uuid) -> DomainResult<()> {
        if self.property_repository.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound {
                resource: "Property".to_string(),
            })
        }
    }

    fn validate_submission(input: &NewProperty) -> DomainResult<()> {
        if !validators::not_empty(&input.title) {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            }
            .into());
        }
        if !validators::not_empty(&input.city) {
            return Err(ValidationError::RequiredField {
                field: "city".to_string(),
            }
            .into());
        }
        if !validators::not_empty(&input.address) {
            return Err(ValidationError::RequiredField {
                field: "address".to_string(),
            }
            .into());
        }
        if !validators::is_plausible_rent(input.price) {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: "1".to_string(),
                max: "100000000".to_string(),
            }
            .into());
        }
        if input.area <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "area".to_string(),
                min: "0".to_string(),
                max: "unbounded".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
