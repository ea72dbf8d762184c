use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{AreaUnit, NewProperty, PropertyStatus};
use crate::errors::DomainError;
use crate::repositories::MockPropertyRepository;
use crate::services::property::PropertyService;

fn submission(seller_id: Uuid) -> NewProperty {
    NewProperty {
        title: "2 Bed Apartment".to_string(),
        description: "Close to the market".to_string(),
        price: 42_000,
        area: 5.0,
        area_unit: AreaUnit::Marla,
        bedrooms: 2,
        floors: 1,
        kitchens: 1,
        has_lawn: false,
        additional_info: None,
        address: "Gulberg III".to_string(),
        city: "Lahore".to_string(),
        property_type: "Apartment".to_string(),
        images: vec!["img/apartment.jpg".to_string()],
        seller_id,
        seller_name: "Fatima".to_string(),
        seller_phone: "+923214444444".to_string(),
    }
}

fn service() -> PropertyService<MockPropertyRepository> {
    PropertyService::new(Arc::new(MockPropertyRepository::new()))
}

#[tokio::test]
async fn submission_creates_available_listing() {
    let service = service();
    let property = service.list_property(submission(Uuid::new_v4())).await.unwrap();

    assert_eq!(property.status, PropertyStatus::Available);
    let fetched = service.get(property.id).await.unwrap();
    assert_eq!(fetched.id, property.id);
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let service = service();
    let mut input = submission(Uuid::new_v4());
    input.title = "  ".to_string();

    let result = service.list_property(input).await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn zero_price_is_rejected() {
    let service = service();
    let mut input = submission(Uuid::new_v4());
    input.price = 0;

    let result = service.list_property(input).await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn seller_dashboard_lists_own_properties_newest_first() {
    let service = service();
    let seller = Uuid::new_v4();

    let first = service.list_property(submission(seller)).await.unwrap();
    let second = service.list_property(submission(seller)).await.unwrap();
    service.list_property(submission(Uuid::new_v4())).await.unwrap();

    let listings = service.listings_of_seller(seller).await.unwrap();
    assert_eq!(listings.len(), 2);
    assert!(listings.iter().all(|p| p.seller_id == seller));
    assert!(listings[0].created_at >= listings[1].created_at);
    let ids: Vec<Uuid> = listings.iter().map(|p| p.id).collect();
    assert!(ids.contains(&first.id) && ids.contains(&second.id));
}

#[tokio::test]
async fn status_change_round_trip() {
    let service = service();
    let property = service.list_property(submission(Uuid::new_v4())).await.unwrap();

    let updated = service
        .change_status(property.id, PropertyStatus::Rented)
        .await
        .unwrap();
    assert_eq!(updated.status, PropertyStatus::Rented);

    // Rented listings cannot move straight to Pending
    let result = service.change_status(property.id, PropertyStatus::Pending).await;
    assert!(matches!(result, Err(DomainError::Property(_))));
}

#[tokio::test]
async fn removing_unknown_property_is_not_found() {
    let service = service();
    let result = service.remove(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
