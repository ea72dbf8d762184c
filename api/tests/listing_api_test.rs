//! Integration tests for the listing endpoint against in-memory
//! repositories.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::Value;
use uuid::Uuid;

use rn_api::app::create_app;
use rn_api::routes::AppState;
use rn_core::domain::entities::{AreaUnit, NewProperty, Property, PropertyStatus};
use rn_core::repositories::{
    MockPropertyRepository, MockRentalRequestRepository, MockUserRepository, PropertyRepository,
};

fn property(city: &str, price: u64, status: PropertyStatus) -> Property {
    let mut property = Property::from_submission(NewProperty {
        title: format!("{} listing at {}", city, price),
        description: "Spacious and bright".to_string(),
        price,
        area: 10.0,
        area_unit: AreaUnit::Marla,
        bedrooms: 3,
        floors: 1,
        kitchens: 1,
        has_lawn: false,
        additional_info: None,
        address: "Canal Road".to_string(),
        city: city.to_string(),
        property_type: "House".to_string(),
        images: vec!["img/house.jpg".to_string()],
        seller_id: Uuid::new_v4(),
        seller_name: "Seller".to_string(),
        seller_phone: "+923000000000".to_string(),
    });
    property.status = status;
    property
}

async fn state_with(
    properties: Vec<Property>,
) -> web::Data<AppState<MockPropertyRepository, MockUserRepository, MockRentalRequestRepository>> {
    let property_repo = Arc::new(MockPropertyRepository::new());
    for p in properties {
        property_repo.insert(p).await.unwrap();
    }
    web::Data::new(AppState::new(
        property_repo,
        Arc::new(MockUserRepository::new()),
        Arc::new(MockRentalRequestRepository::new()),
    ))
}

#[actix_web::test]
async fn listing_returns_only_available_rows() {
    let state = state_with(vec![
        property("Lahore", 50_000, PropertyStatus::Available),
        property("Lahore", 60_000, PropertyStatus::Rented),
        property("Lahore", 70_000, PropertyStatus::Pending),
    ])
    .await;
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get().uri("/api/v1/properties").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 1);
    let rows = body["data"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "Available");
}

#[actix_web::test]
async fn price_band_filter_and_sort_through_the_wire() {
    let state = state_with(
        [30_000u64, 45_000, 55_000, 65_000, 75_000, 85_000]
            .iter()
            .map(|&p| property("Lahore", p, PropertyStatus::Available))
            .collect(),
    )
    .await;
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/properties?min_price=40000&max_price=80000&sort=price-low")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["data"]["total"], 4);
    let prices: Vec<u64> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["price"].as_u64().unwrap())
        .collect();
    assert_eq!(prices, vec![45_000, 55_000, 65_000, 75_000]);
}

#[actix_web::test]
async fn pagination_reports_total_across_pages() {
    let state = state_with(
        (0..20)
            .map(|i| property("Lahore", 30_000 + i * 1_000, PropertyStatus::Available))
            .collect(),
    )
    .await;
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/properties?page=3&page_size=8")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["data"]["total"], 20);
    assert_eq!(body["data"]["total_pages"], 3);
    assert_eq!(body["data"]["page"], 3);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn unknown_sort_key_is_accepted_and_clamped() {
    let state = state_with(vec![
        property("Lahore", 50_000, PropertyStatus::Available),
        property("Lahore", 60_000, PropertyStatus::Available),
    ])
    .await;
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/properties?sort=price-medium")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
}

#[actix_web::test]
async fn search_term_matches_address() {
    let mut dha = property("Lahore", 50_000, PropertyStatus::Available);
    dha.address = "DHA Phase 5, Street 12".to_string();
    let state = state_with(vec![
        dha,
        property("Lahore", 60_000, PropertyStatus::Available),
    ])
    .await;
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/properties?search=DHA")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["data"]["total"], 1);
    let rows = body["data"]["data"].as_array().unwrap();
    assert!(rows[0]["address"].as_str().unwrap().contains("DHA"));
}

#[actix_web::test]
async fn city_filter_is_case_insensitive() {
    let state = state_with(vec![
        property("Lahore", 50_000, PropertyStatus::Available),
        property("Karachi", 50_000, PropertyStatus::Available),
    ])
    .await;
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/properties?city=lahore")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["city"], "Lahore");
}
