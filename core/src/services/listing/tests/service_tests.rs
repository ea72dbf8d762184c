//! Listing pipeline tests against the in-memory repository.
//!
//! These exercise the externally observable contract of the listing fetch:
//! Available-only scoping, filter semantics, sort monotonicity, window
//! arithmetic, and the exactness of the total match count.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::{AreaUnit, NewProperty, Property, PropertyStatus};
use crate::domain::listing::{ListingQuery, PropertyFilter, SortKey};
use crate::repositories::MockPropertyRepository;
use crate::services::listing::ListingService;

struct Seed {
    city: &'static str,
    address: &'static str,
    price: u64,
    area: f64,
    bedrooms: u32,
    has_lawn: bool,
    status: PropertyStatus,
}

fn build(seed: &Seed, index: usize) -> Property {
    let mut property = Property::from_submission(NewProperty {
        title: format!("Listing {}", index + 1),
        description: "Comfortable family home".to_string(),
        price: seed.price,
        area: seed.area,
        area_unit: AreaUnit::Marla,
        bedrooms: seed.bedrooms,
        floors: 1,
        kitchens: 1,
        has_lawn: seed.has_lawn,
        additional_info: None,
        address: seed.address.to_string(),
        city: seed.city.to_string(),
        property_type: "House".to_string(),
        images: vec![format!("img/{}.jpg", index + 1)],
        seller_id: Uuid::new_v4(),
        seller_name: "Seller".to_string(),
        seller_phone: "+923000000000".to_string(),
    });
    property.status = seed.status;
    // Deterministic creation order so the "newest" sort is predictable
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    property.created_at = base + Duration::minutes(index as i64);
    property
}

fn seeds(entries: Vec<Seed>) -> Vec<Property> {
    entries
        .iter()
        .enumerate()
        .map(|(i, seed)| build(seed, i))
        .collect()
}

fn available(city: &'static str, price: u64) -> Seed {
    Seed {
        city,
        address: "Model Town",
        price,
        area: 10.0,
        bedrooms: 3,
        has_lawn: false,
        status: PropertyStatus::Available,
    }
}

async fn service_with(properties: Vec<Property>) -> ListingService<MockPropertyRepository> {
    let repository = Arc::new(MockPropertyRepository::seeded(properties).await);
    ListingService::new(repository)
}

#[tokio::test]
async fn every_returned_row_is_available() {
    let mut entries = vec![available("Lahore", 50_000), available("Lahore", 60_000)];
    entries.push(Seed {
        status: PropertyStatus::Rented,
        ..available("Lahore", 55_000)
    });
    entries.push(Seed {
        status: PropertyStatus::Pending,
        ..available("Lahore", 58_000)
    });
    let service = service_with(seeds(entries)).await;

    let page = service.fetch(&ListingQuery::default()).await.unwrap();

    assert_eq!(page.total, 2);
    assert!(page.data.iter().all(|p| p.status == PropertyStatus::Available));
}

#[tokio::test]
async fn city_filter_is_case_insensitive_containment() {
    let service = service_with(seeds(vec![
        available("Lahore", 50_000),
        available("Karachi", 50_000),
        available("Islamabad", 50_000),
    ]))
    .await;

    let query = ListingQuery::filtered(PropertyFilter::none().with_city("LAHO"));
    let page = service.fetch(&query).await.unwrap();

    assert_eq!(page.total, 1);
    assert!(page
        .data
        .iter()
        .all(|p| p.city.to_lowercase().contains("laho")));
}

#[tokio::test]
async fn price_band_example_five_of_fourteen() {
    // 14 available rows, 5 of them inside [40000, 80000].
    let in_band = [40_000, 52_000, 65_000, 74_500, 80_000];
    let out_of_band = [12_000, 20_000, 25_000, 30_000, 39_999, 80_001, 95_000, 120_000, 150_000];
    let mut entries: Vec<Seed> = in_band.iter().map(|&p| available("Lahore", p)).collect();
    entries.extend(out_of_band.iter().map(|&p| available("Lahore", p)));
    assert_eq!(entries.len(), 14);
    let service = service_with(seeds(entries)).await;

    let query = ListingQuery::filtered(
        PropertyFilter::none().with_min_price(40_000).with_max_price(80_000),
    )
    .sorted_by(SortKey::PriceLow)
    .paged(1, 8);
    let page = service.fetch(&query).await.unwrap();

    assert_eq!(page.total, 5);
    assert!(page.data.len() <= 5);
    let prices: Vec<u64> = page.data.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    assert!(prices.iter().all(|&p| (40_000..=80_000).contains(&p)));
}

#[tokio::test]
async fn price_high_is_non_increasing() {
    let service = service_with(seeds(
        [68_000, 25_000, 90_000, 45_000, 45_000]
            .iter()
            .map(|&p| available("Lahore", p))
            .collect(),
    ))
    .await;

    let query = ListingQuery::default().sorted_by(SortKey::PriceHigh);
    let page = service.fetch(&query).await.unwrap();

    let prices: Vec<u64> = page.data.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn area_high_is_non_increasing() {
    let entries: Vec<Seed> = [5.0, 20.0, 12.5, 8.0]
        .iter()
        .map(|&area| Seed {
            area,
            ..available("Lahore", 50_000)
        })
        .collect();
    let service = service_with(seeds(entries)).await;

    let query = ListingQuery::default().sorted_by(SortKey::AreaHigh);
    let page = service.fetch(&query).await.unwrap();

    let areas: Vec<f64> = page.data.iter().map(|p| p.area).collect();
    assert!(areas.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn newest_is_default_and_descending_by_creation() {
    let service = service_with(seeds(
        (0..4).map(|i| available("Lahore", 40_000 + i * 1000)).collect(),
    ))
    .await;

    let page = service.fetch(&ListingQuery::default()).await.unwrap();

    let stamps: Vec<_> = page.data.iter().map(|p| p.created_at).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn total_is_invariant_under_paging() {
    let service = service_with(seeds(
        (0..20).map(|i| available("Lahore", 30_000 + i * 500)).collect(),
    ))
    .await;

    let first = service
        .fetch(&ListingQuery::default().paged(1, 8))
        .await
        .unwrap();
    let third = service
        .fetch(&ListingQuery::default().paged(3, 8))
        .await
        .unwrap();
    let other_size = service
        .fetch(&ListingQuery::default().paged(2, 5))
        .await
        .unwrap();

    assert_eq!(first.total, 20);
    assert_eq!(third.total, 20);
    assert_eq!(other_size.total, 20);
}

#[tokio::test]
async fn page_three_of_twenty_returns_the_final_four() {
    // With 20 rows, page 3 at size 8 covers rows 17..24; only 4 remain.
    let service = service_with(seeds(
        (0..20).map(|i| available("Lahore", 30_000 + i * 500)).collect(),
    ))
    .await;

    let page = service
        .fetch(&ListingQuery::default().paged(3, 8))
        .await
        .unwrap();

    assert_eq!(page.total, 20);
    assert_eq!(page.data.len(), 4);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.has_next, Some(false));
}

#[tokio::test]
async fn consecutive_pages_are_contiguous_and_non_overlapping() {
    let service = service_with(seeds(
        (0..20).map(|i| available("Lahore", 30_000 + i * 500)).collect(),
    ))
    .await;

    let page1 = service
        .fetch(&ListingQuery::default().sorted_by(SortKey::PriceLow).paged(1, 8))
        .await
        .unwrap();
    let page2 = service
        .fetch(&ListingQuery::default().sorted_by(SortKey::PriceLow).paged(2, 8))
        .await
        .unwrap();

    let ids1: Vec<Uuid> = page1.data.iter().map(|p| p.id).collect();
    let ids2: Vec<Uuid> = page2.data.iter().map(|p| p.id).collect();
    assert!(ids1.iter().all(|id| !ids2.contains(id)));

    // With a total order on price, page 2 picks up exactly where page 1
    // stopped.
    assert!(page1.data.last().unwrap().price <= page2.data.first().unwrap().price);
    assert_eq!(page1.data.len() + page2.data.len(), 16);
}

#[tokio::test]
async fn search_term_reaches_address() {
    // "DHA" appears only in the address, not in title or description.
    let mut entries = vec![available("Lahore", 50_000)];
    entries.push(Seed {
        address: "DHA Phase 6, Street 3",
        ..available("Lahore", 60_000)
    });
    let service = service_with(seeds(entries)).await;

    let query = ListingQuery::filtered(PropertyFilter::none().with_search_term("DHA"));
    let page = service.fetch(&query).await.unwrap();

    assert_eq!(page.total, 1);
    assert!(page.data[0].address.contains("DHA"));
}

#[tokio::test]
async fn page_zero_is_clamped_to_first_page() {
    let service = service_with(seeds(
        (0..10).map(|i| available("Lahore", 30_000 + i * 500)).collect(),
    ))
    .await;

    let clamped = service
        .fetch(&ListingQuery::default().paged(0, 8))
        .await
        .unwrap();
    let first = service
        .fetch(&ListingQuery::default().paged(1, 8))
        .await
        .unwrap();

    assert_eq!(clamped.page, 1);
    let clamped_ids: Vec<Uuid> = clamped.data.iter().map(|p| p.id).collect();
    let first_ids: Vec<Uuid> = first.data.iter().map(|p| p.id).collect();
    assert_eq!(clamped_ids, first_ids);
}

#[tokio::test]
async fn unrecognized_sort_key_behaves_like_newest() {
    let service = service_with(seeds(
        (0..5).map(|i| available("Lahore", 30_000 + i * 500)).collect(),
    ))
    .await;

    let fallback = service
        .fetch(&ListingQuery::default().sorted_by(SortKey::parse_or_default("price-medium")))
        .await
        .unwrap();
    let newest = service
        .fetch(&ListingQuery::default().sorted_by(SortKey::Newest))
        .await
        .unwrap();

    let fallback_ids: Vec<Uuid> = fallback.data.iter().map(|p| p.id).collect();
    let newest_ids: Vec<Uuid> = newest.data.iter().map(|p| p.id).collect();
    assert_eq!(fallback_ids, newest_ids);
}

#[tokio::test]
async fn inverted_price_band_yields_zero_matches_not_an_error() {
    let service = service_with(seeds(vec![
        available("Lahore", 50_000),
        available("Lahore", 60_000),
    ]))
    .await;

    let query = ListingQuery::filtered(
        PropertyFilter::none().with_min_price(80_000).with_max_price(40_000),
    );
    let page = service.fetch(&query).await.unwrap();

    assert_eq!(page.total, 0);
    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn combined_filters_all_apply() {
    let mut entries = vec![
        Seed {
            has_lawn: true,
            bedrooms: 4,
            ..available("Lahore", 70_000)
        },
        Seed {
            has_lawn: true,
            bedrooms: 2,
            ..available("Lahore", 72_000)
        },
        Seed {
            has_lawn: false,
            bedrooms: 4,
            ..available("Lahore", 74_000)
        },
    ];
    entries.push(Seed {
        has_lawn: true,
        bedrooms: 4,
        ..available("Karachi", 71_000)
    });
    let service = service_with(seeds(entries)).await;

    let query = ListingQuery::filtered(
        PropertyFilter::none()
            .with_city("Lahore")
            .with_min_bedrooms(3)
            .with_has_lawn(true)
            .with_max_price(80_000),
    );
    let page = service.fetch(&query).await.unwrap();

    assert_eq!(page.total, 1);
    let hit = &page.data[0];
    assert_eq!(hit.city, "Lahore");
    assert!(hit.bedrooms >= 3);
    assert!(hit.has_lawn);
}
