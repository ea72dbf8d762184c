//! Application factory
//!
//! This module provides the factory for creating the Actix-web application
//! with all routes and middleware wired up.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::{pricing, properties, rentals, users, AppState};

use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};

/// Create and configure the application with all dependencies
pub fn create_app<P, U, R>(
    app_state: web::Data<AppState<P, U, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let cors = create_cors();
    let security = SecurityMiddleware::new();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (order matters: security first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route(
                    "/properties",
                    web::get().to(properties::list::list_properties::<P, U, R>),
                )
                .route(
                    "/properties",
                    web::post().to(properties::create::create_property::<P, U, R>),
                )
                .route(
                    "/properties/{id}",
                    web::get().to(properties::get::get_property::<P, U, R>),
                )
                .route(
                    "/properties/{id}",
                    web::delete().to(properties::delete::delete_property::<P, U, R>),
                )
                .route(
                    "/properties/{id}/status",
                    web::patch().to(properties::status::update_status::<P, U, R>),
                )
                .route(
                    "/properties/{id}/requests",
                    web::get().to(rentals::for_property::requests_for_property::<P, U, R>),
                )
                .route(
                    "/sellers/{seller_id}/properties",
                    web::get().to(properties::by_seller::properties_by_seller::<P, U, R>),
                )
                .route(
                    "/buyers/{buyer_id}/requests",
                    web::get().to(rentals::by_buyer::requests_by_buyer::<P, U, R>),
                )
                .route(
                    "/rental-requests",
                    web::post().to(rentals::submit::submit_request::<P, U, R>),
                )
                .route(
                    "/rental-requests/{id}/review",
                    web::post().to(rentals::review::review_request::<P, U, R>),
                )
                .route(
                    "/price-estimate",
                    web::post().to(pricing::estimate::estimate_price::<P, U, R>),
                )
                .route("/users", web::post().to(users::register::register_user::<P, U, R>))
                .route("/users", web::get().to(users::list::list_users::<P, U, R>))
                .route("/users/stats", web::get().to(users::stats::user_stats::<P, U, R>))
                .route(
                    "/users/{id}/role",
                    web::patch().to(users::update_role::update_role::<P, U, R>),
                )
                .route(
                    "/users/{id}",
                    web::delete().to(users::delete::delete_user::<P, U, R>),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rentnest-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
