use actix_web::{web, HttpServer};
use log::info;
use std::io;
use std::sync::Arc;

use rn_api::app::create_app;
use rn_api::routes::AppState;
use rn_infra::database::{
    DatabasePool, MySqlPropertyRepository, MySqlRentalRequestRepository, MySqlUserRepository,
};
use rn_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RentNest API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Initialize the database pool and verify connectivity
    let pool = DatabasePool::new(config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    match pool.health_check().await {
        Ok(true) => info!("Database connection verified"),
        Ok(false) => log::warn!("Database health check returned an unexpected result"),
        Err(e) => log::warn!("Database health check failed: {}", e),
    }

    // Wire repositories and services
    let property_repository = Arc::new(MySqlPropertyRepository::new(pool.get_pool().clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let request_repository = Arc::new(MySqlRentalRequestRepository::new(pool.get_pool().clone()));

    let app_state = web::Data::new(AppState::new(
        property_repository,
        user_repository,
        request_repository,
    ));

    let result = HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    pool.close().await;
    result
}
