//! Handler for GET /api/v1/properties - the listing query endpoint.

use actix_web::{web, HttpResponse};

use crate::dto::{ListingQueryParams, PropertyResponse};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use rn_core::domain::listing::ListingQuery;
use rn_core::repositories::{PropertyRepository, RentalRequestRepository, UserRepository};
use rn_shared::types::ApiResponse;

/// Fetch one page of listings matching the query-string filters.
///
/// Every returned row is `Available`; `total` counts all matching rows so
/// the client can compute the page count. Unknown sort keys and
/// out-of-range pages are clamped, never rejected. On a storage failure
/// the client receives a single opaque error and should render an empty
/// result set.
pub async fn list_properties<P, U, R>(
    state: web::Data<AppState<P, U, R>>,
    params: web::Query<ListingQueryParams>,
) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
    R: RentalRequestRepository + 'static,
{
    let query: ListingQuery = params.into_inner().into();

    log::info!(
        "Fetching listings: sort={}, page={}, page_size={}",
        query.sort.as_str(),
        query.pagination.page,
        query.pagination.per_page
    );

    match state.listing_service.fetch(&query).await {
        Ok(page) => {
            HttpResponse::Ok().json(ApiResponse::success(page.map(PropertyResponse::from)))
        }
        Err(error) => domain_error_response(&error),
    }
}
