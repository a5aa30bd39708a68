use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{BookingDraft, BookingId, BookingPatch, ListingDraft, ListingId, ListingPatch};
use super::query::{BookingFilter, BookingQuery, ListingFilter, ListingQuery};
use super::repository::{BookingRepository, ListingRepository, RepositoryError};
use super::service::TravelCatalogService;

/// Router builder exposing the catalog CRUD surface.
pub fn catalog_router<L, B>(service: Arc<TravelCatalogService<L, B>>) -> Router
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/listings",
            get(list_listings_handler::<L, B>).post(create_listing_handler::<L, B>),
        )
        .route(
            "/api/v1/listings/:listing_id",
            get(get_listing_handler::<L, B>)
                .put(replace_listing_handler::<L, B>)
                .patch(patch_listing_handler::<L, B>)
                .delete(delete_listing_handler::<L, B>),
        )
        .route(
            "/api/v1/listings/:listing_id/bookings",
            get(listing_bookings_handler::<L, B>),
        )
        .route(
            "/api/v1/bookings",
            get(list_bookings_handler::<L, B>).post(create_booking_handler::<L, B>),
        )
        .route(
            "/api/v1/bookings/:booking_id",
            get(get_booking_handler::<L, B>)
                .put(replace_booking_handler::<L, B>)
                .patch(patch_booking_handler::<L, B>)
                .delete(delete_booking_handler::<L, B>),
        )
        .with_state(service)
}

/// Translate a storage failure into the response contract: 404 for
/// unknown ids, 409 for duplicate ids, 422 for a booking pointing at a
/// listing the store does not hold, 500 otherwise.
fn storage_error_response(error: RepositoryError) -> Response {
    let status = match &error {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Conflict => StatusCode::CONFLICT,
        RepositoryError::UnknownListing => StatusCode::UNPROCESSABLE_ENTITY,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn list_listings_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Query(query): Query<ListingQuery>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    let filter = ListingFilter::from(query);
    match service.listings(&filter) {
        Ok(listings) => (StatusCode::OK, axum::Json(listings)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn create_listing_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    axum::Json(draft): axum::Json<ListingDraft>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.create_listing(draft) {
        Ok(listing) => (StatusCode::CREATED, axum::Json(listing)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn get_listing_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.listing(&ListingId(listing_id)) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn replace_listing_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(listing_id): Path<String>,
    axum::Json(draft): axum::Json<ListingDraft>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.replace_listing(&ListingId(listing_id), draft) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn patch_listing_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(listing_id): Path<String>,
    axum::Json(patch): axum::Json<ListingPatch>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.patch_listing(&ListingId(listing_id), patch) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn delete_listing_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.delete_listing(&ListingId(listing_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn listing_bookings_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.listing_bookings(&ListingId(listing_id)) {
        Ok(bookings) => (StatusCode::OK, axum::Json(bookings)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn list_bookings_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Query(query): Query<BookingQuery>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    let filter = BookingFilter::from(query);
    match service.bookings(&filter) {
        Ok(bookings) => (StatusCode::OK, axum::Json(bookings)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn create_booking_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    axum::Json(draft): axum::Json<BookingDraft>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.create_booking(draft) {
        Ok(booking) => (StatusCode::CREATED, axum::Json(booking)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn get_booking_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(booking_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.booking(&BookingId(booking_id)) {
        Ok(booking) => (StatusCode::OK, axum::Json(booking)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn replace_booking_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(booking_id): Path<String>,
    axum::Json(draft): axum::Json<BookingDraft>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.replace_booking(&BookingId(booking_id), draft) {
        Ok(booking) => (StatusCode::OK, axum::Json(booking)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn patch_booking_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(booking_id): Path<String>,
    axum::Json(patch): axum::Json<BookingPatch>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.patch_booking(&BookingId(booking_id), patch) {
        Ok(booking) => (StatusCode::OK, axum::Json(booking)).into_response(),
        Err(error) => storage_error_response(error),
    }
}

pub(crate) async fn delete_booking_handler<L, B>(
    State(service): State<Arc<TravelCatalogService<L, B>>>,
    Path(booking_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match service.delete_booking(&BookingId(booking_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => storage_error_response(error),
    }
}
