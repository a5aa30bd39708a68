use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use crate::catalog::domain::{
    Booking, BookingDraft, BookingId, BookingStatus, GuestId, Listing, ListingDraft, ListingId,
    PropertyType,
};
use crate::catalog::query::{BookingFilter, ListingFilter};
use crate::catalog::repository::{BookingRepository, ListingRepository, RepositoryError};
use crate::catalog::router::catalog_router;
use crate::catalog::service::TravelCatalogService;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub(super) fn listing_draft(
    title: &str,
    city: &str,
    country: &str,
    property_type: PropertyType,
    price_cents: i64,
    is_active: bool,
) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        description: None,
        city: city.to_string(),
        country: country.to_string(),
        property_type,
        price_per_night: price(price_cents),
        is_active,
    }
}

pub(super) fn booking_draft(
    listing: &ListingId,
    guest: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: BookingStatus,
) -> BookingDraft {
    BookingDraft {
        listing: listing.clone(),
        guest: GuestId(guest.to_string()),
        check_in_date: check_in,
        check_out_date: check_out,
        status,
    }
}

pub(super) fn build_service() -> (
    Arc<TravelCatalogService<MemoryCatalog, MemoryCatalog>>,
    MemoryCatalog,
) {
    let store = MemoryCatalog::default();
    let service = Arc::new(TravelCatalogService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    ));
    (service, store)
}

/// Service, router, and the ids of a small fixed catalog most routing
/// tests share: three active listings, one inactive, three bookings.
pub(super) struct SeededCatalog {
    pub(super) service: Arc<TravelCatalogService<MemoryCatalog, MemoryCatalog>>,
    pub(super) router: axum::Router,
    pub(super) paris_loft: ListingId,
    pub(super) paris_studio: ListingId,
    pub(super) lisbon_villa: ListingId,
    pub(super) kyoto_house: ListingId,
    pub(super) confirmed_booking: BookingId,
    pub(super) pending_booking: BookingId,
    pub(super) kyoto_booking: BookingId,
}

pub(super) fn seeded_catalog() -> SeededCatalog {
    let (service, _) = build_service();

    let paris_loft = service
        .create_listing(listing_draft(
            "Marais Loft",
            "Paris",
            "France",
            PropertyType::Apartment,
            18500,
            true,
        ))
        .expect("listing stores")
        .id;
    let paris_studio = service
        .create_listing(listing_draft(
            "Left Bank Studio",
            "Paris",
            "France",
            PropertyType::Studio,
            9800,
            false,
        ))
        .expect("listing stores")
        .id;
    let lisbon_villa = service
        .create_listing(listing_draft(
            "Alfama Villa",
            "Lisbon",
            "Portugal",
            PropertyType::Villa,
            24000,
            true,
        ))
        .expect("listing stores")
        .id;
    let kyoto_house = service
        .create_listing(listing_draft(
            "Gion Machiya",
            "Kyoto",
            "Japan",
            PropertyType::House,
            15000,
            true,
        ))
        .expect("listing stores")
        .id;

    let confirmed_booking = service
        .create_booking(booking_draft(
            &paris_loft,
            "guest-7",
            date(2026, 9, 10),
            date(2026, 9, 14),
            BookingStatus::Confirmed,
        ))
        .expect("booking stores")
        .id;
    let pending_booking = service
        .create_booking(booking_draft(
            &paris_loft,
            "guest-7",
            date(2026, 10, 1),
            date(2026, 10, 5),
            BookingStatus::Pending,
        ))
        .expect("booking stores")
        .id;
    let kyoto_booking = service
        .create_booking(booking_draft(
            &kyoto_house,
            "guest-12",
            date(2026, 9, 2),
            date(2026, 9, 6),
            BookingStatus::Confirmed,
        ))
        .expect("booking stores")
        .id;

    let router = catalog_router(service.clone());

    SeededCatalog {
        service,
        router,
        paris_loft,
        paris_studio,
        lisbon_villa,
        kyoto_house,
        confirmed_booking,
        pending_booking,
        kyoto_booking,
    }
}

/// Shared in-memory double backing both repository traits; the booking
/// side checks the listing reference like a real store would.
#[derive(Default, Clone)]
pub(super) struct MemoryCatalog {
    listings: Arc<Mutex<BTreeMap<ListingId, Listing>>>,
    bookings: Arc<Mutex<BTreeMap<BookingId, Booking>>>,
}

impl MemoryCatalog {
    fn holds_listing(&self, id: &ListingId) -> bool {
        self.listings
            .lock()
            .expect("listing mutex poisoned")
            .contains_key(id)
    }
}

impl ListingRepository for MemoryCatalog {
    fn insert(&self, listing: Listing) -> Result<Listing, RepositoryError> {
        let mut guard = self.listings.lock().expect("listing mutex poisoned");
        if guard.contains_key(&listing.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(listing.id.clone(), listing.clone());
        Ok(listing)
    }

    fn update(&self, listing: Listing) -> Result<Listing, RepositoryError> {
        let mut guard = self.listings.lock().expect("listing mutex poisoned");
        if !guard.contains_key(&listing.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(listing.id.clone(), listing.clone());
        Ok(listing)
    }

    fn fetch(&self, id: &ListingId) -> Result<Option<Listing>, RepositoryError> {
        let guard = self.listings.lock().expect("listing mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &ListingId) -> Result<(), RepositoryError> {
        let mut guard = self.listings.lock().expect("listing mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn search(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError> {
        let guard = self.listings.lock().expect("listing mutex poisoned");
        Ok(guard
            .values()
            .filter(|listing| filter.matches(listing))
            .cloned()
            .collect())
    }
}

impl BookingRepository for MemoryCatalog {
    fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        if !self.holds_listing(&booking.listing) {
            return Err(RepositoryError::UnknownListing);
        }
        let mut guard = self.bookings.lock().expect("booking mutex poisoned");
        if guard.contains_key(&booking.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    fn update(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        let known = {
            let guard = self.bookings.lock().expect("booking mutex poisoned");
            guard.contains_key(&booking.id)
        };
        if !known {
            return Err(RepositoryError::NotFound);
        }
        if !self.holds_listing(&booking.listing) {
            return Err(RepositoryError::UnknownListing);
        }
        let mut guard = self.bookings.lock().expect("booking mutex poisoned");
        guard.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    fn fetch(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        let guard = self.bookings.lock().expect("booking mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &BookingId) -> Result<(), RepositoryError> {
        let mut guard = self.bookings.lock().expect("booking mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn search(&self, filter: &BookingFilter) -> Result<Vec<Booking>, RepositoryError> {
        let guard = self.bookings.lock().expect("booking mutex poisoned");
        Ok(guard
            .values()
            .filter(|booking| filter.matches(booking))
            .cloned()
            .collect())
    }
}

/// Double that fails every call, for exercising the 500 path.
pub(super) struct UnavailableCatalog;

impl ListingRepository for UnavailableCatalog {
    fn insert(&self, _listing: Listing) -> Result<Listing, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _listing: Listing) -> Result<Listing, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &ListingId) -> Result<Option<Listing>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn delete(&self, _id: &ListingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn search(&self, _filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

impl BookingRepository for UnavailableCatalog {
    fn insert(&self, _booking: Booking) -> Result<Booking, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _booking: Booking) -> Result<Booking, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &BookingId) -> Result<Option<Booking>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn delete(&self, _id: &BookingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn search(&self, _filter: &BookingFilter) -> Result<Vec<Booking>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn oneshot_get(router: &axum::Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(
            axum::http::Request::get(uri)
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

pub(super) async fn oneshot_json(
    router: &axum::Router,
    method: &str,
    uri: &str,
    payload: Value,
) -> Response {
    router
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method(method)
                .uri(uri)
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn ids_of(payload: &Value) -> Vec<String> {
    payload
        .as_array()
        .expect("array payload")
        .iter()
        .map(|record| {
            record
                .get("id")
                .and_then(Value::as_str)
                .expect("record id")
                .to_string()
        })
        .collect()
}
