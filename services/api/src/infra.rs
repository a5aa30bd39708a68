use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use stayhub::catalog::{
    Booking, BookingFilter, BookingId, BookingRepository, Listing, ListingFilter, ListingId,
    ListingRepository, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared in-memory storage backing both catalog repositories. The
/// booking side consults the listing map, which is where the
/// referential constraint on `booking.listing` lives.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTravelStore {
    listings: Arc<Mutex<BTreeMap<ListingId, Listing>>>,
    bookings: Arc<Mutex<BTreeMap<BookingId, Booking>>>,
}

impl InMemoryTravelStore {
    fn holds_listing(&self, id: &ListingId) -> bool {
        self.listings
            .lock()
            .expect("listing mutex poisoned")
            .contains_key(id)
    }
}

impl ListingRepository for InMemoryTravelStore {
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

impl BookingRepository for InMemoryTravelStore {
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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
