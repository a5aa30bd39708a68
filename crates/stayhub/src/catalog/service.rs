use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{
    Booking, BookingDraft, BookingId, BookingPatch, Listing, ListingDraft, ListingId, ListingPatch,
};
use super::query::{BookingFilter, ListingFilter};
use super::repository::{BookingRepository, ListingRepository, RepositoryError};

/// Service composing the two catalog repositories behind the HTTP
/// surface. Storage errors flow through to the router unchanged.
pub struct TravelCatalogService<L, B> {
    listings: Arc<L>,
    bookings: Arc<B>,
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static BOOKING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_listing_id() -> ListingId {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ListingId(format!("lst-{id:06}"))
}

fn next_booking_id() -> BookingId {
    let id = BOOKING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    BookingId(format!("bkg-{id:06}"))
}

impl<L, B> TravelCatalogService<L, B>
where
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    pub fn new(listings: Arc<L>, bookings: Arc<B>) -> Self {
        Self { listings, bookings }
    }

    /// Create a listing from a draft, assigning the next catalog id.
    pub fn create_listing(&self, draft: ListingDraft) -> Result<Listing, RepositoryError> {
        self.listings.insert(draft.into_listing(next_listing_id()))
    }

    pub fn listing(&self, id: &ListingId) -> Result<Listing, RepositoryError> {
        self.listings.fetch(id)?.ok_or(RepositoryError::NotFound)
    }

    pub fn listings(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError> {
        self.listings.search(filter)
    }

    /// Replace every mutable field of an existing listing.
    pub fn replace_listing(
        &self,
        id: &ListingId,
        draft: ListingDraft,
    ) -> Result<Listing, RepositoryError> {
        self.listings.update(draft.into_listing(id.clone()))
    }

    /// Apply only the supplied fields to an existing listing.
    pub fn patch_listing(
        &self,
        id: &ListingId,
        patch: ListingPatch,
    ) -> Result<Listing, RepositoryError> {
        let mut listing = self.listing(id)?;
        patch.apply(&mut listing);
        self.listings.update(listing)
    }

    pub fn delete_listing(&self, id: &ListingId) -> Result<(), RepositoryError> {
        self.listings.delete(id)
    }

    /// Read-only sub-resource: every booking referencing the listing.
    /// Fails with `NotFound` when the listing itself is unknown.
    pub fn listing_bookings(&self, id: &ListingId) -> Result<Vec<Booking>, RepositoryError> {
        self.listing(id)?;
        self.bookings.search(&BookingFilter::for_listing(id.clone()))
    }

    /// Create a booking from a draft; the storage layer rejects drafts
    /// referencing a listing it does not hold.
    pub fn create_booking(&self, draft: BookingDraft) -> Result<Booking, RepositoryError> {
        self.bookings.insert(draft.into_booking(next_booking_id()))
    }

    pub fn booking(&self, id: &BookingId) -> Result<Booking, RepositoryError> {
        self.bookings.fetch(id)?.ok_or(RepositoryError::NotFound)
    }

    pub fn bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>, RepositoryError> {
        self.bookings.search(filter)
    }

    /// Replace every mutable field of an existing booking.
    pub fn replace_booking(
        &self,
        id: &BookingId,
        draft: BookingDraft,
    ) -> Result<Booking, RepositoryError> {
        self.bookings.update(draft.into_booking(id.clone()))
    }

    /// Apply only the supplied fields to an existing booking. A patch
    /// that moves the booking to an unknown listing is rejected by the
    /// storage layer.
    pub fn patch_booking(
        &self,
        id: &BookingId,
        patch: BookingPatch,
    ) -> Result<Booking, RepositoryError> {
        let mut booking = self.booking(id)?;
        patch.apply(&mut booking);
        self.bookings.update(booking)
    }

    pub fn delete_booking(&self, id: &BookingId) -> Result<(), RepositoryError> {
        self.bookings.delete(id)
    }
}
