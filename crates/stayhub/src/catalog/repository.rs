use super::domain::{Booking, BookingId, Listing, ListingId};
use super::query::{BookingFilter, ListingFilter};

/// Storage abstraction for the listing collection so the service and
/// router can be exercised against in-memory doubles.
pub trait ListingRepository: Send + Sync {
    fn insert(&self, listing: Listing) -> Result<Listing, RepositoryError>;
    fn update(&self, listing: Listing) -> Result<Listing, RepositoryError>;
    fn fetch(&self, id: &ListingId) -> Result<Option<Listing>, RepositoryError>;
    fn delete(&self, id: &ListingId) -> Result<(), RepositoryError>;
    fn search(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError>;
}

/// Storage abstraction for the booking collection.
///
/// `insert` and `update` enforce the listing reference: a booking
/// pointing at a listing the store does not hold fails with
/// [`RepositoryError::UnknownListing`]. Nothing else about the booking
/// is validated at this layer.
pub trait BookingRepository: Send + Sync {
    fn insert(&self, booking: Booking) -> Result<Booking, RepositoryError>;
    fn update(&self, booking: Booking) -> Result<Booking, RepositoryError>;
    fn fetch(&self, id: &BookingId) -> Result<Option<Booking>, RepositoryError>;
    fn delete(&self, id: &BookingId) -> Result<(), RepositoryError>;
    fn search(&self, filter: &BookingFilter) -> Result<Vec<Booking>, RepositoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("booking references an unknown listing")]
    UnknownListing,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
