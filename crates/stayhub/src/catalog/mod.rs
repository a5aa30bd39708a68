//! Listings and bookings catalog.
//!
//! The module is split the same way the HTTP surface is: domain
//! records and payloads, query-parameter filters, storage traits, the
//! service composing them, and the axum router on top.

pub mod domain;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Booking, BookingDraft, BookingId, BookingPatch, BookingStatus, GuestId, Listing, ListingDraft,
    ListingId, ListingPatch, PropertyType,
};
pub use query::{ActivityFilter, BookingFilter, BookingQuery, ListingFilter, ListingQuery};
pub use repository::{BookingRepository, ListingRepository, RepositoryError};
pub use router::catalog_router;
pub use service::TravelCatalogService;
