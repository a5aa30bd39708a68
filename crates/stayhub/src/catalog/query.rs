//! Query-parameter filtering for the listing and booking collections.
//!
//! Raw parameters arrive as optional strings and collapse into typed
//! filters; every supplied parameter narrows the result set (logical
//! AND). Empty-string values are treated as absent.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::domain::{Booking, GuestId, Listing, ListingId};

/// Raw query parameters accepted by `GET /api/v1/listings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub property_type: Option<String>,
    pub max_price: Option<String>,
    pub is_active: Option<String>,
}

/// Raw query parameters accepted by `GET /api/v1/bookings`.
///
/// Date parameters deserialize as ISO dates; a malformed date is
/// rejected by the extractor rather than interpreted here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingQuery {
    pub guest: Option<String>,
    pub listing: Option<String>,
    pub status: Option<String>,
    pub check_in_after: Option<NaiveDate>,
    pub check_out_before: Option<NaiveDate>,
}

/// Resolved `is_active` parameter.
///
/// The parameter is tri-state on the wire but collapses to two
/// reachable views: `"false"` selects inactive listings, while
/// `"true"`, an unrecognized value, or no value at all keeps the
/// default active-only view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityFilter {
    #[default]
    ActiveOnly,
    InactiveOnly,
}

impl ActivityFilter {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("false") => Self::InactiveOnly,
            _ => Self::ActiveOnly,
        }
    }
}

/// Conjunctive filter over stored listings.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub city: Option<String>,
    pub country: Option<String>,
    pub property_type: Option<String>,
    pub max_price: Option<Decimal>,
    pub activity: ActivityFilter,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(city) = &self.city {
            if !contains_ignore_case(&listing.city, city) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if !contains_ignore_case(&listing.country, country) {
                return false;
            }
        }
        if let Some(property_type) = &self.property_type {
            // Exact label match: an unknown label matches nothing.
            if listing.property_type.label() != property_type.as_str() {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if listing.price_per_night > max_price {
                return false;
            }
        }
        match self.activity {
            ActivityFilter::ActiveOnly => listing.is_active,
            ActivityFilter::InactiveOnly => !listing.is_active,
        }
    }
}

impl From<ListingQuery> for ListingFilter {
    fn from(query: ListingQuery) -> Self {
        let ListingQuery {
            city,
            country,
            property_type,
            max_price,
            is_active,
        } = query;

        Self {
            city: non_empty(city),
            country: non_empty(country),
            property_type: non_empty(property_type),
            // A price cap that does not parse as a decimal is dropped,
            // leaving the rest of the filters applied.
            max_price: non_empty(max_price).and_then(|raw| Decimal::from_str(raw.trim()).ok()),
            activity: ActivityFilter::from_param(is_active.as_deref()),
        }
    }
}

/// Conjunctive filter over stored bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub guest: Option<GuestId>,
    pub listing: Option<ListingId>,
    pub status: Option<String>,
    pub check_in_after: Option<NaiveDate>,
    pub check_out_before: Option<NaiveDate>,
}

impl BookingFilter {
    /// Every booking whose listing reference equals `listing`.
    pub fn for_listing(listing: ListingId) -> Self {
        Self {
            listing: Some(listing),
            ..Self::default()
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(guest) = &self.guest {
            if booking.guest != *guest {
                return false;
            }
        }
        if let Some(listing) = &self.listing {
            if booking.listing != *listing {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if booking.status.label() != status.as_str() {
                return false;
            }
        }
        if let Some(after) = self.check_in_after {
            if booking.check_in_date < after {
                return false;
            }
        }
        if let Some(before) = self.check_out_before {
            if booking.check_out_date > before {
                return false;
            }
        }
        true
    }
}

impl From<BookingQuery> for BookingFilter {
    fn from(query: BookingQuery) -> Self {
        let BookingQuery {
            guest,
            listing,
            status,
            check_in_after,
            check_out_before,
        } = query;

        Self {
            guest: non_empty(guest).map(GuestId),
            listing: non_empty(listing).map(ListingId),
            status: non_empty(status),
            check_in_after,
            check_out_before,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
