use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Identifier wrapper for bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub String);

/// Opaque guest identity carried on bookings.
///
/// Guests live in an identity system outside this service; the catalog
/// never resolves them, it only stores and filters on the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestId(pub String);

/// Enumerated property categories a listing can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Condo,
    Townhouse,
    Studio,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Studio => "studio",
        }
    }
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A rentable property record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub property_type: PropertyType,
    pub price_per_night: Decimal,
    pub is_active: bool,
}

/// Client payload for creating or fully replacing a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub property_type: PropertyType,
    pub price_per_night: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl ListingDraft {
    pub fn into_listing(self, id: ListingId) -> Listing {
        let ListingDraft {
            title,
            description,
            city,
            country,
            property_type,
            price_per_night,
            is_active,
        } = self;

        Listing {
            id,
            title,
            description,
            city,
            country,
            property_type,
            price_per_night,
            is_active,
        }
    }
}

/// Partial-update payload for a listing; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub property_type: Option<PropertyType>,
    pub price_per_night: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl ListingPatch {
    pub fn apply(self, listing: &mut Listing) {
        if let Some(title) = self.title {
            listing.title = title;
        }
        if let Some(description) = self.description {
            listing.description = Some(description);
        }
        if let Some(city) = self.city {
            listing.city = city;
        }
        if let Some(country) = self.country {
            listing.country = country;
        }
        if let Some(property_type) = self.property_type {
            listing.property_type = property_type;
        }
        if let Some(price_per_night) = self.price_per_night {
            listing.price_per_night = price_per_night;
        }
        if let Some(is_active) = self.is_active {
            listing.is_active = is_active;
        }
    }
}

/// A reservation of a listing by a guest for a date range.
///
/// Check-in/check-out consistency is deliberately left unvalidated;
/// the catalog stores whatever range the client supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub listing: ListingId,
    pub guest: GuestId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
}

/// Client payload for creating or fully replacing a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub listing: ListingId,
    pub guest: GuestId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

impl BookingDraft {
    pub fn into_booking(self, id: BookingId) -> Booking {
        let BookingDraft {
            listing,
            guest,
            check_in_date,
            check_out_date,
            status,
        } = self;

        Booking {
            id,
            listing,
            guest,
            check_in_date,
            check_out_date,
            status,
        }
    }
}

/// Partial-update payload for a booking; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingPatch {
    pub listing: Option<ListingId>,
    pub guest: Option<GuestId>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

impl BookingPatch {
    pub fn apply(self, booking: &mut Booking) {
        if let Some(listing) = self.listing {
            booking.listing = listing;
        }
        if let Some(guest) = self.guest {
            booking.guest = guest;
        }
        if let Some(check_in_date) = self.check_in_date {
            booking.check_in_date = check_in_date;
        }
        if let Some(check_out_date) = self.check_out_date {
            booking.check_out_date = check_out_date;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
    }
}
