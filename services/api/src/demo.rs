use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use std::sync::Arc;

use stayhub::catalog::{
    BookingDraft, BookingFilter, BookingStatus, GuestId, ListingDraft, ListingFilter, ListingQuery,
    PropertyType, RepositoryError, TravelCatalogService,
};
use stayhub::error::AppError;

use crate::infra::{parse_date, InMemoryTravelStore};

type DemoService = TravelCatalogService<InMemoryTravelStore, InMemoryTravelStore>;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Case-insensitive city fragment to filter the seeded listings
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Case-insensitive country fragment
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Property type label (apartment, house, villa, condo, townhouse, studio)
    #[arg(long)]
    pub(crate) property_type: Option<String>,
    /// Price ceiling per night; non-numeric input is ignored, as over HTTP
    #[arg(long)]
    pub(crate) max_price: Option<String>,
    /// "false" shows the inactive listings; anything else keeps the active view
    #[arg(long)]
    pub(crate) is_active: Option<String>,
    /// Only list confirmed bookings checking in on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) check_in_after: Option<NaiveDate>,
    /// Print each listing's bookings underneath it
    #[arg(long)]
    pub(crate) show_bookings: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = InMemoryTravelStore::default();
    let service: Arc<DemoService> = Arc::new(TravelCatalogService::new(
        Arc::new(store.clone()),
        Arc::new(store),
    ));

    println!("Travel catalog demo");
    let seeded = match seed_catalog(&service) {
        Ok(count) => count,
        Err(err) => {
            println!("  Seeding failed: {err}");
            return Ok(());
        }
    };

    let query = ListingQuery {
        city: args.city,
        country: args.country,
        property_type: args.property_type,
        max_price: args.max_price,
        is_active: args.is_active,
    };
    let filter = ListingFilter::from(query);

    let listings = match service.listings(&filter) {
        Ok(listings) => listings,
        Err(err) => {
            println!("  Catalog unavailable: {err}");
            return Ok(());
        }
    };

    println!(
        "\nListings matching the requested filters ({} of {seeded} seeded)",
        listings.len()
    );
    for listing in &listings {
        println!(
            "- {} | {} | {}, {} | {} | {}/night | {}",
            listing.id.0,
            listing.title,
            listing.city,
            listing.country,
            listing.property_type.label(),
            listing.price_per_night,
            if listing.is_active { "active" } else { "inactive" },
        );

        if args.show_bookings {
            match service.listing_bookings(&listing.id) {
                Ok(bookings) if bookings.is_empty() => println!("    (no bookings)"),
                Ok(bookings) => {
                    for booking in bookings {
                        println!(
                            "    {} | guest {} | {} -> {} | {}",
                            booking.id.0,
                            booking.guest.0,
                            booking.check_in_date,
                            booking.check_out_date,
                            booking.status.label(),
                        );
                    }
                }
                Err(err) => println!("    Booking lookup unavailable: {err}"),
            }
        }
    }

    let confirmed = BookingFilter {
        status: Some(BookingStatus::Confirmed.label().to_string()),
        check_in_after: args.check_in_after,
        ..BookingFilter::default()
    };
    match service.bookings(&confirmed) {
        Ok(bookings) => {
            match args.check_in_after {
                Some(after) => println!("\nConfirmed bookings checking in on or after {after}"),
                None => println!("\nConfirmed bookings"),
            }
            if bookings.is_empty() {
                println!("- none");
            }
            for booking in &bookings {
                println!(
                    "- {} | listing {} | guest {} | {} -> {}",
                    booking.id.0,
                    booking.listing.0,
                    booking.guest.0,
                    booking.check_in_date,
                    booking.check_out_date,
                );
            }
        }
        Err(err) => println!("  Booking lookup unavailable: {err}"),
    }

    Ok(())
}

fn seed_catalog(service: &DemoService) -> Result<usize, RepositoryError> {
    let drafts = [
        (
            "Marais Loft",
            "Paris",
            "France",
            PropertyType::Apartment,
            Decimal::new(18500, 2),
            true,
        ),
        (
            "Left Bank Studio",
            "Paris",
            "France",
            PropertyType::Studio,
            Decimal::new(9800, 2),
            false,
        ),
        (
            "Alfama Villa",
            "Lisbon",
            "Portugal",
            PropertyType::Villa,
            Decimal::new(24000, 2),
            true,
        ),
        (
            "Gion Machiya",
            "Kyoto",
            "Japan",
            PropertyType::House,
            Decimal::new(15000, 2),
            true,
        ),
        (
            "Old Town Condo",
            "Prague",
            "Czechia",
            PropertyType::Condo,
            Decimal::new(11200, 2),
            true,
        ),
        (
            "Canal Townhouse",
            "Amsterdam",
            "Netherlands",
            PropertyType::Townhouse,
            Decimal::new(20900, 2),
            true,
        ),
    ];

    let mut listings = Vec::new();
    for (title, city, country, property_type, price_per_night, is_active) in drafts {
        let listing = service.create_listing(ListingDraft {
            title: title.to_string(),
            description: None,
            city: city.to_string(),
            country: country.to_string(),
            property_type,
            price_per_night,
            is_active,
        })?;
        listings.push(listing);
    }

    let stays = [
        (
            0usize,
            "guest-7",
            (2026, 9, 10),
            (2026, 9, 14),
            BookingStatus::Confirmed,
        ),
        (
            0,
            "guest-7",
            (2026, 10, 1),
            (2026, 10, 5),
            BookingStatus::Pending,
        ),
        (
            3,
            "guest-12",
            (2026, 9, 2),
            (2026, 9, 6),
            BookingStatus::Confirmed,
        ),
        (
            2,
            "guest-3",
            (2026, 12, 19),
            (2026, 12, 27),
            BookingStatus::Confirmed,
        ),
        (
            4,
            "guest-3",
            (2026, 8, 21),
            (2026, 8, 24),
            BookingStatus::Cancelled,
        ),
    ];
    for (index, guest, (in_y, in_m, in_d), (out_y, out_m, out_d), status) in stays {
        let listing = &listings[index];
        service.create_booking(BookingDraft {
            listing: listing.id.clone(),
            guest: GuestId(guest.to_string()),
            check_in_date: demo_date(in_y, in_m, in_d),
            check_out_date: demo_date(out_y, out_m, out_d),
            status,
        })?;
    }

    Ok(listings.len())
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
