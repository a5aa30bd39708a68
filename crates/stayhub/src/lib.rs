//! Building blocks for the Stayhub travel catalog service.
//!
//! The `catalog` module holds the listings/bookings domain, the
//! query-parameter filtering contract, the storage traits, and the
//! HTTP router. `config`, `telemetry`, and `error` carry the plumbing
//! the service binary wires together at startup.

pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
