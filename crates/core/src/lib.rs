//! TourDesk Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the TourDesk
//! admin console. It is transport-agnostic and defines traits that
//! are implemented by the `gateway` crate.

pub mod accommodations;
pub mod agents;
pub mod attractions;
pub mod bookings;
pub mod car_rentals;
pub mod constants;
pub mod customers;
pub mod errors;
pub mod lands;
pub mod listings;
pub mod packages;
pub mod reviews;
pub mod utils;

// Re-export common types from the package and review modules
pub use packages::*;
pub use reviews::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
