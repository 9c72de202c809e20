//! Hosted-store implementation for car rentals.

mod model;
mod repository;

pub use model::CarRentalRow;
pub use repository::CarRentalRepository;
