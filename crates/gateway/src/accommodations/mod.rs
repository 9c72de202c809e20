//! Hosted-store implementation for accommodations.

mod model;
mod repository;

pub use model::AccommodationRow;
pub use repository::AccommodationRepository;
