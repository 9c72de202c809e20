//! Accommodations module - domain models, services, and traits.

mod accommodations_model;
mod accommodations_service;
mod accommodations_traits;

// Re-export the public interface
pub use accommodations_model::{Accommodation, AccommodationUpdate, NewAccommodation};
pub use accommodations_service::AccommodationService;
pub use accommodations_traits::{AccommodationRepositoryTrait, AccommodationServiceTrait};
