//! Car rentals module - domain models, services, and traits.

mod car_rentals_model;
mod car_rentals_service;
mod car_rentals_traits;

// Re-export the public interface
pub use car_rentals_model::{CarRental, CarRentalUpdate, NewCarRental};
pub use car_rentals_service::CarRentalService;
pub use car_rentals_traits::{CarRentalRepositoryTrait, CarRentalServiceTrait};
