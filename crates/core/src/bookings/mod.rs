//! Bookings module - domain models, services, and traits.

pub mod bookings_model;
pub mod bookings_service;
pub mod bookings_traits;

#[cfg(test)]
mod bookings_service_tests;

pub use bookings_model::{Booking, BookingStatus, BookingUpdate, NewBooking};
pub use bookings_service::BookingService;
pub use bookings_traits::{BookingRepositoryTrait, BookingServiceTrait};
