//! Hosted-store implementation for bookings.

mod repository;

pub use repository::BookingRepository;
