use async_trait::async_trait;

use crate::errors::Result;

use super::bookings_model::{Booking, BookingStatus, BookingUpdate, NewBooking};

/// Trait for booking repository operations
#[async_trait]
pub trait BookingRepositoryTrait: Send + Sync {
    async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>>;
    async fn list_for_package(&self, package_id: i64) -> Result<Vec<Booking>>;
    async fn get_by_id(&self, booking_id: i64) -> Result<Option<Booking>>;
    async fn insert(&self, new_booking: NewBooking) -> Result<Booking>;
    async fn update(&self, booking_id: i64, patch: BookingUpdate) -> Result<Booking>;
    async fn delete(&self, booking_id: i64) -> Result<()>;
}

/// Trait for booking service operations
#[async_trait]
pub trait BookingServiceTrait: Send + Sync {
    async fn list_bookings(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>>;
    async fn bookings_for_package(&self, package_id: i64) -> Result<Vec<Booking>>;
    async fn get_booking(&self, booking_id: i64) -> Result<Booking>;
    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking>;
    async fn update_booking(&self, booking_id: i64, patch: BookingUpdate) -> Result<Booking>;
    async fn set_booking_status(&self, booking_id: i64, status: BookingStatus) -> Result<Booking>;
    async fn delete_booking(&self, booking_id: i64) -> Result<()>;
}
