use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, GatewayError, Result};

use super::bookings_model::{Booking, BookingStatus, BookingUpdate, NewBooking};
use super::bookings_traits::{BookingRepositoryTrait, BookingServiceTrait};

/// Service for booking management.
pub struct BookingService {
    repository: Arc<dyn BookingRepositoryTrait>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BookingServiceTrait for BookingService {
    async fn list_bookings(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
        self.repository.list(status).await
    }

    async fn bookings_for_package(&self, package_id: i64) -> Result<Vec<Booking>> {
        self.repository.list_for_package(package_id).await
    }

    async fn get_booking(&self, booking_id: i64) -> Result<Booking> {
        self.repository.get_by_id(booking_id).await?.ok_or_else(|| {
            Error::Gateway(GatewayError::NotFound(format!(
                "Booking {booking_id} not found"
            )))
        })
    }

    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking> {
        new_booking.validate()?;
        self.repository.insert(new_booking).await
    }

    async fn update_booking(&self, booking_id: i64, patch: BookingUpdate) -> Result<Booking> {
        patch.validate()?;
        self.repository.update(booking_id, patch).await
    }

    async fn set_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking> {
        debug!("Setting booking {} status to {:?}", booking_id, status);
        let patch = BookingUpdate {
            status: Some(status),
            ..Default::default()
        };
        self.repository.update(booking_id, patch).await
    }

    async fn delete_booking(&self, booking_id: i64) -> Result<()> {
        self.repository.delete(booking_id).await
    }
}
