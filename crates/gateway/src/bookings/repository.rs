use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::bookings::{
    Booking, BookingRepositoryTrait, BookingStatus, BookingUpdate, NewBooking,
};
use tourdesk_core::errors::Result;

use crate::client::RestClient;
use crate::relations::BOOKINGS;
use crate::serde_utils::enum_param;

/// Repository for the `bookings` relation on the hosted store.
///
/// Booking rows carry no legacy columns, so the domain type deserializes
/// directly.
pub struct BookingRepository {
    client: Arc<RestClient>,
}

impl BookingRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
        let mut query = self
            .client
            .from(BOOKINGS)
            .select("*")
            .order_desc("booking_date");
        if let Some(status) = status {
            query = query.eq("status", enum_param(&status)?);
        }
        let rows = query.fetch().await?;
        Ok(rows)
    }

    async fn list_for_package(&self, package_id: i64) -> Result<Vec<Booking>> {
        let rows = self
            .client
            .from(BOOKINGS)
            .select("*")
            .eq("package_id", package_id)
            .order_desc("booking_date")
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, booking_id: i64) -> Result<Option<Booking>> {
        let row = self
            .client
            .from(BOOKINGS)
            .select("*")
            .eq("booking_id", booking_id)
            .fetch_optional()
            .await?;
        Ok(row)
    }

    async fn insert(&self, new_booking: NewBooking) -> Result<Booking> {
        let row = self.client.from(BOOKINGS).insert(&new_booking).await?;
        Ok(row)
    }

    async fn update(&self, booking_id: i64, patch: BookingUpdate) -> Result<Booking> {
        let row = self
            .client
            .from(BOOKINGS)
            .eq("booking_id", booking_id)
            .update_returning(&patch)
            .await?;
        Ok(row)
    }

    async fn delete(&self, booking_id: i64) -> Result<()> {
        self.client
            .from(BOOKINGS)
            .eq("booking_id", booking_id)
            .delete()
            .await?;
        Ok(())
    }
}
