//! Booking domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Lifecycle of a booking. The admin console may set any state directly;
/// unknown stored values are rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A row of the `bookings` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub package_id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub agent_id: Option<i64>,
    pub booking_date: NaiveDate,
    pub pax: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub package_id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub agent_id: Option<i64>,
    pub booking_date: NaiveDate,
    pub pax: i32,
    pub total_price: Decimal,
    #[serde(default)]
    pub status: BookingStatus,
}

impl NewBooking {
    /// Validates the new booking data.
    pub fn validate(&self) -> Result<()> {
        if self.pax < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "A booking needs at least one traveler".to_string(),
            )));
        }
        if self.total_price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Total price cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for a booking. Only populated fields are serialized into
/// the update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pax: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

impl BookingUpdate {
    /// Validates the mentioned fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(pax) = self.pax {
            if pax < 1 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "A booking needs at least one traveler".to_string(),
                )));
            }
        }
        if let Some(total_price) = self.total_price {
            if total_price < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Total price cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}
