//! Car rental domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::listings::ListingStatus;
use crate::utils::normalize_image_list;
use crate::{errors::ValidationError, Error, Result};

/// A row of the `car_rentals` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarRental {
    pub id: i64,
    pub model: String,
    pub vehicle_type: String,
    pub seats: i32,
    pub price_per_day: Decimal,
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new car rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCarRental {
    pub model: String,
    pub vehicle_type: String,
    pub seats: i32,
    pub price_per_day: Decimal,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Vec<String>,
}

impl NewCarRental {
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Vehicle model cannot be empty".to_string(),
            )));
        }
        if self.seats < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Seat count must be at least one".to_string(),
            )));
        }
        if self.price_per_day < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price per day cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn normalized(mut self) -> Self {
        self.model = self.model.trim().to_string();
        self.vehicle_type = self.vehicle_type.trim().to_string();
        self.image_url = normalize_image_list(&Value::from(self.image_url));
        self
    }
}

/// Partial update for a car rental.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarRentalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Vec<String>>,
}

impl CarRentalUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(seats) = self.seats {
            if seats < 1 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Seat count must be at least one".to_string(),
                )));
            }
        }
        if let Some(price) = self.price_per_day {
            if price < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Price per day cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    pub fn normalized(mut self) -> Self {
        if let Some(model) = self.model.take() {
            self.model = Some(model.trim().to_string());
        }
        if let Some(images) = self.image_url.take() {
            self.image_url = Some(normalize_image_list(&Value::from(images)));
        }
        self
    }
}
