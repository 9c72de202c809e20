//! Accommodation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::listings::ListingStatus;
use crate::utils::normalize_image_list;
use crate::{errors::ValidationError, Error, Result};

/// A row of the `accommodations` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_night: Decimal,
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new accommodation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccommodation {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_night: Decimal,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Vec<String>,
}

impl NewAccommodation {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Accommodation name cannot be empty".to_string(),
            )));
        }
        if self.price_per_night < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price per night cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.location = self.location.trim().to_string();
        self.image_url = normalize_image_list(&Value::from(self.image_url));
        self
    }
}

/// Partial update for an accommodation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccommodationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Vec<String>>,
}

impl AccommodationUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Accommodation name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(price) = self.price_per_night {
            if price < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Price per night cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    pub fn normalized(mut self) -> Self {
        if let Some(name) = self.name.take() {
            self.name = Some(name.trim().to_string());
        }
        if let Some(images) = self.image_url.take() {
            self.image_url = Some(normalize_image_list(&Value::from(images)));
        }
        self
    }
}
