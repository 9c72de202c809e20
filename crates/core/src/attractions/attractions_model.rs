//! Attraction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::listings::ListingStatus;
use crate::reviews::RatedSource;
use crate::utils::normalize_image_list;
use crate::{errors::ValidationError, Error, Result};

/// A row of the `attractions` relation.
///
/// `attraction_code` is the natural key correlating the listing with its
/// review summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub attraction_code: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl RatedSource for Attraction {
    fn source_id(&self) -> &str {
        &self.attraction_code
    }
}

/// Input model for creating a new attraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttraction {
    pub attraction_code: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Vec<String>,
}

impl NewAttraction {
    /// Validates the new attraction data.
    pub fn validate(&self) -> Result<()> {
        if self.attraction_code.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "attraction_code".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Attraction name cannot be empty".to_string(),
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    /// Trims key fields and normalizes the image list.
    pub fn normalized(mut self) -> Self {
        self.attraction_code = self.attraction_code.trim().to_string();
        self.name = self.name.trim().to_string();
        self.location = self.location.trim().to_string();
        self.image_url = normalize_image_list(&Value::from(self.image_url));
        self
    }
}

/// Partial update for an attraction. Only populated fields are serialized
/// into the update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttractionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Vec<String>>,
}

impl AttractionUpdate {
    /// Validates the mentioned fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Attraction name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Price cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// Normalizes the mentioned fields the same way creation does.
    pub fn normalized(mut self) -> Self {
        if let Some(name) = self.name.take() {
            self.name = Some(name.trim().to_string());
        }
        if let Some(location) = self.location.take() {
            self.location = Some(location.trim().to_string());
        }
        if let Some(images) = self.image_url.take() {
            self.image_url = Some(normalize_image_list(&Value::from(images)));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.status.is_none()
            && self.image_url.is_none()
    }
}
