//! Customer domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A row of the `customers` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Validates the new customer data.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "full_name".to_string(),
            )));
        }
        validate_email(&self.email)?;
        Ok(())
    }

    /// Returns a copy with names and contact fields trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: trim_optional(&self.phone),
        }
    }
}

/// Partial update for a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerUpdate {
    /// Validates the mentioned fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(full_name) = &self.full_name {
            if full_name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    "full_name".to_string(),
                )));
            }
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    /// Returns a copy with mentioned fields trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.as_ref().map(|s| s.trim().to_string()),
            email: self.email.as_ref().map(|s| s.trim().to_string()),
            phone: self.phone.as_ref().map(|s| s.trim().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

// Lightweight shape check. The backend enforces uniqueness and format.
fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid email address: '{email}'"
        ))));
    }
    Ok(())
}

fn trim_optional(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
