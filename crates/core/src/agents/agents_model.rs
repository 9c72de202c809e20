//! Agent domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Active,
    Inactive,
}

/// A row of the `agents` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: AgentStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAgent {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: AgentStatus,
}

impl NewAgent {
    /// Validates the new agent data.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "full_name".to_string(),
            )));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid email address: '{}'",
                self.email.trim()
            ))));
        }
        Ok(())
    }

    /// Returns a copy with names and contact fields trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status: self.status,
        }
    }
}

/// Partial update for an agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
}

impl AgentUpdate {
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
            if email.trim().is_empty() || !email.contains('@') {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Invalid email address: '{}'",
                    email.trim()
                ))));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.status.is_none()
    }
}
