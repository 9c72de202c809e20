//! Shared vocabulary for the standalone listing entities.

use serde::{Deserialize, Serialize};

/// Publication lifecycle shared by the standalone listing entities
/// (attractions, land arrangements, accommodations, car rentals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}
