use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use tourdesk_core::accommodations::Accommodation;
use tourdesk_core::listings::ListingStatus;
use tourdesk_core::utils::normalize_image_list;

/// An `accommodations` row as stored, with `image_url` kept raw for the
/// legacy string and stringified-array shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct AccommodationRow {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_night: Decimal,
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Value,
    pub created_at: DateTime<Utc>,
}

impl From<AccommodationRow> for Accommodation {
    fn from(row: AccommodationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            location: row.location,
            description: row.description,
            price_per_night: row.price_per_night,
            status: row.status,
            image_url: normalize_image_list(&row.image_url),
            created_at: row.created_at,
        }
    }
}
