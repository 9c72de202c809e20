use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use tourdesk_core::lands::Land;
use tourdesk_core::listings::ListingStatus;
use tourdesk_core::utils::normalize_image_list;

/// A `lands` row as stored, with `image_url` kept raw for the legacy
/// string and stringified-array shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct LandRow {
    pub land_id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Value,
    pub created_at: DateTime<Utc>,
}

impl From<LandRow> for Land {
    fn from(row: LandRow) -> Self {
        Self {
            land_id: row.land_id,
            name: row.name,
            location: row.location,
            description: row.description,
            price: row.price,
            status: row.status,
            image_url: normalize_image_list(&row.image_url),
            created_at: row.created_at,
        }
    }
}
