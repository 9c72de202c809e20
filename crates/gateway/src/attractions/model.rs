use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use tourdesk_core::attractions::Attraction;
use tourdesk_core::listings::ListingStatus;
use tourdesk_core::utils::normalize_image_list;

/// An `attractions` row as stored.
///
/// `image_url` is kept raw because older rows carry a bare string or a
/// stringified array instead of a JSON array.
#[derive(Debug, Clone, Deserialize)]
pub struct AttractionRow {
    pub attraction_code: String,
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

impl From<AttractionRow> for Attraction {
    fn from(row: AttractionRow) -> Self {
        Self {
            attraction_code: row.attraction_code,
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
