use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use tourdesk_core::car_rentals::CarRental;
use tourdesk_core::listings::ListingStatus;
use tourdesk_core::utils::normalize_image_list;

/// A `car_rentals` row as stored, with `image_url` kept raw for the legacy
/// string and stringified-array shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct CarRentalRow {
    pub id: i64,
    pub model: String,
    pub vehicle_type: String,
    pub seats: i32,
    pub price_per_day: Decimal,
    pub status: ListingStatus,
    #[serde(default)]
    pub image_url: Value,
    pub created_at: DateTime<Utc>,
}

impl From<CarRentalRow> for CarRental {
    fn from(row: CarRentalRow) -> Self {
        Self {
            id: row.id,
            model: row.model,
            vehicle_type: row.vehicle_type,
            seats: row.seats,
            price_per_day: row.price_per_day,
            status: row.status,
            image_url: normalize_image_list(&row.image_url),
            created_at: row.created_at,
        }
    }
}
