//! Wire row types for the three package relations.
//!
//! The detail columns are legacy JSON with several accumulated shapes, so
//! rows decode them as raw values and normalize on the way into the domain
//! types. Writes always send the normalized shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tourdesk_core::packages::{
    NewPackageDate, Package, PackageDate, PackageDetails, PackageRelations,
};
use tourdesk_core::utils::{flatten_inclusions, flatten_locations, normalize_image_list};

use crate::serde_utils::one_or_many;

/// A `package_details` row as stored, before its loose JSON columns are
/// normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDetailsRow {
    pub id: i64,
    pub package_id: i64,
    #[serde(default)]
    pub itinerary: Option<String>,
    #[serde(default)]
    pub side_locations: Value,
    #[serde(default)]
    pub inclusions: Value,
    #[serde(default)]
    pub image_url: Value,
}

impl From<PackageDetailsRow> for PackageDetails {
    fn from(row: PackageDetailsRow) -> Self {
        PackageDetails {
            id: row.id,
            package_id: row.package_id,
            itinerary: row.itinerary,
            side_locations: flatten_locations(&row.side_locations),
            inclusions: flatten_inclusions(&row.inclusions),
            image_url: normalize_image_list(&row.image_url),
        }
    }
}

/// A `packages` row fetched together with its embedded relations.
#[derive(Debug, Deserialize)]
pub struct PackageRecord {
    #[serde(flatten)]
    pub package: Package,
    #[serde(default, deserialize_with = "one_or_many")]
    pub package_details: Option<PackageDetailsRow>,
    #[serde(default)]
    pub package_dates: Vec<PackageDate>,
}

impl From<PackageRecord> for PackageRelations {
    fn from(record: PackageRecord) -> Self {
        PackageRelations {
            package: record.package,
            details: record.package_details.map(PackageDetails::from),
            dates: record.package_dates,
        }
    }
}

/// Insert payload for one availability window row.
#[derive(Debug, Serialize)]
pub struct NewPackageDateRow {
    pub package_id: i64,
    #[serde(flatten)]
    pub window: NewPackageDate,
}
