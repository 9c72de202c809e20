//! Package domain models.
//!
//! A package is stored across three relations: `packages` (the row the list
//! screens show), `package_details` (at most one row, created lazily on the
//! first detail write) and `package_dates` (zero or more availability
//! windows). The models here cover both directions: the merged aggregate the
//! UI reads, and the per-relation payloads the reconciler writes back.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::utils::{flatten_inclusions, flatten_locations, normalize_image_list};
use crate::{errors::ValidationError, Error, Result};

/// Publication lifecycle of a package listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    Active,
    Inactive,
    #[default]
    Draft,
}

/// Market segment of a tour package.
///
/// Serialized capitalized to match the stored column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourType {
    Domestic,
    International,
}

/// Stage of a multi-relation package save.
///
/// Save errors and warnings carry the stage so callers can tell which of the
/// three relations (or the final refetch) a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStage {
    Package,
    Details,
    Dates,
    Refetch,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            WriteStage::Package => "package",
            WriteStage::Details => "details",
            WriteStage::Dates => "dates",
            WriteStage::Refetch => "refetch",
        };
        write!(f, "{}", stage)
    }
}

/// Errors specific to package reconciliation.
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Package {stage} write failed: {message}")]
    Write { stage: WriteStage, message: String },

    #[error("Package {0} not found")]
    NotFound(i64),
}

impl PackageError {
    /// Wraps an underlying error with the save stage it occurred in.
    pub fn write(stage: WriteStage, err: impl fmt::Display) -> Self {
        PackageError::Write {
            stage,
            message: err.to_string(),
        }
    }
}

/// A row of the `packages` relation.
///
/// The counters (`bookings`, `revenue`, `rating`) are maintained by the
/// store and are never written by this application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub package_id: i64,
    pub main_location: String,
    pub price: Decimal,
    pub duration: i32,
    pub nights: i32,
    pub status: PackageStatus,
    pub tour_type: TourType,
    #[serde(default)]
    pub bookings: i64,
    #[serde(default)]
    pub revenue: Decimal,
    #[serde(default)]
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// The detail row associated one-to-one with a package.
///
/// List fields are already normalized to flat string lists; the raw column
/// shapes (bare strings, nested lists, label maps) never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PackageDetails {
    pub id: i64,
    pub package_id: i64,
    #[serde(default)]
    pub itinerary: Option<String>,
    #[serde(default)]
    pub side_locations: Vec<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub image_url: Vec<String>,
}

/// One availability window of a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDate {
    pub id: i64,
    pub package_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remaining_slots: i32,
}

/// An availability window as supplied by create/edit forms, before it has
/// a stored identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPackageDate {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remaining_slots: i32,
}

impl NewPackageDate {
    /// Validates a proposed availability window.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Date window ends ({}) before it starts ({})",
                self.end_date, self.start_date
            ))));
        }
        if self.remaining_slots < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Remaining slots cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// The three relations backing one package, as read from the store.
#[derive(Debug, Clone)]
pub struct PackageRelations {
    pub package: Package,
    pub details: Option<PackageDetails>,
    pub dates: Vec<PackageDate>,
}

/// Merged, denormalized view of a package.
///
/// This is the only package shape the UI sees. `itinerary`, `side_locations`
/// and `inclusions` are mirrored to the top level so list screens do not have
/// to traverse the nested details object.
#[derive(Debug, Clone, Serialize)]
pub struct PackageAggregate {
    #[serde(flatten)]
    pub package: Package,
    pub package_details: Option<PackageDetails>,
    pub available_dates: Vec<PackageDate>,
    pub itinerary: Option<String>,
    pub side_locations: Vec<String>,
    pub inclusions: Vec<String>,
}

impl PackageAggregate {
    /// Builds the merged view from its three source relations.
    ///
    /// Windows are sorted by start date so the view is deterministic no
    /// matter which read path produced them.
    pub fn assemble(
        package: Package,
        details: Option<PackageDetails>,
        mut dates: Vec<PackageDate>,
    ) -> Self {
        dates.sort_by_key(|window| (window.start_date, window.end_date));

        let (itinerary, side_locations, inclusions) = match &details {
            Some(details) => (
                details.itinerary.clone(),
                details.side_locations.clone(),
                details.inclusions.clone(),
            ),
            None => (None, Vec::new(), Vec::new()),
        };

        Self {
            package,
            package_details: details,
            available_dates: dates,
            itinerary,
            side_locations,
            inclusions,
        }
    }
}

/// Input model for creating a package aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageCreate {
    pub main_location: String,
    pub price: Decimal,
    pub duration: i32,
    pub nights: i32,
    #[serde(default)]
    pub status: PackageStatus,
    pub tour_type: TourType,
    #[serde(default)]
    pub itinerary: Option<String>,
    #[serde(default)]
    pub side_locations: Vec<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub image_url: Vec<String>,
    #[serde(default)]
    pub available_dates: Vec<NewPackageDate>,
}

impl PackageCreate {
    /// Validates the new package data.
    pub fn validate(&self) -> Result<()> {
        if self.main_location.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "main_location".to_string(),
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
        if self.duration < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Duration must be at least one day".to_string(),
            )));
        }
        if self.nights < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Nights cannot be negative".to_string(),
            )));
        }
        for window in &self.available_dates {
            window.validate()?;
        }
        Ok(())
    }

    /// Applies the shared list normalization so the stored rows match what a
    /// later read would produce.
    pub fn normalized(mut self) -> Self {
        self.main_location = self.main_location.trim().to_string();
        self.side_locations = tidy_locations(self.side_locations);
        self.inclusions = tidy_inclusions(self.inclusions);
        self.image_url = tidy_images(self.image_url);
        self
    }

    /// True when any detail field carries content worth a details row.
    pub fn has_detail_content(&self) -> bool {
        self.itinerary
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
            || !self.side_locations.is_empty()
            || !self.inclusions.is_empty()
            || !self.image_url.is_empty()
    }

    /// The insert payload for the `packages` relation.
    pub fn package_row(&self) -> NewPackage {
        NewPackage {
            main_location: self.main_location.clone(),
            price: self.price,
            duration: self.duration,
            nights: self.nights,
            status: self.status,
            tour_type: self.tour_type,
        }
    }

    /// The insert payload for the `package_details` relation.
    pub fn details_row(&self, package_id: i64) -> NewPackageDetails {
        NewPackageDetails {
            package_id,
            itinerary: self.itinerary.clone(),
            side_locations: self.side_locations.clone(),
            inclusions: self.inclusions.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Insert payload for the `packages` relation.
#[derive(Debug, Clone, Serialize)]
pub struct NewPackage {
    pub main_location: String,
    pub price: Decimal,
    pub duration: i32,
    pub nights: i32,
    pub status: PackageStatus,
    pub tour_type: TourType,
}

/// Insert payload for the `package_details` relation.
#[derive(Debug, Clone, Serialize)]
pub struct NewPackageDetails {
    pub package_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<String>,
    pub side_locations: Vec<String>,
    pub inclusions: Vec<String>,
    pub image_url: Vec<String>,
}

/// Partial update for a package aggregate.
///
/// A `None` field was not mentioned by the caller and must not be touched by
/// the save. Mentioned fields may still be skipped when they equal the stored
/// value; see [`diff_package`] and [`diff_details`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackagePatch {
    pub main_location: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<i32>,
    pub nights: Option<i32>,
    pub status: Option<PackageStatus>,
    pub tour_type: Option<TourType>,
    pub itinerary: Option<String>,
    pub side_locations: Option<Vec<String>>,
    pub inclusions: Option<Vec<String>>,
    pub image_url: Option<Vec<String>>,
    /// Full replacement list of availability windows.
    pub available_dates: Option<Vec<NewPackageDate>>,
}

impl PackagePatch {
    /// Validates the mentioned fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(location) = &self.main_location {
            if location.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Main location cannot be empty".to_string(),
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
        if let Some(duration) = self.duration {
            if duration < 1 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Duration must be at least one day".to_string(),
                )));
            }
        }
        if let Some(nights) = self.nights {
            if nights < 0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Nights cannot be negative".to_string(),
                )));
            }
        }
        if let Some(windows) = &self.available_dates {
            for window in windows {
                window.validate()?;
            }
        }
        Ok(())
    }

    /// Applies the shared list normalization to the mentioned list fields so
    /// proposed and stored values compare on equal footing.
    pub fn normalized(mut self) -> Self {
        if let Some(location) = self.main_location.take() {
            self.main_location = Some(location.trim().to_string());
        }
        if let Some(locations) = self.side_locations.take() {
            self.side_locations = Some(tidy_locations(locations));
        }
        if let Some(inclusions) = self.inclusions.take() {
            self.inclusions = Some(tidy_inclusions(inclusions));
        }
        if let Some(images) = self.image_url.take() {
            self.image_url = Some(tidy_images(images));
        }
        self
    }
}

/// Column-level patch for the `packages` relation. Only populated fields are
/// serialized into the update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackageTablePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PackageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<TourType>,
}

impl PackageTablePatch {
    pub fn is_empty(&self) -> bool {
        self.main_location.is_none()
            && self.price.is_none()
            && self.duration.is_none()
            && self.nights.is_none()
            && self.status.is_none()
            && self.tour_type.is_none()
    }
}

/// Column-level patch for the `package_details` relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackageDetailsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Vec<String>>,
}

impl PackageDetailsPatch {
    pub fn is_empty(&self) -> bool {
        self.itinerary.is_none()
            && self.side_locations.is_none()
            && self.inclusions.is_none()
            && self.image_url.is_none()
    }

    /// True when any populated field carries actual content. Used to decide
    /// whether a missing details row is worth creating.
    pub fn has_content(&self) -> bool {
        self.itinerary
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
            || self.side_locations.as_deref().map(|l| !l.is_empty()).unwrap_or(false)
            || self.inclusions.as_deref().map(|l| !l.is_empty()).unwrap_or(false)
            || self.image_url.as_deref().map(|l| !l.is_empty()).unwrap_or(false)
    }
}

/// Non-fatal failure recorded while saving an aggregate.
///
/// Create keeps the package row even when a dependent write fails; the
/// warning makes that degraded outcome visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveWarning {
    pub stage: WriteStage,
    pub message: String,
}

/// Result of a package save.
#[derive(Debug, Clone, Serialize)]
pub struct PackageSaveOutcome {
    pub aggregate: PackageAggregate,
    pub warnings: Vec<SaveWarning>,
}

/// Computes the minimal `packages` patch.
///
/// A field is included only when the proposal mentions it and the proposed
/// value differs from the stored one.
pub fn diff_package(current: &Package, proposed: &PackagePatch) -> PackageTablePatch {
    let mut patch = PackageTablePatch::default();
    if let Some(location) = &proposed.main_location {
        if *location != current.main_location {
            patch.main_location = Some(location.clone());
        }
    }
    if let Some(price) = proposed.price {
        if price != current.price {
            patch.price = Some(price);
        }
    }
    if let Some(duration) = proposed.duration {
        if duration != current.duration {
            patch.duration = Some(duration);
        }
    }
    if let Some(nights) = proposed.nights {
        if nights != current.nights {
            patch.nights = Some(nights);
        }
    }
    if let Some(status) = proposed.status {
        if status != current.status {
            patch.status = Some(status);
        }
    }
    if let Some(tour_type) = proposed.tour_type {
        if tour_type != current.tour_type {
            patch.tour_type = Some(tour_type);
        }
    }
    patch
}

/// Computes the minimal `package_details` patch, or `None` when no details
/// write is needed.
///
/// Against an existing row, a field is included only when mentioned and
/// different; list fields compare by exact sequence equality, order included.
/// When no row exists yet, any mentioned detail field with content forces a
/// full insert carrying every mentioned field.
pub fn diff_details(
    current: Option<&PackageDetails>,
    proposed: &PackagePatch,
) -> Option<PackageDetailsPatch> {
    match current {
        Some(stored) => {
            let mut patch = PackageDetailsPatch::default();
            if let Some(itinerary) = &proposed.itinerary {
                if stored.itinerary.as_deref() != Some(itinerary.as_str()) {
                    patch.itinerary = Some(itinerary.clone());
                }
            }
            if let Some(locations) = &proposed.side_locations {
                if *locations != stored.side_locations {
                    patch.side_locations = Some(locations.clone());
                }
            }
            if let Some(inclusions) = &proposed.inclusions {
                if *inclusions != stored.inclusions {
                    patch.inclusions = Some(inclusions.clone());
                }
            }
            if let Some(images) = &proposed.image_url {
                if *images != stored.image_url {
                    patch.image_url = Some(images.clone());
                }
            }
            if patch.is_empty() {
                None
            } else {
                Some(patch)
            }
        }
        None => {
            let patch = PackageDetailsPatch {
                itinerary: proposed.itinerary.clone(),
                side_locations: proposed.side_locations.clone(),
                inclusions: proposed.inclusions.clone(),
                image_url: proposed.image_url.clone(),
            };
            if patch.has_content() {
                Some(patch)
            } else {
                None
            }
        }
    }
}

/// Order-insensitive comparison of the stored windows against a proposed
/// replacement list. Two sets are equal when their sorted
/// (start, end, slots) triples match.
pub fn dates_equal_unordered(current: &[PackageDate], proposed: &[NewPackageDate]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let mut current_keys: Vec<(NaiveDate, NaiveDate, i32)> = current
        .iter()
        .map(|w| (w.start_date, w.end_date, w.remaining_slots))
        .collect();
    let mut proposed_keys: Vec<(NaiveDate, NaiveDate, i32)> = proposed
        .iter()
        .map(|w| (w.start_date, w.end_date, w.remaining_slots))
        .collect();
    current_keys.sort_unstable();
    proposed_keys.sort_unstable();
    current_keys == proposed_keys
}

fn tidy_locations(locations: Vec<String>) -> Vec<String> {
    flatten_locations(&Value::from(locations))
}

fn tidy_inclusions(inclusions: Vec<String>) -> Vec<String> {
    flatten_inclusions(&Value::from(inclusions))
}

fn tidy_images(images: Vec<String>) -> Vec<String> {
    normalize_image_list(&Value::from(images))
}
