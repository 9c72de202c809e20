//! Review summary domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Precomputed rating aggregate for one listing.
///
/// Rows are produced by an external aggregation job and are read-only from
/// the application's perspective. A listing is matched by the
/// (`source_type`, `source_id`) pair, where `source_id` is the listing's
/// natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub source_type: String,
    pub source_id: String,
    pub avg_rating: f64,
    pub total_reviews: i64,
    pub weighted_rating: f64,
}

/// A listing that can be correlated with its review summary.
pub trait RatedSource {
    /// The natural key matched against `review_summary.source_id`.
    fn source_id(&self) -> &str;
}

/// A listing augmented with its rating aggregate.
///
/// Serializes flat: the rating fields sit next to the listing's own fields.
#[derive(Debug, Clone, Serialize)]
pub struct Rated<T> {
    #[serde(flatten)]
    pub listing: T,
    pub avg_rating: f64,
    pub total_reviews: i64,
    pub weighted_rating: f64,
}

impl<T> Rated<T> {
    /// Wraps a listing with zeroed rating fields, used when no summary row
    /// exists for its key.
    pub fn zeroed(listing: T) -> Self {
        Self {
            listing,
            avg_rating: 0.0,
            total_reviews: 0,
            weighted_rating: 0.0,
        }
    }

    /// Wraps a listing with the rating fields of its summary row.
    pub fn from_summary(listing: T, summary: &ReviewSummary) -> Self {
        Self {
            listing,
            avg_rating: summary.avg_rating,
            total_reviews: summary.total_reviews,
            weighted_rating: summary.weighted_rating,
        }
    }
}

/// Attaches rating aggregates to listings by natural key.
///
/// Returns the same listings in the same order; a listing without a summary
/// gets all three rating fields at zero.
pub fn merge_ratings<T: RatedSource>(
    listings: Vec<T>,
    summaries: &HashMap<String, ReviewSummary>,
) -> Vec<Rated<T>> {
    listings
        .into_iter()
        .map(|listing| match summaries.get(listing.source_id()) {
            Some(summary) => Rated::from_summary(listing, summary),
            None => Rated::zeroed(listing),
        })
        .collect()
}
