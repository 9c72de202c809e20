//! Review summary repository and service traits.

use std::collections::HashMap;

use async_trait::async_trait;

use super::reviews_model::ReviewSummary;
use crate::errors::Result;

/// Trait defining the contract for review summary reads.
///
/// The relation is read-only; there are no write operations.
#[async_trait]
pub trait ReviewSummaryRepositoryTrait: Send + Sync {
    /// Fetches all summaries of one source type whose `source_id` is in the
    /// given set, as a single batched query.
    async fn list_for_sources(
        &self,
        source_type: &str,
        source_ids: &[String],
    ) -> Result<Vec<ReviewSummary>>;

    /// Fetches the top summaries of one source type ordered by
    /// `weighted_rating` descending.
    async fn top_by_weighted_rating(
        &self,
        source_type: &str,
        limit: usize,
    ) -> Result<Vec<ReviewSummary>>;
}

/// Trait defining the contract for review summary lookups used by the
/// listing services.
#[async_trait]
pub trait ReviewSummaryServiceTrait: Send + Sync {
    /// Returns the summaries for the given keys, indexed by `source_id`.
    ///
    /// Rating data is best-effort: a fetch failure logs and returns an empty
    /// map so callers fall back to zeroed ratings instead of failing.
    async fn summaries_for(
        &self,
        source_type: &str,
        source_ids: &[String],
    ) -> HashMap<String, ReviewSummary>;

    /// Returns the top summaries of one source type by weighted rating.
    async fn top_rated(&self, source_type: &str, limit: usize) -> Result<Vec<ReviewSummary>>;
}
