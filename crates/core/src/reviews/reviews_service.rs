use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use super::reviews_model::ReviewSummary;
use super::reviews_traits::{ReviewSummaryRepositoryTrait, ReviewSummaryServiceTrait};
use crate::errors::Result;

/// Service for review summary lookups.
pub struct ReviewSummaryService {
    repository: Arc<dyn ReviewSummaryRepositoryTrait>,
}

impl ReviewSummaryService {
    /// Creates a new ReviewSummaryService instance
    pub fn new(repository: Arc<dyn ReviewSummaryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ReviewSummaryServiceTrait for ReviewSummaryService {
    /// Fetches summaries for a key set with one batched query.
    ///
    /// Failures degrade to an empty map: ratings are decoration, not data
    /// the listing screens can refuse to render without.
    async fn summaries_for(
        &self,
        source_type: &str,
        source_ids: &[String],
    ) -> HashMap<String, ReviewSummary> {
        if source_ids.is_empty() {
            return HashMap::new();
        }
        match self
            .repository
            .list_for_sources(source_type, source_ids)
            .await
        {
            Ok(summaries) => summaries
                .into_iter()
                .map(|summary| (summary.source_id.clone(), summary))
                .collect(),
            Err(e) => {
                warn!(
                    "Failed to load review summaries for source type '{}': {}. Ratings default to zero.",
                    source_type, e
                );
                HashMap::new()
            }
        }
    }

    /// Fetches the top summaries of one source type by weighted rating.
    async fn top_rated(&self, source_type: &str, limit: usize) -> Result<Vec<ReviewSummary>> {
        self.repository
            .top_by_weighted_rating(source_type, limit)
            .await
    }
}
