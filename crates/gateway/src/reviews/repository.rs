use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::errors::Result;
use tourdesk_core::reviews::{ReviewSummary, ReviewSummaryRepositoryTrait};

use crate::client::RestClient;
use crate::relations::REVIEW_SUMMARY;

/// Repository for the read-only `review_summary` relation.
pub struct ReviewSummaryRepository {
    client: Arc<RestClient>,
}

impl ReviewSummaryRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewSummaryRepositoryTrait for ReviewSummaryRepository {
    async fn list_for_sources(
        &self,
        source_type: &str,
        source_ids: &[String],
    ) -> Result<Vec<ReviewSummary>> {
        if source_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = self
            .client
            .from(REVIEW_SUMMARY)
            .select("*")
            .eq("source_type", source_type)
            .in_list("source_id", source_ids)
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn top_by_weighted_rating(
        &self,
        source_type: &str,
        limit: usize,
    ) -> Result<Vec<ReviewSummary>> {
        let rows = self
            .client
            .from(REVIEW_SUMMARY)
            .select("*")
            .eq("source_type", source_type)
            .order_desc("weighted_rating")
            .limit(limit)
            .fetch()
            .await?;
        Ok(rows)
    }
}
