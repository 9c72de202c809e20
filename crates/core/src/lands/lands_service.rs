use std::collections::HashMap;
use std::sync::Arc;

use super::lands_model::{Land, LandUpdate, NewLand};
use super::lands_traits::{LandRepositoryTrait, LandServiceTrait};
use crate::constants::SOURCE_TYPE_LAND;
use crate::errors::{GatewayError, Result};
use crate::listings::ListingStatus;
use crate::reviews::{merge_ratings, Rated, ReviewSummaryServiceTrait};

/// Service for managing land arrangement listings.
pub struct LandService {
    repository: Arc<dyn LandRepositoryTrait>,
    reviews: Arc<dyn ReviewSummaryServiceTrait>,
}

impl LandService {
    /// Creates a new LandService instance
    pub fn new(
        repository: Arc<dyn LandRepositoryTrait>,
        reviews: Arc<dyn ReviewSummaryServiceTrait>,
    ) -> Self {
        Self { repository, reviews }
    }
}

#[async_trait::async_trait]
impl LandServiceTrait for LandService {
    /// Lists land arrangements without rating data.
    async fn list_lands(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Land>> {
        self.repository.list(status_filter).await
    }

    /// Lists land arrangements with rating aggregates attached, defaulting
    /// to zeros when no summary exists or the lookup fails.
    async fn list_with_ratings(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Rated<Land>>> {
        let listings = self.repository.list(status_filter).await?;
        let keys: Vec<String> = listings.iter().map(|land| land.land_id.clone()).collect();
        let summaries = self.reviews.summaries_for(SOURCE_TYPE_LAND, &keys).await;
        Ok(merge_ratings(listings, &summaries))
    }

    /// Returns the top active land arrangements by weighted rating, dropping
    /// ranked entries whose listing is missing or not active.
    async fn featured_lands(&self, limit: usize) -> Result<Vec<Rated<Land>>> {
        let top = self.reviews.top_rated(SOURCE_TYPE_LAND, limit).await?;
        if top.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = top.iter().map(|s| s.source_id.clone()).collect();
        let listings = self.repository.list_active_by_ids(&ids).await?;
        let mut by_id: HashMap<String, Land> = listings
            .into_iter()
            .map(|land| (land.land_id.clone(), land))
            .collect();

        Ok(top
            .iter()
            .filter_map(|summary| {
                by_id
                    .remove(summary.source_id.as_str())
                    .map(|listing| Rated::from_summary(listing, summary))
            })
            .collect())
    }

    /// Retrieves a land arrangement by its natural key.
    async fn get_land(&self, land_id: &str) -> Result<Land> {
        self.repository.get_by_id(land_id).await?.ok_or_else(|| {
            GatewayError::NotFound(format!("Land arrangement '{}' not found", land_id)).into()
        })
    }

    /// Creates a new land arrangement with business validation.
    async fn create_land(&self, new_land: NewLand) -> Result<Land> {
        new_land.validate()?;
        self.repository.insert(new_land.normalized()).await
    }

    /// Updates an existing land arrangement with business validation.
    async fn update_land(&self, land_id: &str, update: LandUpdate) -> Result<Land> {
        update.validate()?;
        self.repository.update(land_id, update.normalized()).await
    }

    /// Deletes a land arrangement.
    async fn delete_land(&self, land_id: &str) -> Result<()> {
        self.repository.delete(land_id).await
    }
}
