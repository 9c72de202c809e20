use std::collections::HashMap;
use std::sync::Arc;

use super::attractions_model::{Attraction, AttractionUpdate, NewAttraction};
use super::attractions_traits::{AttractionRepositoryTrait, AttractionServiceTrait};
use crate::constants::SOURCE_TYPE_ATTRACTION;
use crate::errors::{GatewayError, Result};
use crate::listings::ListingStatus;
use crate::reviews::{merge_ratings, Rated, ReviewSummaryServiceTrait};

/// Service for managing attraction listings.
pub struct AttractionService {
    repository: Arc<dyn AttractionRepositoryTrait>,
    reviews: Arc<dyn ReviewSummaryServiceTrait>,
}

impl AttractionService {
    /// Creates a new AttractionService instance
    pub fn new(
        repository: Arc<dyn AttractionRepositoryTrait>,
        reviews: Arc<dyn ReviewSummaryServiceTrait>,
    ) -> Self {
        Self { repository, reviews }
    }
}

#[async_trait::async_trait]
impl AttractionServiceTrait for AttractionService {
    /// Lists attractions without rating data.
    async fn list_attractions(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Attraction>> {
        self.repository.list(status_filter).await
    }

    /// Lists attractions with rating aggregates attached.
    ///
    /// Ratings are best-effort: when the summary lookup fails the listings
    /// come back with zeroed rating fields.
    async fn list_with_ratings(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Rated<Attraction>>> {
        let listings = self.repository.list(status_filter).await?;
        let keys: Vec<String> = listings
            .iter()
            .map(|attraction| attraction.attraction_code.clone())
            .collect();
        let summaries = self.reviews.summaries_for(SOURCE_TYPE_ATTRACTION, &keys).await;
        Ok(merge_ratings(listings, &summaries))
    }

    /// Returns the top active attractions by weighted rating.
    ///
    /// The ranking comes from the summary relation; a ranked entry whose
    /// listing is missing or not active is dropped silently, so fewer than
    /// `limit` results can come back.
    async fn featured_attractions(&self, limit: usize) -> Result<Vec<Rated<Attraction>>> {
        let top = self.reviews.top_rated(SOURCE_TYPE_ATTRACTION, limit).await?;
        if top.is_empty() {
            return Ok(Vec::new());
        }

        let codes: Vec<String> = top.iter().map(|s| s.source_id.clone()).collect();
        let listings = self.repository.list_active_by_codes(&codes).await?;
        let mut by_code: HashMap<String, Attraction> = listings
            .into_iter()
            .map(|attraction| (attraction.attraction_code.clone(), attraction))
            .collect();

        Ok(top
            .iter()
            .filter_map(|summary| {
                by_code
                    .remove(summary.source_id.as_str())
                    .map(|listing| Rated::from_summary(listing, summary))
            })
            .collect())
    }

    /// Retrieves an attraction by its natural key.
    async fn get_attraction(&self, attraction_code: &str) -> Result<Attraction> {
        self.repository
            .get_by_code(attraction_code)
            .await?
            .ok_or_else(|| {
                GatewayError::NotFound(format!("Attraction '{}' not found", attraction_code))
                    .into()
            })
    }

    /// Creates a new attraction with business validation.
    async fn create_attraction(&self, new_attraction: NewAttraction) -> Result<Attraction> {
        new_attraction.validate()?;
        self.repository.insert(new_attraction.normalized()).await
    }

    /// Updates an existing attraction with business validation.
    async fn update_attraction(
        &self,
        attraction_code: &str,
        update: AttractionUpdate,
    ) -> Result<Attraction> {
        update.validate()?;
        self.repository
            .update(attraction_code, update.normalized())
            .await
    }

    /// Deletes an attraction.
    async fn delete_attraction(&self, attraction_code: &str) -> Result<()> {
        self.repository.delete(attraction_code).await
    }
}
