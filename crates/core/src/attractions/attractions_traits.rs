//! Attraction repository and service traits.

use async_trait::async_trait;

use super::attractions_model::{Attraction, AttractionUpdate, NewAttraction};
use crate::listings::ListingStatus;
use crate::reviews::Rated;
use crate::errors::Result;

/// Trait defining the contract for attraction persistence.
#[async_trait]
pub trait AttractionRepositoryTrait: Send + Sync {
    /// Lists attractions, optionally filtered by status.
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Attraction>>;

    /// Retrieves an attraction by its natural key.
    async fn get_by_code(&self, attraction_code: &str) -> Result<Option<Attraction>>;

    /// Retrieves the active attractions among the given codes, as a single
    /// batched query.
    async fn list_active_by_codes(&self, codes: &[String]) -> Result<Vec<Attraction>>;

    /// Inserts an attraction and returns the stored row.
    async fn insert(&self, new_attraction: NewAttraction) -> Result<Attraction>;

    /// Applies a partial update and returns the stored row.
    async fn update(
        &self,
        attraction_code: &str,
        update: AttractionUpdate,
    ) -> Result<Attraction>;

    /// Deletes an attraction by its natural key.
    async fn delete(&self, attraction_code: &str) -> Result<()>;
}

/// Trait defining the contract for attraction service operations.
#[async_trait]
pub trait AttractionServiceTrait: Send + Sync {
    /// Lists attractions without rating data.
    async fn list_attractions(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Attraction>>;

    /// Lists attractions with their rating aggregates attached.
    async fn list_with_ratings(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Rated<Attraction>>>;

    /// Returns the top active attractions by weighted rating.
    async fn featured_attractions(&self, limit: usize) -> Result<Vec<Rated<Attraction>>>;

    /// Retrieves an attraction by its natural key.
    async fn get_attraction(&self, attraction_code: &str) -> Result<Attraction>;

    /// Creates a new attraction with business validation.
    async fn create_attraction(&self, new_attraction: NewAttraction) -> Result<Attraction>;

    /// Updates an existing attraction with business validation.
    async fn update_attraction(
        &self,
        attraction_code: &str,
        update: AttractionUpdate,
    ) -> Result<Attraction>;

    /// Deletes an attraction.
    async fn delete_attraction(&self, attraction_code: &str) -> Result<()>;
}
