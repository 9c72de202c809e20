//! Land arrangement repository and service traits.

use async_trait::async_trait;

use super::lands_model::{Land, LandUpdate, NewLand};
use crate::errors::Result;
use crate::listings::ListingStatus;
use crate::reviews::Rated;

/// Trait defining the contract for land arrangement persistence.
#[async_trait]
pub trait LandRepositoryTrait: Send + Sync {
    /// Lists land arrangements, optionally filtered by status.
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Land>>;

    /// Retrieves a land arrangement by its natural key.
    async fn get_by_id(&self, land_id: &str) -> Result<Option<Land>>;

    /// Retrieves the active land arrangements among the given ids, as a
    /// single batched query.
    async fn list_active_by_ids(&self, land_ids: &[String]) -> Result<Vec<Land>>;

    /// Inserts a land arrangement and returns the stored row.
    async fn insert(&self, new_land: NewLand) -> Result<Land>;

    /// Applies a partial update and returns the stored row.
    async fn update(&self, land_id: &str, update: LandUpdate) -> Result<Land>;

    /// Deletes a land arrangement by its natural key.
    async fn delete(&self, land_id: &str) -> Result<()>;
}

/// Trait defining the contract for land arrangement service operations.
#[async_trait]
pub trait LandServiceTrait: Send + Sync {
    /// Lists land arrangements without rating data.
    async fn list_lands(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Land>>;

    /// Lists land arrangements with their rating aggregates attached.
    async fn list_with_ratings(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Rated<Land>>>;

    /// Returns the top active land arrangements by weighted rating.
    async fn featured_lands(&self, limit: usize) -> Result<Vec<Rated<Land>>>;

    /// Retrieves a land arrangement by its natural key.
    async fn get_land(&self, land_id: &str) -> Result<Land>;

    /// Creates a new land arrangement with business validation.
    async fn create_land(&self, new_land: NewLand) -> Result<Land>;

    /// Updates an existing land arrangement with business validation.
    async fn update_land(&self, land_id: &str, update: LandUpdate) -> Result<Land>;

    /// Deletes a land arrangement.
    async fn delete_land(&self, land_id: &str) -> Result<()>;
}
