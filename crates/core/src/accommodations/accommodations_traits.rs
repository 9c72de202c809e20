//! Accommodation repository and service traits.

use async_trait::async_trait;

use super::accommodations_model::{Accommodation, AccommodationUpdate, NewAccommodation};
use crate::errors::Result;
use crate::listings::ListingStatus;

/// Trait defining the contract for accommodation persistence.
#[async_trait]
pub trait AccommodationRepositoryTrait: Send + Sync {
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Accommodation>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Accommodation>>;

    async fn insert(&self, new_accommodation: NewAccommodation) -> Result<Accommodation>;

    async fn update(&self, id: i64, update: AccommodationUpdate) -> Result<Accommodation>;

    async fn delete(&self, id: i64) -> Result<()>;
}

/// Trait defining the contract for accommodation service operations.
#[async_trait]
pub trait AccommodationServiceTrait: Send + Sync {
    async fn list_accommodations(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Accommodation>>;

    async fn get_accommodation(&self, id: i64) -> Result<Accommodation>;

    async fn create_accommodation(
        &self,
        new_accommodation: NewAccommodation,
    ) -> Result<Accommodation>;

    async fn update_accommodation(
        &self,
        id: i64,
        update: AccommodationUpdate,
    ) -> Result<Accommodation>;

    async fn delete_accommodation(&self, id: i64) -> Result<()>;
}
