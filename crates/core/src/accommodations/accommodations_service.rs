use std::sync::Arc;

use super::accommodations_model::{Accommodation, AccommodationUpdate, NewAccommodation};
use super::accommodations_traits::{AccommodationRepositoryTrait, AccommodationServiceTrait};
use crate::errors::{GatewayError, Result};
use crate::listings::ListingStatus;

/// Service for managing accommodation listings.
pub struct AccommodationService {
    repository: Arc<dyn AccommodationRepositoryTrait>,
}

impl AccommodationService {
    /// Creates a new AccommodationService instance
    pub fn new(repository: Arc<dyn AccommodationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccommodationServiceTrait for AccommodationService {
    async fn list_accommodations(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<Accommodation>> {
        self.repository.list(status_filter).await
    }

    async fn get_accommodation(&self, id: i64) -> Result<Accommodation> {
        self.repository.get_by_id(id).await?.ok_or_else(|| {
            GatewayError::NotFound(format!("Accommodation {} not found", id)).into()
        })
    }

    async fn create_accommodation(
        &self,
        new_accommodation: NewAccommodation,
    ) -> Result<Accommodation> {
        new_accommodation.validate()?;
        self.repository.insert(new_accommodation.normalized()).await
    }

    async fn update_accommodation(
        &self,
        id: i64,
        update: AccommodationUpdate,
    ) -> Result<Accommodation> {
        update.validate()?;
        self.repository.update(id, update.normalized()).await
    }

    async fn delete_accommodation(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }
}
