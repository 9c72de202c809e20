use std::sync::Arc;

use super::car_rentals_model::{CarRental, CarRentalUpdate, NewCarRental};
use super::car_rentals_traits::{CarRentalRepositoryTrait, CarRentalServiceTrait};
use crate::errors::{GatewayError, Result};
use crate::listings::ListingStatus;

/// Service for managing car rental listings.
pub struct CarRentalService {
    repository: Arc<dyn CarRentalRepositoryTrait>,
}

impl CarRentalService {
    /// Creates a new CarRentalService instance
    pub fn new(repository: Arc<dyn CarRentalRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CarRentalServiceTrait for CarRentalService {
    async fn list_car_rentals(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<CarRental>> {
        self.repository.list(status_filter).await
    }

    async fn get_car_rental(&self, id: i64) -> Result<CarRental> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(format!("Car rental {} not found", id)).into())
    }

    async fn create_car_rental(&self, new_car_rental: NewCarRental) -> Result<CarRental> {
        new_car_rental.validate()?;
        self.repository.insert(new_car_rental.normalized()).await
    }

    async fn update_car_rental(&self, id: i64, update: CarRentalUpdate) -> Result<CarRental> {
        update.validate()?;
        self.repository.update(id, update.normalized()).await
    }

    async fn delete_car_rental(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }
}
