//! Car rental repository and service traits.

use async_trait::async_trait;

use super::car_rentals_model::{CarRental, CarRentalUpdate, NewCarRental};
use crate::errors::Result;
use crate::listings::ListingStatus;

/// Trait defining the contract for car rental persistence.
#[async_trait]
pub trait CarRentalRepositoryTrait: Send + Sync {
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<CarRental>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<CarRental>>;

    async fn insert(&self, new_car_rental: NewCarRental) -> Result<CarRental>;

    async fn update(&self, id: i64, update: CarRentalUpdate) -> Result<CarRental>;

    async fn delete(&self, id: i64) -> Result<()>;
}

/// Trait defining the contract for car rental service operations.
#[async_trait]
pub trait CarRentalServiceTrait: Send + Sync {
    async fn list_car_rentals(
        &self,
        status_filter: Option<ListingStatus>,
    ) -> Result<Vec<CarRental>>;

    async fn get_car_rental(&self, id: i64) -> Result<CarRental>;

    async fn create_car_rental(&self, new_car_rental: NewCarRental) -> Result<CarRental>;

    async fn update_car_rental(&self, id: i64, update: CarRentalUpdate) -> Result<CarRental>;

    async fn delete_car_rental(&self, id: i64) -> Result<()>;
}
