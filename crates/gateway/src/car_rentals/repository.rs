use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::car_rentals::{
    CarRental, CarRentalRepositoryTrait, CarRentalUpdate, NewCarRental,
};
use tourdesk_core::errors::Result;
use tourdesk_core::listings::ListingStatus;

use crate::client::RestClient;
use crate::relations::CAR_RENTALS;
use crate::serde_utils::enum_param;

use super::model::CarRentalRow;

/// Repository for the `car_rentals` relation on the hosted store.
pub struct CarRentalRepository {
    client: Arc<RestClient>,
}

impl CarRentalRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CarRentalRepositoryTrait for CarRentalRepository {
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<CarRental>> {
        let mut query = self.client.from(CAR_RENTALS).select("*").order_asc("model");
        if let Some(status) = status_filter {
            query = query.eq("status", enum_param(&status)?);
        }
        let rows: Vec<CarRentalRow> = query.fetch().await?;
        Ok(rows.into_iter().map(CarRental::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<CarRental>> {
        let row: Option<CarRentalRow> = self
            .client
            .from(CAR_RENTALS)
            .select("*")
            .eq("id", id)
            .fetch_optional()
            .await?;
        Ok(row.map(CarRental::from))
    }

    async fn insert(&self, new_car_rental: NewCarRental) -> Result<CarRental> {
        let row: CarRentalRow = self
            .client
            .from(CAR_RENTALS)
            .insert(&new_car_rental)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, update: CarRentalUpdate) -> Result<CarRental> {
        let row: CarRentalRow = self
            .client
            .from(CAR_RENTALS)
            .eq("id", id)
            .update_returning(&update)
            .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .from(CAR_RENTALS)
            .eq("id", id)
            .delete()
            .await?;
        Ok(())
    }
}
