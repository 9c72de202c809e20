use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::accommodations::{
    Accommodation, AccommodationRepositoryTrait, AccommodationUpdate, NewAccommodation,
};
use tourdesk_core::errors::Result;
use tourdesk_core::listings::ListingStatus;

use crate::client::RestClient;
use crate::relations::ACCOMMODATIONS;
use crate::serde_utils::enum_param;

use super::model::AccommodationRow;

/// Repository for the `accommodations` relation on the hosted store.
pub struct AccommodationRepository {
    client: Arc<RestClient>,
}

impl AccommodationRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccommodationRepositoryTrait for AccommodationRepository {
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Accommodation>> {
        let mut query = self
            .client
            .from(ACCOMMODATIONS)
            .select("*")
            .order_asc("name");
        if let Some(status) = status_filter {
            query = query.eq("status", enum_param(&status)?);
        }
        let rows: Vec<AccommodationRow> = query.fetch().await?;
        Ok(rows.into_iter().map(Accommodation::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Accommodation>> {
        let row: Option<AccommodationRow> = self
            .client
            .from(ACCOMMODATIONS)
            .select("*")
            .eq("id", id)
            .fetch_optional()
            .await?;
        Ok(row.map(Accommodation::from))
    }

    async fn insert(&self, new_accommodation: NewAccommodation) -> Result<Accommodation> {
        let row: AccommodationRow = self
            .client
            .from(ACCOMMODATIONS)
            .insert(&new_accommodation)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, update: AccommodationUpdate) -> Result<Accommodation> {
        let row: AccommodationRow = self
            .client
            .from(ACCOMMODATIONS)
            .eq("id", id)
            .update_returning(&update)
            .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .from(ACCOMMODATIONS)
            .eq("id", id)
            .delete()
            .await?;
        Ok(())
    }
}
