use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::errors::Result;
use tourdesk_core::lands::{Land, LandRepositoryTrait, LandUpdate, NewLand};
use tourdesk_core::listings::ListingStatus;

use crate::client::RestClient;
use crate::relations::LANDS;
use crate::serde_utils::enum_param;

use super::model::LandRow;

/// Repository for the `lands` relation on the hosted store.
pub struct LandRepository {
    client: Arc<RestClient>,
}

impl LandRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LandRepositoryTrait for LandRepository {
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Land>> {
        let mut query = self.client.from(LANDS).select("*").order_asc("name");
        if let Some(status) = status_filter {
            query = query.eq("status", enum_param(&status)?);
        }
        let rows: Vec<LandRow> = query.fetch().await?;
        Ok(rows.into_iter().map(Land::from).collect())
    }

    async fn get_by_id(&self, land_id: &str) -> Result<Option<Land>> {
        let row: Option<LandRow> = self
            .client
            .from(LANDS)
            .select("*")
            .eq("land_id", land_id)
            .fetch_optional()
            .await?;
        Ok(row.map(Land::from))
    }

    async fn list_active_by_ids(&self, land_ids: &[String]) -> Result<Vec<Land>> {
        if land_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<LandRow> = self
            .client
            .from(LANDS)
            .select("*")
            .eq("status", enum_param(&ListingStatus::Active)?)
            .in_list("land_id", land_ids)
            .fetch()
            .await?;
        Ok(rows.into_iter().map(Land::from).collect())
    }

    async fn insert(&self, new_land: NewLand) -> Result<Land> {
        let row: LandRow = self.client.from(LANDS).insert(&new_land).await?;
        Ok(row.into())
    }

    async fn update(&self, land_id: &str, update: LandUpdate) -> Result<Land> {
        let row: LandRow = self
            .client
            .from(LANDS)
            .eq("land_id", land_id)
            .update_returning(&update)
            .await?;
        Ok(row.into())
    }

    async fn delete(&self, land_id: &str) -> Result<()> {
        self.client
            .from(LANDS)
            .eq("land_id", land_id)
            .delete()
            .await?;
        Ok(())
    }
}
