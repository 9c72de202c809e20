use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::attractions::{
    Attraction, AttractionRepositoryTrait, AttractionUpdate, NewAttraction,
};
use tourdesk_core::errors::Result;
use tourdesk_core::listings::ListingStatus;

use crate::client::RestClient;
use crate::relations::ATTRACTIONS;
use crate::serde_utils::enum_param;

use super::model::AttractionRow;

/// Repository for the `attractions` relation on the hosted store.
pub struct AttractionRepository {
    client: Arc<RestClient>,
}

impl AttractionRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AttractionRepositoryTrait for AttractionRepository {
    async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Attraction>> {
        let mut query = self.client.from(ATTRACTIONS).select("*").order_asc("name");
        if let Some(status) = status_filter {
            query = query.eq("status", enum_param(&status)?);
        }
        let rows: Vec<AttractionRow> = query.fetch().await?;
        Ok(rows.into_iter().map(Attraction::from).collect())
    }

    async fn get_by_code(&self, attraction_code: &str) -> Result<Option<Attraction>> {
        let row: Option<AttractionRow> = self
            .client
            .from(ATTRACTIONS)
            .select("*")
            .eq("attraction_code", attraction_code)
            .fetch_optional()
            .await?;
        Ok(row.map(Attraction::from))
    }

    async fn list_active_by_codes(&self, codes: &[String]) -> Result<Vec<Attraction>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<AttractionRow> = self
            .client
            .from(ATTRACTIONS)
            .select("*")
            .eq("status", enum_param(&ListingStatus::Active)?)
            .in_list("attraction_code", codes)
            .fetch()
            .await?;
        Ok(rows.into_iter().map(Attraction::from).collect())
    }

    async fn insert(&self, new_attraction: NewAttraction) -> Result<Attraction> {
        let row: AttractionRow = self
            .client
            .from(ATTRACTIONS)
            .insert(&new_attraction)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, attraction_code: &str, update: AttractionUpdate) -> Result<Attraction> {
        let row: AttractionRow = self
            .client
            .from(ATTRACTIONS)
            .eq("attraction_code", attraction_code)
            .update_returning(&update)
            .await?;
        Ok(row.into())
    }

    async fn delete(&self, attraction_code: &str) -> Result<()> {
        self.client
            .from(ATTRACTIONS)
            .eq("attraction_code", attraction_code)
            .delete()
            .await?;
        Ok(())
    }
}
