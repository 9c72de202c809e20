use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::errors::Result;
use tourdesk_core::packages::{
    NewPackage, NewPackageDate, NewPackageDetails, Package, PackageDate, PackageDetails,
    PackageDetailsPatch, PackageRelations, PackageRepositoryTrait, PackageTablePatch,
};

use crate::client::RestClient;
use crate::relations::{PACKAGES, PACKAGE_DATES, PACKAGE_DETAILS};

use super::model::{NewPackageDateRow, PackageDetailsRow, PackageRecord};

/// Select list pulling a package row with both dependent relations embedded.
const PACKAGE_TREE: &str = "*,package_details(*),package_dates(*)";

/// Repository for the three package relations on the hosted store.
pub struct PackageRepository {
    client: Arc<RestClient>,
}

impl PackageRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PackageRepositoryTrait for PackageRepository {
    async fn list(&self) -> Result<Vec<Package>> {
        let rows = self
            .client
            .from(PACKAGES)
            .select("*")
            .order_desc("created_at")
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn get_with_relations(&self, package_id: i64) -> Result<Option<PackageRelations>> {
        let record: Option<PackageRecord> = self
            .client
            .from(PACKAGES)
            .select(PACKAGE_TREE)
            .eq("package_id", package_id)
            .fetch_optional()
            .await?;
        Ok(record.map(PackageRelations::from))
    }

    async fn get_details(&self, package_id: i64) -> Result<Option<PackageDetails>> {
        let row: Option<PackageDetailsRow> = self
            .client
            .from(PACKAGE_DETAILS)
            .select("*")
            .eq("package_id", package_id)
            .fetch_optional()
            .await?;
        Ok(row.map(PackageDetails::from))
    }

    async fn list_dates(&self, package_id: i64) -> Result<Vec<PackageDate>> {
        let rows = self
            .client
            .from(PACKAGE_DATES)
            .select("*")
            .eq("package_id", package_id)
            .order_asc("start_date")
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn insert(&self, new_package: NewPackage) -> Result<Package> {
        let row = self.client.from(PACKAGES).insert(&new_package).await?;
        Ok(row)
    }

    async fn update(&self, package_id: i64, patch: PackageTablePatch) -> Result<()> {
        self.client
            .from(PACKAGES)
            .eq("package_id", package_id)
            .update(&patch)
            .await?;
        Ok(())
    }

    async fn insert_details(&self, details: NewPackageDetails) -> Result<PackageDetails> {
        let row: PackageDetailsRow = self
            .client
            .from(PACKAGE_DETAILS)
            .insert(&details)
            .await?;
        Ok(row.into())
    }

    async fn upsert_details(&self, package_id: i64, patch: PackageDetailsPatch) -> Result<()> {
        let mut body = serde_json::to_value(&patch)?;
        if let Some(object) = body.as_object_mut() {
            object.insert("package_id".to_string(), serde_json::json!(package_id));
        }
        self.client
            .from(PACKAGE_DETAILS)
            .upsert(&body, "package_id")
            .await?;
        Ok(())
    }

    async fn delete_details(&self, package_id: i64) -> Result<()> {
        self.client
            .from(PACKAGE_DETAILS)
            .eq("package_id", package_id)
            .delete()
            .await?;
        Ok(())
    }

    async fn insert_dates(
        &self,
        package_id: i64,
        dates: Vec<NewPackageDate>,
    ) -> Result<Vec<PackageDate>> {
        if dates.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<NewPackageDateRow> = dates
            .into_iter()
            .map(|window| NewPackageDateRow { package_id, window })
            .collect();
        let stored = self
            .client
            .from(PACKAGE_DATES)
            .insert_all(&rows)
            .await?;
        Ok(stored)
    }

    async fn delete_dates(&self, package_id: i64) -> Result<()> {
        self.client
            .from(PACKAGE_DATES)
            .eq("package_id", package_id)
            .delete()
            .await?;
        Ok(())
    }

    async fn delete(&self, package_id: i64) -> Result<()> {
        self.client
            .from(PACKAGES)
            .eq("package_id", package_id)
            .delete()
            .await?;
        Ok(())
    }
}
