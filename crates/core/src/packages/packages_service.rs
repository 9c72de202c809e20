use futures::future::join_all;
use log::{error, warn};
use std::sync::Arc;

use super::packages_model::{
    dates_equal_unordered, diff_details, diff_package, Package, PackageAggregate, PackageCreate,
    PackageError, PackagePatch, PackageSaveOutcome, SaveWarning, WriteStage,
};
use super::packages_traits::{PackageRepositoryTrait, PackageServiceTrait};
use crate::errors::Result;

/// Service reconciling the three package relations with the single
/// aggregate view the UI works with.
pub struct PackageService {
    repository: Arc<dyn PackageRepositoryTrait>,
}

impl PackageService {
    /// Creates a new PackageService instance
    pub fn new(repository: Arc<dyn PackageRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Loads the dependent relations for one package row, degrading to
    /// empty values when a nested read fails so one bad package does not
    /// abort the whole batch.
    async fn load_aggregate(&self, package: Package) -> PackageAggregate {
        let package_id = package.package_id;

        let details = match self.repository.get_details(package_id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(
                    "Failed to load details for package {}: {}. Showing the package without them.",
                    package_id, e
                );
                None
            }
        };

        let dates = match self.repository.list_dates(package_id).await {
            Ok(dates) => dates,
            Err(e) => {
                warn!(
                    "Failed to load date windows for package {}: {}. Showing the package without them.",
                    package_id, e
                );
                Vec::new()
            }
        };

        PackageAggregate::assemble(package, details, dates)
    }
}

#[async_trait::async_trait]
impl PackageServiceTrait for PackageService {
    /// Fetches all packages as merged aggregates.
    ///
    /// A failure loading the package rows aborts; failures on the nested
    /// relations degrade per package.
    async fn get_packages(&self) -> Result<Vec<PackageAggregate>> {
        let rows = self.repository.list().await?;
        let aggregates = join_all(
            rows.into_iter()
                .map(|package| self.load_aggregate(package)),
        )
        .await;
        Ok(aggregates)
    }

    /// Fetches one package as a merged aggregate.
    async fn get_package(&self, package_id: i64) -> Result<PackageAggregate> {
        let relations = self
            .repository
            .get_with_relations(package_id)
            .await?
            .ok_or(PackageError::NotFound(package_id))?;
        Ok(PackageAggregate::assemble(
            relations.package,
            relations.details,
            relations.dates,
        ))
    }

    /// Creates a package, then its details and date windows.
    ///
    /// The package row is written first to obtain the generated identifier.
    /// Dependent writes are best-effort: a failure there keeps the already
    /// created package and is reported back as a warning instead of rolling
    /// anything back.
    async fn create_package(&self, new_package: PackageCreate) -> Result<PackageSaveOutcome> {
        new_package.validate()?;
        let new_package = new_package.normalized();

        let package = self
            .repository
            .insert(new_package.package_row())
            .await
            .map_err(|e| PackageError::write(WriteStage::Package, e))?;
        let package_id = package.package_id;

        let mut warnings = Vec::new();

        let details = if new_package.has_detail_content() {
            match self
                .repository
                .insert_details(new_package.details_row(package_id))
                .await
            {
                Ok(details) => Some(details),
                Err(e) => {
                    error!(
                        "Package {} was created but writing its details failed: {}",
                        package_id, e
                    );
                    warnings.push(SaveWarning {
                        stage: WriteStage::Details,
                        message: e.to_string(),
                    });
                    None
                }
            }
        } else {
            None
        };

        let dates = if new_package.available_dates.is_empty() {
            Vec::new()
        } else {
            match self
                .repository
                .insert_dates(package_id, new_package.available_dates.clone())
                .await
            {
                Ok(dates) => dates,
                Err(e) => {
                    error!(
                        "Package {} was created but writing its date windows failed: {}",
                        package_id, e
                    );
                    warnings.push(SaveWarning {
                        stage: WriteStage::Dates,
                        message: e.to_string(),
                    });
                    Vec::new()
                }
            }
        };

        Ok(PackageSaveOutcome {
            aggregate: PackageAggregate::assemble(package, details, dates),
            warnings,
        })
    }

    /// Applies a partial update by diffing the proposal against the stored
    /// state and writing only the relations that changed.
    ///
    /// Any write failure aborts and carries the stage it happened in. Writes
    /// already applied before the failure stay applied; there is no
    /// transaction spanning the three relations.
    async fn update_package(
        &self,
        package_id: i64,
        patch: PackagePatch,
    ) -> Result<PackageSaveOutcome> {
        patch.validate()?;
        let patch = patch.normalized();

        let current = self
            .repository
            .get_with_relations(package_id)
            .await?
            .ok_or(PackageError::NotFound(package_id))?;

        let table_patch = diff_package(&current.package, &patch);
        if !table_patch.is_empty() {
            self.repository
                .update(package_id, table_patch)
                .await
                .map_err(|e| PackageError::write(WriteStage::Package, e))?;
        }

        if let Some(details_patch) = diff_details(current.details.as_ref(), &patch) {
            self.repository
                .upsert_details(package_id, details_patch)
                .await
                .map_err(|e| PackageError::write(WriteStage::Details, e))?;
        }

        if let Some(proposed) = &patch.available_dates {
            if !dates_equal_unordered(&current.dates, proposed) {
                self.repository
                    .delete_dates(package_id)
                    .await
                    .map_err(|e| PackageError::write(WriteStage::Dates, e))?;
                if !proposed.is_empty() {
                    self.repository
                        .insert_dates(package_id, proposed.clone())
                        .await
                        .map_err(|e| PackageError::write(WriteStage::Dates, e))?;
                }
            }
        }

        let aggregate = self
            .get_package(package_id)
            .await
            .map_err(|e| PackageError::write(WriteStage::Refetch, e))?;

        Ok(PackageSaveOutcome {
            aggregate,
            warnings: Vec::new(),
        })
    }

    /// Deletes a package and its dependent rows.
    ///
    /// Dependents go first to satisfy referential integrity. The deletes run
    /// sequentially without a transaction.
    async fn delete_package(&self, package_id: i64) -> Result<()> {
        self.repository.delete_details(package_id).await?;
        self.repository.delete_dates(package_id).await?;
        self.repository.delete(package_id).await?;
        Ok(())
    }
}
