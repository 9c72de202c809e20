//! Package repository and service traits.
//!
//! These traits define the contract for package operations without any
//! transport-specific types, allowing the remote gateway implementation to
//! be swapped out in tests.

use async_trait::async_trait;

use super::packages_model::{
    NewPackage, NewPackageDate, NewPackageDetails, Package, PackageAggregate, PackageCreate,
    PackageDate, PackageDetails, PackageDetailsPatch, PackagePatch, PackageRelations,
    PackageSaveOutcome, PackageTablePatch,
};
use crate::errors::Result;

/// Trait defining the contract for package persistence.
///
/// Each method maps to one targeted operation against one of the three
/// package relations; the reconciliation logic lives in the service, not
/// here.
#[async_trait]
pub trait PackageRepositoryTrait: Send + Sync {
    /// Lists all package rows.
    async fn list(&self) -> Result<Vec<Package>>;

    /// Retrieves a package row together with its details row and date
    /// windows, or `None` when the package does not exist.
    async fn get_with_relations(&self, package_id: i64) -> Result<Option<PackageRelations>>;

    /// Retrieves the details row for a package, if one exists.
    async fn get_details(&self, package_id: i64) -> Result<Option<PackageDetails>>;

    /// Lists the availability windows of a package.
    async fn list_dates(&self, package_id: i64) -> Result<Vec<PackageDate>>;

    /// Inserts a package row and returns it with its generated identifier.
    async fn insert(&self, new_package: NewPackage) -> Result<Package>;

    /// Applies a column patch to a package row.
    async fn update(&self, package_id: i64, patch: PackageTablePatch) -> Result<()>;

    /// Inserts a details row and returns it.
    async fn insert_details(&self, details: NewPackageDetails) -> Result<PackageDetails>;

    /// Upserts detail columns keyed on `package_id`.
    async fn upsert_details(&self, package_id: i64, patch: PackageDetailsPatch) -> Result<()>;

    /// Deletes the details row of a package, if present.
    async fn delete_details(&self, package_id: i64) -> Result<()>;

    /// Inserts availability windows for a package and returns the stored
    /// rows.
    async fn insert_dates(
        &self,
        package_id: i64,
        dates: Vec<NewPackageDate>,
    ) -> Result<Vec<PackageDate>>;

    /// Deletes all availability windows of a package.
    async fn delete_dates(&self, package_id: i64) -> Result<()>;

    /// Deletes a package row.
    async fn delete(&self, package_id: i64) -> Result<()>;
}

/// Trait defining the contract for package service operations.
///
/// The service owns the aggregate reconciliation: merging the three
/// relations on reads and diffing an edited aggregate back into targeted
/// writes.
#[async_trait]
pub trait PackageServiceTrait: Send + Sync {
    /// Fetches all packages as merged aggregates.
    async fn get_packages(&self) -> Result<Vec<PackageAggregate>>;

    /// Fetches one package as a merged aggregate.
    async fn get_package(&self, package_id: i64) -> Result<PackageAggregate>;

    /// Creates a package with its optional details and date windows.
    async fn create_package(&self, new_package: PackageCreate) -> Result<PackageSaveOutcome>;

    /// Applies a partial update across the three package relations.
    async fn update_package(
        &self,
        package_id: i64,
        patch: PackagePatch,
    ) -> Result<PackageSaveOutcome>;

    /// Deletes a package and its dependent rows.
    async fn delete_package(&self, package_id: i64) -> Result<()>;
}
