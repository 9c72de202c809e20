//! Packages module - domain models, services, and traits.
//!
//! The package aggregate is stored across three relations; this module owns
//! the reconciliation between that storage shape and the single denormalized
//! view the UI reads and edits.

mod packages_model;
mod packages_service;
mod packages_traits;

#[cfg(test)]
mod packages_model_tests;

// Re-export the public interface
pub use packages_model::{
    dates_equal_unordered, diff_details, diff_package, NewPackage, NewPackageDate,
    NewPackageDetails, Package, PackageAggregate, PackageCreate, PackageDate, PackageDetails,
    PackageDetailsPatch, PackageError, PackagePatch, PackageRelations, PackageSaveOutcome,
    PackageStatus, PackageTablePatch, SaveWarning, TourType, WriteStage,
};
pub use packages_service::PackageService;
pub use packages_traits::{PackageRepositoryTrait, PackageServiceTrait};
