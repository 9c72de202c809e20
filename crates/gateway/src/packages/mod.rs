//! Hosted-store implementation for packages.

mod model;
mod repository;

pub use model::{NewPackageDateRow, PackageDetailsRow, PackageRecord};
pub use repository::PackageRepository;
