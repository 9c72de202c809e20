//! Hosted-store implementation for land arrangements.

mod model;
mod repository;

pub use model::LandRow;
pub use repository::LandRepository;
