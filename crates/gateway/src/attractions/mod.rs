//! Hosted-store implementation for attractions.

mod model;
mod repository;

pub use model::AttractionRow;
pub use repository::AttractionRepository;
