//! Attractions module - domain models, services, and traits.

mod attractions_model;
mod attractions_service;
mod attractions_traits;

#[cfg(test)]
mod attractions_service_tests;

// Re-export the public interface
pub use attractions_model::{Attraction, AttractionUpdate, NewAttraction};
pub use attractions_service::AttractionService;
pub use attractions_traits::{AttractionRepositoryTrait, AttractionServiceTrait};
