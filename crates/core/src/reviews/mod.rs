//! Reviews module - read-only rating aggregates and their merge onto
//! listings.

mod reviews_model;
mod reviews_service;
mod reviews_traits;


// Re-export the public interface
pub use reviews_model::{merge_ratings, Rated, RatedSource, ReviewSummary};
pub use reviews_service::ReviewSummaryService;
pub use reviews_traits::{ReviewSummaryRepositoryTrait, ReviewSummaryServiceTrait};
