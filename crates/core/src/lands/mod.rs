//! Lands module - land arrangement listings and their rating merge.

mod lands_model;
mod lands_service;
mod lands_traits;

// Re-export the public interface
pub use lands_model::{Land, LandUpdate, NewLand};
pub use lands_service::LandService;
pub use lands_traits::{LandRepositoryTrait, LandServiceTrait};
