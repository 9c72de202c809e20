//! Agents module - domain models, services, and traits.

pub mod agents_model;
pub mod agents_service;
pub mod agents_traits;

pub use agents_model::{Agent, AgentStatus, AgentUpdate, NewAgent};
pub use agents_service::AgentService;
pub use agents_traits::{AgentRepositoryTrait, AgentServiceTrait};
