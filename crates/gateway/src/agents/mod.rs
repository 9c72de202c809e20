//! Hosted-store implementation for agents.

mod repository;

pub use repository::AgentRepository;
