use async_trait::async_trait;

use crate::errors::Result;

use super::agents_model::{Agent, AgentStatus, AgentUpdate, NewAgent};

/// Trait for agent repository operations
#[async_trait]
pub trait AgentRepositoryTrait: Send + Sync {
    async fn list(&self, status: Option<AgentStatus>) -> Result<Vec<Agent>>;
    async fn get_by_id(&self, agent_id: i64) -> Result<Option<Agent>>;
    async fn insert(&self, new_agent: NewAgent) -> Result<Agent>;
    async fn update(&self, agent_id: i64, patch: AgentUpdate) -> Result<Agent>;
    async fn delete(&self, agent_id: i64) -> Result<()>;
}

/// Trait for agent service operations
#[async_trait]
pub trait AgentServiceTrait: Send + Sync {
    async fn list_agents(&self, status: Option<AgentStatus>) -> Result<Vec<Agent>>;
    async fn get_agent(&self, agent_id: i64) -> Result<Agent>;
    async fn create_agent(&self, new_agent: NewAgent) -> Result<Agent>;
    async fn update_agent(&self, agent_id: i64, patch: AgentUpdate) -> Result<Agent>;
    async fn delete_agent(&self, agent_id: i64) -> Result<()>;
}
