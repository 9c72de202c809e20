use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, GatewayError, Result};

use super::agents_model::{Agent, AgentStatus, AgentUpdate, NewAgent};
use super::agents_traits::{AgentRepositoryTrait, AgentServiceTrait};

/// Service for agent management.
pub struct AgentService {
    repository: Arc<dyn AgentRepositoryTrait>,
}

impl AgentService {
    pub fn new(repository: Arc<dyn AgentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AgentServiceTrait for AgentService {
    async fn list_agents(&self, status: Option<AgentStatus>) -> Result<Vec<Agent>> {
        self.repository.list(status).await
    }

    async fn get_agent(&self, agent_id: i64) -> Result<Agent> {
        self.repository.get_by_id(agent_id).await?.ok_or_else(|| {
            Error::Gateway(GatewayError::NotFound(format!(
                "Agent {agent_id} not found"
            )))
        })
    }

    async fn create_agent(&self, new_agent: NewAgent) -> Result<Agent> {
        new_agent.validate()?;
        self.repository.insert(new_agent.normalized()).await
    }

    async fn update_agent(&self, agent_id: i64, patch: AgentUpdate) -> Result<Agent> {
        patch.validate()?;
        if patch.is_empty() {
            return self.get_agent(agent_id).await;
        }
        self.repository.update(agent_id, patch).await
    }

    async fn delete_agent(&self, agent_id: i64) -> Result<()> {
        self.repository.delete(agent_id).await
    }
}
