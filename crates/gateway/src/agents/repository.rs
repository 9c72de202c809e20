use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::agents::{Agent, AgentRepositoryTrait, AgentStatus, AgentUpdate, NewAgent};
use tourdesk_core::errors::Result;

use crate::client::RestClient;
use crate::relations::AGENTS;
use crate::serde_utils::enum_param;

/// Repository for the `agents` relation on the hosted store.
pub struct AgentRepository {
    client: Arc<RestClient>,
}

impl AgentRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentRepositoryTrait for AgentRepository {
    async fn list(&self, status: Option<AgentStatus>) -> Result<Vec<Agent>> {
        let mut query = self.client.from(AGENTS).select("*").order_asc("full_name");
        if let Some(status) = status {
            query = query.eq("status", enum_param(&status)?);
        }
        let rows = query.fetch().await?;
        Ok(rows)
    }

    async fn get_by_id(&self, agent_id: i64) -> Result<Option<Agent>> {
        let row = self
            .client
            .from(AGENTS)
            .select("*")
            .eq("agent_id", agent_id)
            .fetch_optional()
            .await?;
        Ok(row)
    }

    async fn insert(&self, new_agent: NewAgent) -> Result<Agent> {
        let row = self.client.from(AGENTS).insert(&new_agent).await?;
        Ok(row)
    }

    async fn update(&self, agent_id: i64, patch: AgentUpdate) -> Result<Agent> {
        let row = self
            .client
            .from(AGENTS)
            .eq("agent_id", agent_id)
            .update_returning(&patch)
            .await?;
        Ok(row)
    }

    async fn delete(&self, agent_id: i64) -> Result<()> {
        self.client
            .from(AGENTS)
            .eq("agent_id", agent_id)
            .delete()
            .await?;
        Ok(())
    }
}
