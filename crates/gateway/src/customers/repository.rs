use std::sync::Arc;

use async_trait::async_trait;

use tourdesk_core::customers::{Customer, CustomerRepositoryTrait, CustomerUpdate, NewCustomer};
use tourdesk_core::errors::Result;

use crate::client::RestClient;
use crate::relations::CUSTOMERS;

/// Repository for the `customers` relation on the hosted store.
pub struct CustomerRepository {
    client: Arc<RestClient>,
}

impl CustomerRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>> {
        let rows = self
            .client
            .from(CUSTOMERS)
            .select("*")
            .order_asc("full_name")
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, customer_id: i64) -> Result<Option<Customer>> {
        let row = self
            .client
            .from(CUSTOMERS)
            .select("*")
            .eq("customer_id", customer_id)
            .fetch_optional()
            .await?;
        Ok(row)
    }

    async fn insert(&self, new_customer: NewCustomer) -> Result<Customer> {
        let row = self.client.from(CUSTOMERS).insert(&new_customer).await?;
        Ok(row)
    }

    async fn update(&self, customer_id: i64, patch: CustomerUpdate) -> Result<Customer> {
        let row = self
            .client
            .from(CUSTOMERS)
            .eq("customer_id", customer_id)
            .update_returning(&patch)
            .await?;
        Ok(row)
    }

    async fn delete(&self, customer_id: i64) -> Result<()> {
        self.client
            .from(CUSTOMERS)
            .eq("customer_id", customer_id)
            .delete()
            .await?;
        Ok(())
    }
}
