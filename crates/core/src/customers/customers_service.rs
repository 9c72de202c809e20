use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, GatewayError, Result};

use super::customers_model::{Customer, CustomerUpdate, NewCustomer};
use super::customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};

/// Service for customer management.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepositoryTrait>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.repository.list().await
    }

    async fn get_customer(&self, customer_id: i64) -> Result<Customer> {
        self.repository
            .get_by_id(customer_id)
            .await?
            .ok_or_else(|| {
                Error::Gateway(GatewayError::NotFound(format!(
                    "Customer {customer_id} not found"
                )))
            })
    }

    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
        new_customer.validate()?;
        self.repository.insert(new_customer.normalized()).await
    }

    async fn update_customer(&self, customer_id: i64, patch: CustomerUpdate) -> Result<Customer> {
        patch.validate()?;
        if patch.is_empty() {
            return self.get_customer(customer_id).await;
        }
        self.repository.update(customer_id, patch.normalized()).await
    }

    async fn delete_customer(&self, customer_id: i64) -> Result<()> {
        self.repository.delete(customer_id).await
    }
}
