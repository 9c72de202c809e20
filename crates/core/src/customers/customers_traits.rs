use async_trait::async_trait;

use crate::errors::Result;

use super::customers_model::{Customer, CustomerUpdate, NewCustomer};

/// Trait for customer repository operations
#[async_trait]
pub trait CustomerRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>>;
    async fn get_by_id(&self, customer_id: i64) -> Result<Option<Customer>>;
    async fn insert(&self, new_customer: NewCustomer) -> Result<Customer>;
    async fn update(&self, customer_id: i64, patch: CustomerUpdate) -> Result<Customer>;
    async fn delete(&self, customer_id: i64) -> Result<()>;
}

/// Trait for customer service operations
#[async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>>;
    async fn get_customer(&self, customer_id: i64) -> Result<Customer>;
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer>;
    async fn update_customer(&self, customer_id: i64, patch: CustomerUpdate) -> Result<Customer>;
    async fn delete_customer(&self, customer_id: i64) -> Result<()>;
}
