//! Hosted-store implementation for customers.

mod repository;

pub use repository::CustomerRepository;
