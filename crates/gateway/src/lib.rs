//! Hosted backend gateway for TourDesk.
//!
//! This crate provides all remote-store functionality over the hosted
//! backend's HTTP surface. It implements the repository traits defined in
//! `tourdesk-core` and contains:
//! - The REST query client and its builder for the relational endpoints
//! - The auth client for session management
//! - The object storage client for listing imagery
//! - Repository implementations for all domain entities
//!
//! # Architecture
//!
//! This crate is the only place in the application where HTTP dependencies
//! exist. The `core` crate is transport-agnostic and works with traits.
//!
//! ```text
//!          core (domain services)
//!                  │
//!                  ▼
//!           gateway (this crate)
//!                  │
//!                  ▼
//!         hosted backend (REST / auth / storage)
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod relations;
pub mod serde_utils;
pub mod storage;

// Repository implementations
pub mod accommodations;
pub mod agents;
pub mod attractions;
pub mod bookings;
pub mod car_rentals;
pub mod customers;
pub mod lands;
pub mod packages;
pub mod reviews;

// Re-export client surface
pub use auth::{AuthClient, AuthUser, Session};
pub use client::{QueryBuilder, RestClient};
pub use config::GatewayConfig;
pub use errors::RestError;
pub use storage::{unique_object_path, StorageClient};

// Re-export from tourdesk-core for convenience
pub use tourdesk_core::errors::{Error, GatewayError, Result};
