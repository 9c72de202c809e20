//! Hosted-store implementation for review summaries.

mod repository;

pub use repository::ReviewSummaryRepository;
