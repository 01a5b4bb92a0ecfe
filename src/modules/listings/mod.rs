/// Job listing storage module
///
/// Holds the canonical `job_listings` rows produced by the ingest
/// pipeline after dedup and classification.
///
/// Architecture:
/// - Domain: Entities and repository trait
/// - Infrastructure: Diesel-based repository implementation
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{
    entities::{JobListing, NewJobListing},
    repository::JobListingRepository,
};
pub use infrastructure::JobListingRepositoryImpl;
