/// Repository trait for job listing persistence
///
/// Implementation uses Diesel ORM with PostgreSQL.
use crate::modules::listings::domain::entities::{JobListing, NewJobListing};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait JobListingRepository: Send + Sync {
    /// Return the subset of `hashes` that already exist in storage
    async fn find_existing_hashes(&self, hashes: &[String]) -> AppResult<HashSet<String>>;

    /// Insert a batch of listings; rows colliding on dedup_hash are refreshed
    /// in place instead of duplicated. Returns the stored rows.
    async fn upsert_batch(&self, listings: Vec<NewJobListing>) -> AppResult<Vec<JobListing>>;
}
