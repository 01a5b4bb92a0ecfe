use crate::modules::providers::domain::{JobQuery, ScrapedJob};
use crate::shared::domain::value_objects::JobSource;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait JobProviderClient: Send + Sync {
    /// Get the job board this client talks to
    fn source(&self) -> JobSource;

    /// Whether the client is configured well enough to be queried.
    /// Clients missing credentials report false and are skipped.
    fn is_available(&self) -> bool;

    /// Run one search against the board. Implementations swallow their own
    /// upstream failures and return an empty list so one broken board
    /// never takes down a whole ingest cycle.
    async fn search_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>>;
}
