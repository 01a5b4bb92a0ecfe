/// Repository trait for search preference access
///
/// Preferences are read-only input to the pipeline; rows are owned and
/// edited elsewhere.
use crate::modules::preferences::domain::entities::SearchPreference;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait SearchPreferenceRepository: Send + Sync {
    /// Load every stored preference row
    async fn load_all(&self) -> AppResult<Vec<SearchPreference>>;
}
