/// Search preference module
///
/// Read-only access to the stored role/location wishes that drive the
/// ingest query plan.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{entities::SearchPreference, repository::SearchPreferenceRepository};
pub use infrastructure::SearchPreferenceRepositoryImpl;
