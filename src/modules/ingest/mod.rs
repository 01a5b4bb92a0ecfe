/// Ingest pipeline module
///
/// The top-level driver: expands preferences into a query plan, runs
/// the aggregator per query, dedups against the store, classifies the
/// survivors and persists them.
///
/// Architecture:
/// - query_builder: preference rows -> deduplicated query plan
/// - runner: one full batch cycle, infallible with logged short-circuits
/// - worker: scheduled loop around the runner
pub mod query_builder;
pub mod runner;
pub mod worker;

// Re-exports for easy access
pub use query_builder::build_queries;
pub use runner::{IngestConfig, IngestReport, IngestRunner};
pub use worker::IngestWorker;
