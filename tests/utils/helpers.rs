/// Test helper functions and pipeline builders
use super::fakes::InMemoryListingRepository;
use jobsift::modules::classification::WorkTypeClassifier;
use jobsift::modules::dedup::FingerprintGenerator;
use jobsift::modules::ingest::{IngestConfig, IngestRunner};
use jobsift::modules::preferences::SearchPreference;
use jobsift::modules::providers::{AggregatorConfig, JobAggregator, JobProviderClient};
use std::sync::Arc;
use std::time::Duration;

pub struct TestPipeline {
    pub runner: IngestRunner,
    pub listings: Arc<InMemoryListingRepository>,
}

/// Wire a runner to in-memory collaborators. Delays are zeroed so a
/// whole cycle finishes in microseconds.
pub fn build_pipeline(
    preferences: Vec<SearchPreference>,
    clients: Vec<Arc<dyn JobProviderClient>>,
) -> TestPipeline {
    build_pipeline_with_listings(preferences, clients, Arc::new(InMemoryListingRepository::new()))
}

pub fn build_pipeline_with_listings(
    preferences: Vec<SearchPreference>,
    clients: Vec<Arc<dyn JobProviderClient>>,
    listings: Arc<InMemoryListingRepository>,
) -> TestPipeline {
    let aggregator = Arc::new(JobAggregator::new(
        clients,
        AggregatorConfig {
            inter_call_delay: Duration::ZERO,
            ..AggregatorConfig::default()
        },
    ));

    let runner = IngestRunner::new(
        Arc::new(super::fakes::StaticPreferenceRepository::with_rows(
            preferences,
        )),
        Arc::clone(&listings) as Arc<dyn jobsift::modules::listings::JobListingRepository>,
        aggregator,
        Arc::new(FingerprintGenerator::new()),
        Arc::new(WorkTypeClassifier::new()),
        IngestConfig {
            inter_query_delay: Duration::ZERO,
        },
    );

    TestPipeline { runner, listings }
}

/// Fingerprint helper matching the pipeline's generator
pub fn fingerprint_of(title: &str, company: &str, location: &str) -> String {
    FingerprintGenerator::new().fingerprint(title, company, location)
}
