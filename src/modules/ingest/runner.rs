/// Batch ingest cycle
///
/// One cycle walks the whole pipeline: preferences -> query plan ->
/// aggregated provider results -> dedup against the store -> work-type
/// classification -> bulk upsert. A cycle never fails; every stage that
/// can go wrong logs the problem and short-circuits into a report of
/// what was achieved, so the scheduler simply sees "zero new jobs" and
/// the next run becomes the retry.
use crate::modules::classification::classifier::{WorkTypeClassifier, WorkTypeMatch};
use crate::modules::dedup::{filter_new_jobs, FingerprintGenerator};
use crate::modules::ingest::query_builder::build_queries;
use crate::modules::listings::domain::entities::NewJobListing;
use crate::modules::listings::domain::repository::JobListingRepository;
use crate::modules::preferences::domain::repository::SearchPreferenceRepository;
use crate::modules::providers::application::JobAggregator;
use crate::modules::providers::domain::{JobQuery, ScrapedJob};
use crate::shared::domain::value_objects::RemoteType;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::rate_limiter::RateLimiter;
use crate::{log_debug, log_info};
use serde_json::Value as JsonValue;
use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Tunables for one ingest cycle
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Pause between successive queries of the plan
    pub inter_query_delay: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            inter_query_delay: Duration::from_secs(1),
        }
    }
}

impl IngestConfig {
    /// Read overrides from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let inter_query_delay = env::var("INGEST_QUERY_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.inter_query_delay);

        Self { inter_query_delay }
    }
}

/// What one cycle achieved, stage by stage
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub preferences: usize,
    pub queries: usize,
    pub raw_results: usize,
    pub new_listings: usize,
    pub inserted_ids: Vec<Uuid>,
    pub elapsed: Duration,
}

pub struct IngestRunner {
    preferences: Arc<dyn SearchPreferenceRepository>,
    listings: Arc<dyn JobListingRepository>,
    aggregator: Arc<JobAggregator>,
    fingerprints: Arc<FingerprintGenerator>,
    classifier: Arc<WorkTypeClassifier>,
    pacer: RateLimiter,
    config: IngestConfig,
}

impl IngestRunner {
    pub fn new(
        preferences: Arc<dyn SearchPreferenceRepository>,
        listings: Arc<dyn JobListingRepository>,
        aggregator: Arc<JobAggregator>,
        fingerprints: Arc<FingerprintGenerator>,
        classifier: Arc<WorkTypeClassifier>,
        config: IngestConfig,
    ) -> Self {
        let pacer = RateLimiter::with_min_interval(config.inter_query_delay);
        Self {
            preferences,
            listings,
            aggregator,
            fingerprints,
            classifier,
            pacer,
            config,
        }
    }

    /// Run one full ingest cycle and report what happened.
    pub async fn run_cycle(&self) -> IngestReport {
        let cycle_start = Instant::now();
        let mut report = IngestReport::default();

        log_info!("Starting ingest cycle");

        let preferences = match self.preferences.load_all().await {
            Ok(preferences) => preferences,
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to load search preferences");
                report.elapsed = cycle_start.elapsed();
                return report;
            }
        };
        report.preferences = preferences.len();

        if preferences.is_empty() {
            log_info!("No search preferences stored; nothing to ingest");
            report.elapsed = cycle_start.elapsed();
            return report;
        }

        let queries = build_queries(&preferences);
        report.queries = queries.len();
        log_info!(
            "Built {} quer{} from {} preference(s)",
            queries.len(),
            if queries.len() == 1 { "y" } else { "ies" },
            preferences.len()
        );

        let raw_results = self.collect_all(&queries).await;
        report.raw_results = raw_results.len();

        if raw_results.is_empty() {
            log_info!("Providers returned no results for this cycle");
            report.elapsed = cycle_start.elapsed();
            return report;
        }

        let hashes: Vec<String> = raw_results
            .iter()
            .map(|job| self.fingerprints.fingerprint_job(job))
            .collect();

        let existing = match self.listings.find_existing_hashes(&hashes).await {
            Ok(existing) => existing,
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to look up stored fingerprints");
                report.elapsed = cycle_start.elapsed();
                return report;
            }
        };
        log_debug!(
            "{} of {} fingerprints already stored",
            existing.len(),
            hashes.len()
        );

        let fresh = filter_new_jobs(raw_results, &self.fingerprints, &existing);
        report.new_listings = fresh.len();

        if fresh.is_empty() {
            log_info!("No new listings after deduplication");
            report.elapsed = cycle_start.elapsed();
            return report;
        }

        let rows: Vec<NewJobListing> = fresh
            .into_iter()
            .map(|(job, hash)| to_new_listing(&self.classifier, job, hash))
            .collect();

        match self.listings.upsert_batch(rows).await {
            Ok(saved) => {
                report.inserted_ids = saved.into_iter().map(|listing| listing.id).collect();
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to persist new listings");
                report.elapsed = cycle_start.elapsed();
                return report;
            }
        }

        report.elapsed = cycle_start.elapsed();
        LogContext::performance_metric(
            "ingest_cycle",
            report.elapsed.as_millis() as u64,
            Some(&format!(
                "{} raw, {} new, {} inserted",
                report.raw_results,
                report.new_listings,
                report.inserted_ids.len()
            )),
        );

        report
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Run every query of the plan through the aggregator, pacing the
    /// calls so providers see at most one query burst per delay window.
    async fn collect_all(&self, queries: &[JobQuery]) -> Vec<ScrapedJob> {
        let timer = TimedOperation::new("collect_provider_results");
        let mut collected = Vec::new();

        for (index, query) in queries.iter().enumerate() {
            self.pacer.wait().await;

            LogContext::ingest_progress(index + 1, queries.len(), &query.describe());
            let results = self.aggregator.collect(query).await;

            log_debug!(
                "Query '{}' produced {} result(s)",
                query.describe(),
                results.len()
            );
            collected.extend(results);
        }

        timer.finish_with_info(&format!(
            "{} result(s) from {} quer{}",
            collected.len(),
            queries.len(),
            if queries.len() == 1 { "y" } else { "ies" }
        ));
        collected
    }
}

/// Map one deduplicated result into its storable row, attaching the
/// classifier's verdict and audit trail.
fn to_new_listing(
    classifier: &WorkTypeClassifier,
    job: ScrapedJob,
    hash: String,
) -> NewJobListing {
    let classification = classifier.classify(&job);

    if classification.work_type == RemoteType::Undetermined {
        log_debug!("Could not determine work type for '{}'", job.title);
    }

    NewJobListing {
        id: Uuid::new_v4(),
        title: job.title,
        company: job.company_name.unwrap_or_default(),
        location: job.location.unwrap_or_default(),
        remote_type: classification.work_type,
        description: job.description,
        salary_min: job.salary_min,
        salary_max: job.salary_max,
        salary_currency: job.salary_currency,
        source: job.source,
        source_id: job.source_id,
        source_url: job.url,
        dedup_hash: hash,
        company_logo_url: job.company_logo_url,
        skills: job.skills,
        experience_level: job.experience_level,
        employment_type: job.employment_type,
        posted_at: job.posted_at,
        expires_at: job.expires_at,
        source_metadata: Some(merge_metadata(job.metadata, &classification)),
    }
}

/// Provider extras and the classification trail share the stored
/// metadata object; a non-object provider payload is kept under its own
/// key rather than discarded.
fn merge_metadata(provider_metadata: JsonValue, classification: &WorkTypeMatch) -> JsonValue {
    let classification_trail = serde_json::json!({
        "matched_keyword": classification.matched_keyword,
        "confidence": classification.confidence,
    });

    match provider_metadata {
        JsonValue::Object(mut fields) => {
            fields.insert("classification".to_string(), classification_trail);
            JsonValue::Object(fields)
        }
        JsonValue::Null => serde_json::json!({ "classification": classification_trail }),
        other => serde_json::json!({
            "provider": other,
            "classification": classification_trail,
        }),
    }
}
