//! Fans a single query out to every configured job board.

use crate::modules::providers::domain::{JobQuery, ScrapedJob};
use crate::modules::providers::traits::JobProviderClient;
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::RateLimiter;
use crate::{log_debug, log_info, log_warn};
use std::env;
use std::sync::Arc;
use std::time::Duration;

/// Tunables for one collection pass
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Pause enforced between consecutive provider calls
    pub inter_call_delay: Duration,
    /// Once this many results are in hand, the lowest-priority provider
    /// is not called at all
    pub early_exit_threshold: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            inter_call_delay: Duration::from_millis(500),
            early_exit_threshold: 100,
        }
    }
}

impl AggregatorConfig {
    /// Read AGGREGATOR_CALL_DELAY_MS and AGGREGATOR_EARLY_EXIT_THRESHOLD,
    /// keeping the defaults for anything absent or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let inter_call_delay = env::var("AGGREGATOR_CALL_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.inter_call_delay);

        let early_exit_threshold = env::var("AGGREGATOR_EARLY_EXIT_THRESHOLD")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .unwrap_or(defaults.early_exit_threshold);

        Self {
            inter_call_delay,
            early_exit_threshold,
        }
    }
}

/// Queries the configured providers in priority order and concatenates
/// their results. Providers are isolated from each other, so one broken
/// board only costs its own results.
pub struct JobAggregator {
    clients: Vec<Arc<dyn JobProviderClient>>,
    pacer: RateLimiter,
    config: AggregatorConfig,
}

impl JobAggregator {
    /// `clients` are queried in the given order; the last one is treated
    /// as lowest priority and skipped once enough results are in hand.
    pub fn new(clients: Vec<Arc<dyn JobProviderClient>>, config: AggregatorConfig) -> Self {
        Self {
            pacer: RateLimiter::with_min_interval(config.inter_call_delay),
            clients,
            config,
        }
    }

    pub async fn collect(&self, query: &JobQuery) -> Vec<ScrapedJob> {
        if !self.clients.iter().any(|client| client.is_available()) {
            log_warn!("No job providers are configured, nothing to collect");
            return Vec::new();
        }

        let mut results: Vec<ScrapedJob> = Vec::new();
        let last_index = self.clients.len() - 1;

        for (index, client) in self.clients.iter().enumerate() {
            if !client.is_available() {
                log_debug!("Provider {} is not configured, skipping", client.source());
                continue;
            }

            if index == last_index
                && index > 0
                && results.len() >= self.config.early_exit_threshold
            {
                log_info!(
                    "Skipping {} with {} results already collected (threshold {})",
                    client.source(),
                    results.len(),
                    self.config.early_exit_threshold
                );
                continue;
            }

            // The pacer spaces actual calls out, also across queries
            self.pacer.wait().await;

            match client.search_jobs(query).await {
                Ok(jobs) => {
                    LogContext::search_operation(
                        &query.describe(),
                        Some(&client.source().to_string()),
                        Some(jobs.len()),
                    );
                    results.extend(jobs);
                }
                Err(e) => {
                    LogContext::error_with_context(
                        &e,
                        &format!(
                            "Provider {} failed for '{}'",
                            client.source(),
                            query.describe()
                        ),
                    );
                }
            }
        }

        results
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::value_objects::JobSource;
    use crate::shared::errors::{AppError, AppResult};
    use mockall::mock;

    mock! {
        Provider {}

        #[async_trait::async_trait]
        impl JobProviderClient for Provider {
            fn source(&self) -> JobSource;
            fn is_available(&self) -> bool;
            async fn search_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>>;
        }
    }

    fn job(title: &str) -> ScrapedJob {
        ScrapedJob::new(JobSource::Adzuna, title)
    }

    fn jobs(count: usize) -> Vec<ScrapedJob> {
        (0..count).map(|i| job(&format!("job {}", i))).collect()
    }

    fn quick_config(threshold: usize) -> AggregatorConfig {
        AggregatorConfig {
            inter_call_delay: Duration::from_millis(1),
            early_exit_threshold: threshold,
        }
    }

    fn available(source: JobSource, results: Vec<ScrapedJob>) -> MockProvider {
        let mut provider = MockProvider::new();
        provider.expect_is_available().return_const(true);
        provider.expect_source().return_const(source);
        provider
            .expect_search_jobs()
            .times(1)
            .returning(move |_| Ok(results.clone()));
        provider
    }

    #[tokio::test]
    async fn concatenates_results_in_priority_order() {
        let first = available(JobSource::Adzuna, vec![job("a"), job("b")]);
        let second = available(JobSource::Jooble, vec![job("c")]);

        let aggregator =
            JobAggregator::new(vec![Arc::new(first), Arc::new(second)], quick_config(100));
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "a");
        assert_eq!(results[2].title, "c");
    }

    #[tokio::test]
    async fn returns_empty_when_no_provider_is_available() {
        let mut provider = MockProvider::new();
        provider.expect_is_available().return_const(false);
        provider.expect_search_jobs().never();

        let aggregator = JobAggregator::new(vec![Arc::new(provider)], quick_config(100));
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn skips_unavailable_providers_but_queries_the_rest() {
        let mut missing_key = MockProvider::new();
        missing_key.expect_is_available().return_const(false);
        missing_key.expect_source().return_const(JobSource::Adzuna);
        missing_key.expect_search_jobs().never();

        let working = available(JobSource::Jooble, vec![job("only")]);

        let aggregator =
            JobAggregator::new(vec![Arc::new(missing_key), Arc::new(working)], quick_config(100));
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "only");
    }

    #[tokio::test]
    async fn one_failing_provider_does_not_stop_the_others() {
        let mut failing = MockProvider::new();
        failing.expect_is_available().return_const(true);
        failing.expect_source().return_const(JobSource::Adzuna);
        failing
            .expect_search_jobs()
            .times(1)
            .returning(|_| Err(AppError::InternalError("mapper bug".to_string())));

        let working = available(JobSource::Jooble, vec![job("survivor")]);

        let aggregator =
            JobAggregator::new(vec![Arc::new(failing), Arc::new(working)], quick_config(100));
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "survivor");
    }

    #[tokio::test]
    async fn last_provider_is_skipped_once_the_threshold_is_reached() {
        let first = available(JobSource::Adzuna, jobs(4));

        let mut last = MockProvider::new();
        last.expect_is_available().return_const(true);
        last.expect_source().return_const(JobSource::Jsearch);
        last.expect_search_jobs().never();

        let aggregator =
            JobAggregator::new(vec![Arc::new(first), Arc::new(last)], quick_config(4));
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert_eq!(results.len(), 4);
    }

    #[tokio::test]
    async fn last_provider_still_runs_below_the_threshold() {
        let first = available(JobSource::Adzuna, jobs(3));
        let last = available(JobSource::Jsearch, vec![job("from last")]);

        let aggregator =
            JobAggregator::new(vec![Arc::new(first), Arc::new(last)], quick_config(4));
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert_eq!(results.len(), 4);
        assert_eq!(results[3].title, "from last");
    }

    #[tokio::test]
    async fn middle_providers_are_never_early_exited() {
        let first = available(JobSource::Adzuna, jobs(10));
        let middle = available(JobSource::Jooble, vec![job("middle still runs")]);

        let mut last = MockProvider::new();
        last.expect_is_available().return_const(true);
        last.expect_source().return_const(JobSource::Jsearch);
        last.expect_search_jobs().never();

        let aggregator = JobAggregator::new(
            vec![Arc::new(first), Arc::new(middle), Arc::new(last)],
            quick_config(5),
        );
        let results = aggregator.collect(&JobQuery::new("rust", "")).await;

        assert_eq!(results.len(), 11);
    }
}
