use anyhow::Result;
use jobsift::log_info;
use jobsift::modules::classification::WorkTypeClassifier;
use jobsift::modules::dedup::FingerprintGenerator;
use jobsift::modules::ingest::{IngestConfig, IngestRunner, IngestWorker};
use jobsift::modules::listings::{JobListingRepository, JobListingRepositoryImpl};
use jobsift::modules::preferences::{SearchPreferenceRepository, SearchPreferenceRepositoryImpl};
use jobsift::modules::providers::{
    AdzunaClient, AggregatorConfig, CountryResolver, JobAggregator, JobProviderClient,
    JoobleClient, JsearchClient,
};
use jobsift::shared::utils::logger::init_logger;
use jobsift::shared::Database;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    // Provider clients, in priority order (most reliable first). A client
    // without credentials stays in the list and reports itself unavailable.
    let country_resolver = Arc::new(CountryResolver::new());
    let adzuna = AdzunaClient::from_env(Arc::clone(&country_resolver))?;
    let jooble = JoobleClient::from_env(Arc::clone(&country_resolver))?;
    let jsearch = JsearchClient::from_env()?;

    let clients: Vec<Arc<dyn JobProviderClient>> =
        vec![Arc::new(adzuna), Arc::new(jooble), Arc::new(jsearch)];
    let aggregator = Arc::new(JobAggregator::new(clients, AggregatorConfig::from_env()));

    let preference_repo: Arc<dyn SearchPreferenceRepository> =
        Arc::new(SearchPreferenceRepositoryImpl::new(Arc::clone(&database)));
    let listing_repo: Arc<dyn JobListingRepository> =
        Arc::new(JobListingRepositoryImpl::new(Arc::clone(&database)));

    let runner = Arc::new(IngestRunner::new(
        preference_repo,
        listing_repo,
        aggregator,
        Arc::new(FingerprintGenerator::new()),
        Arc::new(WorkTypeClassifier::new()),
        IngestConfig::from_env(),
    ));

    let interval_minutes = env::var("INGEST_INTERVAL_MINUTES")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(0);

    // Without an interval the service behaves as a one-shot batch job,
    // which is what cron-style deployments want.
    if interval_minutes == 0 {
        let report = runner.run_cycle().await;
        log_info!(
            "Ingest cycle done: {} preference(s), {} quer(ies), {} raw result(s), {} inserted",
            report.preferences,
            report.queries,
            report.raw_results,
            report.inserted_ids.len()
        );
        return Ok(());
    }

    let worker = Arc::new(IngestWorker::new(
        runner,
        Duration::from_secs(interval_minutes * 60),
    ));
    let shutdown = CancellationToken::new();

    let worker_handle = tokio::spawn(Arc::clone(&worker).run(shutdown.clone()));

    tokio::signal::ctrl_c().await?;
    log_info!("Shutdown signal received, finishing current cycle");
    shutdown.cancel();
    worker_handle.await?;

    Ok(())
}
