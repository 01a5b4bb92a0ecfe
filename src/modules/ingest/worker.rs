/// Scheduled ingest worker
///
/// Runs one cycle immediately, then again after every interval. A cycle
/// in flight always runs to completion; shutdown is only observed
/// between cycles.
use crate::log_info;
use crate::modules::ingest::runner::IngestRunner;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub struct IngestWorker {
    runner: Arc<IngestRunner>,
    interval: Duration,
    is_running: Arc<tokio::sync::RwLock<bool>>,
}

impl IngestWorker {
    pub fn new(runner: Arc<IngestRunner>, interval: Duration) -> Self {
        Self {
            runner,
            interval,
            is_running: Arc::new(tokio::sync::RwLock::new(false)),
        }
    }

    /// Run the worker loop. Call with tokio::spawn to run in the
    /// background; cancel `shutdown` (or call `stop`) to end it.
    pub async fn run(self: Arc<Self>, shutdown: CancellationToken) {
        log_info!(
            "Ingest worker started, cycling every {}s",
            self.interval.as_secs()
        );

        {
            let mut running = self.is_running.write().await;
            *running = true;
        }

        loop {
            {
                let running = self.is_running.read().await;
                if !*running {
                    break;
                }
            }

            let report = self.runner.run_cycle().await;
            log_info!(
                "Ingest cycle finished in {:.1}s: {} raw result(s), {} inserted",
                report.elapsed.as_secs_f64(),
                report.raw_results,
                report.inserted_ids.len()
            );

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        {
            let mut running = self.is_running.write().await;
            *running = false;
        }
        log_info!("Ingest worker stopped");
    }

    /// Ask the worker to stop before its next cycle
    pub async fn stop(&self) {
        let mut running = self.is_running.write().await;
        *running = false;
        log_info!("Ingest worker stop requested");
    }

    pub async fn is_running(&self) -> bool {
        *self.is_running.read().await
    }
}
