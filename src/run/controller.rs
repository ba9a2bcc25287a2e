use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::http::{DispatchPool, HttpGet};
use crate::metrics::{ResultAggregator, spawn_collector};

use super::{FinalReport, RunConfig};

const RECORD_CHANNEL_CAPACITY: usize = 1024;

/// Orchestrates one run: dispatch, aggregation, timing, and the final report.
///
/// Consumed by [`RunController::run`]; every run starts from empty tallies.
pub struct RunController {
    config: RunConfig,
    client: Arc<dyn HttpGet>,
    aggregator: Arc<ResultAggregator>,
}

impl RunController {
    #[must_use]
    pub fn new(config: RunConfig, client: Arc<dyn HttpGet>) -> Self {
        let expected = usize::try_from(config.total_requests().get()).unwrap_or(usize::MAX);
        Self {
            config,
            client,
            aggregator: Arc::new(ResultAggregator::with_capacity(expected.min(1 << 20))),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Count of completed requests, updated as records are aggregated.
    #[must_use]
    pub fn subscribe_progress(&self) -> watch::Receiver<u64> {
        self.aggregator.subscribe()
    }

    /// Sends every request, waits for all of them, and builds the report.
    ///
    /// # Errors
    ///
    /// Returns an error only if a worker or the collector task dies; request
    /// failures are part of the report.
    pub async fn run(self) -> AppResult<FinalReport> {
        let pool = DispatchPool::new(
            Arc::clone(&self.client),
            self.config.target_url().clone(),
            self.config.timeout().as_duration(),
            self.config.concurrency(),
            self.config.total_requests().get(),
        );
        let (records_tx, records_rx) = mpsc::channel(RECORD_CHANNEL_CAPACITY);
        let collector = spawn_collector(Arc::clone(&self.aggregator), records_rx);

        info!(
            "Starting load test on {} ({} requests, concurrency {}, timeout {}s)",
            self.config.target_url(),
            self.config.total_requests().get(),
            self.config.concurrency().get(),
            self.config.timeout().get()
        );
        let started_at = Utc::now();
        let run_start = Instant::now();

        let dispatched = pool.run(records_tx).await?;
        let collected = collector.await?;
        let total_duration = run_start.elapsed();

        if dispatched != collected {
            warn!(
                "Dispatched {} requests but aggregated {} outcomes",
                dispatched, collected
            );
        }

        let report = FinalReport::build(
            &self.config,
            started_at,
            total_duration,
            self.aggregator.snapshot(),
        );
        info!(
            "Load test finished: {} completed, {} failed in {:.2}s",
            report.total_completed, report.failed, report.total_duration_secs
        );
        Ok(report)
    }
}
