use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Url;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::args::PositiveUsize;
use crate::error::AppResult;
use crate::metrics::OutcomeRecord;

use super::{HttpGet, execute};

/// Units not yet claimed by a worker.
#[derive(Debug)]
struct Backlog {
    remaining: AtomicU64,
}

impl Backlog {
    const fn new(total: u64) -> Self {
        Self {
            remaining: AtomicU64::new(total),
        }
    }

    /// Claims one unit; `false` once the backlog is empty.
    fn try_take(&self) -> bool {
        loop {
            let current = self.remaining.load(Ordering::Relaxed);
            let Some(next) = current.checked_sub(1) else {
                return false;
            };
            if self
                .remaining
                .compare_exchange(current, next, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return true;
            }
        }
    }
}

/// Fixed-size pool that sends `total_requests` GETs to one target with at
/// most `concurrency` in flight.
///
/// Each worker task claims units from a shared backlog until it is empty and
/// forwards every record as soon as its request finishes, so records arrive in
/// completion order rather than submission order.
pub struct DispatchPool {
    client: Arc<dyn HttpGet>,
    target: Arc<Url>,
    timeout: Duration,
    concurrency: PositiveUsize,
    total_requests: u64,
}

impl DispatchPool {
    #[must_use]
    pub fn new(
        client: Arc<dyn HttpGet>,
        target: Url,
        timeout: Duration,
        concurrency: PositiveUsize,
        total_requests: u64,
    ) -> Self {
        Self {
            client,
            target: Arc::new(target),
            timeout,
            concurrency,
            total_requests,
        }
    }

    /// Runs every unit, sending each record into `records_tx`, and returns the
    /// number of units executed once all workers have finished.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker task panics or is aborted.
    pub async fn run(&self, records_tx: mpsc::Sender<OutcomeRecord>) -> AppResult<u64> {
        let backlog = Arc::new(Backlog::new(self.total_requests));
        let worker_count = usize::try_from(self.total_requests)
            .map_or(self.concurrency.get(), |total| total.min(self.concurrency.get()));
        debug!(
            "Dispatching {} requests across {} workers",
            self.total_requests, worker_count
        );

        let mut worker_handles = Vec::with_capacity(worker_count);
        for worker_id in 0..worker_count {
            let backlog = Arc::clone(&backlog);
            let client = Arc::clone(&self.client);
            let target = Arc::clone(&self.target);
            let records_tx = records_tx.clone();
            let timeout = self.timeout;

            worker_handles.push(tokio::spawn(async move {
                let mut executed: u64 = 0;
                while backlog.try_take() {
                    let record = execute(client.as_ref(), &target, timeout).await;
                    executed = executed.saturating_add(1);
                    if records_tx.send(record).await.is_err() {
                        warn!("Worker {}: record receiver closed, dropping outcome", worker_id);
                    }
                }
                executed
            }));
        }
        drop(records_tx);

        let mut executed: u64 = 0;
        for handle in worker_handles {
            executed = executed.saturating_add(handle.await?);
        }
        Ok(executed)
    }

    /// Runs every unit and returns the records in completion order.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker task panics or is aborted.
    pub async fn collect(&self) -> AppResult<Vec<OutcomeRecord>> {
        let (records_tx, mut records_rx) = mpsc::channel(self.concurrency.get());
        let gather = tokio::spawn(async move {
            let mut records = Vec::new();
            while let Some(record) = records_rx.recv().await {
                records.push(record);
            }
            records
        });
        self.run(records_tx).await?;
        Ok(gather.await?)
    }
}
