use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use super::{OutcomeRecord, RunStatistics};

/// Error bucket for a failed record that carries no category.
pub const UNKNOWN_FAILURE: &str = "UnknownFailure";

/// Thread-safe accumulator for [`OutcomeRecord`]s.
///
/// `record` may be called from any number of threads or tasks at once; every
/// call is applied exactly once under a single lock, so the final tallies do
/// not depend on arrival order. The completed count is also published on a
/// watch channel for progress reporting.
#[derive(Debug)]
pub struct ResultAggregator {
    state: Mutex<RunStatistics>,
    progress: watch::Sender<u64>,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        let (progress, _) = watch::channel(0);
        Self {
            state: Mutex::new(RunStatistics::default()),
            progress,
        }
    }

    #[must_use]
    pub fn with_capacity(expected: usize) -> Self {
        let aggregator = Self::new();
        aggregator.lock().latencies.reserve(expected);
        aggregator
    }

    pub fn record(&self, outcome: &OutcomeRecord) {
        let mut state = self.lock();
        state.total_completed = state.total_completed.saturating_add(1);
        state.latencies.push(outcome.duration_ms());
        if outcome.success() {
            state.successful = state.successful.saturating_add(1);
        } else {
            state.failed = state.failed.saturating_add(1);
            let key = outcome
                .error_category()
                .map_or_else(|| UNKNOWN_FAILURE.to_owned(), ToString::to_string);
            let count = state.error_counts.entry(key).or_insert(0);
            *count = count.saturating_add(1);
        }
        // Published under the lock so observers never see the count go backwards.
        self.progress.send_replace(state.total_completed);
    }

    #[must_use]
    pub fn snapshot(&self) -> RunStatistics {
        self.lock().clone()
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        *self.progress.borrow()
    }

    /// Subscribe to the completed-record count.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.progress.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, RunStatistics> {
        // Poisoning is ignored: nothing panics while the guard is held.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
