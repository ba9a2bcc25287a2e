use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use super::{OutcomeRecord, ResultAggregator};

/// Drains `records_rx` into `aggregator` until every sender is dropped.
///
/// The returned handle resolves to the number of records consumed.
#[must_use]
pub fn spawn_collector(
    aggregator: Arc<ResultAggregator>,
    mut records_rx: mpsc::Receiver<OutcomeRecord>,
) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut consumed: u64 = 0;
        while let Some(record) = records_rx.recv().await {
            aggregator.record(&record);
            consumed = consumed.saturating_add(1);
        }
        debug!("Collector drained {} records", consumed);
        consumed
    })
}
