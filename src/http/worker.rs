use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use reqwest::Url;
use tokio::time::Instant;
use tracing::warn;

use crate::metrics::OutcomeRecord;

use super::{HttpGet, TransportFailure, classify};

/// Executes one GET against `target` and classifies the result.
///
/// Never fails: timeouts, transport errors and even a panicking client are
/// folded into the returned record. The duration covers the full attempt on
/// every path, including timeout expiry.
pub async fn execute(client: &dyn HttpGet, target: &Url, timeout: Duration) -> OutcomeRecord {
    let start = Instant::now();
    let request = AssertUnwindSafe(client.get(target, timeout)).catch_unwind();
    let attempt = tokio::time::timeout(timeout, request).await;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let result = match attempt {
        Ok(Ok(result)) => result,
        Ok(Err(_panic)) => {
            warn!("HTTP client panicked while requesting {}", target);
            Err(TransportFailure::Unknown {
                kind: "Panic".to_owned(),
            })
        }
        Err(_elapsed) => Err(TransportFailure::Timeout),
    };
    classify(result, duration_ms)
}
