use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::metrics::{LatencyHistogram, LatencyPercentiles, RunStatistics};

use super::RunConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencySummary {
    pub avg_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl LatencySummary {
    /// `None` when there are no samples.
    #[must_use]
    pub fn from_latencies(latencies_ms: &[f64]) -> Option<Self> {
        let (first, rest) = latencies_ms.split_first()?;
        let mut sum = *first;
        let mut min_ms = *first;
        let mut max_ms = *first;
        for value in rest {
            sum += *value;
            min_ms = min_ms.min(*value);
            max_ms = max_ms.max(*value);
        }
        Some(Self {
            avg_ms: sum / latencies_ms.len() as f64,
            min_ms,
            max_ms,
        })
    }
}

/// Percentage of successful requests; `None` (N/A) when nothing completed.
#[must_use]
pub fn success_rate(successful: u64, total_completed: u64) -> Option<f64> {
    if total_completed == 0 {
        return None;
    }
    Some(successful as f64 / total_completed as f64 * 100.0)
}

/// Completed requests per second; `None` (N/A) for a non-positive duration.
#[must_use]
pub fn requests_per_second(total_completed: u64, total_duration_secs: f64) -> Option<f64> {
    if total_duration_secs.is_nan() || total_duration_secs <= 0.0 {
        return None;
    }
    Some(total_completed as f64 / total_duration_secs)
}

/// Everything the reporting layer needs about a finished run.
///
/// Derived values are `None` where the source prints "N/A".
#[derive(Debug, Clone, Serialize)]
pub struct FinalReport {
    pub target_url: String,
    pub concurrency: usize,
    pub timeout_secs: f64,
    pub total_requests: u64,
    pub started_at: String,
    pub total_duration_secs: f64,
    pub total_completed: u64,
    pub successful: u64,
    pub failed: u64,
    pub success_rate: Option<f64>,
    pub rps: Option<f64>,
    pub latency: Option<LatencySummary>,
    pub percentiles: Option<LatencyPercentiles>,
    pub error_counts: BTreeMap<String, u64>,
    #[serde(skip)]
    pub latencies: Vec<f64>,
}

impl FinalReport {
    #[must_use]
    pub fn build(
        config: &RunConfig,
        started_at: DateTime<Utc>,
        total_duration: Duration,
        stats: RunStatistics,
    ) -> Self {
        let total_duration_secs = total_duration.as_secs_f64();
        let percentiles = match LatencyHistogram::from_latencies(&stats.latencies) {
            Ok(histogram) => histogram.percentiles(),
            Err(err) => {
                warn!("Skipping latency percentiles: {}", err);
                None
            }
        };

        Self {
            target_url: config.target_url().to_string(),
            concurrency: config.concurrency().get(),
            timeout_secs: config.timeout().get(),
            total_requests: config.total_requests().get(),
            started_at: started_at.to_rfc3339(),
            total_duration_secs,
            total_completed: stats.total_completed,
            successful: stats.successful,
            failed: stats.failed,
            success_rate: success_rate(stats.successful, stats.total_completed),
            rps: requests_per_second(stats.total_completed, total_duration_secs),
            latency: LatencySummary::from_latencies(&stats.latencies),
            percentiles,
            error_counts: stats.error_counts,
            latencies: stats.latencies,
        }
    }
}
