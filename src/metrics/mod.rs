//! Outcome records, run statistics, and their concurrent aggregation.
mod aggregator;
mod collector;
mod histogram;
mod types;


pub use aggregator::{ResultAggregator, UNKNOWN_FAILURE};
pub use collector::spawn_collector;
pub use histogram::{LatencyHistogram, LatencyPercentiles};
pub use types::{ErrorCategory, OutcomeRecord, RunStatistics};
