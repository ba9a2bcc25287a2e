//! One load-test run: validated settings, orchestration, and the final report.
mod config;
mod controller;
mod report;


pub use config::RunConfig;
pub use controller::RunController;
pub use report::{FinalReport, LatencySummary, requests_per_second, success_rate};
