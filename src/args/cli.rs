use clap::Parser;

use super::parsers::{parse_positive_u64, parse_positive_usize, parse_timeout_secs};
use super::types::{OutputFormat, PositiveU64, PositiveUsize, TimeoutSecs};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP GET load generator - sends a fixed number of requests through a bounded worker pool and reports throughput, latency, and error breakdown."
)]
pub struct TesterArgs {
    /// The URL to load test (e.g., http://localhost:8080/)
    #[arg(long, short, env = "VOLLEY_URL")]
    pub url: Option<String>,

    /// Number of concurrent workers
    #[arg(
        long,
        short = 'c',
        default_value = "8",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Total number of requests to send
    #[arg(
        long = "requests",
        short = 'n',
        default_value = "100",
        value_parser = parse_positive_u64
    )]
    pub requests: PositiveU64,

    /// Timeout for each request in seconds (fractions allowed)
    #[arg(long, default_value = "5.0", value_parser = parse_timeout_secs)]
    pub timeout: TimeoutSecs,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Result output format
    #[arg(long = "output-format", default_value = "text", value_enum)]
    pub output_format: OutputFormat,

    /// Do not print progress lines while the run is in flight
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in logs and progress output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
