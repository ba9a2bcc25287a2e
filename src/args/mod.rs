//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::TesterArgs;
pub use defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS, DEFAULT_TIMEOUT_SECS};
pub use types::{OutputFormat, PositiveU64, PositiveUsize, TimeoutSecs};

pub(crate) use defaults::DEFAULT_USER_AGENT;
