pub(crate) const DEFAULT_USER_AGENT: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_REQUESTS: u64 = 100;
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;
