use serde::Deserialize;

use crate::args::OutputFormat;

/// On-disk run settings. Every key is optional; CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub concurrency: Option<usize>,
    pub requests: Option<u64>,
    /// Seconds, fractional values allowed.
    pub timeout: Option<f64>,
    pub output_format: Option<OutputFormat>,
    pub no_progress: Option<bool>,
}
