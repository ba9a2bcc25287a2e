use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid timeout '{value}': {source}")]
    InvalidTimeoutNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Timeout must be a finite number of seconds > 0 (got {value}).")]
    TimeoutNotPositive { value: f64 },
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("URL '{url}' is missing a host.")]
    MissingHost { url: String },
}
