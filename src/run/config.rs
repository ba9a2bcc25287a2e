use reqwest::Url;

use crate::args::{
    DEFAULT_CONCURRENCY, DEFAULT_REQUESTS, DEFAULT_TIMEOUT_SECS, PositiveU64, PositiveUsize,
    TesterArgs, TimeoutSecs,
};
use crate::error::{AppError, AppResult, ValidationError};

/// Settings for one run, validated before any request is dispatched.
#[derive(Debug, Clone)]
pub struct RunConfig {
    target_url: Url,
    concurrency: PositiveUsize,
    total_requests: PositiveU64,
    timeout: TimeoutSecs,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns an error when `target_url` is not an absolute http(s) URL with a host.
    pub fn new(
        target_url: &str,
        concurrency: PositiveUsize,
        total_requests: PositiveU64,
        timeout: TimeoutSecs,
    ) -> AppResult<Self> {
        Ok(Self {
            target_url: parse_target(target_url)?,
            concurrency,
            total_requests,
            timeout,
        })
    }

    /// Concurrency 8, 100 requests, 5 second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when `target_url` is invalid.
    pub fn with_defaults(target_url: &str) -> AppResult<Self> {
        Self::new(
            target_url,
            PositiveUsize::try_from(DEFAULT_CONCURRENCY)?,
            PositiveU64::try_from(DEFAULT_REQUESTS)?,
            TimeoutSecs::try_from(DEFAULT_TIMEOUT_SECS)?,
        )
    }

    /// # Errors
    ///
    /// Returns an error when no URL was supplied or it is invalid.
    pub fn from_args(args: &TesterArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        Self::new(url, args.concurrency, args.requests, args.timeout)
    }

    #[must_use]
    pub const fn target_url(&self) -> &Url {
        &self.target_url
    }

    #[must_use]
    pub const fn concurrency(&self) -> PositiveUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn total_requests(&self) -> PositiveU64 {
        self.total_requests
    }

    #[must_use]
    pub const fn timeout(&self) -> TimeoutSecs {
        self.timeout
    }
}

fn parse_target(value: &str) -> AppResult<Url> {
    let url = Url::parse(value.trim()).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: value.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }));
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::MissingHost {
            url: value.to_owned(),
        }));
    }
    Ok(url)
}
