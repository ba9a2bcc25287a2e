use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Why a request attempt counted as a failure.
///
/// The `Display` form is the stable label used as the key in
/// [`RunStatistics::error_counts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCategory {
    /// A response arrived with a status outside `200..300`.
    Http(u16),
    Timeout,
    Connection,
    /// Any other recognized transport failure, tagged with its kind.
    Request(String),
    /// A failure nothing else anticipated, tagged with its kind.
    Unknown(String),
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Http(code) => write!(f, "HTTP_{}", code),
            ErrorCategory::Timeout => f.write_str("Timeout"),
            ErrorCategory::Connection => f.write_str("ConnectionError"),
            ErrorCategory::Request(kind) => write!(f, "RequestException_{}", kind),
            ErrorCategory::Unknown(kind) => write!(f, "UnknownError_{}", kind),
        }
    }
}

impl Serialize for ErrorCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result of one completed request attempt.
///
/// Built only by the outcome classifier, so a record is either a success
/// (2xx status, no category) or carries an [`ErrorCategory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRecord {
    pub(super) duration_ms: f64,
    pub(super) status_code: Option<u16>,
    pub(super) error: Option<ErrorCategory>,
}

impl OutcomeRecord {
    pub(crate) const fn succeeded(duration_ms: f64, status_code: u16) -> Self {
        Self {
            duration_ms,
            status_code: Some(status_code),
            error: None,
        }
    }

    pub(crate) const fn failed(
        duration_ms: f64,
        status_code: Option<u16>,
        error: ErrorCategory,
    ) -> Self {
        Self {
            duration_ms,
            status_code,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    #[must_use]
    pub const fn error_category(&self) -> Option<&ErrorCategory> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.error.is_none()
            && self
                .status_code
                .is_some_and(|status| (200..300).contains(&status))
    }
}

/// Tallies accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStatistics {
    pub total_completed: u64,
    pub successful: u64,
    pub failed: u64,
    /// Every attempt's duration in arrival order.
    pub latencies: Vec<f64>,
    pub error_counts: BTreeMap<String, u64>,
}
