use crate::metrics::{ErrorCategory, OutcomeRecord};

use super::TransportFailure;

/// Turns the raw result of one GET attempt into an [`OutcomeRecord`].
///
/// A status in `200..300` is a success; any other status becomes `HTTP_<code>`.
/// Transport failures map onto `Timeout`, `ConnectionError`,
/// `RequestException_<kind>` and `UnknownError_<kind>`.
#[must_use]
pub fn classify(attempt: Result<u16, TransportFailure>, duration_ms: f64) -> OutcomeRecord {
    match attempt {
        Ok(status) if (200..300).contains(&status) => OutcomeRecord::succeeded(duration_ms, status),
        Ok(status) => OutcomeRecord::failed(duration_ms, Some(status), ErrorCategory::Http(status)),
        Err(failure) => OutcomeRecord::failed(duration_ms, None, failure_category(failure)),
    }
}

fn failure_category(failure: TransportFailure) -> ErrorCategory {
    match failure {
        TransportFailure::Timeout => ErrorCategory::Timeout,
        TransportFailure::Connect { .. } => ErrorCategory::Connection,
        TransportFailure::Request { kind } => ErrorCategory::Request(kind),
        TransportFailure::Unknown { kind } => ErrorCategory::Unknown(kind),
    }
}
