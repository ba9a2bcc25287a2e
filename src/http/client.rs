use std::error::Error as StdError;
use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Why a GET attempt ended without a usable status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("timed out before a response arrived")]
    Timeout,
    #[error("connection failed ({kind})")]
    Connect { kind: String },
    #[error("request failed ({kind})")]
    Request { kind: String },
    #[error("unexpected failure ({kind})")]
    Unknown { kind: String },
}

/// The HTTP client capability the dispatch pool drives.
///
/// Implementations issue exactly one GET per call and must report every
/// failure through [`TransportFailure`] rather than panicking.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, TransportFailure>;
}

/// [`HttpGet`] backed by a shared reqwest connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Builds the client. `connect_timeout` bounds connection setup; the
    /// per-request timeout is supplied on every call.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialized.
    pub fn new(connect_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpGet for ReqwestClient {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, TransportFailure> {
        let mut response = match self.client.get(url.clone()).timeout(timeout).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("Request failed: {}", err);
                return Err(transport_failure(&err));
            }
        };
        let status = response.status().as_u16();
        // Drain so the connection can return to the pool; the bytes are discarded.
        loop {
            match response.chunk().await {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(err) => {
                    debug!("Failed to read response body: {}", err);
                    return Err(transport_failure(&err));
                }
            }
        }
        Ok(status)
    }
}

pub(crate) fn transport_failure(err: &reqwest::Error) -> TransportFailure {
    let io_kind = find_source::<std::io::Error>(err).map(std::io::Error::kind);
    if err.is_timeout() || io_kind == Some(ErrorKind::TimedOut) {
        return TransportFailure::Timeout;
    }
    if let Some(kind) = io_kind.filter(|kind| is_connection_kind(*kind)) {
        return TransportFailure::Connect {
            kind: format!("{:?}", kind),
        };
    }
    if err.is_connect() {
        return TransportFailure::Connect {
            kind: "Connect".to_owned(),
        };
    }
    if let Some(kind) = find_source::<hyper::Error>(err).and_then(closed_connection_kind) {
        return TransportFailure::Connect {
            kind: kind.to_owned(),
        };
    }
    let kind = if err.is_redirect() {
        "TooManyRedirects".to_owned()
    } else if err.is_builder() {
        "InvalidRequest".to_owned()
    } else if err.is_body() {
        "BodyError".to_owned()
    } else if err.is_decode() {
        "DecodeError".to_owned()
    } else if err.is_request() {
        io_kind.map_or_else(|| "RequestError".to_owned(), |kind| format!("{:?}", kind))
    } else {
        return TransportFailure::Unknown {
            kind: "Unclassified".to_owned(),
        };
    };
    TransportFailure::Request { kind }
}

/// First error of type `E` in the source chain of `err`.
fn find_source<E>(err: &reqwest::Error) -> Option<&E>
where
    E: StdError + 'static,
{
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(current) = source {
        if let Some(found) = current.downcast_ref::<E>() {
            return Some(found);
        }
        source = current.source();
    }
    None
}

/// The peer dropped the connection before a complete response arrived.
fn closed_connection_kind(err: &hyper::Error) -> Option<&'static str> {
    if err.is_incomplete_message() {
        Some("IncompleteMessage")
    } else if err.is_closed() {
        Some("ConnectionClosed")
    } else if err.is_canceled() {
        Some("Canceled")
    } else {
        None
    }
}

const fn is_connection_kind(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::AddrNotAvailable
            | ErrorKind::BrokenPipe
            | ErrorKind::UnexpectedEof
    )
}
