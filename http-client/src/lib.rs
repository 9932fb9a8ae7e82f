//! Private HTTP client for LinkPlay device communication
//!
//! This crate provides the single blocking "send GET, get text-or-failure"
//! primitive used by the higher layers: the device's local `httpapi.asp`
//! control endpoint and the remote metadata service both go through it.
//! There are no retries here; a failed call is reported immediately.

mod error;

pub use error::HttpError;

use std::io::Read;
use std::time::Duration;

/// Default timeout for a full request/response round trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default largest body `get_bytes` will buffer (track files are downloaded whole)
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Blocking GET transport
///
/// Implemented by [`HttpClient`] for real network traffic. Tests and hosts
/// with their own HTTP stack can provide alternative implementations.
pub trait Transport {
    /// Issue a GET request and return the response body as text
    fn get_text(&self, url: &str) -> Result<String, HttpError>;

    /// Issue a GET request and return the raw response body
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_text(&self, url: &str) -> Result<String, HttpError> {
        (**self).get_text(url)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        (**self).get_bytes(url)
    }
}

/// A minimal HTTP client backed by a `ureq` agent
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl HttpClient {
    /// Create a new client with the default 10 second timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom overall request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5).min(timeout))
                .timeout_read(timeout)
                .timeout(timeout)
                .build(),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }

    /// Change the download limit of `get_bytes`
    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpClient {
    fn get_text(&self, url: &str) -> Result<String, HttpError> {
        tracing::debug!("Requesting {}", url);

        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            // The device reports failures in the body, not the status line,
            // so a non-2xx answer is still handed back as text.
            Err(ureq::Error::Status(code, response)) => {
                tracing::debug!("{} answered with HTTP {}", url, code);
                response
            }
            Err(ureq::Error::Transport(e)) => {
                tracing::error!("Error fetching data from {} failed with {}", url, e);
                return Err(HttpError::Network(e.to_string()));
            }
        };

        response
            .into_string()
            .map_err(|e| HttpError::Body(e.to_string()))
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        tracing::debug!("Downloading {}", url);

        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => HttpError::Status(code),
            ureq::Error::Transport(t) => {
                tracing::error!("Error downloading {} failed with {}", url, t);
                HttpError::Network(t.to_string())
            }
        })?;

        let mut body = Vec::new();
        response
            .into_reader()
            .take(self.max_body_bytes.saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|e| HttpError::Body(e.to_string()))?;

        if body.len() as u64 > self.max_body_bytes {
            tracing::warn!(
                "{} is larger than {} bytes, discarding download",
                url,
                self.max_body_bytes
            );
            return Err(HttpError::TooLarge(self.max_body_bytes));
        }

        Ok(body)
    }
}
