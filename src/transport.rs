//! HTTP Transport Abstractions
//!
//! トランスポートの抽象化と実装

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Transport-level failure, reduced to the two buckets the fetcher
/// distinguishes: a timeout, and everything else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("transport timed out")]
    TimedOut,

    #[error("transport error: {0}")]
    Other(String),
}

/// Raw outcome of one round trip: the status code plus the body bytes, if the
/// server sent any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

/// Trait for issuing HTTP GET requests
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request with the given headers, bounded by `timeout`
    async fn get(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}

/// Real transport backed by `reqwest::Client`
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.get(url).timeout(timeout);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();

        // The per-request timeout also covers reading the body
        let bytes = response.bytes().await.map_err(classify)?;

        Ok(TransportResponse {
            status,
            body: if bytes.is_empty() {
                None
            } else {
                Some(bytes.to_vec())
            },
        })
    }
}

/// Collapse a reqwest failure into the two buckets the fetcher recognizes
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::TimedOut
    } else {
        TransportError::Other(error.to_string())
    }
}
