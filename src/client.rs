//! Airtable Record Fetcher
//!
//! レコード取得クライアント

use log::debug;
use std::time::Duration;
use url::Url;

use crate::error::FetchError;
use crate::models::{Record, RecordPage};
use crate::transport::{HttpTransport, ReqwestTransport, TransportError};

/// Root endpoint of the Airtable REST API.
pub const API_ROOT: &str = "https://api.airtable.com/v0";

/// Bound on one request round trip, enforced by the transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching records from one Airtable base.
///
/// Holds only the immutable connection parameters, so concurrent
/// `fetch_records` calls on one instance are safe. Each call stands alone;
/// nothing is retried or cached between calls.
pub struct AirtableClient<T: HttpTransport> {
    base_id: String,
    api_key: String,
    transport: T,
}

impl AirtableClient<ReqwestTransport> {
    /// Create a client backed by the production HTTP transport
    pub fn new(base_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_transport(base_id, api_key, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> AirtableClient<T> {
    /// Create a client with an injected transport
    /// Nothing is validated here; validation happens per fetch call
    pub fn with_transport(
        base_id: impl Into<String>,
        api_key: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            base_id: base_id.into(),
            api_key: api_key.into(),
            transport,
        }
    }

    /// Fetch one page of records from `table_name`.
    ///
    /// Issues at most one GET to
    /// `https://api.airtable.com/v0/{base_id}/{table_name}` with a bearer
    /// authorization header and a 30-second timeout.
    ///
    /// # Errors
    ///
    /// Returns the matching [`FetchError`] variant for an empty access key or
    /// base/table name, a transport failure, a non-200 status, an empty body,
    /// or an undecodable body. Credential and URL checks run before any
    /// transport invocation.
    pub async fn fetch_records(&self, table_name: &str) -> Result<Vec<Record>, FetchError> {
        if self.api_key.is_empty() {
            return Err(FetchError::Unauthorized);
        }

        if self.base_id.is_empty() || table_name.is_empty() {
            return Err(FetchError::InvalidUrl);
        }
        let url = Url::parse(&format!("{}/{}/{}", API_ROOT, self.base_id, table_name))
            .map_err(|_| FetchError::InvalidUrl)?;

        debug!("GET {}", url);

        let headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )];

        let response = match self
            .transport
            .get(url.as_str(), headers, REQUEST_TIMEOUT)
            .await
        {
            Ok(response) => response,
            Err(TransportError::TimedOut) => return Err(FetchError::Timeout),
            Err(TransportError::Other(message)) => return Err(FetchError::Unknown(message)),
        };

        match response.status {
            200 => {}
            401 => return Err(FetchError::Unauthorized),
            408 => return Err(FetchError::Timeout),
            status => return Err(FetchError::BadServerResponse { status }),
        }

        let body = match response.body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(FetchError::NoData),
        };

        let page: RecordPage = serde_json::from_slice(&body)
            .map_err(|e| FetchError::DecodingError(e.to_string()))?;

        debug!("fetched {} records from {}", page.records.len(), table_name);
        Ok(page.records)
    }
}
