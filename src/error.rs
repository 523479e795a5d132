//! Fetch Error Taxonomy
//!
//! 取得エラーの分類

use thiserror::Error;

/// Errors returned by `AirtableClient::fetch_records`.
///
/// The set is closed: every failure a fetch can produce maps onto exactly one
/// variant, so callers match exhaustively instead of inspecting messages.
/// All failures come back as values; nothing panics across the call boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Empty base ID or table name, or the resulting URL failed to parse.
    #[error("invalid request URL")]
    InvalidUrl,

    /// Empty access key (detected before any request), or HTTP 401.
    #[error("unauthorized")]
    Unauthorized,

    /// The transport reported a timeout, or the server returned HTTP 408.
    #[error("request timed out")]
    Timeout,

    /// A non-200 status other than 401/408.
    #[error("bad server response: HTTP {status}")]
    BadServerResponse { status: u16 },

    /// HTTP 200 with a missing or empty body.
    #[error("no data in response")]
    NoData,

    /// The response body could not be decoded into the record envelope.
    #[error("decoding failed: {0}")]
    DecodingError(String),

    /// Transport failure that is not a timeout.
    #[error("transport failure: {0}")]
    Unknown(String),
}
