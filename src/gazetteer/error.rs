use thiserror::Error;

/// Errors returned by gazetteer lookups.
///
/// Cloneable so a single failed lookup can be reported to every caller
/// coalesced onto it by the cache.
#[derive(Debug, Clone, Error)]
pub enum GazetteerError {
    /// The HTTP client could not be constructed.
    #[error("failed to build gazetteer HTTP client: {message}")]
    ClientBuildFailed {
        /// Error message.
        message: String,
    },

    /// The request never produced a usable response (DNS, connect, timeout).
    #[error("gazetteer request failed: {message}")]
    RequestFailed {
        /// Error message.
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("gazetteer returned HTTP {status}")]
    HttpStatus {
        /// Status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("malformed gazetteer response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// The service rejected the request (bad credentials, quota exceeded).
    #[error("gazetteer rejected the request ({code}): {message}")]
    Rejected {
        /// Service-specific error code.
        code: i64,
        /// Error message.
        message: String,
    },
}
