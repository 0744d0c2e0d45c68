//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while retrieving the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to decode a response body or fixture file.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to read a fixture file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-HTTP source reported a failure.
    #[error("item source failed: {0}")]
    Source(String),
}
