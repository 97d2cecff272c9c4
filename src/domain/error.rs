//! Error types for the repopin plugin.
//!
//! [`RepoPinError`] is the crate-wide error and [`Result`] the matching alias.
//! [`SearchFailure`] is why a repository search produced nothing. It never
//! reaches the caller: it is logged and rendered as an empty result.

use thiserror::Error;

/// The main error type for repopin operations.
///
/// # Examples
///
/// ```
/// use repopin::RepoPinError;
///
/// fn validate() -> Result<(), RepoPinError> {
///     Err(RepoPinError::Theme("missing [colors] table".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum RepoPinError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from the log writer and theme loading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// Why a repository search produced no usable result.
///
/// Transport failures reach the plugin as a non-success status whose body is
/// the host's error text, so they are covered by [`SearchFailure::Status`].
#[derive(Debug, Error)]
pub enum SearchFailure {
    /// The API (or the host transport) answered with a non-2xx status.
    #[error("HTTP error {status}: {message}")]
    Status {
        /// HTTP status code reported by the host.
        status: u16,
        /// Message extracted from the body, if any.
        message: String,
    },

    /// The body was not the expected search payload.
    #[error("malformed search response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The user has not granted the plugin web access, so the host would
    /// drop the request without ever answering it.
    #[error("web access permission not granted")]
    WebAccessDenied,
}

/// A specialized `Result` type for repopin operations.
pub type Result<T> = std::result::Result<T, RepoPinError>;
