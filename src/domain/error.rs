//! Error types for the Gazette plugin.
//!
//! This module defines the centralized error type [`GazetteError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The first three variants are the loader's failure kinds. Each renders as one
//! short sentence suitable for the load-error placeholder; the remaining variants
//! cover ambient failures (theming, file I/O) that are logged
//! and recovered from with defaults.

use thiserror::Error;

/// The main error type for Gazette plugin operations.
#[derive(Debug, Error)]
pub enum GazetteError {
    /// The article source answered with a non-success HTTP status.
    ///
    /// `status_text` is the canonical reason phrase for the status code, or an
    /// empty string when the code has none.
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase (e.g. "Not Found").
        status_text: String,
    },

    /// The response body is not valid JSON.
    ///
    /// Wraps the parser error, whose message includes line and column.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The response body is valid JSON but its top-level value is not an array.
    #[error("JSON data is not an array")]
    NotAnArray,

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl GazetteError {
    /// Builds an [`GazetteError::Http`] from a status code, filling in the
    /// canonical reason phrase.
    #[must_use]
    pub fn http(status: u16) -> Self {
        let status_text = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self::Http { status, status_text }
    }

    /// Returns `true` for the three loader failure kinds.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Json(_) | Self::NotAnArray)
    }
}

/// A specialized `Result` type for Gazette operations.
pub type Result<T> = std::result::Result<T, GazetteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_and_reason() {
        let err = GazetteError::http(404);
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert!(err.is_load_failure());
    }

    #[test]
    fn http_error_with_unknown_code_has_empty_reason() {
        let err = GazetteError::http(599);
        assert_eq!(err.to_string(), "HTTP 599: ");
    }

    #[test]
    fn not_an_array_message_names_the_violation() {
        assert!(GazetteError::NotAnArray.to_string().contains("not an array"));
    }

    #[test]
    fn ambient_errors_are_not_load_failures() {
        assert!(!GazetteError::Theme("bad".into()).is_load_failure());
    }
}
