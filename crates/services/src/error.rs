//! Shared error types for the services crate.

use thiserror::Error;

/// Shown when the fetch service gives no structured error payload.
pub const GENERIC_FETCH_MESSAGE: &str = "An error occurred while fetching the roadmap.";

/// Terminal failure of one roadmap load. Neither kind is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    /// The service responded, but the payload did not contain a usable roadmap.
    #[error("Invalid roadmap data received")]
    InvalidData,

    /// Transport or service-level failure, with the service's own message
    /// when it supplied one.
    #[error("{message}")]
    Fetch { message: String },
}

impl LoadError {
    /// A fetch failure carrying the service's message, or the generic
    /// fallback when the payload had none worth showing.
    #[must_use]
    pub fn fetch_with_fallback(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FETCH_MESSAGE.to_string());
        Self::Fetch { message }
    }
}
