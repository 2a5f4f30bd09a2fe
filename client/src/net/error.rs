//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Views never see transport types; they get an `ApiError` and show
//! `user_message()`, which prefers the message the service put in the
//! envelope over the transport's own text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (DNS, connection refused, CORS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The request outlived the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// HTTP 401; the session has already been cleared.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// The envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx status other than 401.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// Body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The call was made outside the browser (SSR render).
    #[error("not available on server")]
    Unavailable,
}

/// Fallback text when the service rejects a request without a message.
pub const GENERIC_FAILURE: &str = "request failed";

impl ApiError {
    pub(crate) fn rejected(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_owned());
        Self::Rejected(message)
    }

    /// Message suitable for an inline alert or modal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Status {
                message: Some(message), ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}
