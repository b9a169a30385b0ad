//! Shared error type across visitor crates.

use thiserror::Error;

/// Stable error codes. Used as metrics labels and in logs, never as the
/// client-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientCode {
    /// Store URL or token absent.
    ConfigMissing,
    /// Store answered with a non-success status.
    Upstream,
    /// Store call did not finish in time.
    Timeout,
    /// Network failure talking to the store.
    Transport,
    /// Store reply could not be decoded.
    Decode,
    /// Method rejected (POST-only mode).
    MethodNotAllowed,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in labels and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ConfigMissing => "CONFIG_MISSING",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::Timeout => "TIMEOUT",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::Decode => "DECODE",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VisitorError>;

/// Unified error type used by core, gateway and client.
#[derive(Debug, Error)]
pub enum VisitorError {
    #[error("Redis configuration missing")]
    ConfigMissing,
    #[error("store returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("store request timed out")]
    Timeout,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

/// Message returned for store failures; the upstream body stays in the logs.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to increment counter";

/// Fallback when an error renders to an empty string.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

impl VisitorError {
    /// Map internal error to a stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VisitorError::ConfigMissing => ClientCode::ConfigMissing,
            VisitorError::Upstream { .. } => ClientCode::Upstream,
            VisitorError::Timeout => ClientCode::Timeout,
            VisitorError::Transport(_) => ClientCode::Transport,
            VisitorError::Decode(_) => ClientCode::Decode,
            VisitorError::MethodNotAllowed => ClientCode::MethodNotAllowed,
            VisitorError::BadRequest(_) => ClientCode::BadRequest,
            VisitorError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            VisitorError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Text placed in the `error` field of the JSON response.
    ///
    /// Store failures (bad status or timeout) collapse to one generic
    /// message. Everything else reports its own text.
    pub fn public_message(&self) -> String {
        match self {
            VisitorError::Upstream { .. } | VisitorError::Timeout => {
                UPSTREAM_FAILURE_MESSAGE.to_string()
            }
            other => {
                let msg = other.to_string();
                if msg.trim().is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    msg
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_body_never_leaks() {
        let e = VisitorError::Upstream {
            status: 401,
            body: "{\"error\":\"WRONGPASS invalid token\"}".into(),
        };
        assert_eq!(e.public_message(), "Failed to increment counter");
        assert_eq!(e.client_code(), ClientCode::Upstream);
    }

    #[test]
    fn timeout_reads_as_store_failure() {
        assert_eq!(VisitorError::Timeout.public_message(), UPSTREAM_FAILURE_MESSAGE);
    }

    #[test]
    fn empty_message_falls_back() {
        assert_eq!(VisitorError::Transport(String::new()).public_message(), "Unknown error");
        assert_eq!(
            VisitorError::Transport("connection refused".into()).public_message(),
            "connection refused"
        );
    }

    #[test]
    fn config_missing_message_is_stable() {
        assert_eq!(VisitorError::ConfigMissing.public_message(), "Redis configuration missing");
    }
}
