//! Error types for streamgraph
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! `Error::kind()` collapses the variants into the coarse categories callers
//! usually branch on: validation, mode gating, bad arguments, service failure.

use crate::types::DataMode;
use thiserror::Error;

/// The main error type for streamgraph
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Caller-side Errors
    // ============================================================================
    #[error("invalid filter: {message}")]
    Validation { message: String },

    #[error("indexed queries are not supported in {mode} mode")]
    UnsupportedMode { mode: DataMode },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("subgraph request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("subgraph returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("subgraph returned errors: {message}")]
    Remote { message: String },

    #[error("malformed subgraph response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error category, one per failure mode in the public contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Filter failed entity-specific shape/range checks
    Validation,
    /// Operation attempted while configured for ledger-only access
    UnsupportedMode,
    /// Caller-supplied parameter violates a hard precondition
    InvalidArgument,
    /// The remote transport call failed or returned a transport-level error
    Service,
    /// Local configuration problem
    Config,
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unsupported-mode error
    pub fn unsupported_mode(mode: DataMode) -> Self {
        Self::UnsupportedMode { mode }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a remote (GraphQL-level) error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The coarse category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::UnsupportedMode { .. } => ErrorKind::UnsupportedMode,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::Transport(_)
            | Error::Status { .. }
            | Error::Remote { .. }
            | Error::Decode(_)
            | Error::InvalidUrl(_) => ErrorKind::Service,
            Error::Config { .. } | Error::YamlParse(_) | Error::Io(_) => ErrorKind::Config,
        }
    }

    /// Check if this error came from the remote service rather than the caller
    pub fn is_service(&self) -> bool {
        self.kind() == ErrorKind::Service
    }
}

/// Result type alias for streamgraph
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("account must be a hex address");
        assert_eq!(
            err.to_string(),
            "invalid filter: account must be a hex address"
        );

        let err = Error::unsupported_mode(DataMode::LedgerOnly);
        assert_eq!(
            err.to_string(),
            "indexed queries are not supported in ledger-only mode"
        );

        let err = Error::status(502, "bad gateway");
        assert_eq!(err.to_string(), "subgraph returned HTTP 502: bad gateway");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(
            Error::unsupported_mode(DataMode::LedgerOnly).kind(),
            ErrorKind::UnsupportedMode
        );
        assert_eq!(
            Error::invalid_argument("x").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::remote("boom").kind(), ErrorKind::Service);
        assert_eq!(Error::status(500, "").kind(), ErrorKind::Service);
        assert_eq!(Error::config("x").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_is_service() {
        assert!(Error::remote("x").is_service());
        assert!(!Error::validation("x").is_service());
    }
}
