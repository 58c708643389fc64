//! Request error types.

use thiserror::Error;

/// Failure of a backend request. Display yields the user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RequestError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{message}")]
    Network { message: String },

    #[error("{message}")]
    MalformedBody { message: String },
}

impl RequestError {
    /// Creates error for a non-success status; 404 maps to `NotFound`.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 {
            Self::NotFound { message }
        } else {
            Self::Status { status, message }
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates error for a body that could not be encoded or decoded.
    #[must_use]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Status { message, .. }
            | Self::Network { message }
            | Self::MalformedBody { message } => message,
        }
    }

    /// Returns whether the resource does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
