//! Client error types

use reqwest::StatusCode;
use shared::{EntityKind, ValidationError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connect, timeout, TLS, body read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Server answered 401
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Mock store has no record with this id
    #[error("{kind} com ID {id} não encontrado")]
    NotFound { kind: EntityKind, id: i64 },

    /// Field validation rejected the payload before it was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Token storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Transport failures and 5xx, the failures a mock can stand in for
    pub fn is_outage(&self) -> bool {
        match self {
            ClientError::Http(_) => true,
            ClientError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind_and_id() {
        let err = ClientError::NotFound {
            kind: EntityKind::Produto,
            id: 42,
        };
        assert_eq!(err.to_string(), "Produto com ID 42 não encontrado");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_outage_classification() {
        let server = ClientError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream".into(),
        };
        let client = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            message: "bad".into(),
        };
        assert!(server.is_outage());
        assert!(!client.is_outage());
        assert!(!ClientError::Unauthorized("x".into()).is_outage());
        assert_eq!(
            ClientError::Unauthorized("x".into()).status(),
            Some(StatusCode::UNAUTHORIZED)
        );
    }
}
