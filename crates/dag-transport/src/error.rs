//! Error taxonomy for session queries.
//!
//! | Variant | Origin | Retried |
//! |---------|--------|---------|
//! | [`TransportError`] | connection, HTTP status, unreadable body | by [`HttpSession`](crate::HttpSession), when [`TransportError::is_retryable`] |
//! | [`DecodeError`] | response shape does not match the selection | never |
//! | [`QueryError::Graphql`] | the engine rejected or failed the query | never |

use serde_json::Value;
use thiserror::Error;

/// Any failure resolving a leaf selection.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("GraphQL error at {}: {message}", .path.as_deref().unwrap_or("<root>"))]
    Graphql {
        message: String,
        path: Option<String>,
    },
}

impl QueryError {
    pub fn is_transport(&self) -> bool {
        matches!(self, QueryError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, QueryError::Decode(_))
    }
}

/// The session could not complete the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// `retryable` is false for failures a retry cannot fix (bad URL, unknown scheme).
    #[error("request to {endpoint} failed: {message}")]
    Request {
        endpoint: String,
        message: String,
        retryable: bool,
    },

    #[error("{endpoint} responded with HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("failed to read response body: {message}")]
    Body { message: String },
}

impl TransportError {
    /// Transient connection failures, rate limiting and server-side errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Request { retryable, .. } => *retryable,
            TransportError::Status { status, .. } => *status == 429 || *status >= 500,
            TransportError::Body { .. } => false,
        }
    }
}

/// The response did not have the shape the selection asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no data in GraphQL response")]
    MissingData,

    #[error("field `{path}` missing from response")]
    MissingField { path: String },

    #[error("object at `{path}` is null")]
    NullObject { path: String },

    #[error("field `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid JSON payload: {message}")]
    InvalidJson { message: String },

    #[error("unknown {type_name} value `{value}`")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },
}

impl DecodeError {
    pub fn mismatch(path: &str, expected: &'static str, found: &Value) -> Self {
        DecodeError::TypeMismatch {
            path: path.to_string(),
            expected,
            found: json_kind(found),
        }
    }
}

/// Short name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        let status = |status| TransportError::Status {
            endpoint: "http://127.0.0.1:8080/query".into(),
            status,
            body: String::new(),
        };
        assert!(status(503).is_retryable());
        assert!(status(429).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(!TransportError::Body {
            message: "eof".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_request_retryability_follows_flag() {
        let request = |retryable| TransportError::Request {
            endpoint: "ftp://127.0.0.1/query".into(),
            message: "Unknown Scheme".into(),
            retryable,
        };
        assert!(request(true).is_retryable());
        assert!(!request(false).is_retryable());
    }

    #[test]
    fn test_graphql_error_display() {
        let err = QueryError::Graphql {
            message: "no such field".into(),
            path: Some("loadFunctionArgFromID.name".into()),
        };
        assert_eq!(
            err.to_string(),
            "GraphQL error at loadFunctionArgFromID.name: no such field"
        );
        let rootless = QueryError::Graphql {
            message: "syntax".into(),
            path: None,
        };
        assert_eq!(rootless.to_string(), "GraphQL error at <root>: syntax");
    }
}
