//! Failure normalization.
//!
//! The server reports failures in three shapes: a JSON object carrying a
//! `message` or `error` field, a JSON array of validation messages, or plain
//! text. All of them collapse into one [`ApiError`] kind whose `Display`
//! output is the single human-readable message shown to the user.

use serde_json::Value;
use thiserror::Error;

/// Fallback message when a failure carries no usable text.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Normalized failure from the transport layer.
///
/// Callers pattern-match on the kind; `to_string()` yields the display
/// message regardless of the original wire shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),
    /// A success response whose body could not be decoded.
    #[error("{0}")]
    Decode(String),
    /// The server rejected the request as invalid (400/422, or any status
    /// whose body was a JSON array of messages).
    #[error("{}", .messages.join(", "))]
    Validation { status: u16, messages: Vec<String> },
    /// 404.
    #[error("{0}")]
    NotFound(String),
    /// 409, typically a referential-integrity rejection.
    #[error("{0}")]
    Conflict(String),
    /// Any other non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Builds an error from a non-success response's status and body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Array(items)) => {
                // A list body is a validation payload whatever the status.
                let messages: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                if messages.is_empty() {
                    return Self::classify(status, String::new());
                }
                ApiError::Validation { status, messages }
            }
            Ok(Value::Object(map)) => {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("error").and_then(Value::as_str))
                    .map(str::to_string)
                    .unwrap_or_else(|| body.to_string());
                Self::classify(status, message)
            }
            _ => Self::classify(status, body.to_string()),
        }
    }

    fn classify(status: u16, message: String) -> Self {
        let message = if message.is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        };
        match status {
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            400 | 422 => ApiError::Validation {
                status,
                messages: vec![message],
            },
            _ => ApiError::Server { status, message },
        }
    }

    /// HTTP status code, where the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => None,
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(409),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            ApiError::Network(UNEXPECTED_ERROR.to_string())
        } else {
            ApiError::Network(message)
        }
    }
}

/// Reduces any error to one display string. Never panics.
pub fn normalize_error(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        UNEXPECTED_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_body_prefers_message_field() {
        let err = ApiError::from_response(400, r#"{"message":"SKU already exists"}"#);
        assert_eq!(err.to_string(), "SKU already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_object_body_falls_back_to_error_field() {
        let err = ApiError::from_response(500, r#"{"error":"boom"}"#);
        assert_eq!(err.to_string(), "boom");
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    fn test_object_body_without_known_field_uses_raw_text() {
        let body = r#"{"detail":"odd shape"}"#;
        let err = ApiError::from_response(500, body);
        assert_eq!(err.to_string(), body);
    }

    #[test]
    fn test_array_body_joins_messages() {
        let err = ApiError::from_response(
            400,
            r#"["name must not be blank","value must be positive"]"#,
        );
        assert_eq!(
            err.to_string(),
            "name must not be blank, value must be positive"
        );
        match err {
            ApiError::Validation { messages, .. } => assert_eq!(messages.len(), 2),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_array_body_is_validation_regardless_of_status() {
        let err = ApiError::from_response(500, r#"["broken"]"#);
        assert!(matches!(err, ApiError::Validation { status: 500, .. }));
    }

    #[test]
    fn test_plain_text_body_is_the_message() {
        let err = ApiError::from_response(404, "Entity not found");
        assert_eq!(err.to_string(), "Entity not found");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_conflict_status() {
        let err = ApiError::from_response(409, "Raw material is used by a product");
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_empty_body_falls_back() {
        let err = ApiError::from_response(500, "");
        assert_eq!(err.to_string(), UNEXPECTED_ERROR);
    }

    #[test]
    fn test_empty_array_body_falls_back() {
        let err = ApiError::from_response(400, "[]");
        assert_eq!(err.to_string(), UNEXPECTED_ERROR);
    }

    #[test]
    fn test_normalize_error_passes_description_through() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        assert_eq!(normalize_error(&err), "socket closed");
    }

    #[test]
    fn test_normalize_error_uses_the_structured_message() {
        let err = ApiError::from_response(400, r#"{"message":"SKU already exists"}"#);
        assert_eq!(normalize_error(&err), "SKU already exists");
    }
}
