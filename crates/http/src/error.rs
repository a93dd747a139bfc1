//! Client error types.

use serde_json::Value;
use thiserror::Error;

/// Client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected our credentials. Callers treat this as a
    /// cue to re-run the session check rather than surface the raw error.
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::Forbidden(_)
        )
    }
}

/// Flatten a Django REST framework error body into `field: message` lines.
///
/// Field errors arrive as `{"field": ["msg", ...]}`, possibly nested for
/// related objects (`{"resident": {"cabin_number": ["msg"]}}`). Nested keys
/// are joined with dots; multiple messages per field with spaces.
pub fn flatten_field_errors(body: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    if let Value::Object(map) = body {
        collect_errors("", map, &mut lines);
    }
    lines
}

fn collect_errors(prefix: &str, map: &serde_json::Map<String, Value>, lines: &mut Vec<String>) {
    for (key, value) in map {
        match value {
            Value::Array(messages) => {
                let joined = messages
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("{prefix}{key}: {joined}"));
            }
            Value::Object(nested) => {
                let nested_prefix = format!("{prefix}{key}.");
                collect_errors(&nested_prefix, nested, lines);
            }
            Value::String(message) => {
                lines.push(format!("{prefix}{key}: {message}"));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_flat_field_errors() {
        let body = json!({
            "username": ["A user with that username already exists."],
            "email": ["Enter a valid email address.", "This field is required."]
        });
        let lines = flatten_field_errors(&body);
        assert!(lines.contains(&"username: A user with that username already exists.".to_string()));
        assert!(lines.contains(
            &"email: Enter a valid email address. This field is required.".to_string()
        ));
    }

    #[test]
    fn flattens_nested_field_errors() {
        let body = json!({
            "resident": { "cabin_number": ["This field is required."] }
        });
        assert_eq!(
            flatten_field_errors(&body),
            vec!["resident.cabin_number: This field is required.".to_string()]
        );
    }

    #[test]
    fn flattens_detail_message() {
        let body = json!({ "detail": "Token is invalid or expired" });
        assert_eq!(
            flatten_field_errors(&body),
            vec!["detail: Token is invalid or expired".to_string()]
        );
    }

    #[test]
    fn auth_expired_predicate() {
        assert!(ClientError::AuthenticationFailed("x".into()).is_auth_expired());
        assert!(ClientError::Forbidden("x".into()).is_auth_expired());
        assert!(!ClientError::NotFound("x".into()).is_auth_expired());
    }
}
