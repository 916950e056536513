//! Errors returned by the course API client.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::shape::ShapeError;

/// Longest plain-text body that is still treated as a server message.
const MAX_PLAIN_MESSAGE_LEN: usize = 512;

/// Failure of a single API operation.
///
/// Every variant carries the operation label (`get_course`,
/// `enroll_course`, ...) so a logged or displayed error always names the
/// call that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: NetworkError,
    },

    /// The server answered with a non-success status.
    #[error("{operation} failed with HTTP {status}{}", message_suffix(.message))]
    Http {
        operation: &'static str,
        status: u16,
        message: Option<String>,
    },

    /// The response body did not decode into the expected type.
    #[error("{operation} returned {source}")]
    Shape {
        operation: &'static str,
        #[source]
        source: ShapeError,
    },
}

impl ApiError {
    /// Label of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Http { operation, .. }
            | ApiError::Shape { operation, .. } => operation,
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the server in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Check for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport { .. } => ErrorCategory::Network,
            ApiError::Http { status, .. } => ErrorCategory::from_status(*status),
            ApiError::Shape { .. } => ErrorCategory::Data,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { source, .. } => source.error_code(),
            ApiError::Http { .. } => "E_API_HTTP",
            ApiError::Shape { .. } => "E_API_SHAPE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { source, .. } => source.user_message(),
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http { status, .. } => match *status {
                401 => "Please sign in again.".to_string(),
                403 => "You don't have access to this content.".to_string(),
                404 => "The requested content was not found.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::Shape { .. } => {
                "Received unexpected data from the server.".to_string()
            }
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Accepts `{"message": "..."}`, `{"message": ["...", "..."]}`,
/// `{"error": "..."}` and short plain-text bodies.
pub fn extract_server_message(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        let message = match value.get("message") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => {
                let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        };
        return message
            .or_else(|| value.get("error").and_then(|e| e.as_str()).map(String::from))
            .filter(|m| !m.trim().is_empty());
    }

    let text = std::str::from_utf8(body).ok()?.trim();
    if text.is_empty() || text.len() > MAX_PLAIN_MESSAGE_LEN || text.starts_with('<') {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display_with_and_without_message() {
        let with = ApiError::Http {
            operation: "get_course",
            status: 404,
            message: Some("Course not found".to_string()),
        };
        assert_eq!(with.to_string(), "get_course failed with HTTP 404: Course not found");

        let without = ApiError::Http {
            operation: "get_course",
            status: 500,
            message: None,
        };
        assert_eq!(without.to_string(), "get_course failed with HTTP 500");
        assert_eq!(without.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_accessors() {
        let err = ApiError::Http {
            operation: "enroll_course",
            status: 404,
            message: Some("missing".to_string()),
        };
        assert_eq!(err.operation(), "enroll_course");
        assert!(err.is_not_found());
        assert_eq!(err.server_message(), Some("missing"));
        assert_eq!(err.user_message(), "missing");

        let transport = ApiError::Transport {
            operation: "list_courses",
            source: NetworkError::Cancelled,
        };
        assert_eq!(transport.status(), None);
        assert_eq!(transport.server_message(), None);
        assert_eq!(transport.category(), ErrorCategory::Network);
        assert_eq!(transport.error_code(), "E_NET_CANCEL");
    }

    #[test]
    fn test_extract_server_message_variants() {
        assert_eq!(
            extract_server_message(br#"{"message":"Course not found"}"#),
            Some("Course not found".to_string())
        );
        assert_eq!(
            extract_server_message(br#"{"message":["id must be a uuid","id is required"]}"#),
            Some("id must be a uuid; id is required".to_string())
        );
        assert_eq!(
            extract_server_message(br#"{"statusCode":500,"error":"Internal Server Error"}"#),
            Some("Internal Server Error".to_string())
        );
        assert_eq!(extract_server_message(br#"{"statusCode":500}"#), None);
        assert_eq!(extract_server_message(b"Bad Gateway"), Some("Bad Gateway".to_string()));
        assert_eq!(extract_server_message(b"<html>oops</html>"), None);
        assert_eq!(extract_server_message(b"   "), None);
    }
}
