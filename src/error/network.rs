//! Transport-level error types.
//!
//! A `NetworkError` means the request never produced a response: the
//! connection failed, timed out, or the URL could not be used.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// The URL could not be turned into a request.
    InvalidUrl { url: String },

    /// The response body could not be read.
    BodyRead { message: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    ///
    /// Nothing in this crate retries on its own; callers use this to decide
    /// whether to offer a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::BodyRead { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the course server. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { .. } => {
                "The course server took too long to respond. Please try again.".to_string()
            }
            NetworkError::InvalidUrl { url } => {
                format!("The server address '{}' is not valid. Please check your configuration.", url)
            }
            NetworkError::BodyRead { .. } => {
                "The response from the server was interrupted. Please try again.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::BodyRead { .. } => "E_NET_BODY",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL '{}'", url),
            NetworkError::BodyRead { message } => write!(f, "Failed to read body: {}", message),
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport failure from the HTTP seam.
pub fn classify_http_error(err: &HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: message.clone(),
        },
        HttpError::Timeout(message) => NetworkError::Timeout {
            url: url.to_string(),
            message: message.clone(),
        },
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
            url: url.to_string(),
        },
        HttpError::Io(message) => NetworkError::BodyRead {
            message: message.clone(),
        },
        HttpError::Cancelled => NetworkError::Cancelled,
        HttpError::Other(message) => NetworkError::Other {
            message: message.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_retryable() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:8000".to_string(),
            message: "Connection refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
        assert!(err.to_string().contains("localhost:8000"));
    }

    #[test]
    fn test_invalid_url_is_not_retryable() {
        let err = NetworkError::InvalidUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(!err.is_retryable());
        assert!(err.user_message().contains("ftp://nope"));
    }

    #[test]
    fn test_classify_http_error() {
        let url = "http://api.test/courses/c1";
        assert!(matches!(
            classify_http_error(&HttpError::ConnectionFailed("refused".into()), url),
            NetworkError::ConnectionFailed { .. }
        ));
        assert!(matches!(
            classify_http_error(&HttpError::Timeout("30s".into()), url),
            NetworkError::Timeout { .. }
        ));
        assert_eq!(
            classify_http_error(&HttpError::InvalidUrl("bad".into()), url),
            NetworkError::InvalidUrl {
                url: url.to_string()
            }
        );
        assert_eq!(
            classify_http_error(&HttpError::Cancelled, url),
            NetworkError::Cancelled
        );
    }
}
