//! Unified error type for the learnpath crate.

use thiserror::Error;

use super::api::ApiError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::view::ViewError;

/// Crate-wide error.
///
/// Library operations return their specific error (`ApiError`,
/// `ViewError`, `ConfigError`); callers that juggle several of them convert
/// into `LearnError` and may attach an [`ErrorContext`].
#[derive(Debug, Error)]
pub enum LearnError {
    /// API client failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// View-state action failure.
    #[error(transparent)]
    View(#[from] ViewError),

    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wrapped error with additional context.
    #[error("{error} ({context})")]
    WithContext {
        error: Box<LearnError>,
        context: ErrorContext,
    },
}

impl LearnError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LearnError::Api(err) => err.category(),
            LearnError::View(err) => err.category(),
            LearnError::Config(_) => ErrorCategory::Configuration,
            LearnError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            LearnError::Api(ApiError::Transport { source, .. }) => source.is_retryable(),
            LearnError::WithContext { error, .. } => error.is_retryable(),
            other => other.category().is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LearnError::Api(err) => err.user_message(),
            LearnError::View(err) => err.user_message(),
            LearnError::Config(err) => err.to_string(),
            LearnError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LearnError::Api(err) => err.error_code(),
            LearnError::View(err) => err.error_code(),
            LearnError::Config(err) => err.error_code(),
            LearnError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, context: ErrorContext) -> Self {
        LearnError::WithContext {
            error: Box::new(self),
            context,
        }
    }

    /// The innermost context, if any was attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            LearnError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }
}
