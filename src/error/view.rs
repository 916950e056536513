//! Errors raised by the view-state machines before or around an API call.

use thiserror::Error;

use super::api::ApiError;
use super::category::ErrorCategory;

/// A view action that could not be carried out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// The action needs a loaded course.
    #[error("course is not loaded")]
    CourseNotLoaded,

    /// No material with this id exists in the loaded course.
    #[error("material '{id}' is not part of this course")]
    UnknownMaterial { id: String },

    /// The material is locked until the course is enrolled.
    #[error("material '{id}' is locked until you enroll")]
    MaterialLocked { id: String },

    /// The catalog holds no entry with this id.
    #[error("'{id}' is not in the loaded catalog")]
    UnknownEntry { id: String },

    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ViewError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewError::Api(err) => err.category(),
            ViewError::MaterialLocked { .. } => ErrorCategory::User,
            ViewError::CourseNotLoaded
            | ViewError::UnknownMaterial { .. }
            | ViewError::UnknownEntry { .. } => ErrorCategory::Client,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ViewError::Api(err) => err.user_message(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::CourseNotLoaded => "E_VIEW_NOT_LOADED",
            ViewError::UnknownMaterial { .. } => "E_VIEW_MATERIAL",
            ViewError::MaterialLocked { .. } => "E_VIEW_LOCKED",
            ViewError::UnknownEntry { .. } => "E_VIEW_ENTRY",
            ViewError::Api(err) => err.error_code(),
        }
    }
}
