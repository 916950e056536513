//! Enrollment status and outcomes.

use std::fmt;

use crate::error::ApiError;
use crate::models::EntityId;

/// Where the current user stands with a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollmentStatus {
    #[default]
    NotEnrolled,
    /// A request is in flight.
    Enrolling,
    Enrolled,
}

impl EnrollmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::NotEnrolled => "not enrolled",
            EnrollmentStatus::Enrolling => "enrolling",
            EnrollmentStatus::Enrolled => "enrolled",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed enrollment attempt, kept so the presentation layer can show it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentFailure {
    pub course_id: EntityId,
    /// Message fit for display.
    pub reason: String,
    pub error: ApiError,
}

impl EnrollmentFailure {
    pub fn new(course_id: EntityId, error: ApiError) -> Self {
        Self {
            course_id,
            reason: error.user_message(),
            error,
        }
    }
}

impl fmt::Display for EnrollmentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enrollment in {} failed: {}", self.course_id, self.reason)
    }
}

/// Result of a start-course action.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum StartCourseOutcome {
    /// Navigation to the learning view was requested.
    Navigated(String),
    /// Another enrollment request is still in flight; nothing was done.
    AlreadyEnrolling,
    /// The course has not been loaded yet; nothing was done.
    NotLoaded,
    /// Enrollment failed and the status rolled back.
    Failed(EnrollmentFailure),
}

impl StartCourseOutcome {
    /// Requested path, when navigation happened.
    pub fn navigation(&self) -> Option<&str> {
        match self {
            StartCourseOutcome::Navigated(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StartCourseOutcome::Failed(_))
    }
}
