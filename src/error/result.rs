//! Result type alias and context helpers.

use super::context::ErrorContext;
use super::learn_error::LearnError;

/// Type alias for Results using LearnError.
pub type LearnResult<T> = Result<T, LearnError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// ```ignore
    /// use learnpath::error::{ErrorContext, ResultExt};
    ///
    /// let course = client
    ///     .get_course("c1")
    ///     .await
    ///     .context(ErrorContext::new("show course").with_entity_id("c1"))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> LearnResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> LearnResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<LearnError>,
{
    fn context(self, ctx: ErrorContext) -> LearnResult<T> {
        self.map_err(|e| Into::<LearnError>::into(e).with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> LearnResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| Into::<LearnError>::into(e).with_context(f()))
    }
}
