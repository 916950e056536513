//! Error context for enriched error information.

use chrono::{DateTime, Utc};
use std::fmt;

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Course, roadmap, career path or material id involved, if any.
    pub entity_id: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Optional correlation ID for tracing across services.
    pub correlation_id: Option<String>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            entity_id: None,
            timestamp: Utc::now(),
            correlation_id: None,
        }
    }

    /// Set the entity id for this context.
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Set the correlation ID for this context.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation={}", self.operation)?;
        if let Some(ref id) = self.entity_id {
            write!(f, ", id={}", id)?;
        }
        if let Some(ref correlation_id) = self.correlation_id {
            write!(f, ", correlation_id={}", correlation_id)?;
        }
        write!(f, ", at={}", self.timestamp.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
