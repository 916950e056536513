//! Response-shape errors.
//!
//! Raised when a response arrived with a success status but its body does
//! not decode into the expected entity, such as a material with a `type`
//! outside the known vocabulary.

use thiserror::Error;

/// The body of a successful response did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unexpected {entity} shape at line {line}, column {column}: {message}")]
pub struct ShapeError {
    /// Name of the entity being decoded (e.g. "CourseDetails").
    pub entity: &'static str,
    /// Decoder message.
    pub message: String,
    /// Line in the body where decoding stopped (1-based, 0 if unknown).
    pub line: usize,
    /// Column in the body where decoding stopped.
    pub column: usize,
}

impl ShapeError {
    /// Build from a serde_json decoding error.
    pub fn from_json(entity: &'static str, err: &serde_json::Error) -> Self {
        Self {
            entity,
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Check whether the failure was an unrecognised enum tag, which is
    /// how an unknown material type surfaces.
    pub fn is_unknown_variant(&self) -> bool {
        self.message.contains("unknown variant")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_position() {
        let err = serde_json::from_str::<Vec<u32>>("[1,\n\"x\"]").unwrap_err();
        let shape = ShapeError::from_json("CourseList", &err);
        assert_eq!(shape.entity, "CourseList");
        assert_eq!(shape.line, 2);
        assert!(shape.to_string().starts_with("unexpected CourseList shape"));
    }

    #[test]
    fn test_unknown_variant_detection() {
        #[derive(Debug, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum Kind {
            Video,
        }
        let err = serde_json::from_str::<Kind>("\"podcast\"").unwrap_err();
        assert!(ShapeError::from_json("Material", &err).is_unknown_variant());
    }
}
