//! Request payloads.

use serde::{Deserialize, Serialize};

use super::ids::EntityId;

/// Body of a material progress update.
///
/// `completed` is the only field the client sets; anything else the
/// backend accepts can ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MaterialPatch {
    /// Patch that sets the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            extra: serde_json::Map::new(),
        }
    }

    /// Add an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Parameters of a `PATCH /courses/progress/{courseId}/{materialId}` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchCourseProgressParams {
    pub course_id: EntityId,
    pub material_id: EntityId,
    pub user_id: EntityId,
    pub material: MaterialPatch,
}

impl PatchCourseProgressParams {
    /// Mark a material completed for a user.
    pub fn complete(
        course_id: impl Into<EntityId>,
        material_id: impl Into<EntityId>,
        user_id: impl Into<EntityId>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            material_id: material_id.into(),
            user_id: user_id.into(),
            material: MaterialPatch::completed(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_body() {
        let patch = MaterialPatch::completed(true).with_field("watchedSeconds", json!(120));
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"completed": true, "watchedSeconds": 120})
        );
    }

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(MaterialPatch::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_complete_params() {
        let params = PatchCourseProgressParams::complete("c1", "a1", "u1");
        assert_eq!(params.course_id, "c1");
        assert_eq!(params.material.completed, Some(true));
    }
}
