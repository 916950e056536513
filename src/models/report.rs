//! Aggregate progress report.

use serde::{Deserialize, Serialize};

use super::ids::EntityId;

/// Progress report across every enrolled course.
///
/// The report's structure is owned by the backend; it is kept as raw JSON
/// with a few best-effort accessors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoursesReport(pub serde_json::Value);

impl CoursesReport {
    /// Raw JSON value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Top-level field by name.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Numeric top-level field, or the length of an array field.
    pub fn count(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::Array(items) => Some(items.len() as u64),
            _ => None,
        }
    }

    /// Ids listed under `completedCourses`, given either as ids or as
    /// objects with an `id` field.
    pub fn completed_course_ids(&self) -> Vec<EntityId> {
        let Some(serde_json::Value::Array(items)) = self.0.get("completedCourses") else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(EntityId::from(s.as_str())),
                serde_json::Value::Number(n) => Some(EntityId::from(n.to_string())),
                serde_json::Value::Object(obj) => obj
                    .get("id")
                    .and_then(|id| serde_json::from_value::<EntityId>(id.clone()).ok()),
                _ => None,
            })
            .collect()
    }

    /// Top-level fields in key order, for generic display.
    pub fn entries(&self) -> Vec<(&str, &serde_json::Value)> {
        match self.0 {
            serde_json::Value::Object(ref map) => {
                map.iter().map(|(k, v)| (k.as_str(), v)).collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counts() {
        let report = CoursesReport(json!({
            "enrolledCourses": [{"id": "c1"}, {"id": "c2"}],
            "totalHours": 14,
            "streak": "n/a"
        }));
        assert_eq!(report.count("enrolledCourses"), Some(2));
        assert_eq!(report.count("totalHours"), Some(14));
        assert_eq!(report.count("streak"), None);
        assert_eq!(report.count("missing"), None);
    }

    #[test]
    fn test_completed_course_ids_mixed_forms() {
        let report = CoursesReport(json!({
            "completedCourses": ["c1", 2, {"id": "c3", "title": "x"}, {"title": "no id"}, null]
        }));
        let ids = report.completed_course_ids();
        assert_eq!(ids, vec![EntityId::from("c1"), EntityId::from("2"), EntityId::from("c3")]);
    }

    #[test]
    fn test_non_object_report() {
        let report = CoursesReport(json!([1, 2]));
        assert!(report.entries().is_empty());
        assert!(report.completed_course_ids().is_empty());
    }
}
