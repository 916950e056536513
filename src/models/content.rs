//! Course content tree: modules, lessons and materials.
//!
//! A course owns its modules, a module owns its lessons and a lesson owns
//! its materials. Module order is array position; lessons carry an
//! explicit `order` that wins over array position.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::duration::FreeformDuration;
use super::ids::EntityId;

// ============================================================================
// Material
// ============================================================================

/// The unified material vocabulary.
///
/// Two vocabularies were in circulation (`video|code|quiz|text|audio` and
/// `quiz|video|resource`); every member of both is a kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Video,
    Code,
    Quiz,
    Text,
    Audio,
    Resource,
}

impl MaterialKind {
    /// All kinds in display order.
    pub const ALL: [MaterialKind; 6] = [
        MaterialKind::Video,
        MaterialKind::Code,
        MaterialKind::Quiz,
        MaterialKind::Text,
        MaterialKind::Audio,
        MaterialKind::Resource,
    ];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Video => "video",
            MaterialKind::Code => "code",
            MaterialKind::Quiz => "quiz",
            MaterialKind::Text => "text",
            MaterialKind::Audio => "audio",
            MaterialKind::Resource => "resource",
        }
    }

    /// Human label.
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Video => "Video",
            MaterialKind::Code => "Exercise",
            MaterialKind::Quiz => "Quiz",
            MaterialKind::Text => "Reading",
            MaterialKind::Audio => "Audio",
            MaterialKind::Resource => "Resource",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Length in minutes.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// Quiz payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDetails {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Downloadable or linked resource payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetails {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Kind-specific part of a material, discriminated by the `type` field.
///
/// A `type` outside [`MaterialKind`] fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialContent {
    Video {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video: Option<VideoDetails>,
    },
    Quiz {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quiz: Option<QuizDetails>,
    },
    Resource {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource: Option<ResourceDetails>,
    },
    Code,
    Text,
    Audio,
}

impl MaterialContent {
    /// The kind of this content.
    pub fn kind(&self) -> MaterialKind {
        match self {
            MaterialContent::Video { .. } => MaterialKind::Video,
            MaterialContent::Quiz { .. } => MaterialKind::Quiz,
            MaterialContent::Resource { .. } => MaterialKind::Resource,
            MaterialContent::Code => MaterialKind::Code,
            MaterialContent::Text => MaterialKind::Text,
            MaterialContent::Audio => MaterialKind::Audio,
        }
    }
}

/// Smallest consumable unit of course content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: EntityId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<FreeformDuration>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(flatten)]
    pub content: MaterialContent,
}

impl Material {
    /// The kind of this material.
    pub fn kind(&self) -> MaterialKind {
        self.content.kind()
    }

    /// Minutes this material takes, when the duration is parsable.
    ///
    /// Falls back to the video payload's numeric duration when the material
    /// itself has none.
    pub fn duration_minutes(&self) -> Option<u32> {
        if let Some(ref duration) = self.duration {
            return duration.minutes();
        }
        match self.content {
            MaterialContent::Video {
                video: Some(VideoDetails {
                    duration: Some(minutes),
                    ..
                }),
            } => FreeformDuration::Number(minutes).minutes(),
            _ => None,
        }
    }

    /// Display title: own title, then the payload title, then the kind label.
    pub fn display_title(&self) -> &str {
        if let Some(ref title) = self.title {
            return title;
        }
        let payload_title = match self.content {
            MaterialContent::Video { video: Some(ref v) } => v.title.as_deref(),
            MaterialContent::Resource {
                resource: Some(ref r),
            } => r.title.as_deref(),
            MaterialContent::Quiz { quiz: Some(ref q) } => q.question.as_deref(),
            _ => None,
        };
        payload_title.unwrap_or_else(|| self.kind().label())
    }

    /// A locked material opens only for enrolled users.
    pub fn is_accessible(&self, enrolled: bool) -> bool {
        !self.locked || enrolled
    }
}

// ============================================================================
// Lesson
// ============================================================================

/// A lesson inside a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display position within the module.
    pub order: i64,
    #[serde(default)]
    pub materials: Vec<Material>,
}

impl Lesson {
    /// Materials sorted by their `order`; unordered materials keep their
    /// array position after the ordered ones.
    pub fn materials_in_order(&self) -> Vec<&Material> {
        let mut materials: Vec<&Material> = self.materials.iter().collect();
        materials.sort_by_key(|m| m.order.unwrap_or(i64::MAX));
        materials
    }

    /// Number of materials marked completed.
    pub fn completed_materials(&self) -> usize {
        self.materials.iter().filter(|m| m.completed).count()
    }

    /// A lesson is completed once it has materials and all are completed.
    pub fn is_completed(&self) -> bool {
        !self.materials.is_empty() && self.materials.iter().all(|m| m.completed)
    }

    /// Sum of parsable material durations, in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.materials
            .iter()
            .filter_map(Material::duration_minutes)
            .fold(0u32, u32::saturating_add)
    }
}

// ============================================================================
// Module
// ============================================================================

/// An ordered group of lessons within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Module {
    /// Lessons sorted by their explicit `order`; ties keep array position.
    pub fn lessons_in_order(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    /// Number of lessons in this module.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Number of materials across all lessons.
    pub fn material_count(&self) -> usize {
        self.lessons.iter().map(|l| l.materials.len()).sum()
    }

    /// Number of completed materials across all lessons.
    pub fn completed_materials(&self) -> usize {
        self.lessons.iter().map(Lesson::completed_materials).sum()
    }

    /// Sum of parsable material durations, in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.lessons
            .iter()
            .map(Lesson::duration_minutes)
            .fold(0u32, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn material(value: serde_json::Value) -> Result<Material, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_every_kind_deserializes() {
        for kind in MaterialKind::ALL {
            let m = material(json!({"id": "a1", "type": kind.as_str()})).unwrap();
            assert_eq!(m.kind(), kind);
            assert!(!m.completed);
            assert!(!m.locked);
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = material(json!({"id": "a1", "type": "podcast"})).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn test_missing_type_is_rejected() {
        assert!(material(json!({"id": "a1", "title": "Intro"})).is_err());
    }

    #[test]
    fn test_video_payload_and_duration_fallback() {
        let m = material(json!({
            "id": 7,
            "type": "video",
            "video": {"id": "v1", "youtubeId": "abc", "title": "Welcome", "duration": 12}
        }))
        .unwrap();
        assert_eq!(m.id, "7");
        assert_eq!(m.duration_minutes(), Some(12));
        assert_eq!(m.display_title(), "Welcome");
    }

    #[test]
    fn test_own_duration_wins() {
        let m = material(json!({
            "id": "a1",
            "type": "video",
            "duration": "5 دقائق",
            "video": {"duration": 99}
        }))
        .unwrap();
        assert_eq!(m.duration_minutes(), Some(5));
    }

    #[test]
    fn test_display_title_falls_back_to_kind() {
        let m = material(json!({"id": "a1", "type": "code"})).unwrap();
        assert_eq!(m.display_title(), "Exercise");
    }

    #[test]
    fn test_serialization_keeps_type_tag() {
        let m = material(json!({"id": "a1", "type": "quiz", "title": "Check"})).unwrap();
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["type"], "quiz");
        assert_eq!(value["title"], "Check");
    }

    #[test]
    fn test_locked_material_access() {
        let m = material(json!({"id": "a1", "type": "text", "locked": true})).unwrap();
        assert!(!m.is_accessible(false));
        assert!(m.is_accessible(true));

        let open = material(json!({"id": "a2", "type": "text"})).unwrap();
        assert!(open.is_accessible(false));
    }

    #[test]
    fn test_lessons_follow_explicit_order() {
        let module: Module = serde_json::from_value(json!({
            "id": "m1",
            "title": "Basics",
            "lessons": [
                {"id": "l3", "name": "Third", "order": 3},
                {"id": "l1", "name": "First", "order": 1},
                {"id": "l2", "name": "Second", "order": 2}
            ]
        }))
        .unwrap();
        let ids: Vec<&str> = module.lessons_in_order().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_lesson_completion_needs_materials() {
        let empty: Lesson =
            serde_json::from_value(json!({"id": "l1", "name": "Empty", "order": 1})).unwrap();
        assert!(!empty.is_completed());

        let done: Lesson = serde_json::from_value(json!({
            "id": "l2", "name": "Done", "order": 2,
            "materials": [
                {"id": "a1", "type": "video", "completed": true},
                {"id": "a2", "type": "quiz", "completed": true}
            ]
        }))
        .unwrap();
        assert!(done.is_completed());
    }

    #[test]
    fn test_materials_in_order_puts_unordered_last() {
        let lesson: Lesson = serde_json::from_value(json!({
            "id": "l1", "name": "Mixed", "order": 1,
            "materials": [
                {"id": "a", "type": "text"},
                {"id": "b", "type": "video", "order": 2},
                {"id": "c", "type": "quiz", "order": 1}
            ]
        }))
        .unwrap();
        let ids: Vec<&str> = lesson.materials_in_order().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}
