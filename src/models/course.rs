//! Course summaries and course details.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::content::{Material, Module};
use super::duration::FreeformDuration;
use super::ids::EntityId;
use super::stats::{CourseStats, ModuleStats, Progress};

/// Course difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Human label.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog tag block attached to a course.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTags {
    /// Advertised hours. The wire name keeps the backend's spelling.
    #[serde(default, rename = "durtionsHours")]
    pub duration_hours: Option<f64>,
    #[serde(default, rename = "unitesNum")]
    pub units: Option<u32>,
    #[serde(default)]
    pub course_type: Option<String>,
}

/// Course summary as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub duration: Option<FreeformDuration>,
    #[serde(default)]
    pub course_type: Option<String>,
    #[serde(default, rename = "unitesNum")]
    pub units: Option<u32>,
    #[serde(default)]
    pub tags: Option<CourseTags>,
    /// Enrollment of the current user; `None` means it was not checked.
    #[serde(default)]
    pub is_enrolled: Option<bool>,
}

impl Course {
    /// True only when the backend confirmed enrollment.
    pub fn enrolled(&self) -> bool {
        self.is_enrolled.unwrap_or(false)
    }

    /// Advertised hours: the tag block first, then the course duration.
    pub fn advertised_hours(&self) -> Option<u32> {
        let from_tags = self
            .tags
            .as_ref()
            .and_then(|t| t.duration_hours)
            .and_then(|h| FreeformDuration::Number(h).minutes());
        from_tags.or_else(|| self.duration.as_ref().and_then(FreeformDuration::minutes))
    }

    /// Course type from the course itself or its tags.
    pub fn kind_label(&self) -> Option<&str> {
        self.course_type
            .as_deref()
            .or_else(|| self.tags.as_ref().and_then(|t| t.course_type.as_deref()))
    }
}

/// Server-side progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    #[serde(default)]
    pub completed_lessons: u32,
}

/// A course with its full module, lesson and material tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Server summary; informational only, completion is derived from the
    /// material flags.
    #[serde(default)]
    pub progress: Option<CourseProgress>,
}

impl CourseDetails {
    /// Course id.
    pub fn id(&self) -> &EntityId {
        &self.course.id
    }

    /// True only when the backend confirmed enrollment.
    pub fn enrolled(&self) -> bool {
        self.course.enrolled()
    }

    /// Module ids in sequence.
    pub fn module_ids(&self) -> Vec<EntityId> {
        self.modules.iter().map(|m| m.id.clone()).collect()
    }

    /// Sum of lesson counts across modules.
    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(Module::lesson_count).sum()
    }

    /// Sum of parsable material durations across the tree, in minutes.
    pub fn total_duration(&self) -> u32 {
        self.modules
            .iter()
            .map(Module::duration_minutes)
            .fold(0u32, u32::saturating_add)
    }

    /// Whole hours in [`Self::total_duration`].
    pub fn total_hours(&self) -> u32 {
        self.total_duration() / 60
    }

    /// Lessons whose materials are all completed.
    pub fn completed_lessons(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .filter(|l| l.is_completed())
            .count()
    }

    /// Lesson count the server reported, if it sent a summary.
    pub fn reported_completed_lessons(&self) -> Option<u32> {
        self.progress.map(|p| p.completed_lessons)
    }

    /// Completion percentage in [0, 100].
    pub fn progress_percentage(&self) -> u8 {
        Progress::new(self.completed_lessons(), self.total_lessons()).percentage()
    }

    /// Per-module statistics in module order.
    pub fn module_stats(&self) -> Vec<ModuleStats> {
        self.modules.iter().map(ModuleStats::from_module).collect()
    }

    /// All derived statistics at once.
    pub fn stats(&self) -> CourseStats {
        CourseStats::compute(self)
    }

    /// Find a material anywhere in the tree.
    pub fn find_material(&self, id: &str) -> Option<&Material> {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .flat_map(|l| l.materials.iter())
            .find(|m| m.id == id)
    }

    /// Find a material anywhere in the tree, mutably.
    pub fn find_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.modules
            .iter_mut()
            .flat_map(|m| m.lessons.iter_mut())
            .flat_map(|l| l.materials.iter_mut())
            .find(|m| m.id == id)
    }
}
