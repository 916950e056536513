//! Derived course statistics.
//!
//! Nothing here is stored; every value is recomputed from the content tree
//! when asked for.

use super::content::Module;
use super::course::CourseDetails;
use super::ids::EntityId;

// ============================================================================
// Progress
// ============================================================================

/// A completed/total pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Create new progress tracker
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Rounded percentage, 0 when there is nothing to complete, clamped
    /// to 100.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.current as f64 / self.total as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Progress as a fraction string (e.g. "3/5").
    pub fn as_fraction(&self) -> String {
        format!("{}/{}", self.current, self.total)
    }

    /// Check if progress is complete
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}

// ============================================================================
// ModuleStats
// ============================================================================

/// Statistics for one module, as shown in its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStats {
    pub module_id: EntityId,
    pub lesson_count: usize,
    pub material_count: usize,
    pub completed_materials: usize,
    pub duration_minutes: u32,
}

impl ModuleStats {
    /// Compute statistics for a module.
    pub fn from_module(module: &Module) -> Self {
        Self {
            module_id: module.id.clone(),
            lesson_count: module.lesson_count(),
            material_count: module.material_count(),
            completed_materials: module.completed_materials(),
            duration_minutes: module.duration_minutes(),
        }
    }

    /// Completed materials over all materials.
    pub fn progress(&self) -> Progress {
        Progress::new(self.completed_materials, self.material_count)
    }

    /// Module completion percentage, by material.
    pub fn percentage(&self) -> u8 {
        self.progress().percentage()
    }
}

// ============================================================================
// CourseStats
// ============================================================================

/// Every derived value of a course in one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStats {
    pub module_count: usize,
    pub total_lessons: usize,
    pub total_materials: usize,
    pub completed_materials: usize,
    pub completed_lessons: usize,
    pub reported_completed_lessons: Option<u32>,
    pub total_duration_minutes: u32,
    pub progress_percentage: u8,
}

impl CourseStats {
    /// Compute statistics for a course.
    pub fn compute(course: &CourseDetails) -> Self {
        let modules: Vec<ModuleStats> = course.module_stats();
        Self {
            module_count: modules.len(),
            total_lessons: course.total_lessons(),
            total_materials: modules.iter().map(|m| m.material_count).sum(),
            completed_materials: modules.iter().map(|m| m.completed_materials).sum(),
            completed_lessons: course.completed_lessons(),
            reported_completed_lessons: course.reported_completed_lessons(),
            total_duration_minutes: course.total_duration(),
            progress_percentage: course.progress_percentage(),
        }
    }

    /// Lesson-level progress.
    pub fn lesson_progress(&self) -> Progress {
        Progress::new(self.completed_lessons, self.total_lessons)
    }

    /// True when the server summary disagrees with the material flags.
    pub fn has_progress_mismatch(&self) -> bool {
        self.reported_completed_lessons
            .is_some_and(|reported| reported as usize != self.completed_lessons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(Progress::new(0, 0).percentage(), 0);
        assert_eq!(Progress::new(1, 3).percentage(), 33);
        assert_eq!(Progress::new(2, 3).percentage(), 67);
        assert_eq!(Progress::new(1, 2).percentage(), 50);
        assert_eq!(Progress::new(3, 3).percentage(), 100);
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert_eq!(Progress::new(7, 3).percentage(), 100);
    }

    #[test]
    fn test_percentage_within_bounds_for_all_small_inputs() {
        for total in 1..=40usize {
            for current in 0..=total {
                let pct = Progress::new(current, total).percentage();
                let expected = (current as f64 / total as f64 * 100.0).round() as u8;
                assert_eq!(pct, expected);
                assert!(pct <= 100);
            }
        }
    }

    #[test]
    fn test_fraction_and_complete() {
        let p = Progress::new(3, 5);
        assert_eq!(p.as_fraction(), "3/5");
        assert!(!p.is_complete());
        assert!(Progress::new(5, 5).is_complete());
        assert!(!Progress::new(0, 0).is_complete());
    }

    #[test]
    fn test_course_stats_snapshot() {
        let course: CourseDetails = serde_json::from_value(json!({
            "id": "c1",
            "title": "Stats",
            "progress": {"completedLessons": 2},
            "modules": [
                {"id": "m1", "title": "M1", "lessons": [
                    {"id": "l1", "name": "L1", "order": 1, "materials": [
                        {"id": "a1", "type": "video", "duration": "10", "completed": true},
                        {"id": "a2", "type": "quiz", "duration": "5", "completed": true}
                    ]},
                    {"id": "l2", "name": "L2", "order": 2, "materials": [
                        {"id": "a3", "type": "text", "duration": "15"}
                    ]}
                ]},
                {"id": "m2", "title": "M2", "lessons": []}
            ]
        }))
        .unwrap();

        let stats = course.stats();
        assert_eq!(stats.module_count, 2);
        assert_eq!(stats.total_lessons, 2);
        assert_eq!(stats.total_materials, 3);
        assert_eq!(stats.completed_materials, 2);
        assert_eq!(stats.completed_lessons, 1);
        assert_eq!(stats.total_duration_minutes, 30);
        assert_eq!(stats.progress_percentage, 50);
        assert!(stats.has_progress_mismatch());

        let modules = course.module_stats();
        assert_eq!(modules[0].percentage(), 67);
        assert_eq!(modules[1].percentage(), 0);
        assert_eq!(modules[1].lesson_count, 0);
    }
}
