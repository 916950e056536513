//! Career paths and roadmaps.

use serde::{Deserialize, Serialize};

use super::course::CourseDetails;
use super::ids::EntityId;

/// An ordered sequence of courses forming a guided track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadMap {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Position within a career path.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_enrolled: Option<bool>,
    #[serde(default)]
    pub courses: Vec<CourseDetails>,
}

impl RoadMap {
    /// True only when the backend confirmed enrollment.
    pub fn enrolled(&self) -> bool {
        self.is_enrolled.unwrap_or(false)
    }

    /// Lessons across every course of the roadmap.
    pub fn total_lessons(&self) -> usize {
        self.courses.iter().map(CourseDetails::total_lessons).sum()
    }

    /// Minutes across every course of the roadmap.
    pub fn total_duration(&self) -> u32 {
        self.courses
            .iter()
            .map(CourseDetails::total_duration)
            .fold(0u32, u32::saturating_add)
    }
}

/// A collection of roadmaps leading to a professional outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Absent in listing responses.
    #[serde(default)]
    pub roadmaps: Option<Vec<RoadMap>>,
    #[serde(default)]
    pub is_enrolled: Option<bool>,
}

impl CareerPath {
    /// True only when the backend confirmed enrollment.
    pub fn enrolled(&self) -> bool {
        self.is_enrolled.unwrap_or(false)
    }

    /// Roadmaps by `order`; roadmaps without one follow in array position.
    pub fn roadmaps_in_order(&self) -> Vec<&RoadMap> {
        let mut roadmaps: Vec<&RoadMap> = self.roadmaps.iter().flatten().collect();
        roadmaps.sort_by_key(|r| r.order.unwrap_or(i64::MAX));
        roadmaps
    }

    /// Number of courses across all roadmaps.
    pub fn total_courses(&self) -> usize {
        self.roadmaps
            .iter()
            .flatten()
            .map(|r| r.courses.len())
            .sum()
    }
}
