//! Catalog page state: course, roadmap and career path listings.

use crate::api::{CoursesClient, EnrollmentAck};
use crate::error::{ApiError, ViewError};
use crate::models::{CareerPath, Course, CoursesReport, EntityId, RoadMap};

// ============================================================================
// Loadable
// ============================================================================

/// Fetch state of one listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(err) => Loadable::Failed(err.user_message()),
        }
    }
}

// ============================================================================
// CatalogTab
// ============================================================================

/// Course list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    #[default]
    All,
    /// Courses the user is enrolled in.
    Started,
    /// Enrolled courses the report lists as completed.
    Done,
}

impl CatalogTab {
    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogTab::All => "All",
            CatalogTab::Started => "Started",
            CatalogTab::Done => "Done",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CatalogTab::All => CatalogTab::Started,
            CatalogTab::Started => CatalogTab::Done,
            CatalogTab::Done => CatalogTab::All,
        }
    }

    /// Check if a course belongs on this tab.
    pub fn matches(&self, course: &Course, completed: &[EntityId]) -> bool {
        match self {
            CatalogTab::All => true,
            CatalogTab::Started => course.enrolled(),
            CatalogTab::Done => course.enrolled() && completed.contains(&course.id),
        }
    }
}

impl std::str::FromStr for CatalogTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CatalogTab::All),
            "started" => Ok(CatalogTab::Started),
            "done" => Ok(CatalogTab::Done),
            other => Err(format!("unknown tab '{}' (expected all, started or done)", other)),
        }
    }
}

// ============================================================================
// CatalogViewState
// ============================================================================

/// Listings shown on the catalog pages.
pub struct CatalogViewState {
    client: CoursesClient,
    pub courses: Loadable<Vec<Course>>,
    pub road_maps: Loadable<Vec<RoadMap>>,
    pub career_paths: Loadable<Vec<CareerPath>>,
    pub report: Loadable<CoursesReport>,
    pub tab: CatalogTab,
}

impl CatalogViewState {
    pub fn new(client: CoursesClient) -> Self {
        Self {
            client,
            courses: Loadable::Idle,
            road_maps: Loadable::Idle,
            career_paths: Loadable::Idle,
            report: Loadable::Idle,
            tab: CatalogTab::All,
        }
    }

    pub async fn refresh_courses(&mut self) {
        self.courses = Loadable::Loading;
        self.courses = Loadable::from_result(self.client.list_courses().await);
    }

    pub async fn refresh_road_maps(&mut self) {
        self.road_maps = Loadable::Loading;
        self.road_maps = Loadable::from_result(self.client.list_road_maps().await);
    }

    pub async fn refresh_career_paths(&mut self) {
        self.career_paths = Loadable::Loading;
        self.career_paths = Loadable::from_result(self.client.list_career_paths().await);
    }

    pub async fn refresh_report(&mut self) {
        self.report = Loadable::Loading;
        self.report = Loadable::from_result(self.client.get_course_report().await);
    }

    /// Fetch the three listings concurrently. Each listing settles on
    /// its own; one failure does not affect the others.
    pub async fn refresh_all(&mut self) {
        self.courses = Loadable::Loading;
        self.road_maps = Loadable::Loading;
        self.career_paths = Loadable::Loading;

        let (courses, road_maps, career_paths) = tokio::join!(
            self.client.list_courses(),
            self.client.list_road_maps(),
            self.client.list_career_paths(),
        );

        self.courses = Loadable::from_result(courses);
        self.road_maps = Loadable::from_result(road_maps);
        self.career_paths = Loadable::from_result(career_paths);
    }

    /// Courses visible on the current tab. `Done` needs the report; with
    /// no report loaded it is empty.
    pub fn visible_courses(&self) -> Vec<&Course> {
        let completed = self
            .report
            .value()
            .map(CoursesReport::completed_course_ids)
            .unwrap_or_default();
        self.courses
            .value()
            .map(|courses| {
                courses
                    .iter()
                    .filter(|c| self.tab.matches(c, &completed))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub async fn enroll_road_map(&mut self, id: &str) -> Result<EnrollmentAck, ViewError> {
        let known = self
            .road_maps
            .value()
            .is_some_and(|list| list.iter().any(|r| r.id == id));
        if !known {
            return Err(ViewError::UnknownEntry { id: id.to_string() });
        }

        let ack = self.client.enroll_road_map(id).await?;
        if let Some(entry) = self
            .road_maps
            .value_mut()
            .and_then(|list| list.iter_mut().find(|r| r.id == id))
        {
            entry.is_enrolled = Some(true);
        }
        Ok(ack)
    }

    pub async fn enroll_career_path(&mut self, id: &str) -> Result<EnrollmentAck, ViewError> {
        let known = self
            .career_paths
            .value()
            .is_some_and(|list| list.iter().any(|p| p.id == id));
        if !known {
            return Err(ViewError::UnknownEntry { id: id.to_string() });
        }

        let ack = self.client.enroll_career_path(id).await?;
        if let Some(entry) = self
            .career_paths
            .value_mut()
            .and_then(|list| list.iter_mut().find(|p| p.id == id))
        {
            entry.is_enrolled = Some(true);
        }
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course(id: &str, enrolled: Option<bool>) -> Course {
        serde_json::from_value(json!({"id": id, "title": id, "isEnrolled": enrolled})).unwrap()
    }

    #[test]
    fn test_tab_matching() {
        let completed = vec![EntityId::from("c2")];
        let unknown = course("c1", None);
        let started = course("c3", Some(true));
        let done = course("c2", Some(true));

        assert!(CatalogTab::All.matches(&unknown, &completed));
        assert!(!CatalogTab::Started.matches(&unknown, &completed));
        assert!(CatalogTab::Started.matches(&started, &completed));
        assert!(!CatalogTab::Done.matches(&started, &completed));
        assert!(CatalogTab::Done.matches(&done, &completed));
    }

    #[test]
    fn test_tab_cycle_and_parse() {
        assert_eq!(CatalogTab::Done.next(), CatalogTab::All);
        assert_eq!("started".parse::<CatalogTab>(), Ok(CatalogTab::Started));
        assert!("finished".parse::<CatalogTab>().is_err());
    }

    #[test]
    fn test_loadable_accessors() {
        let loaded: Loadable<u8> = Loadable::Loaded(3);
        assert_eq!(loaded.value(), Some(&3));
        let failed: Loadable<u8> = Loadable::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
        assert!(Loadable::<u8>::Loading.is_loading());
        assert_eq!(Loadable::<u8>::default(), Loadable::Idle);
    }
}
