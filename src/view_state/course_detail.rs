//! Course detail page state machine.
//!
//! Drives one course page: fetch on mount, module accordion, enrollment
//! and navigation to the learning view, material completion. Every
//! transition is published as a [`CourseViewEvent`].
//!
//! ```text
//!   Idle ──mount──▶ Loading ──ok──▶ Loaded(course)
//!                      └────err──▶ Failed(message)
//!
//!   NotEnrolled ──start──▶ Enrolling ──ok──▶ Enrolled ──delay──▶ navigate
//!        ▲                     │
//!        └────────err──────────┘
//! ```

use std::time::Duration;
use tokio::sync::broadcast;

use super::enrollment::{EnrollmentFailure, EnrollmentStatus, StartCourseOutcome};
use super::expansion::ModuleExpansion;
use crate::api::CoursesClient;
use crate::error::ViewError;
use crate::models::{CourseDetails, CourseStats, EntityId, ModuleStats, PatchCourseProgressParams};

/// Shown when a course fetch fails without a server message. Transport
/// failures and HTTP errors with no usable body land here too; their
/// technical text goes to the log, not to the page.
pub const FALLBACK_ERROR: &str = "حدث خطأ أثناء جلب بيانات الدورة، حاول مجددًا.";

/// Pause between a successful enrollment and the navigation request.
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_secs(1);

const EVENT_CAPACITY: usize = 64;

/// Fetch state of the course.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Box<CourseDetails>),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn course(&self) -> Option<&CourseDetails> {
        match self {
            LoadState::Loaded(course) => Some(&**course),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Transition notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseViewEvent {
    Loading,
    Loaded { course_id: EntityId },
    Failed { message: String },
    Enrollment(EnrollmentStatus),
    EnrollmentFailed(EnrollmentFailure),
    /// The presentation layer should route to this path.
    NavigationRequested(String),
    MaterialCompleted { material_id: EntityId },
}

/// State of one course detail page.
pub struct CourseDetailState {
    client: CoursesClient,
    course_id: EntityId,
    current_path: String,
    navigation_delay: Duration,
    load: LoadState,
    enrollment: EnrollmentStatus,
    expansion: ModuleExpansion,
    last_failure: Option<EnrollmentFailure>,
    events: broadcast::Sender<CourseViewEvent>,
}

impl CourseDetailState {
    /// New page for `course_id`, displayed at `current_path`.
    pub fn new(client: CoursesClient, course_id: impl Into<EntityId>, current_path: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            client,
            course_id: course_id.into(),
            current_path: current_path.into(),
            navigation_delay: DEFAULT_NAVIGATION_DELAY,
            load: LoadState::Idle,
            enrollment: EnrollmentStatus::NotEnrolled,
            expansion: ModuleExpansion::new(),
            last_failure: None,
            events,
        }
    }

    /// Set the pause before navigating after enrollment.
    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.navigation_delay = delay;
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CourseViewEvent> {
        self.events.subscribe()
    }

    pub fn course_id(&self) -> &EntityId {
        &self.course_id
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn course(&self) -> Option<&CourseDetails> {
        self.load.course()
    }

    pub fn enrollment(&self) -> EnrollmentStatus {
        self.enrollment
    }

    pub fn expansion(&self) -> &ModuleExpansion {
        &self.expansion
    }

    pub fn is_expanded(&self, module_id: &str) -> bool {
        self.expansion.is_expanded(module_id)
    }

    /// Most recent enrollment failure, cleared by a later success.
    pub fn last_enrollment_failure(&self) -> Option<&EnrollmentFailure> {
        self.last_failure.as_ref()
    }

    pub fn stats(&self) -> Option<CourseStats> {
        self.course().map(CourseDetails::stats)
    }

    pub fn module_stats(&self) -> Vec<ModuleStats> {
        self.course().map(CourseDetails::module_stats).unwrap_or_default()
    }

    /// Path of the learning view for this page.
    pub fn learn_path(&self) -> String {
        format!("{}/learn", self.current_path.trim_end_matches('/'))
    }

    fn emit(&self, event: CourseViewEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn set_enrollment(&mut self, status: EnrollmentStatus) {
        self.enrollment = status;
        self.emit(CourseViewEvent::Enrollment(status));
    }

    /// Fetch the course. On success the first module is expanded and the
    /// enrollment status follows the course; on failure the message is
    /// kept for display and state derived from an earlier load is reset.
    pub async fn mount(&mut self) -> Result<(), ViewError> {
        self.load = LoadState::Loading;
        self.emit(CourseViewEvent::Loading);

        match self.client.get_course(self.course_id.as_str()).await {
            Ok(course) => {
                let stats = course.stats();
                if stats.has_progress_mismatch() {
                    tracing::warn!(
                        course_id = %self.course_id,
                        reported = ?stats.reported_completed_lessons,
                        derived = stats.completed_lessons,
                        "server progress summary disagrees with material flags"
                    );
                }
                self.expansion.expand_only(course.modules.first().map(|m| &m.id));
                self.enrollment = if course.enrolled() {
                    EnrollmentStatus::Enrolled
                } else {
                    EnrollmentStatus::NotEnrolled
                };
                self.load = LoadState::Loaded(Box::new(course));
                self.emit(CourseViewEvent::Loaded {
                    course_id: self.course_id.clone(),
                });
                Ok(())
            }
            Err(err) => {
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string());
                self.expansion.collapse_all();
                self.enrollment = EnrollmentStatus::NotEnrolled;
                self.last_failure = None;
                self.load = LoadState::Failed(message.clone());
                self.emit(CourseViewEvent::Failed { message });
                Err(err.into())
            }
        }
    }

    /// Flip one module's expansion. Returns whether it is now expanded.
    pub fn toggle_module(&mut self, module_id: &str) -> bool {
        self.expansion.toggle(&EntityId::from(module_id))
    }

    /// Expand every module of the loaded course.
    pub fn expand_all(&mut self) {
        let ids = self.course().map(CourseDetails::module_ids).unwrap_or_default();
        self.expansion.expand_all(ids);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    /// Enter the learning view, enrolling first when needed.
    pub async fn start_course(&mut self) -> StartCourseOutcome {
        if self.course().is_none() {
            return StartCourseOutcome::NotLoaded;
        }

        match self.enrollment {
            EnrollmentStatus::Enrolling => StartCourseOutcome::AlreadyEnrolling,
            EnrollmentStatus::Enrolled => self.navigate(),
            EnrollmentStatus::NotEnrolled => {
                self.set_enrollment(EnrollmentStatus::Enrolling);
                match self.client.enroll_course(self.course_id.as_str()).await {
                    Ok(_) => {
                        tracing::info!(course_id = %self.course_id, "enrolled");
                        if let LoadState::Loaded(course) = &mut self.load {
                            course.course.is_enrolled = Some(true);
                        }
                        self.last_failure = None;
                        self.set_enrollment(EnrollmentStatus::Enrolled);
                        if !self.navigation_delay.is_zero() {
                            tokio::time::sleep(self.navigation_delay).await;
                        }
                        self.navigate()
                    }
                    Err(err) => {
                        tracing::warn!(course_id = %self.course_id, error = %err, "enrollment rolled back");
                        let failure = EnrollmentFailure::new(self.course_id.clone(), err);
                        self.last_failure = Some(failure.clone());
                        self.set_enrollment(EnrollmentStatus::NotEnrolled);
                        self.emit(CourseViewEvent::EnrollmentFailed(failure.clone()));
                        StartCourseOutcome::Failed(failure)
                    }
                }
            }
        }
    }

    fn navigate(&self) -> StartCourseOutcome {
        let path = self.learn_path();
        self.emit(CourseViewEvent::NavigationRequested(path.clone()));
        StartCourseOutcome::Navigated(path)
    }

    /// Mark a material completed for `user_id`. Locked materials of a
    /// course the user is not enrolled in are refused without a request.
    pub async fn complete_material(&mut self, material_id: &str, user_id: &str) -> Result<(), ViewError> {
        let enrolled = self.enrollment == EnrollmentStatus::Enrolled;
        let course = self.course().ok_or(ViewError::CourseNotLoaded)?;
        let material = course
            .find_material(material_id)
            .ok_or_else(|| ViewError::UnknownMaterial {
                id: material_id.to_string(),
            })?;
        if !material.is_accessible(enrolled) {
            return Err(ViewError::MaterialLocked {
                id: material_id.to_string(),
            });
        }

        let params = PatchCourseProgressParams::complete(course.id().clone(), material.id.clone(), user_id);
        self.client.patch_course_progress(&params).await?;

        if let LoadState::Loaded(course) = &mut self.load {
            if let Some(material) = course.find_material_mut(material_id) {
                material.completed = true;
            }
        }
        self.emit(CourseViewEvent::MaterialCompleted {
            material_id: params.material_id,
        });
        Ok(())
    }
}
