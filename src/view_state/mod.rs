//! Page state for a presentation layer.
//!
//! The machines here own no rendering. A front end reads their state,
//! calls their actions, and listens for events such as navigation
//! requests.
//!
//! - [`CourseDetailState`]: one course page (load, accordion, enrollment,
//!   material completion)
//! - [`CatalogViewState`]: course, roadmap and career path listings
//! - [`ModuleExpansion`]: expanded-module set

mod catalog;
mod course_detail;
mod enrollment;
mod expansion;

pub use catalog::{CatalogTab, CatalogViewState, Loadable};
pub use course_detail::{
    CourseDetailState, CourseViewEvent, LoadState, DEFAULT_NAVIGATION_DELAY, FALLBACK_ERROR,
};
pub use enrollment::{EnrollmentFailure, EnrollmentStatus, StartCourseOutcome};
pub use expansion::ModuleExpansion;
