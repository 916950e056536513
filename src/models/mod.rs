//! Course-content data model.
//!
//! Everything here is a read-only projection of backend data. The only
//! fields the client ever flips are `completed` and `is_enrolled`, after a
//! successful progress or enrollment call.

mod career;
mod content;
mod course;
mod duration;
mod ids;
mod report;
mod request;
mod stats;

pub use career::{CareerPath, RoadMap};
pub use content::{
    Lesson, Material, MaterialContent, MaterialKind, Module, QuizDetails, ResourceDetails,
    VideoDetails,
};
pub use course::{Course, CourseDetails, CourseProgress, CourseTags, Level};
pub use duration::{parse_leading_minutes, FreeformDuration};
pub use ids::EntityId;
pub use report::CoursesReport;
pub use request::{MaterialPatch, PatchCourseProgressParams};
pub use stats::{CourseStats, ModuleStats, Progress};
