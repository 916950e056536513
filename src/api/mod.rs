//! Course backend API.
//!
//! [`CoursesClient`] wraps the REST endpoints; [`RequestTracker`] counts
//! the calls in flight for loading indicators.

mod client;
pub mod endpoints;
mod tracker;

pub use client::{CoursesClient, EnrollmentAck};
pub use tracker::{RequestTracker, TrackGuard};
