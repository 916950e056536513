//! Error handling for learnpath.
//!
//! | Type | Raised by | Meaning |
//! |------|-----------|---------|
//! | [`NetworkError`] | HTTP seam | no response was received |
//! | [`ShapeError`] | API client | body did not decode into the expected entity |
//! | [`ApiError`] | API client | one failed operation: `Transport`, `Http` or `Shape` |
//! | [`ViewError`] | view-state machines | an action was refused locally or its API call failed |
//! | [`ConfigError`] | config loading | bad file, env override or base URL |
//! | [`LearnError`] | anywhere | unified error with optional [`ErrorContext`] |
//!
//! ```ignore
//! use learnpath::error::{ErrorContext, LearnResult, ResultExt};
//!
//! async fn show(client: &CoursesClient, id: &str) -> LearnResult<()> {
//!     let course = client
//!         .get_course(id)
//!         .await
//!         .with_context(|| ErrorContext::new("show course").with_entity_id(id))?;
//!     println!("{}", course.course.title);
//!     Ok(())
//! }
//! ```

mod api;
mod category;
mod config;
mod context;
mod learn_error;
mod network;
mod result;
mod shape;
mod view;

pub use api::{extract_server_message, ApiError};
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use learn_error::LearnError;
pub use network::{classify_http_error, NetworkError};
pub use result::{LearnResult, ResultExt};
pub use shape::ShapeError;
pub use view::ViewError;
