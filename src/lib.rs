//! learnpath - client core for a learning platform dashboard
//!
//! Typed REST client for courses, roadmaps and career paths, the course
//! content model with its derived statistics, and the page state machines
//! a front end drives.
//!
//! This library exposes modules for the binary and for integration tests.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod view_state;
