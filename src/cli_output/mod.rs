//! Plain-text output for the CLI.
//!
//! `boxes` holds the line primitives (headers, rules, status lines);
//! `render` turns models into text blocks built from them.

mod boxes;
pub mod render;

pub use boxes::*;
