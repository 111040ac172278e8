//! Utility functions for localtime-rs.
//!
//! - [`text`]: String helpers used for column headers and verbose names.

pub mod text;
