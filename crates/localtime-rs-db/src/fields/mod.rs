//! Field definitions and types.
//!
//! [`FieldDef`] describes one declared field of a record type; its
//! [`FieldType`] decides whether the admin treats it as a timestamp.

pub mod types;

pub use types::{FieldDef, FieldType};
