//! # localtime-rs-db
//!
//! Record schema types consumed by the admin layer. Storage and querying
//! belong to the host framework; this crate only describes what a record
//! type looks like and how to read one field off an instance.
//!
//! ## Module Overview
//!
//! - [`model`] - The [`Model`](model::Model) trait and [`ModelMeta`](model::ModelMeta)
//! - [`fields`] - Field definitions ([`FieldDef`](fields::FieldDef)) and types
//! - [`value`] - The backend-agnostic [`Value`](value::Value) enum

// - struct_excessive_bools: FieldDef carries the host's boolean field options
// - return_self_not_must_use: builder pattern methods are self-documenting
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::return_self_not_must_use)]

pub mod fields;
pub mod model;
pub mod value;

pub use fields::{FieldDef, FieldType};
pub use model::{Model, ModelMeta};
pub use value::Value;
