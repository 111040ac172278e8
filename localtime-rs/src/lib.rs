//! # localtime-rs
//!
//! Timezone-aware display fields for auto-generated record admin panels.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient access.
//! You can depend on `localtime-rs` to get everything, or depend on individual
//! crates for finer-grained control.

/// Settings, logging, checks, and locale/timezone formatting.
pub use localtime_rs_core as core;

/// Record schema: the `Model` trait, field definitions, and values.
#[cfg(feature = "db")]
pub use localtime_rs_db as db;

/// Admin configurations, display fields, and the timestamp synthesizer.
#[cfg(feature = "admin")]
pub use localtime_rs_admin as admin;

// Third-party crates the public API is built on.
pub use chrono;
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The types most host bootstrap code needs.
pub mod prelude {
    pub use localtime_rs_core::{AdminError, AdminResult, SafeString, Settings, SETTINGS};

    #[cfg(feature = "db")]
    pub use localtime_rs_db::{FieldDef, FieldType, Model, ModelMeta, Value};

    #[cfg(feature = "admin")]
    pub use localtime_rs_admin::{
        AdminSite, DisplayField, FieldRef, Fieldset, ModelAdmin, RenderedValue,
    };
}
