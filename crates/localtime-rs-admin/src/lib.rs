//! # localtime-rs-admin
//!
//! Admin configurations whose read-only timestamp fields are shown in the
//! viewer's language and timezone.
//!
//! Registering a record type with an [`AdminSite`](site::AdminSite) runs the
//! display field synthesizer: every read-only `DateTimeField` gets a
//! `<field>_local` display field that renders a
//! `<span class="local-datetime" data-iso="...">` element, and every layout
//! of the admin is rewritten to show that field instead.
//!
//! ## Modules
//!
//! - [`site`] - Registration of record types with their admins
//! - [`model_admin`] - [`ModelAdmin`](model_admin::ModelAdmin) layouts and list rendering
//! - [`field_ref`] - Layout entries, single names or grouped rows
//! - [`display`] - Computed display fields
//! - [`resolver`] - Field lookup that tolerates non-schema names
//! - [`local_datetime`] - The timestamp display field synthesizer
//! - [`render`] - Localized timestamp rendering
//! - [`checks`] - Admin configuration checks

// - module_name_repetitions: ModelAdmin in model_admin mirrors the host framework naming
// - return_self_not_must_use: builder pattern methods are self-documenting
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]

pub mod checks;
pub mod display;
pub mod field_ref;
pub mod local_datetime;
pub mod model_admin;
pub mod render;
pub mod resolver;
pub mod site;

pub use display::{DisplayField, DisplayRegistry};
pub use field_ref::FieldRef;
pub use local_datetime::synthesize;
pub use model_admin::{Fieldset, ModelAdmin};
pub use render::{render_local_datetime, RenderedValue};
pub use site::AdminSite;
