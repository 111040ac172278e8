//! # localtime-rs-core
//!
//! Core types, settings, checks, and locale/timezone formatting for the
//! localtime-rs admin layer. This crate has no dependency on the schema or
//! admin crates and provides the foundation for both.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Runtime settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration
//! - [`checks`] - System check framework
//! - [`i18n`] - Language and timezone activation, localized datetime formats
//! - [`html`] - HTML-safe strings and escaping
//! - [`utils`] - Text helpers

pub mod checks;
pub mod error;
pub mod html;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{AdminError, AdminResult};
pub use html::SafeString;
pub use settings::{Settings, SETTINGS};
