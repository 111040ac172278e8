//! Settings for localtime-rs.
//!
//! This module provides the [`Settings`] struct, which holds runtime
//! configuration, and [`LazySettings`], a globally-accessible, lazily-initialized
//! settings instance. Only the options the admin display layer reads are
//! modeled; anything else a host wants to carry goes in [`Settings::extra`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};

/// The complete set of runtime settings.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.language_code, "en-us");
/// assert_eq!(settings.time_zone, "UTC");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,

    // ── Internationalization ─────────────────────────────────────────

    /// The language code (e.g. "en-us", "de").
    pub language_code: String,
    /// The display time zone: "UTC" or a fixed offset such as "+02:00" or "UTC-05:00".
    pub time_zone: String,
    /// Whether stored datetimes are timezone-aware and converted for display.
    pub use_tz: bool,

    // ── Admin ────────────────────────────────────────────────────────

    /// Text shown in list cells whose value is NULL.
    pub empty_value_display: String,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log filter directive (e.g. "info", "localtime_rs_admin=debug").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            language_code: "en-us".to_string(),
            time_zone: "UTC".to_string(),
            use_tz: true,
            empty_value_display: "-".to_string(),
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

/// Write-once holder for the process-wide [`Settings`].
///
/// Library code reads it through [`try_get`](LazySettings::try_get) and falls
/// back to defaults, so rendering works before the host configures anything.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates an empty container.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Installs the process-wide settings. Only the first call succeeds.
    pub fn configure(&self, settings: Settings) -> AdminResult<()> {
        self.inner.set(settings).map_err(|_| {
            AdminError::ImproperlyConfigured("settings are already configured".to_string())
        })
    }

    /// Returns the installed settings.
    pub fn get(&self) -> AdminResult<&Settings> {
        self.inner.get().ok_or_else(|| {
            AdminError::ImproperlyConfigured(
                "settings are not configured; call SETTINGS.configure() at startup".to_string(),
            )
        })
    }

    /// Returns the installed settings, if any.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Whether [`configure`](Self::configure) has run.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// Process-wide settings, installed once by the host at startup.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.language_code, "en-us");
        assert_eq!(s.time_zone, "UTC");
        assert!(s.use_tz);
        assert_eq!(s.empty_value_display, "-");
        assert_eq!(s.log_level, "info");
        assert!(s.extra.is_empty());
    }

    #[test]
    fn test_lazy_settings_configure_once() {
        let lazy = LazySettings::new();
        assert!(!lazy.is_configured());
        assert!(lazy.try_get().is_none());

        let settings = Settings {
            debug: false,
            time_zone: "+02:00".to_string(),
            ..Settings::default()
        };
        lazy.configure(settings).unwrap();
        assert!(lazy.is_configured());
        assert_eq!(lazy.get().unwrap().time_zone, "+02:00");

        let err = lazy.configure(Settings::default()).unwrap_err();
        assert!(err.is_configuration());
        assert!(!lazy.get().unwrap().debug);
    }

    #[test]
    fn test_lazy_settings_get_before_configure() {
        let lazy = LazySettings::new();
        let err = lazy.get().unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }
}
