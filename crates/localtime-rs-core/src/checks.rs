//! System checks.
//!
//! Checks inspect configuration at startup and report problems as
//! [`CheckMessage`]s instead of failing at render time. The core crate ships
//! the settings checks; the admin crate adds per-`ModelAdmin` checks that
//! produce the same message type.
//!
//! - [`CheckMessage`]: A diagnostic (level, message, hint, object, id).
//! - [`CheckLevel`]: Severity level (Debug, Info, Warning, Error, Critical).
//! - [`CheckRegistry`]: Settings checks with tag-based filtering.
//! - Built-in checks: `i18n.E001` (unrecognized `time_zone`) and `i18n.W001`
//!   (language without a locale format table).
//!
//! ## Examples
//!
//! ```
//! use localtime_rs_core::checks::{CheckMessage, CheckRegistry};
//! use localtime_rs_core::settings::Settings;
//!
//! let mut registry = CheckRegistry::with_builtins();
//! registry.register(
//!     |settings| {
//!         if settings.empty_value_display.is_empty() {
//!             vec![CheckMessage::warning(
//!                 "empty_value_display is blank",
//!                 Some("Use a visible placeholder such as '-'."),
//!                 Some("settings.empty_value_display"),
//!                 Some("myapp.W001"),
//!             )]
//!         } else {
//!             Vec::new()
//!         }
//!     },
//!     &["myapp"],
//! );
//!
//! let settings = Settings::default();
//! assert!(registry.run_checks(None, &settings).is_empty());
//! ```

use std::fmt;

use serde::Serialize;

use crate::i18n::{formats, timezone};
use crate::settings::Settings;

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckLevel {
    /// Debugging information.
    Debug = 0,
    /// Informational message.
    Info = 1,
    /// A potential problem.
    Warning = 2,
    /// A definite problem that should be fixed.
    Error = 3,
    /// A problem that prevents the admin from starting.
    Critical = 4,
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// A diagnostic message produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// What is wrong.
    pub msg: String,
    /// How to fix it, if there is an obvious way.
    pub hint: Option<String>,
    /// The setting or admin the problem was found on.
    pub obj: Option<String>,
    /// A stable identifier such as `"admin.E108"`.
    pub id: Option<String>,
}

impl CheckMessage {
    /// Creates a new `CheckMessage` with the given level and details.
    pub fn new(
        level: CheckLevel,
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self {
            level,
            msg: msg.into(),
            hint: hint.map(String::from),
            obj: obj.map(String::from),
            id: id.map(String::from),
        }
    }

    /// Creates an info-level message.
    pub fn info(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Info, msg, hint, obj, id)
    }

    /// Creates a warning-level message.
    pub fn warning(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Warning, msg, hint, obj, id)
    }

    /// Creates an error-level message.
    pub fn error(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Error, msg, hint, obj, id)
    }

    /// Returns `true` if this is a warning or higher severity.
    pub fn is_serious(&self) -> bool {
        self.level >= CheckLevel::Warning
    }

    /// Returns `true` if this message should stop startup.
    pub fn is_error(&self) -> bool {
        self.level >= CheckLevel::Error
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref obj) = self.obj {
            write!(f, "{obj}: ")?;
        }
        if let Some(ref id) = self.id {
            write!(f, "({id}) ")?;
        }
        write!(f, "{}: {}", self.level, self.msg)?;
        if let Some(ref hint) = self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        Ok(())
    }
}

/// A check function that receives settings and returns diagnostic messages.
pub type CheckFn = fn(&Settings) -> Vec<CheckMessage>;

struct RegisteredCheck {
    func: CheckFn,
    tags: Vec<String>,
}

/// Registry for settings checks.
///
/// Checks can be run all at once or filtered by tag.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<RegisteredCheck>,
}

impl CheckRegistry {
    /// Creates a new empty check registry.
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Creates a registry pre-loaded with the built-in i18n checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(check_time_zone, &["i18n"]);
        registry.register(check_language_formats, &["i18n"]);
        registry
    }

    /// Registers a check function with the given tags.
    pub fn register(&mut self, func: CheckFn, tags: &[&str]) {
        self.checks.push(RegisteredCheck {
            func,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        });
    }

    /// Runs all registered checks, or only those carrying one of `tags`.
    pub fn run_checks(&self, tags: Option<&[&str]>, settings: &Settings) -> Vec<CheckMessage> {
        self.checks
            .iter()
            .filter(|check| {
                tags.map_or(true, |wanted| {
                    wanted.iter().any(|t| check.tags.iter().any(|own| own == t))
                })
            })
            .flat_map(|check| (check.func)(settings))
            .collect()
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

// ============================================================
// Built-in checks
// ============================================================

/// `time_zone` must parse as an offset when `use_tz` is on.
fn check_time_zone(settings: &Settings) -> Vec<CheckMessage> {
    if !settings.use_tz || timezone::parse_offset(&settings.time_zone).is_some() {
        return Vec::new();
    }
    vec![CheckMessage::error(
        format!("time_zone '{}' is not a recognized offset.", settings.time_zone),
        Some("Use \"UTC\" or a fixed offset such as \"+02:00\" or \"UTC-05:00\"."),
        Some("settings.time_zone"),
        Some("i18n.E001"),
    )]
}

/// The configured language should have a locale format table.
fn check_language_formats(settings: &Settings) -> Vec<CheckMessage> {
    if formats::has_locale_formats(&settings.language_code) {
        return Vec::new();
    }
    vec![CheckMessage::warning(
        format!(
            "No datetime format is defined for language '{}'; English formats will be used.",
            settings.language_code
        ),
        None,
        Some("settings.language_code"),
        Some("i18n.W001"),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── CheckLevel ──────────────────────────────────────────────────

    #[test]
    fn test_check_level_ordering() {
        assert!(CheckLevel::Debug < CheckLevel::Info);
        assert!(CheckLevel::Info < CheckLevel::Warning);
        assert!(CheckLevel::Warning < CheckLevel::Error);
        assert!(CheckLevel::Error < CheckLevel::Critical);
    }

    #[test]
    fn test_check_level_display() {
        assert_eq!(CheckLevel::Warning.to_string(), "WARNING");
        assert_eq!(CheckLevel::Critical.to_string(), "CRITICAL");
    }

    // ── CheckMessage ────────────────────────────────────────────────

    #[test]
    fn test_check_message_severity() {
        assert!(!CheckMessage::info("", None, None, None).is_serious());
        assert!(CheckMessage::warning("", None, None, None).is_serious());
        assert!(!CheckMessage::warning("", None, None, None).is_error());
        assert!(CheckMessage::error("", None, None, None).is_error());
    }

    #[test]
    fn test_check_message_display() {
        let m = CheckMessage::error(
            "Bad field",
            Some("Fix it"),
            Some("shop.Order"),
            Some("admin.E035"),
        );
        assert_eq!(
            m.to_string(),
            "shop.Order: (admin.E035) ERROR: Bad field\n\tHINT: Fix it"
        );
    }

    #[test]
    fn test_check_message_display_minimal() {
        let m = CheckMessage::info("Just info", None, None, None);
        assert_eq!(m.to_string(), "INFO: Just info");
    }

    #[test]
    fn test_check_message_serializes() {
        let m = CheckMessage::warning("w", None, None, Some("i18n.W001"));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["level"], "WARNING");
        assert_eq!(json["id"], "i18n.W001");
    }

    // ── CheckRegistry ───────────────────────────────────────────────

    #[test]
    fn test_registry_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_tag_filtering() {
        let mut registry = CheckRegistry::new();
        registry.register(
            |_| vec![CheckMessage::warning("i18n issue", None, None, None)],
            &["i18n"],
        );
        registry.register(
            |_| vec![CheckMessage::info("admin info", None, None, None)],
            &["admin", "i18n"],
        );

        let settings = Settings::default();
        assert_eq!(registry.run_checks(None, &settings).len(), 2);
        assert_eq!(registry.run_checks(Some(&["i18n"]), &settings).len(), 2);

        let admin_only = registry.run_checks(Some(&["admin"]), &settings);
        assert_eq!(admin_only.len(), 1);
        assert_eq!(admin_only[0].msg, "admin info");

        assert!(registry.run_checks(Some(&["templates"]), &settings).is_empty());
    }

    // ── Built-in checks ─────────────────────────────────────────────

    #[test]
    fn test_builtins_pass_on_defaults() {
        let registry = CheckRegistry::with_builtins();
        assert_eq!(registry.len(), 2);
        assert!(registry.run_checks(None, &Settings::default()).is_empty());
    }

    #[test]
    fn test_check_time_zone_unrecognized() {
        let settings = Settings {
            time_zone: "Europe/Amsterdam".to_string(),
            ..Settings::default()
        };
        let messages = check_time_zone(&settings);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, CheckLevel::Error);
        assert_eq!(messages[0].id.as_deref(), Some("i18n.E001"));
    }

    #[test]
    fn test_check_time_zone_malformed_offset_reports() {
        for time_zone in ["UTC+9999999", "+1é1"] {
            let settings = Settings {
                time_zone: time_zone.to_string(),
                ..Settings::default()
            };
            let messages = check_time_zone(&settings);
            assert_eq!(ids_of(&messages), vec!["i18n.E001"], "{time_zone}");
        }
    }

    fn ids_of(messages: &[CheckMessage]) -> Vec<&str> {
        messages.iter().filter_map(|m| m.id.as_deref()).collect()
    }

    #[test]
    fn test_check_time_zone_ignored_without_use_tz() {
        let settings = Settings {
            time_zone: "Europe/Amsterdam".to_string(),
            use_tz: false,
            ..Settings::default()
        };
        assert!(check_time_zone(&settings).is_empty());
    }

    #[test]
    fn test_check_language_formats() {
        let known = Settings {
            language_code: "de-ch".to_string(),
            ..Settings::default()
        };
        assert!(check_language_formats(&known).is_empty());

        let unknown = Settings {
            language_code: "ja".to_string(),
            ..Settings::default()
        };
        let messages = check_language_formats(&unknown);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id.as_deref(), Some("i18n.W001"));
    }
}
