//! Language and timezone activation for localized rendering.
//!
//! Rendering a display field reads the language and timezone that are active
//! on the *calling* thread, so one process can serve operators in different
//! locales concurrently:
//!
//! - **Language activation**: thread-local `activate()`, `deactivate()`, `get_language()`.
//! - **Timezone support**: see [`timezone`].
//! - **Locale formats**: see [`formats`].
//!
//! ## Quick Start
//!
//! ```
//! use localtime_rs_core::i18n;
//!
//! i18n::activate("de");
//! assert_eq!(i18n::get_language(), "de");
//! i18n::deactivate();
//! assert_eq!(i18n::get_language(), "en");
//! ```

pub mod formats;
pub mod timezone;

use std::cell::RefCell;

use crate::error::AdminError;
use crate::settings::Settings;

/// The language used when nothing has been activated.
pub const DEFAULT_LANGUAGE: &str = "en";

// ── Thread-local language state ──────────────────────────────────────────

thread_local! {
    static CURRENT_LANGUAGE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Activates the given language code for the current thread.
///
/// The code is normalized to lowercase with `-` separators, so `"en_GB"` and
/// `"en-gb"` are the same language.
pub fn activate(language_code: &str) {
    let normalized = normalize_language(language_code);
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = Some(normalized);
    });
}

/// Deactivates the current thread's language setting, reverting to the default.
pub fn deactivate() {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the language code active on the current thread.
///
/// Returns the activated language if one is set, otherwise [`DEFAULT_LANGUAGE`].
pub fn get_language() -> String {
    CURRENT_LANGUAGE.with(|cell| {
        cell.borrow()
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    })
}

/// Returns the base language of a code (`"en-gb"` -> `"en"`).
pub fn base_language(language_code: &str) -> &str {
    language_code
        .split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or(language_code)
}

/// Activates the configured language and timezone for the current thread.
///
/// When `use_tz` is off, no timezone is activated and datetimes are shown
/// in the offset they were stored with.
///
/// # Errors
///
/// Returns [`AdminError::ConfigurationError`] if `time_zone` is not a
/// recognized offset.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::i18n;
/// use localtime_rs_core::settings::Settings;
///
/// let mut settings = Settings::default();
/// settings.language_code = "fr".to_string();
/// settings.time_zone = "+01:00".to_string();
/// i18n::activate_from_settings(&settings).unwrap();
///
/// assert_eq!(i18n::get_language(), "fr");
/// assert_eq!(i18n::timezone::get_current_timezone_offset(), 3600);
/// i18n::deactivate();
/// i18n::timezone::deactivate_timezone();
/// ```
pub fn activate_from_settings(settings: &Settings) -> Result<(), AdminError> {
    activate(&settings.language_code);
    if settings.use_tz {
        let offset = timezone::parse_offset(&settings.time_zone).ok_or_else(|| {
            AdminError::ConfigurationError(format!(
                "Unrecognized time_zone '{}'",
                settings.time_zone
            ))
        })?;
        timezone::activate_timezone(offset);
    } else {
        timezone::deactivate_timezone();
    }
    Ok(())
}

fn normalize_language(language_code: &str) -> String {
    language_code.trim().to_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        deactivate();
        timezone::deactivate_timezone();
    }

    #[test]
    fn test_activate_and_get_language() {
        setup();
        assert_eq!(get_language(), "en");
        activate("fr");
        assert_eq!(get_language(), "fr");
        deactivate();
        assert_eq!(get_language(), "en");
    }

    #[test]
    fn test_activate_normalizes() {
        setup();
        activate("en_GB");
        assert_eq!(get_language(), "en-gb");
        deactivate();
    }

    #[test]
    fn test_base_language() {
        assert_eq!(base_language("en-gb"), "en");
        assert_eq!(base_language("pt_BR"), "pt");
        assert_eq!(base_language("de"), "de");
    }

    #[test]
    fn test_activate_from_settings() {
        setup();
        let mut settings = Settings::default();
        settings.language_code = "nl".to_string();
        settings.time_zone = "UTC+05:30".to_string();
        activate_from_settings(&settings).unwrap();
        assert_eq!(get_language(), "nl");
        assert_eq!(timezone::get_current_timezone_offset(), 5 * 3600 + 30 * 60);
        setup();
    }

    #[test]
    fn test_activate_from_settings_without_tz() {
        setup();
        timezone::activate_timezone(3600);
        let mut settings = Settings::default();
        settings.use_tz = false;
        settings.time_zone = "garbage".to_string();
        activate_from_settings(&settings).unwrap();
        assert!(!timezone::is_timezone_active());
        setup();
    }

    #[test]
    fn test_activate_from_settings_bad_time_zone() {
        setup();
        let mut settings = Settings::default();
        settings.time_zone = "Mars/Olympus_Mons".to_string();
        let err = activate_from_settings(&settings).unwrap_err();
        assert!(err.is_configuration());
        setup();
    }

    #[test]
    fn test_activate_from_settings_out_of_range_offset() {
        setup();
        for time_zone in ["UTC+9999999", "+1é1"] {
            let settings = Settings {
                time_zone: time_zone.to_string(),
                ..Settings::default()
            };
            let err = activate_from_settings(&settings).unwrap_err();
            assert!(err.is_configuration(), "{time_zone}");
            assert_eq!(timezone::get_current_timezone_offset(), 0);
        }
        setup();
    }
}
