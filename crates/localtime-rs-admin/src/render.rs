//! Localized timestamp rendering.
//!
//! A present timestamp renders as
//!
//! ```html
//! <span class="local-datetime" data-iso="2024-06-10T08:36:00Z">June 10, 2024, 8:36 a.m.</span>
//! ```
//!
//! so the page shows a server-localized string while client code can re-format
//! the exact instant from `data-iso`. An absent timestamp renders as the bare
//! word `never`.
//!
//! The display string follows the language and timezone active on the calling
//! thread (see [`localtime_rs_core::i18n`]).

use std::fmt;

use chrono::SecondsFormat;
use serde::Serialize;

use localtime_rs_core::html::{self, SafeString};
use localtime_rs_core::i18n::formats;
use localtime_rs_db::value::Value;

/// Shown in place of an absent timestamp.
pub const NEVER: &str = "never";

/// CSS class of the rendered `<span>`.
pub const LOCAL_DATETIME_CLASS: &str = "local-datetime";

/// The outcome of rendering one field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RenderedValue {
    /// The value was absent.
    Never,
    /// A point in time.
    Instant {
        /// ISO-8601 form of the stored instant (UTC, `Z` suffix).
        iso: String,
        /// Human-readable form in the active language and timezone.
        display: String,
    },
    /// A value that is not a timestamp, shown as text.
    Text(String),
}

impl RenderedValue {
    /// Returns the HTML form. Interpolated values are escaped.
    pub fn to_html(&self) -> SafeString {
        match self {
            Self::Never => SafeString::escaped(NEVER),
            Self::Instant { iso, display } => {
                html::span(LOCAL_DATETIME_CLASS, &[("iso", iso.as_str())], display)
            }
            Self::Text(text) => SafeString::escaped(text),
        }
    }

    /// Returns the ISO string, if this is an instant.
    pub fn iso(&self) -> Option<&str> {
        match self {
            Self::Instant { iso, .. } => Some(iso),
            _ => None,
        }
    }
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str(NEVER),
            Self::Instant { display, .. } => f.write_str(display),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Renders a stored timestamp value.
///
/// - `None` and `Value::Null` render as [`RenderedValue::Never`].
/// - Aware values (and RFC 3339 strings) are converted to the active timezone.
/// - Naive values are formatted as stored, without conversion.
/// - Anything else is shown as text.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use localtime_rs_admin::render::render_local_datetime;
/// use localtime_rs_db::value::Value;
///
/// let stored = Value::from(Utc.with_ymd_and_hms(2024, 6, 10, 8, 36, 0).unwrap());
/// let rendered = render_local_datetime(Some(&stored));
/// assert_eq!(rendered.iso(), Some("2024-06-10T08:36:00Z"));
///
/// assert_eq!(render_local_datetime(None).to_html().as_str(), "never");
/// ```
pub fn render_local_datetime(value: Option<&Value>) -> RenderedValue {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return RenderedValue::Never;
    };

    if let Some(instant) = value.as_datetime_tz() {
        return RenderedValue::Instant {
            iso: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            display: formats::localize_datetime(&instant),
        };
    }

    if let Some(naive) = value.as_naive_datetime() {
        return RenderedValue::Instant {
            iso: naive.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            display: formats::localize_naive(&naive),
        };
    }

    RenderedValue::Text(value.to_string())
}
