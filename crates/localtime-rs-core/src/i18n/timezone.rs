//! Timezone support for localized rendering.
//!
//! Provides thread-local timezone activation, local time conversion, and
//! parsing of the fixed-offset notation accepted by `Settings::time_zone`.
//!
//! ## Quick Start
//!
//! ```
//! use localtime_rs_core::i18n::timezone;
//! use chrono::{TimeZone, Timelike, Utc};
//!
//! let stored = Utc.with_ymd_and_hms(2024, 6, 10, 8, 36, 0).unwrap();
//!
//! timezone::activate_timezone(2 * 3600); // UTC+2
//! let local = timezone::localtime(&stored);
//! assert_eq!(local.hour(), 10);
//!
//! timezone::deactivate_timezone();
//! ```

use std::cell::RefCell;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

thread_local! {
    /// The current thread's timezone offset in seconds east of UTC.
    /// `None` means use UTC (the default).
    static CURRENT_TIMEZONE: RefCell<Option<i32>> = const { RefCell::new(None) };
}

/// Offsets beyond ±18:00 are rejected, matching the range `FixedOffset` accepts
/// for real-world zones.
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// Activates a timezone for the current thread.
///
/// The `offset_seconds` parameter is the number of seconds east of UTC.
/// For example, UTC+5:30 would be `5 * 3600 + 30 * 60 = 19800`.
pub fn activate_timezone(offset_seconds: i32) {
    CURRENT_TIMEZONE.with(|cell| {
        *cell.borrow_mut() = Some(offset_seconds);
    });
}

/// Deactivates the current thread's timezone, reverting to UTC.
pub fn deactivate_timezone() {
    CURRENT_TIMEZONE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the current thread's timezone offset in seconds east of UTC.
///
/// Returns `0` (UTC) if no timezone has been activated.
pub fn get_current_timezone_offset() -> i32 {
    CURRENT_TIMEZONE.with(|cell| cell.borrow().unwrap_or(0))
}

/// Returns `true` if a timezone has been activated for the current thread.
pub fn is_timezone_active() -> bool {
    CURRENT_TIMEZONE.with(|cell| cell.borrow().is_some())
}

/// Returns the current timezone as a `FixedOffset`.
///
/// An out-of-range activated offset falls back to UTC.
pub fn get_current_timezone() -> FixedOffset {
    let offset = get_current_timezone_offset();
    FixedOffset::east_opt(offset).unwrap_or_else(|| Utc.fix())
}

/// Converts a datetime to the current thread's active timezone.
///
/// If no timezone is active, the datetime is returned in UTC.
pub fn localtime<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<FixedOffset> {
    dt.with_timezone(&get_current_timezone())
}

/// Converts a datetime to a specific timezone offset.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::i18n::timezone;
/// use chrono::{Datelike, TimeZone, Timelike, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let est = timezone::localtime_with_offset(&dt, -5 * 3600);
/// assert_eq!(est.day(), 31);
/// assert_eq!(est.month(), 12);
/// assert_eq!(est.hour(), 19);
/// ```
pub fn localtime_with_offset<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    offset_seconds: i32,
) -> DateTime<FixedOffset> {
    let tz = FixedOffset::east_opt(offset_seconds).unwrap_or_else(|| Utc.fix());
    dt.with_timezone(&tz)
}

/// Parses a timezone setting into seconds east of UTC.
///
/// Accepted forms: `"UTC"`, `"GMT"`, `"Z"`, `"+02:00"`, `"-0530"`, `"+2"`,
/// and any of the signed forms prefixed with `UTC` or `GMT`
/// (`"UTC+05:30"`). Named IANA zones are not resolved.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::i18n::timezone::parse_offset;
///
/// assert_eq!(parse_offset("UTC"), Some(0));
/// assert_eq!(parse_offset("+02:00"), Some(7200));
/// assert_eq!(parse_offset("UTC-05:30"), Some(-(5 * 3600 + 30 * 60)));
/// assert_eq!(parse_offset("Europe/Amsterdam"), None);
/// ```
pub fn parse_offset(spec: &str) -> Option<i32> {
    let spec = spec.trim();
    let upper = spec.to_ascii_uppercase();
    if matches!(upper.as_str(), "UTC" | "GMT" | "Z") {
        return Some(0);
    }

    let rest = upper
        .strip_prefix("UTC")
        .or_else(|| upper.strip_prefix("GMT"))
        .unwrap_or(&upper);

    let (sign, digits) = match rest.chars().next()? {
        '+' => (1, &rest[1..]),
        '-' => (-1, &rest[1..]),
        _ => return None,
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = if let Some((h, m)) = digits.split_once(':') {
        (h, m)
    } else if digits.len() == 4 {
        digits.split_at(2)
    } else {
        (digits, "0")
    };

    let all_digits = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || !all_digits(minutes) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    let total = sign * (hours * 3600 + minutes * 60);
    (total.abs() <= MAX_OFFSET_SECONDS).then_some(total)
}
