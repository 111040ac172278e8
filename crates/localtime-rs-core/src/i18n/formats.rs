//! Locale-aware datetime formatting.
//!
//! Each supported language carries a [`LocaleFormats`] table: the
//! `DATETIME_FORMAT` string used by [`localize_datetime`] plus localized month
//! and weekday names. Format strings use the PHP `date()`-style format characters
//! (`j`, `N`, `Y`, `P`, `H:i`, ...), so a host that already has such formats
//! configured can pass them straight to [`format_datetime`].
//!
//! Languages without a table fall back to their base language
//! (`"de-at"` -> `"de"`) and then to English.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use localtime_rs_core::i18n::{self, formats, timezone};
//!
//! let dt = Utc.with_ymd_and_hms(2024, 6, 10, 8, 36, 0).unwrap();
//! assert_eq!(formats::localize_datetime(&dt), "June 10, 2024, 8:36 a.m.");
//!
//! i18n::activate("de");
//! timezone::activate_timezone(7200);
//! assert_eq!(formats::localize_datetime(&dt), "10. Juni 2024 10:36");
//! i18n::deactivate();
//! timezone::deactivate_timezone();
//! ```

use std::fmt::Write;

use chrono::{DateTime, Datelike, NaiveDateTime, Offset, TimeZone, Timelike};

use super::{base_language, get_language, timezone};

/// Format strings and names for one language.
#[derive(Debug)]
pub struct LocaleFormats {
    /// The language code this table belongs to.
    pub language: &'static str,
    /// Format used for datetimes in list and detail views.
    pub datetime_format: &'static str,
    /// Format used for dates alone.
    pub date_format: &'static str,
    /// Format used for times alone.
    pub time_format: &'static str,
    months: [&'static str; 12],
    months_abbr: [&'static str; 12],
    /// Associated Press style abbreviations (`N`); falls back to `months_abbr`.
    months_ap: Option<[&'static str; 12]>,
    weekdays: [&'static str; 7],
    weekdays_abbr: [&'static str; 7],
}

const EN: LocaleFormats = LocaleFormats {
    language: "en",
    datetime_format: "N j, Y, P",
    date_format: "N j, Y",
    time_format: "P",
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    months_abbr: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    months_ap: Some([
        "Jan.", "Feb.", "March", "April", "May", "June", "July", "Aug.", "Sept.", "Oct.",
        "Nov.", "Dec.",
    ]),
    weekdays: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
    weekdays_abbr: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

const EN_GB: LocaleFormats = LocaleFormats {
    language: "en-gb",
    datetime_format: "j M Y, P",
    date_format: "j M Y",
    ..EN
};

const DE: LocaleFormats = LocaleFormats {
    language: "de",
    datetime_format: "j. F Y H:i",
    date_format: "j. F Y",
    time_format: "H:i",
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
        "September", "Oktober", "November", "Dezember",
    ],
    months_abbr: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    months_ap: None,
    weekdays: [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ],
    weekdays_abbr: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
};

const FR: LocaleFormats = LocaleFormats {
    language: "fr",
    datetime_format: "j F Y H:i",
    date_format: "j F Y",
    time_format: "H:i",
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
        "septembre", "octobre", "novembre", "décembre",
    ],
    months_abbr: [
        "jan", "fév", "mar", "avr", "mai", "jun", "jul", "aoû", "sep", "oct", "nov", "déc",
    ],
    months_ap: None,
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    weekdays_abbr: ["lun", "mar", "mer", "jeu", "ven", "sam", "dim"],
};

const ES: LocaleFormats = LocaleFormats {
    language: "es",
    datetime_format: r"j \d\e F \d\e Y \a \l\a\s H:i",
    date_format: r"j \d\e F \d\e Y",
    time_format: "H:i",
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ],
    months_abbr: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ],
    months_ap: None,
    weekdays: [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ],
    weekdays_abbr: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
};

const NL: LocaleFormats = LocaleFormats {
    language: "nl",
    datetime_format: "j F Y H:i",
    date_format: "j F Y",
    time_format: "H:i",
    months: [
        "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus",
        "september", "oktober", "november", "december",
    ],
    months_abbr: [
        "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    months_ap: None,
    weekdays: [
        "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag", "zondag",
    ],
    weekdays_abbr: ["ma", "di", "wo", "do", "vr", "za", "zo"],
};

static LOCALES: [&LocaleFormats; 6] = [&EN, &EN_GB, &DE, &FR, &ES, &NL];

fn lookup(language: &str) -> Option<&'static LocaleFormats> {
    LOCALES.iter().copied().find(|l| l.language == language)
}

/// Returns `true` if `language` (or its base language) has its own format table.
pub fn has_locale_formats(language: &str) -> bool {
    lookup(language).is_some() || lookup(base_language(language)).is_some()
}

/// Returns the format table for a language, falling back to its base
/// language and then to English.
pub fn get_format(language: &str) -> &'static LocaleFormats {
    lookup(language)
        .or_else(|| lookup(base_language(language)))
        .unwrap_or(LOCALES[0])
}

/// Returns the format table for the language active on this thread.
pub fn active_format() -> &'static LocaleFormats {
    get_format(&get_language())
}

/// Formats an aware datetime in the active timezone and language.
///
/// The instant is converted with [`timezone::localtime`] and rendered with the
/// active language's `datetime_format`.
pub fn localize_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let local = timezone::localtime(dt);
    let locale = active_format();
    render(
        &local.naive_local(),
        Some(local.offset().local_minus_utc()),
        locale.datetime_format,
        locale,
    )
}

/// Formats a naive datetime in the active language, without timezone conversion.
pub fn localize_naive(dt: &NaiveDateTime) -> String {
    let locale = active_format();
    render(dt, None, locale.datetime_format, locale)
}

/// Formats an aware datetime (in its own offset) with an explicit format string.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use localtime_rs_core::i18n::formats::{format_datetime, get_format};
///
/// let dt = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
/// assert_eq!(format_datetime(&dt, "D, j M Y P", get_format("en")), "Mon, 10 Jun 2024 midnight");
/// ```
pub fn format_datetime<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    format: &str,
    locale: &LocaleFormats,
) -> String {
    let offset = dt.offset().fix().local_minus_utc();
    render(&dt.naive_local(), Some(offset), format, locale)
}

/// Formats a naive datetime with an explicit format string.
///
/// Offset-dependent characters (`O`, `Z`) render as empty strings.
pub fn format_naive(dt: &NaiveDateTime, format: &str, locale: &LocaleFormats) -> String {
    render(dt, None, format, locale)
}

fn render(
    dt: &NaiveDateTime,
    offset: Option<i32>,
    format: &str,
    locale: &LocaleFormats,
) -> String {
    let mut result = String::new();
    let mut chars = format.chars();
    let month = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_monday() as usize;

    while let Some(ch) = chars.next() {
        match ch {
            // Day
            'd' => {
                let _ = write!(result, "{:02}", dt.day());
            }
            'j' => {
                let _ = write!(result, "{}", dt.day());
            }
            'D' => result.push_str(locale.weekdays_abbr[weekday]),
            'l' => result.push_str(locale.weekdays[weekday]),
            // Month
            'F' => result.push_str(locale.months[month]),
            'M' => result.push_str(locale.months_abbr[month]),
            'b' => result.push_str(&locale.months_abbr[month].to_lowercase()),
            'N' => result.push_str(
                locale
                    .months_ap
                    .map_or(locale.months_abbr[month], |ap| ap[month]),
            ),
            'm' => {
                let _ = write!(result, "{:02}", dt.month());
            }
            'n' => {
                let _ = write!(result, "{}", dt.month());
            }
            // Year
            'Y' => {
                let _ = write!(result, "{}", dt.year());
            }
            'y' => {
                let _ = write!(result, "{:02}", dt.year().rem_euclid(100));
            }
            // Time
            'H' => {
                let _ = write!(result, "{:02}", dt.hour());
            }
            'G' => {
                let _ = write!(result, "{}", dt.hour());
            }
            'h' => {
                let _ = write!(result, "{:02}", dt.hour12().1);
            }
            'g' => {
                let _ = write!(result, "{}", dt.hour12().1);
            }
            'i' => {
                let _ = write!(result, "{:02}", dt.minute());
            }
            's' => {
                let _ = write!(result, "{:02}", dt.second());
            }
            'a' => result.push_str(if dt.hour() < 12 { "a.m." } else { "p.m." }),
            'A' => result.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
            'f' => push_short_time(&mut result, dt),
            'P' => match (dt.hour(), dt.minute()) {
                (0, 0) => result.push_str("midnight"),
                (12, 0) => result.push_str("noon"),
                (hour, _) => {
                    push_short_time(&mut result, dt);
                    result.push_str(if hour < 12 { " a.m." } else { " p.m." });
                }
            },
            // Timezone
            'O' => {
                if let Some(seconds) = offset {
                    let sign = if seconds < 0 { '-' } else { '+' };
                    let abs = seconds.abs();
                    let _ = write!(result, "{sign}{:02}{:02}", abs / 3600, (abs % 3600) / 60);
                }
            }
            'Z' => {
                if let Some(seconds) = offset {
                    let _ = write!(result, "{seconds}");
                }
            }
            '\\' => {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
            _ => result.push(ch),
        }
    }

    result
}

/// `g:i`, with the minutes dropped when they are zero.
fn push_short_time(result: &mut String, dt: &NaiveDateTime) {
    let hour = dt.hour12().1;
    if dt.minute() == 0 {
        let _ = write!(result, "{hour}");
    } else {
        let _ = write!(result, "{hour}:{:02}", dt.minute());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{activate, deactivate};
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn setup() {
        deactivate();
        timezone::deactivate_timezone();
    }

    fn stored() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 8, 36, 0).unwrap()
    }

    #[test]
    fn test_localize_default_english_utc() {
        setup();
        assert_eq!(localize_datetime(&stored()), "June 10, 2024, 8:36 a.m.");
    }

    #[test]
    fn test_localize_follows_active_timezone() {
        setup();
        timezone::activate_timezone(-5 * 3600);
        assert_eq!(localize_datetime(&stored()), "June 10, 2024, 3:36 a.m.");
        timezone::activate_timezone(9 * 3600);
        assert_eq!(localize_datetime(&stored()), "June 10, 2024, 5:36 p.m.");
        setup();
    }

    #[test]
    fn test_localize_other_languages() {
        setup();
        activate("fr");
        assert_eq!(localize_datetime(&stored()), "10 juin 2024 08:36");
        activate("nl");
        assert_eq!(localize_datetime(&stored()), "10 juni 2024 08:36");
        activate("es");
        assert_eq!(
            localize_datetime(&stored()),
            "10 de junio de 2024 a las 08:36"
        );
        activate("en-gb");
        assert_eq!(localize_datetime(&stored()), "10 Jun 2024, 8:36 a.m.");
        setup();
    }

    #[test]
    fn test_regional_variant_falls_back_to_base() {
        setup();
        activate("de-at");
        assert_eq!(localize_datetime(&stored()), "10. Juni 2024 08:36");
        setup();
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        setup();
        activate("zz");
        assert_eq!(localize_datetime(&stored()), "June 10, 2024, 8:36 a.m.");
        assert!(!has_locale_formats("zz"));
        assert!(has_locale_formats("de-ch"));
        setup();
    }

    #[test]
    fn test_localize_naive_skips_conversion() {
        setup();
        timezone::activate_timezone(3 * 3600);
        let naive = NaiveDate::from_ymd_opt(2024, 12, 24)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(localize_naive(&naive), "Dec. 24, 2024, 6 p.m.");
        setup();
    }

    #[test]
    fn test_p_midnight_and_noon() {
        let en = get_format("en");
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_datetime(&midnight, "P", en), "midnight");
        assert_eq!(format_datetime(&noon, "P", en), "noon");
    }

    #[test]
    fn test_ap_month_names() {
        let en = get_format("en");
        let sept = Utc.with_ymd_and_hms(2024, 9, 3, 0, 0, 0).unwrap();
        let march = Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap();
        assert_eq!(format_datetime(&sept, "N", en), "Sept.");
        assert_eq!(format_datetime(&march, "N", en), "March");
        // Languages without AP names use the short form.
        assert_eq!(format_datetime(&march, "N", get_format("de")), "Mär");
    }

    #[test]
    fn test_numeric_and_weekday_characters() {
        let en = get_format("en");
        let dt = FixedOffset::east_opt(-(4 * 3600 + 30 * 60))
            .unwrap()
            .with_ymd_and_hms(2009, 2, 7, 21, 5, 9)
            .unwrap();
        assert_eq!(format_datetime(&dt, "Y-m-d H:i:s", en), "2009-02-07 21:05:09");
        assert_eq!(format_datetime(&dt, "y n j G g h A a", en), "09 2 7 21 9 09 PM p.m.");
        assert_eq!(format_datetime(&dt, "l D b", en), "Saturday Sat feb");
        assert_eq!(format_datetime(&dt, "O Z", en), "-0430 -16200");
    }

    #[test]
    fn test_escaped_characters() {
        let dt = stored();
        assert_eq!(format_datetime(&dt, r"\Y\e\a\r: Y", get_format("en")), "Year: 2024");
    }

    #[test]
    fn test_naive_offset_characters_empty() {
        let naive = stored().naive_utc();
        assert_eq!(format_naive(&naive, "H:iO", get_format("en")), "08:36");
    }
}
