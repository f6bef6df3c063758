use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::error::FormatError;
use super::locale::Locale;

/// Date-only layouts the pages are known to produce.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Date-time layouts; the time-of-day part is dropped after parsing.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date-like string into a calendar date.
///
/// Accepts ISO dates, ISO date-times with `T` or space, RFC 3339 timestamps
/// (the offset is ignored, the date is taken as written) and day-first
/// `dd.mm.yyyy` input. Anything else fails with
/// [`FormatError::InvalidDate`].
pub fn parse_date(input: &str) -> Result<NaiveDate, FormatError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormatError::invalid_date("empty date string"));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed.date());
        }
    }
    Err(FormatError::invalid_date(format!(
        "unrecognized date string {input:?}"
    )))
}

/// Renders a date-like string with the Russian short-date convention,
/// e.g. `15.01.2024`.
pub fn format_date(input: &str) -> Result<String, FormatError> {
    format_date_with(&Locale::russian(), input)
}

/// Renders a date-like string with the given locale's short-date pattern.
pub fn format_date_with(locale: &Locale, input: &str) -> Result<String, FormatError> {
    Ok(parse_date(input)?.format(locale.date_pattern).to_string())
}
