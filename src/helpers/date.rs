//! Date helper functions

use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats accepted for a `date` front-matter value, tried in order
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

/// Parse a front-matter date into a calendar date-time
///
/// Date-only values land on midnight. Values carrying a UTC offset are
/// normalised to UTC so posts from different zones compare on one clock.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a date using a Moment.js-style format string
///
/// Text that is not a Moment token, `%` included, is copied through as-is.
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD")? // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> Result<String> {
    let pattern = moment_to_chrono_format(format);
    if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("Invalid date format: {}", format);
    }
    Ok(date.format(&pattern).to_string())
}

/// Convert Moment.js tokens to chrono specifiers
fn moment_to_chrono_format(format: &str) -> String {
    // Longest token first within each family so "MMMM" is not eaten by "MM".
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Escape literal percent signs before any specifiers are introduced.
    replacements
        .iter()
        .fold(format.replace('%', "%%"), |acc, &(from, to)| {
            acc.replace(from, to)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024/01/15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("  2024-01-15 "), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("January 15, 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_parse_date_time() {
        let dt = parse_date("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");

        let dt = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2024-13-45"), None);
    }

    #[test]
    fn test_format_date() {
        let date = ymd(2024, 1, 15);
        assert_eq!(format_date(&date, "YYYY-MM-DD").unwrap(), "2024-01-15");
        assert_eq!(format_date(&date, "YYYY/MM/DD").unwrap(), "2024/01/15");
        assert_eq!(
            format_date(&date, "MMMM DD, YYYY").unwrap(),
            "January 15, 2024"
        );
    }

    #[test]
    fn test_format_date_keeps_literal_percent() {
        let date = ymd(2024, 1, 15);
        assert_eq!(
            format_date(&date, "DD MMM YYYY 100%").unwrap(),
            "15 Jan 2024 100%"
        );
        assert_eq!(format_date(&date, "%Q YYYY").unwrap(), "%Q 2024");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("YYYY 50%"), "%Y 50%%");
    }
}
