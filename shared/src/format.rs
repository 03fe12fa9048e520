//! Text helpers for card rendering: truncation and Spanish date formatting.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::models::UNAVAILABLE;

/// Compact article cards cut descriptions at this many characters.
pub const DESCRIPTION_LIMIT: usize = 100;
/// Author cards cut bios at this many characters.
pub const BIO_LIMIT: usize = 50;
/// Returned by [`format_date`] for a missing date.
pub const DATE_MISSING: &str = "fecha no disponible";
/// Returned by the date formatters for an unparseable date.
pub const DATE_INVALID: &str = "fecha no válida";

const ELLIPSIS: &str = "...";

const MONTHS_ES: [&str; 12] = [
    "ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sep.", "oct.", "nov.", "dic.",
];

/// Keep the first `limit` characters of `text`, appending `...` when anything
/// was cut.
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// `"<day> de <mes> de <year> • <mm> min read"`, or a literal fallback.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return DATE_MISSING.to_string();
    };
    let Some(ts) = parse_timestamp(raw) else {
        return DATE_INVALID.to_string();
    };
    format!(
        "{} de {} de {} • {:02} min read",
        ts.day(),
        month_abbrev(ts.month()),
        ts.year(),
        ts.minute()
    )
}

/// `"<day> de <mes> de <year>"` for author cards. The [`UNAVAILABLE`]
/// placeholder and blank input render as the placeholder itself.
pub fn format_birthdate(raw: &str) -> String {
    if raw.trim().is_empty() || raw == UNAVAILABLE {
        return UNAVAILABLE.to_string();
    }
    match parse_timestamp(raw) {
        Some(ts) => format!("{} de {} de {}", ts.day(), month_abbrev(ts.month()), ts.year()),
        None => DATE_INVALID.to_string(),
    }
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` and bare `YYYY-MM-DD`.
/// Offsets are normalized to UTC.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn month_abbrev(month: u32) -> &'static str {
    MONTHS_ES[(month as usize).saturating_sub(1) % MONTHS_ES.len()]
}

#[cfg(test)]
mod tests {
    use super::{format_birthdate, format_date, truncate, DATE_INVALID, DATE_MISSING};

    #[test]
    fn truncate_keeps_short_text() {
        let exactly = "x".repeat(100);
        assert_eq!(truncate(&exactly, 100), exactly.as_str());
        assert_eq!(truncate("short", 100), "short");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = format!("{}{}", "a".repeat(100), "tail");
        assert_eq!(truncate(&long, 100), format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let accented = "é".repeat(101);
        let cut = truncate(&accented, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.starts_with(&"é".repeat(100)));
    }

    #[test]
    fn format_date_renders_spanish_read_line() {
        assert_eq!(
            format_date(Some("2020-11-17T19:48:15.337Z")),
            "17 de nov. de 2020 • 48 min read"
        );
        assert_eq!(format_date(Some("2021-01-05T10:07:00")), "5 de ene. de 2021 • 07 min read");
        assert_eq!(format_date(Some("2019-12-31")), "31 de dic. de 2019 • 00 min read");
    }

    #[test]
    fn format_date_normalizes_offsets_to_utc() {
        assert_eq!(
            format_date(Some("2020-03-01T00:30:00+02:00")),
            "29 de feb. de 2020 • 30 min read"
        );
    }

    #[test]
    fn format_date_fallbacks() {
        assert_eq!(format_date(None), DATE_MISSING);
        assert_eq!(format_date(Some("")), DATE_MISSING);
        assert_eq!(format_date(Some("not-a-date")), DATE_INVALID);
        assert_eq!(format_date(Some("2020-13-45")), DATE_INVALID);
    }

    #[test]
    fn birthdate_formatting() {
        assert_eq!(format_birthdate("1988-07-09T04:21:00.000Z"), "9 de jul. de 1988");
        assert_eq!(format_birthdate("No disponible"), "No disponible");
        assert_eq!(format_birthdate("yesterday"), DATE_INVALID);
    }
}
