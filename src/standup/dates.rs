//! Date helpers. Entries are keyed by `YYYY-MM-DD`; everything user-facing
//! (display names, search, the `/YYYY/MM/DD` path form) is derived here.

use crate::error::{Result, StandupError};
use chrono::{Datelike, Duration, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    // chrono accepts unpadded fields; keys must stay canonical
    if trimmed.len() != 10 {
        return Err(StandupError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .map_err(|_| StandupError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// `2025-01-06` -> `/2025/01/06`
pub fn date_to_path(date: NaiveDate) -> String {
    format!("/{}", date.format("%Y/%m/%d"))
}

/// Builds a date from path segments, padding month and day to two digits.
pub fn path_to_date(year: &str, month: &str, day: &str) -> Result<NaiveDate> {
    parse_date(&format!("{}-{:0>2}-{:0>2}", year, month, day))
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn day_with_suffix(date: NaiveDate) -> String {
    format!("{}{}", date.day(), ordinal_suffix(date.day()))
}

/// `Today`, `Yesterday`, `Tuesday, January 6th`, or with the year appended
/// when it differs from the current one.
pub fn format_display(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if Some(date) == today.checked_sub_signed(Duration::days(1)) {
        return "Yesterday".to_string();
    }

    let base = format!(
        "{}, {} {}",
        date.format("%A"),
        date.format("%B"),
        day_with_suffix(date)
    );
    if date.year() == today.year() {
        base
    } else {
        format!("{} {}", base, date.year())
    }
}

/// `6th January 2025, Monday`, prefixed with `Today is ` for today.
pub fn format_journal(date: NaiveDate, today: NaiveDate) -> String {
    let formatted = format!(
        "{} {} {}, {}",
        day_with_suffix(date),
        date.format("%B"),
        date.year(),
        date.format("%A")
    );
    if date == today {
        format!("Today is {}", formatted)
    } else {
        formatted
    }
}

/// `2025-01-06 (Monday)`
pub fn format_for_markdown(date: NaiveDate) -> String {
    format!("{} ({})", format_date(date), date.format("%A"))
}

/// Loose search used to filter the list of entries.
///
/// Every whitespace-separated term has to hit one of: day number, year (full
/// or two-digit), day name, month name, short month name, or the ISO string.
/// `today` and `yesterday` match any date.
pub fn matches_search(date: NaiveDate, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let day = date.day().to_string();
    let year = date.year().to_string();
    let short_year = year[year.len().saturating_sub(2)..].to_string();
    let day_name = date.format("%A").to_string().to_lowercase();
    let month_name = date.format("%B").to_string().to_lowercase();
    let month_short = date.format("%b").to_string().to_lowercase();
    let iso = format_date(date);

    query.split_whitespace().all(|term| {
        day.contains(term)
            || year.contains(term)
            || short_year.contains(term)
            || day_name.contains(term)
            || month_name.contains(term)
            || month_short.contains(term)
            || iso.contains(term)
            || term == "today"
            || term == "yesterday"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn parse_requires_canonical_iso() {
        assert_eq!(format_date(d("2025-01-06")), "2025-01-06");
        assert!(parse_date("2025-1-6").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("06/01/2025").is_err());
    }

    #[test]
    fn path_conversions() {
        assert_eq!(date_to_path(d("2025-01-06")), "/2025/01/06");
        assert_eq!(path_to_date("2025", "1", "6").unwrap(), d("2025-01-06"));
        assert!(path_to_date("2025", "13", "1").is_err());
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn display_names() {
        let today = d("2025-01-08");
        assert_eq!(format_display(today, today), "Today");
        assert_eq!(format_display(d("2025-01-07"), today), "Yesterday");
        assert_eq!(format_display(d("2025-01-06"), today), "Monday, January 6th");
        assert_eq!(
            format_display(d("2024-12-31"), today),
            "Tuesday, December 31st 2024"
        );
    }

    #[test]
    fn journal_and_markdown_forms() {
        let today = d("2025-01-08");
        assert_eq!(
            format_journal(d("2025-01-06"), today),
            "6th January 2025, Monday"
        );
        assert_eq!(
            format_journal(today, today),
            "Today is 8th January 2025, Wednesday"
        );
        assert_eq!(format_for_markdown(d("2025-01-06")), "2025-01-06 (Monday)");
    }

    #[test]
    fn search_terms_must_all_match() {
        let date = d("2025-01-06");
        assert!(matches_search(date, ""));
        assert!(matches_search(date, "jan 6"));
        assert!(matches_search(date, "Monday"));
        assert!(matches_search(date, "25"));
        assert!(matches_search(date, "2025-01"));
        assert!(matches_search(date, "today"));
        assert!(!matches_search(date, "feb"));
        assert!(!matches_search(date, "jan tuesday"));
    }
}
