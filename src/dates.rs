//! Date parsing and day math (pure, no clock access).
//!
//! The roster carries dates in two shapes: the local display form
//! dd/MM/yyyy and ISO yyyy-MM-dd (sometimes a full RFC3339 timestamp from
//! the API). Everything funnels through [`parse_flexible`]; callers supply
//! "today" explicitly so results are reproducible.

use chrono::{DateTime, NaiveDate};

/// Parse a date string in any of the shapes the roster uses.
///
/// Accepts dd/MM/yyyy, yyyy-MM-dd, and RFC3339 timestamps (date part taken).
/// Returns None for anything else — a malformed date is a data-quality
/// degradation, never a panic.
pub fn parse_flexible(value: &str) -> Option<NaiveDate> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if v.contains('/') {
        return NaiveDate::parse_from_str(v, "%d/%m/%Y").ok();
    }
    if let Ok(d) = NaiveDate::parse_from_str(v, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        return Some(dt.date_naive());
    }
    None
}

/// Whole days from `today` until `end`. Negative when the commission has
/// already ended.
pub fn days_remaining(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days()
}

/// Format for display: dd/MM/yyyy.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Convert an HTML date-input value (yyyy-MM-dd) to the local display form.
/// Unparseable input is passed through untouched.
pub fn input_to_local(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(d) => format_display(d),
        Err(_) => value.to_string(),
    }
}

/// Convert a local display date (dd/MM/yyyy) to date-input form (yyyy-MM-dd).
/// Unparseable input is passed through untouched.
pub fn local_to_input(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y") {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_display_format() {
        assert_eq!(
            parse_flexible("20/01/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 20)
        );
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(
            parse_flexible("2024-01-20"),
            NaiveDate::from_ymd_opt(2024, 1, 20)
        );
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        assert_eq!(
            parse_flexible("2024-01-20T14:30:00-03:00"),
            NaiveDate::from_ymd_opt(2024, 1, 20)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_flexible("mañana"), None);
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("32/13/2024"), None);
    }

    #[test]
    fn days_remaining_can_go_negative() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let past = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        assert_eq!(days_remaining(past, today), -2);
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(input_to_local("2024-03-05"), "05/03/2024");
        assert_eq!(local_to_input("05/03/2024"), "2024-03-05");
        // pass-through for junk
        assert_eq!(local_to_input("junk"), "junk");
    }
}
