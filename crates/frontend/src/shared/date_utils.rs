/// Utilities for date and time formatting
///
/// Date-only columns (delivery dates) are reformatted by string slicing so
/// no timezone math can shift them by a day. Timestamps come from SQLite's
/// CURRENT_TIMESTAMP, which is UTC without an offset marker; those are
/// converted to the browser's local time before display.
use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Format a date or timestamp string to DD/MM/YYYY.
/// Example: "2025-03-15" -> "15/03/2025"
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Some(formatted) = format_plain_date(raw) {
        return formatted;
    }
    match parse_utc_timestamp(raw) {
        Some(dt) => dt.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format a timestamp to DD/MM/YYYY HH:MM in local time.
pub fn format_datetime(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Some(formatted) = format_plain_date(raw) {
        return formatted;
    }
    match parse_utc_timestamp(raw) {
        Some(dt) => dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

fn format_plain_date(raw: &str) -> Option<String> {
    if raw.len() != 10 || !raw.contains('-') {
        return None;
    }
    let mut parts = raw.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    Some(format!("{}/{}/{}", d, m, y))
}

fn parse_utc_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|n| n.and_utc())
}

/// Today's date for deadline math and export file names.
pub fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_are_sliced_not_parsed() {
        assert_eq!(format_date("2025-03-15"), "15/03/2025");
        assert_eq!(format_datetime("2025-03-15"), "15/03/2025");
    }

    #[test]
    fn empty_dates_show_na() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_datetime(""), "N/A");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_datetime("soon"), "soon");
    }

    #[test]
    fn sqlite_timestamps_parse_as_utc() {
        let dt = parse_utc_timestamp("2025-03-15 14:02:26").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-03-15T14:02:26+00:00");
        assert!(parse_utc_timestamp("2025-03-15T14:02:26+02:00").is_some());
    }
}
