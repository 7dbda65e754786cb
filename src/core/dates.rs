// src/core/dates.rs
use chrono::{DateTime, NaiveDate, Utc};

pub const DATE_FMT: &str = "%Y-%m-%d";

/// Calendar date (UTC) of a posting timestamp.
/// Accepts RFC 3339 (any offset) or a bare `YYYY-MM-DD`, taken as UTC.
pub fn posted_date_utc(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, DATE_FMT).ok()
}

pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FMT).ok()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DATE_FMT).to_string()
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn offsets_shift_to_utc_day() {
        assert_eq!(posted_date_utc("2024-01-01T23:30:00-02:00"), Some(d(2024, 1, 2)));
        assert_eq!(posted_date_utc("2024-01-02T01:00:00+05:30"), Some(d(2024, 1, 1)));
        assert_eq!(posted_date_utc("2024-03-05T10:00:00.123Z"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn bare_dates_and_garbage() {
        assert_eq!(posted_date_utc("2024-02-29"), Some(d(2024, 2, 29)));
        assert_eq!(posted_date_utc("yesterday"), None);
        assert_eq!(posted_date_utc(""), None);
        assert_eq!(format_day(d(2024, 1, 9)), "2024-01-09");
    }
}
