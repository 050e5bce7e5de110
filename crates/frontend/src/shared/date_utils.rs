//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::NaiveDate;

/// Format ISO date string to "15 Mar 2024" for display.
/// Accepts plain dates and ISO datetimes; unparseable input is returned as-is.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format ISO datetime string to "15 Mar 2024 14:02" for display.
/// Falls back to `format_date` when no time component is present.
pub fn format_datetime(datetime_str: &str) -> String {
    let Some((date_part, time_part)) = datetime_str.split_once('T') else {
        return format_date(datetime_str);
    };
    let date = match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return datetime_str.to_string(),
    };
    let hhmm: String = time_part.chars().take(5).collect();
    format!("{} {}", date.format("%d %b %Y"), hhmm)
}

/// Display an optional date, "-" when absent.
pub fn format_date_opt(date_str: &Option<String>) -> String {
    date_str
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15 Mar 2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31"), "31 Dec 2024");
    }

    #[test]
    fn test_format_date_opt() {
        assert_eq!(format_date_opt(&Some("2024-01-02".into())), "02 Jan 2024");
        assert_eq!(format_date_opt(&None), "-");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("in-va-lidTzz"), "in-va-lidTzz");
    }
}
