//! Date formatting for list and detail screens.

use chrono::{DateTime, NaiveDate};

/// Formats an ISO date or RFC 3339 datetime as DD.MM.YYYY.
/// Returns the input unchanged when it is neither.
///
/// ```
/// use contracts::shared::date::format_date;
/// assert_eq!(format_date("2019-03-15T14:02:26+00:00"), "15.03.2019");
/// ```
pub fn format_date(value: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return datetime.format("%d.%m.%Y").to_string();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Like [`format_date`], `"-"` for a missing date
pub fn format_optional_date(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "31.12.2024");
    }

    #[test]
    fn test_invalid_date_is_kept() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_optional_date(None), "-");
    }
}
