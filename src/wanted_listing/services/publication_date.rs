use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Naive datetime layouts accepted in addition to RFC 3339
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Long-form rendering: full month name, day without padding, year
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Formats a publication timestamp as e.g. "January 15, 1990"
///
/// Accepts RFC 3339 timestamps, the API's naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps and plain `YYYY-MM-DD` dates. The calendar date is taken as
/// written, without converting time zones. Anything that does not parse is
/// returned unchanged.
pub fn format_publication_date(date_string: &str) -> String {
    match parse_calendar_date(date_string.trim()) {
        Some(date) => date.format(LONG_DATE_FORMAT).to_string(),
        None => date_string.to_string(),
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|datetime| datetime.date())
}
