use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date value: {0:?}")]
pub struct InvalidDate(pub String);

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

pub fn current_year(tz: &Tz) -> i32 {
    today_local(tz).year()
}

/// Every calendar day of `year`, Jan 1 through Dec 31 inclusive.
///
/// Years chrono cannot represent yield nothing.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |day| day.year() == year)
}

/// Normalizes a holiday date value to a plain calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and offset-less timestamps. The
/// time-of-day is dropped; an offset timestamp keeps the date as written.
pub fn parse_holiday_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| InvalidDate(raw.to_string()))
}
