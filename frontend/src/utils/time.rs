use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

pub fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Calendar day of a UTC instant as seen in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

pub fn format_time(instant: Option<DateTime<Utc>>, tz: Tz) -> String {
    instant
        .map(|t| t.with_timezone(&tz).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn format_date(instant: DateTime<Utc>, tz: Tz) -> String {
    local_date(instant, tz).format("%Y-%m-%d").to_string()
}

/// Midnight of `date` in `tz`, expressed in UTC for the wire.
pub fn start_of_day_utc(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    use chrono::TimeZone;
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses a whole-hour value such as `"07:00"`.
pub fn parse_hour(value: &str) -> Option<u32> {
    let (hour, minute) = value.trim().split_once(':')?;
    if hour.len() != 2 || minute != "00" {
        return None;
    }
    hour.parse::<u32>().ok().filter(|h| *h < 24)
}

pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour % 24)
}
