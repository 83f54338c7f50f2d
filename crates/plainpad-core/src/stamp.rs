//! Time/date text for Edit > Time/Date.

use chrono::{DateTime, Local, TimeZone};

/// Default format of the time part, e.g. `14:05`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
/// Default format of the date part, e.g. `16/10/2026`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats `at` as `<time> <date>` using strftime-style formats.
///
/// An invalid format falls back to the defaults instead of failing.
pub fn format_stamp<Tz: TimeZone>(at: &DateTime<Tz>, time_format: &str, date_format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let time = format_or_default(at, time_format, DEFAULT_TIME_FORMAT);
    let date = format_or_default(at, date_format, DEFAULT_DATE_FORMAT);
    format!("{time} {date}")
}

/// The stamp for the current local time.
pub fn now_stamp(time_format: &str, date_format: &str) -> String {
    format_stamp(&Local::now(), time_format, date_format)
}

fn format_or_default<Tz: TimeZone>(at: &DateTime<Tz>, format: &str, fallback: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_ok() {
        return out;
    }
    tracing::warn!("Invalid time/date format {format:?}, using {fallback:?}");
    at.format(fallback).to_string()
}
