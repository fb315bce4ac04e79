//! Time utilities: parsing HH:MM, duration computations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Legacy CSV time cells carry seconds ("09:15:00"); accept both forms.
pub fn parse_time_lenient(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    parse_time(t).or_else(|| NaiveTime::parse_from_str(t, "%H:%M:%S").ok())
}

/// Wall-clock time of day, truncated to the minute.
pub fn now_time() -> NaiveTime {
    let now = chrono::Local::now().time();
    now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now)
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}
