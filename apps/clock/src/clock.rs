// ABOUTME: Wall-clock access and time formatting for the clock app.
// ABOUTME: Renders instants as 12-hour hh:mm:ss AM/PM in a fixed time zone.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// All displayed time is in this zone, whatever the device locale.
pub const DISPLAY_TIME_ZONE: Tz = chrono_tz::Asia::Manila;

pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn format_time<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> String
where
    Z::Offset: std::fmt::Display,
{
    instant.with_timezone(zone).format("%I:%M:%S %p").to_string()
}

pub fn hour_of_day<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> u32 {
    instant.with_timezone(zone).hour()
}
