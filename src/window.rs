//! Day-window arithmetic
//!
//! Calorie averages are computed over whole local days: a window of `n` days
//! starts at local midnight `n - 1` days before today and runs to now.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveTime, TimeZone, Timelike};

/// Seconds in a calendar day, ignoring DST shifts
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Number of days in an averaging window, always `>= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayCount(i64);

impl DayCount {
    pub const ONE: DayCount = DayCount(1);

    pub fn new(days: i64) -> Option<Self> {
        (days >= 1).then_some(Self(days))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected day count: not an integer, or below one
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day count: {0:?}")]
pub struct InvalidDayCount(pub String);

impl FromStr for DayCount {
    type Err = InvalidDayCount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .ok()
            .and_then(DayCount::new)
            .ok_or_else(|| InvalidDayCount(s.to_string()))
    }
}

/// Parse a Unix timestamp, falling back to the current time.
///
/// Accepts the raw tail of a catch-all path segment, so a leading `/` is
/// ignored.
pub fn default_timestamp(raw: Option<&str>) -> i64 {
    raw.map(|s| s.trim_start_matches('/'))
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or_else(|| Local::now().timestamp())
}

/// Local midnight of the day containing `now`, as a Unix timestamp
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.timestamp(),
        // Midnight skipped by a DST jump; the day starts at the first valid instant.
        None => now.timestamp() - i64::from(now.time().num_seconds_from_midnight()),
    }
}

/// Local midnight of today
pub fn start_of_today() -> i64 {
    start_of_day(&Local::now())
}

/// Start of the window covering `days` days, today included
pub fn days_ago_from(start_of_today: i64, days: DayCount) -> i64 {
    start_of_today.saturating_sub((days.get() - 1).saturating_mul(SECONDS_PER_DAY))
}

/// Start of the window covering `days` days counted back from today
pub fn days_ago(days: DayCount) -> i64 {
    days_ago_from(start_of_today(), days)
}

/// Average per day, truncating toward zero
pub fn average(total: i64, days: DayCount) -> i64 {
    total / days.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_day_count_parsing() {
        assert_eq!("1".parse::<DayCount>().unwrap().get(), 1);
        assert_eq!("+7".parse::<DayCount>().unwrap().get(), 7);
        assert!("0".parse::<DayCount>().is_err());
        assert!("-3".parse::<DayCount>().is_err());
        assert!("abc".parse::<DayCount>().is_err());
        assert!("".parse::<DayCount>().is_err());
        assert!("2.5".parse::<DayCount>().is_err());
    }

    #[test]
    fn test_default_timestamp() {
        assert_eq!(default_timestamp(Some("1700000000")), 1_700_000_000);
        assert_eq!(default_timestamp(Some("/1700000000")), 1_700_000_000);

        let before = Utc::now().timestamp();
        let fallback = default_timestamp(Some("/"));
        let missing = default_timestamp(None);
        let garbage = default_timestamp(Some("yesterday"));
        let after = Utc::now().timestamp();

        for ts in [fallback, missing, garbage] {
            assert!(ts >= before && ts <= after);
        }
    }

    #[test]
    fn test_start_of_day_fixed_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 10, 15, 30, 5).unwrap();
        let midnight = tz.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();

        assert_eq!(start_of_day(&now), midnight.timestamp());
    }

    #[test]
    fn test_start_of_today_is_local_midnight() {
        let start = Local.timestamp_opt(start_of_today(), 0).unwrap();
        let now = Local::now();

        assert!(start.timestamp() <= now.timestamp());
        assert_eq!(start.date_naive(), now.date_naive());
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
    }

    #[test]
    fn test_days_ago_arithmetic() {
        let today = 1_700_006_400;

        assert_eq!(days_ago_from(today, DayCount::ONE), today);
        assert_eq!(days_ago_from(today, DayCount::new(5).unwrap()), today - 4 * SECONDS_PER_DAY);
        assert!(days_ago_from(today, DayCount::new(i64::MAX).unwrap()) < 0);
        assert_eq!(days_ago(DayCount::ONE), start_of_today());
    }

    #[test]
    fn test_average_truncates() {
        let five = DayCount::new(5).unwrap();

        assert_eq!(average(1500, DayCount::ONE), 1500);
        assert_eq!(average(1500, five), 300);
        assert_eq!(average(1499, five), 299);
        assert_eq!(average(-7, DayCount::new(2).unwrap()), -3);
    }
}
