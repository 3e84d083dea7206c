//! Weekly pay period logic.
//!
//! Weeks start on the configured pay weekday. The same week-start helper is the
//! building block for biweekly periods.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::PayPeriod;

/// Number of days in a weekly pay period.
pub const WEEKLY_PERIOD_DAYS: i64 = 7;

/// Returns the most recent `first_day` on or before `date`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::week_start;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2024-03-14 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// assert_eq!(week_start(thursday, Weekday::Mon), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// assert_eq!(week_start(thursday, Weekday::Sun), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// assert_eq!(week_start(thursday, Weekday::Thu), thursday);
/// ```
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7;
    date - Duration::days(i64::from(offset))
}

/// Computes the seven-day pay period containing `date`.
pub fn weekly_period(date: NaiveDate, first_day: Weekday) -> PayPeriod {
    let start = week_start(date, first_day);
    PayPeriod {
        start,
        end: start + Duration::days(WEEKLY_PERIOD_DAYS - 1),
    }
}
