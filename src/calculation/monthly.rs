//! Calendar month helpers and monthly pay period logic.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::PayPeriod;

/// Returns the first day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Returns the last day of `date`'s month.
///
/// Computed as the day before the first of the following month, so month
/// lengths and leap years come from the calendar rather than a table.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::last_of_month;
/// use chrono::NaiveDate;
///
/// let leap = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(last_of_month(leap), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// let common = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
/// assert_eq!(last_of_month(common), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
/// ```
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1) - Duration::days(1)
}

/// Returns the number of days in `date`'s month.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// Computes the calendar-month pay period containing `date`.
pub fn monthly_period(date: NaiveDate) -> PayPeriod {
    PayPeriod {
        start: first_of_month(date),
        end: last_of_month(date),
    }
}
