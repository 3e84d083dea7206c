//! Semimonthly pay period logic.
//!
//! A month is split after each cutover day. With the default cutovers (the 15th
//! and the end of the month) that gives `[1, 15]` and `[16, last]`. A second
//! cutover earlier than the month's end leaves a third, trailing period so the
//! month is still fully covered.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{PayPeriod, PayrollSettings};

use super::monthly::{days_in_month, first_of_month};

/// Computes the semimonthly pay period containing `date`.
///
/// Cutover days are resolved against `date`'s month, so a configured 31st
/// ends the second half on the 30th, 29th or 28th in shorter months.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::semimonthly_period;
/// use timesheet_engine::models::{PayFrequency, PayrollSettings};
/// use chrono::NaiveDate;
///
/// let settings = PayrollSettings {
///     pay_days: Some([15, 31]),
///     ..PayrollSettings::new(PayFrequency::Semimonthly)
/// };
///
/// let period = semimonthly_period(NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(), &settings);
/// assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
/// assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn semimonthly_period(date: NaiveDate, settings: &PayrollSettings) -> PayPeriod {
    let month_start = first_of_month(date);
    let month_days = days_in_month(date);
    let (first, second) = settings.cutover_days();
    let first = first.resolve(month_days);
    let second = second.resolve(month_days);
    let day = date.day();

    let (start_day, end_day) = if day <= first {
        (1, first)
    } else if day <= second {
        (first + 1, second)
    } else {
        (second + 1, month_days)
    };

    PayPeriod {
        start: month_start + Duration::days(i64::from(start_day - 1)),
        end: month_start + Duration::days(i64::from(end_day - 1)),
    }
}
