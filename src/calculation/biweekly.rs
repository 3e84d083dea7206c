//! Biweekly pay period logic.
//!
//! Fortnights are counted from the week containing the configured anchor date.
//! The cycle index is the floor of the elapsed days between the two week starts
//! divided by fourteen. Euclidean division keeps the floor correct for dates
//! before the anchor, so every date maps to exactly one fortnight.

use chrono::{Duration, NaiveDate, Weekday};

use crate::models::{PayPeriod, PayrollSettings};

use super::weekly::week_start;

/// Number of days in a biweekly pay period.
pub const BIWEEKLY_PERIOD_DAYS: i64 = 14;

/// Returns the index of the fortnight containing `date`, counted from the
/// fortnight that starts on the anchor's week start (index 0).
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::biweekly_cycle_index;
/// use chrono::{NaiveDate, Weekday};
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
/// assert_eq!(biweekly_cycle_index(date, anchor, Weekday::Mon), 1);
///
/// let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(biweekly_cycle_index(before, anchor, Weekday::Mon), -1);
/// ```
pub fn biweekly_cycle_index(date: NaiveDate, anchor: NaiveDate, first_day: Weekday) -> i64 {
    let anchor_start = week_start(anchor, first_day);
    let elapsed = (week_start(date, first_day) - anchor_start).num_days();
    elapsed.div_euclid(BIWEEKLY_PERIOD_DAYS)
}

/// Computes the fourteen-day pay period containing `date`.
///
/// Periods begin on the configured pay weekday and are aligned to the week
/// containing `settings.biweekly_anchor_date`.
pub fn biweekly_period(date: NaiveDate, settings: &PayrollSettings) -> PayPeriod {
    let first_day = settings.week_start_day();
    let anchor_start = week_start(settings.biweekly_anchor_date, first_day);
    let cycle = biweekly_cycle_index(date, settings.biweekly_anchor_date, first_day);
    let start = anchor_start + Duration::days(cycle * BIWEEKLY_PERIOD_DAYS);

    PayPeriod {
        start,
        end: start + Duration::days(BIWEEKLY_PERIOD_DAYS - 1),
    }
}
