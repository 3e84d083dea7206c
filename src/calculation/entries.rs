//! Timesheet entry grid derivation.
//!
//! A timesheet shows one row per day of the active pay period. The grid is
//! derived on demand from the period and whatever entries the timesheet service
//! already holds, rather than kept as mutable state that must be rebuilt when
//! the period changes.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{PayPeriod, TimesheetEntry};

/// Builds one zeroed entry for every day of `period`, in date order.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::build_empty_entries;
/// use timesheet_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
/// };
/// let entries = build_empty_entries(&period);
/// assert_eq!(entries.len(), 7);
/// assert!(entries.iter().all(|e| e.is_blank()));
/// ```
pub fn build_empty_entries(period: &PayPeriod) -> Vec<TimesheetEntry> {
    period.dates().map(TimesheetEntry::empty).collect()
}

/// Builds the entry grid for `period`, filled from previously persisted entries.
///
/// Days without a persisted entry stay blank. Persisted entries dated outside
/// the period are ignored. When several persisted entries share a date, the
/// last one wins.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::merge_persisted_entries;
/// use timesheet_engine::models::{PayPeriod, TimesheetEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     start: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
/// };
/// let mut tuesday = TimesheetEntry::empty(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
/// tuesday.regular_hours = Decimal::new(8, 0);
///
/// let entries = merge_persisted_entries(&period, &[tuesday.clone()]);
/// assert_eq!(entries.len(), 7);
/// assert_eq!(entries[1], tuesday);
/// assert!(entries[0].is_blank());
/// ```
pub fn merge_persisted_entries(
    period: &PayPeriod,
    persisted: &[TimesheetEntry],
) -> Vec<TimesheetEntry> {
    let mut by_date: HashMap<NaiveDate, &TimesheetEntry> = HashMap::new();
    for entry in persisted {
        if period.contains_date(entry.date) {
            by_date.insert(entry.date, entry);
        } else {
            debug!(date = %entry.date, period = %period, "Ignoring entry outside pay period");
        }
    }

    period
        .dates()
        .map(|date| match by_date.get(&date) {
            Some(entry) => (*entry).clone(),
            None => TimesheetEntry::empty(date),
        })
        .collect()
}
