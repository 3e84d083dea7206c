//! Payroll settings model.
//!
//! This module contains [`PayrollSettings`], the read-only configuration supplied
//! by the payroll backend, and [`CutoverDay`], which models a semimonthly cutover
//! that may be a fixed day of month or the month's last day.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// Default first day of the work week (0 = Sunday, 1 = Monday, ...).
pub const DEFAULT_PAY_WEEKDAY: i32 = 1;

/// Default first semimonthly cutover day.
pub const DEFAULT_FIRST_CUTOVER_DAY: u32 = 15;

/// Returns the default biweekly anchor date, 2024-01-01 (a Monday).
pub fn default_biweekly_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}

/// A semimonthly cutover: the last day of the earlier half of a split.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::CutoverDay;
///
/// // A configured 31st resolves to the 29th in a leap-year February.
/// assert_eq!(CutoverDay::Day(31).resolve(29), 29);
/// assert_eq!(CutoverDay::Day(15).resolve(29), 15);
/// assert_eq!(CutoverDay::EndOfMonth.resolve(30), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutoverDay {
    /// A fixed day of month (1-31), clamped to the month's length.
    Day(u32),
    /// The last day of whatever month is being split.
    EndOfMonth,
}

impl CutoverDay {
    /// Resolves the cutover to a concrete day for a month with `days_in_month` days.
    pub fn resolve(self, days_in_month: u32) -> u32 {
        match self {
            CutoverDay::Day(day) => day.min(days_in_month),
            CutoverDay::EndOfMonth => days_in_month,
        }
    }
}

/// Payroll configuration consumed by the pay period calculator.
///
/// Every field has a default, so a partial (or empty) document deserializes to
/// a usable configuration: weekly periods starting on Monday.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{PayFrequency, PayrollSettings};
///
/// let settings: PayrollSettings = serde_json::from_str(r#"{
///     "pay_frequency": "SEMIMONTHLY",
///     "pay_days": [15, 31]
/// }"#).unwrap();
///
/// assert_eq!(settings.pay_frequency, PayFrequency::Semimonthly);
/// assert_eq!(settings.pay_weekday, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollSettings {
    /// The cadence at which pay periods are cut.
    pub pay_frequency: PayFrequency,
    /// First day of the work week, 0 (Sunday) through 6 (Saturday).
    pub pay_weekday: i32,
    /// The two semimonthly cutover days of month. `None` means the 15th and month end.
    pub pay_days: Option<[i32; 2]>,
    /// Reference date that fixes which fortnight every biweekly period falls in.
    pub biweekly_anchor_date: NaiveDate,
    /// Multiplier applied to overtime hours when estimating pay.
    pub overtime_rate: Decimal,
    /// Days between period end and payment. Informational only.
    pub processing_lead_time: u32,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            pay_frequency: PayFrequency::Weekly,
            pay_weekday: DEFAULT_PAY_WEEKDAY,
            pay_days: None,
            biweekly_anchor_date: default_biweekly_anchor(),
            overtime_rate: Decimal::new(15, 1),
            processing_lead_time: 0,
        }
    }
}

impl PayrollSettings {
    /// Creates default settings with the given frequency.
    pub fn new(pay_frequency: PayFrequency) -> Self {
        Self {
            pay_frequency,
            ..Self::default()
        }
    }

    /// Returns the first day of the work week.
    ///
    /// Values outside 0-6 fall back to Monday.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Weekday;
    /// use timesheet_engine::models::{PayFrequency, PayrollSettings};
    ///
    /// let mut settings = PayrollSettings::new(PayFrequency::Weekly);
    /// settings.pay_weekday = 0;
    /// assert_eq!(settings.week_start_day(), Weekday::Sun);
    ///
    /// settings.pay_weekday = 9;
    /// assert_eq!(settings.week_start_day(), Weekday::Mon);
    /// ```
    pub fn week_start_day(&self) -> Weekday {
        match self.pay_weekday {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Mon,
        }
    }

    /// Returns true if `pay_weekday` names a day (0-6).
    pub fn has_valid_pay_weekday(&self) -> bool {
        (0..=6).contains(&self.pay_weekday)
    }

    /// Returns the semimonthly cutover days, earliest first.
    ///
    /// Configured days are clamped to 1-31 and sorted. Without configured days
    /// the split is at the 15th and the end of the month.
    pub fn cutover_days(&self) -> (CutoverDay, CutoverDay) {
        match self.pay_days {
            None => (
                CutoverDay::Day(DEFAULT_FIRST_CUTOVER_DAY),
                CutoverDay::EndOfMonth,
            ),
            Some([a, b]) => {
                let a = a.clamp(1, 31) as u32;
                let b = b.clamp(1, 31) as u32;
                (CutoverDay::Day(a.min(b)), CutoverDay::Day(a.max(b)))
            }
        }
    }
}
