//! Calculation logic for the Timesheet Engine.
//!
//! This module contains the pay period calculator (weekly, biweekly,
//! semimonthly and monthly period boundaries, plus navigation between
//! periods), derivation of the per-day timesheet entry grid, and gross pay
//! estimation from timesheet entries.

mod biweekly;
mod entries;
mod monthly;
mod pay_estimate;
mod period_calculator;
mod semimonthly;
mod weekly;

pub use biweekly::{BIWEEKLY_PERIOD_DAYS, biweekly_cycle_index, biweekly_period};
pub use entries::{build_empty_entries, merge_persisted_entries};
pub use monthly::{days_in_month, first_of_month, last_of_month, monthly_period};
pub use pay_estimate::{EstimateLine, HourCategory, PayEstimate, TimesheetTotals, estimate_pay};
pub use period_calculator::{compute_period, reset_to_current, reset_to_current_at, step_period};
pub use semimonthly::semimonthly_period;
pub use weekly::{WEEKLY_PERIOD_DAYS, week_start, weekly_period};
