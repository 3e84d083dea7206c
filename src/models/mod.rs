//! Core data models for the Timesheet Engine.
//!
//! This module contains the payroll configuration, the pay period value type,
//! and the per-day timesheet entry.

mod pay_frequency;
mod pay_period;
mod payroll_settings;
mod timesheet_entry;

pub use pay_frequency::PayFrequency;
pub use pay_period::{Direction, ISO_DATE_FORMAT, PayPeriod};
pub use payroll_settings::{
    CutoverDay, DEFAULT_FIRST_CUTOVER_DAY, DEFAULT_PAY_WEEKDAY, PayrollSettings,
    default_biweekly_anchor,
};
pub use timesheet_entry::TimesheetEntry;
