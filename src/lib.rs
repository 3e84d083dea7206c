//! Pay period engine for timesheets
//!
//! This crate computes the pay period containing a date for daily, weekly,
//! biweekly, semimonthly and monthly payroll schedules, steps between adjacent
//! periods, derives the per-day timesheet entry grid for a period, and
//! estimates pay from the entered hours.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
