//! Request types for the timesheet API.
//!
//! Every request may carry its own `settings`; when omitted the server's
//! configured payroll settings apply.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayrollSettings, TimesheetEntry};

/// Request body for `POST /pay-period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The reference date whose period is wanted.
    pub date: NaiveDate,
    /// Optional settings overriding the server's.
    #[serde(default)]
    pub settings: Option<PayrollSettings>,
}

/// Request body for `POST /pay-period/step`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRequest {
    /// Start date of the period currently shown.
    pub start: NaiveDate,
    /// `-1` for the previous period, `1` for the next.
    pub direction: i64,
    /// Optional settings overriding the server's.
    #[serde(default)]
    pub settings: Option<PayrollSettings>,
}

/// Request body for `POST /timesheet/entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntriesRequest {
    /// Any date inside the wanted period.
    pub date: NaiveDate,
    /// Optional settings overriding the server's.
    #[serde(default)]
    pub settings: Option<PayrollSettings>,
    /// Entries already saved for this employee.
    #[serde(default)]
    pub persisted: Vec<TimesheetEntry>,
}

/// Request body for `POST /timesheet/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The entries to total.
    pub entries: Vec<TimesheetEntry>,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Optional settings overriding the server's.
    #[serde(default)]
    pub settings: Option<PayrollSettings>,
}
