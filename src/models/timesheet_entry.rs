//! Timesheet entry model.
//!
//! A [`TimesheetEntry`] holds the hours recorded against a single calendar day,
//! split by category.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hours recorded for one day of a pay period.
///
/// All hour fields default to zero and `notes` to an empty string, so a
/// persisted entry only needs its `date` and the categories it actually uses.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::TimesheetEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut entry = TimesheetEntry::empty(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// assert!(entry.is_blank());
///
/// entry.regular_hours = Decimal::new(80, 1);
/// entry.unpaid_hours = Decimal::new(5, 1);
/// assert_eq!(entry.total_hours(), Decimal::new(85, 1));
/// assert_eq!(entry.paid_hours(), Decimal::new(80, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// The day the hours were worked or taken.
    pub date: NaiveDate,
    /// Ordinary hours worked.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Hours worked beyond ordinary hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Paid sick leave.
    #[serde(default)]
    pub sick_hours: Decimal,
    /// Paid vacation leave.
    #[serde(default)]
    pub vacation_hours: Decimal,
    /// Paid public holiday hours.
    #[serde(default)]
    pub holiday_hours: Decimal,
    /// Unpaid leave.
    #[serde(default)]
    pub unpaid_hours: Decimal,
    /// Any other paid hours.
    #[serde(default)]
    pub other_hours: Decimal,
    /// Free-form notes for the day.
    #[serde(default)]
    pub notes: String,
}

impl TimesheetEntry {
    /// Creates a zeroed entry for the given date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            sick_hours: Decimal::ZERO,
            vacation_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            unpaid_hours: Decimal::ZERO,
            other_hours: Decimal::ZERO,
            notes: String::new(),
        }
    }

    fn hour_fields(&self) -> [(&'static str, Decimal); 7] {
        [
            ("regular_hours", self.regular_hours),
            ("overtime_hours", self.overtime_hours),
            ("sick_hours", self.sick_hours),
            ("vacation_hours", self.vacation_hours),
            ("holiday_hours", self.holiday_hours),
            ("unpaid_hours", self.unpaid_hours),
            ("other_hours", self.other_hours),
        ]
    }

    /// Returns the sum of every hour category, paid or not.
    pub fn total_hours(&self) -> Decimal {
        self.hour_fields().iter().map(|(_, hours)| *hours).sum()
    }

    /// Returns the sum of every paid category (everything except unpaid leave).
    pub fn paid_hours(&self) -> Decimal {
        self.total_hours() - self.unpaid_hours
    }

    /// Returns true if no hours or notes are recorded.
    pub fn is_blank(&self) -> bool {
        self.hour_fields().iter().all(|(_, hours)| hours.is_zero())
            && self.notes.trim().is_empty()
    }

    /// Checks that no hour category is negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] naming the first negative field.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some((field, _)) = self
            .hour_fields()
            .iter()
            .find(|(_, hours)| *hours < Decimal::ZERO)
        {
            return Err(EngineError::InvalidEntry {
                date: self.date,
                message: format!("{} cannot be negative", field),
            });
        }
        Ok(())
    }
}
