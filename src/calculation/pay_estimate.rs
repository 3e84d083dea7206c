//! Hour totals and gross pay estimation for a timesheet.
//!
//! The estimate pays every paid category at the base hourly rate, except
//! overtime, which is paid at the base rate multiplied by the configured
//! `overtime_rate`. Unpaid leave is tracked in the totals but never paid.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollSettings, TimesheetEntry};

/// Hour categories that appear on a pay estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCategory {
    /// Ordinary hours worked.
    Regular,
    /// Overtime hours, paid at the overtime multiplier.
    Overtime,
    /// Paid sick leave.
    Sick,
    /// Paid vacation leave.
    Vacation,
    /// Paid public holiday hours.
    Holiday,
    /// Any other paid hours.
    Other,
}

/// Summed hours per category over a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetTotals {
    /// Total ordinary hours.
    pub regular_hours: Decimal,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
    /// Total sick hours.
    pub sick_hours: Decimal,
    /// Total vacation hours.
    pub vacation_hours: Decimal,
    /// Total holiday hours.
    pub holiday_hours: Decimal,
    /// Total unpaid hours.
    pub unpaid_hours: Decimal,
    /// Total other hours.
    pub other_hours: Decimal,
    /// Every category except unpaid leave.
    pub paid_hours: Decimal,
    /// Every category, paid or not.
    pub total_hours: Decimal,
}

impl TimesheetTotals {
    /// Sums the hours of `entries` per category.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::calculation::TimesheetTotals;
    /// use timesheet_engine::models::TimesheetEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut monday = TimesheetEntry::empty(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    /// monday.regular_hours = Decimal::new(8, 0);
    /// let mut tuesday = TimesheetEntry::empty(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    /// tuesday.unpaid_hours = Decimal::new(8, 0);
    ///
    /// let totals = TimesheetTotals::from_entries(&[monday, tuesday]);
    /// assert_eq!(totals.paid_hours, Decimal::new(8, 0));
    /// assert_eq!(totals.total_hours, Decimal::new(16, 0));
    /// ```
    pub fn from_entries(entries: &[TimesheetEntry]) -> Self {
        let mut totals = entries.iter().fold(Self::default(), |mut acc, entry| {
            acc.regular_hours += entry.regular_hours;
            acc.overtime_hours += entry.overtime_hours;
            acc.sick_hours += entry.sick_hours;
            acc.vacation_hours += entry.vacation_hours;
            acc.holiday_hours += entry.holiday_hours;
            acc.unpaid_hours += entry.unpaid_hours;
            acc.other_hours += entry.other_hours;
            acc
        });
        totals.paid_hours = totals.regular_hours
            + totals.overtime_hours
            + totals.sick_hours
            + totals.vacation_hours
            + totals.holiday_hours
            + totals.other_hours;
        totals.total_hours = totals.paid_hours + totals.unpaid_hours;
        totals
    }

    fn paid_categories(&self) -> [(HourCategory, Decimal); 6] {
        [
            (HourCategory::Regular, self.regular_hours),
            (HourCategory::Overtime, self.overtime_hours),
            (HourCategory::Sick, self.sick_hours),
            (HourCategory::Vacation, self.vacation_hours),
            (HourCategory::Holiday, self.holiday_hours),
            (HourCategory::Other, self.other_hours),
        ]
    }
}

/// One category line of a pay estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateLine {
    /// The hour category.
    pub category: HourCategory,
    /// Hours in the category.
    pub hours: Decimal,
    /// Hourly rate applied to the category.
    pub rate: Decimal,
    /// `hours × rate`, rounded to cents.
    pub amount: Decimal,
}

/// Estimated gross pay for a set of timesheet entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayEstimate {
    /// The base hourly rate used.
    pub hourly_rate: Decimal,
    /// The overtime multiplier used.
    pub overtime_rate: Decimal,
    /// One line per paid category with non-zero hours.
    pub lines: Vec<EstimateLine>,
    /// Hour totals across the entries.
    pub totals: TimesheetTotals,
    /// Sum of every line amount.
    pub gross_pay: Decimal,
}

fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Estimates gross pay for `entries` at `hourly_rate`.
///
/// # Errors
///
/// - [`EngineError::CalculationError`] if the hourly rate or overtime rate is negative.
/// - [`EngineError::InvalidEntry`] if any entry has negative hours.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::estimate_pay;
/// use timesheet_engine::models::{PayFrequency, PayrollSettings, TimesheetEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut entry = TimesheetEntry::empty(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// entry.regular_hours = Decimal::from_str("8").unwrap();
/// entry.overtime_hours = Decimal::from_str("2").unwrap();
///
/// let settings = PayrollSettings::new(PayFrequency::Weekly); // overtime_rate 1.5
/// let estimate = estimate_pay(&[entry], Decimal::from_str("20.00").unwrap(), &settings).unwrap();
///
/// // 8h × $20 + 2h × $30 = $220
/// assert_eq!(estimate.gross_pay, Decimal::from_str("220.00").unwrap());
/// ```
pub fn estimate_pay(
    entries: &[TimesheetEntry],
    hourly_rate: Decimal,
    settings: &PayrollSettings,
) -> EngineResult<PayEstimate> {
    if hourly_rate < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("hourly rate cannot be negative: {}", hourly_rate),
        });
    }
    if settings.overtime_rate < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("overtime rate cannot be negative: {}", settings.overtime_rate),
        });
    }
    for entry in entries {
        entry.validate()?;
    }

    let totals = TimesheetTotals::from_entries(entries);
    let overtime_hourly = hourly_rate * settings.overtime_rate;

    let lines: Vec<EstimateLine> = totals
        .paid_categories()
        .into_iter()
        .filter(|(_, hours)| !hours.is_zero())
        .map(|(category, hours)| {
            let rate = match category {
                HourCategory::Overtime => overtime_hourly,
                _ => hourly_rate,
            };
            EstimateLine {
                category,
                hours,
                rate,
                amount: round_currency(hours * rate),
            }
        })
        .collect();

    let gross_pay = lines.iter().map(|line| line.amount).sum();

    Ok(PayEstimate {
        hourly_rate,
        overtime_rate: settings.overtime_rate,
        lines,
        totals,
        gross_pay,
    })
}
