//! Pay period model.
//!
//! This module contains the [`PayPeriod`] value type produced by the calculator
//! and [`Direction`], used to step between adjacent periods.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// ISO date format used when handing a period's range to an entry provider.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The contiguous, inclusive date range for which hours are tracked and paid together.
///
/// Pay periods are computed values and are never persisted by this crate.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()));
/// assert_eq!(period.num_days(), 7);
/// assert_eq!(period.to_string(), "2024-03-11 to 2024-03-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub start: NaiveDate,
    /// The last day of the period (inclusive).
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Creates a degenerate single-day period.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of calendar days covered by the period.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns an iterator over every date in the period, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start: NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    /// };
    /// let dates: Vec<_> = period.dates().map(|d| d.to_string()).collect();
    /// assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    /// ```
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// Returns the first day after the period.
    pub fn next_start(&self) -> NaiveDate {
        self.end + Duration::days(1)
    }

    /// Returns the period's start and end as `YYYY-MM-DD` strings.
    ///
    /// This is the range handed to a timesheet entry provider.
    pub fn iso_range(&self) -> (String, String) {
        (
            self.start.format(ISO_DATE_FORMAT).to_string(),
            self.end.format(ISO_DATE_FORMAT).to_string(),
        )
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// The direction in which to step from the currently displayed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The period immediately before the current one.
    Previous,
    /// The period immediately after the current one.
    Next,
}

impl Direction {
    /// Returns -1 for [`Direction::Previous`] and 1 for [`Direction::Next`].
    pub fn signum(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = EngineError;

    /// Converts the integer form used by callers (-1 or +1).
    ///
    /// ```
    /// use timesheet_engine::models::Direction;
    ///
    /// assert_eq!(Direction::try_from(-1_i64).unwrap(), Direction::Previous);
    /// assert_eq!(Direction::try_from(1_i64).unwrap(), Direction::Next);
    /// assert!(Direction::try_from(0_i64).is_err());
    /// ```
    fn try_from(value: i64) -> EngineResult<Self> {
        match value {
            -1 => Ok(Direction::Previous),
            1 => Ok(Direction::Next),
            _ => Err(EngineError::InvalidDirection { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT).unwrap()
    }

    fn create_week() -> PayPeriod {
        PayPeriod {
            start: make_date("2024-03-11"),
            end: make_date("2024-03-17"),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        assert!(create_week().contains_date(make_date("2024-03-14")));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = create_week();
        assert!(period.contains_date(period.start));
        assert!(period.contains_date(period.end));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = create_week();
        assert!(!period.contains_date(make_date("2024-03-10")));
        assert!(!period.contains_date(make_date("2024-03-18")));
    }

    #[test]
    fn test_num_days() {
        assert_eq!(create_week().num_days(), 7);
        assert_eq!(PayPeriod::single_day(make_date("2024-05-05")).num_days(), 1);
    }

    #[test]
    fn test_dates_covers_every_day() {
        let dates: Vec<NaiveDate> = create_week().dates().collect();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], make_date("2024-03-11"));
        assert_eq!(dates[6], make_date("2024-03-17"));
    }

    #[test]
    fn test_dates_single_day() {
        let dates: Vec<NaiveDate> = PayPeriod::single_day(make_date("2024-05-05"))
            .dates()
            .collect();
        assert_eq!(dates, vec![make_date("2024-05-05")]);
    }

    #[test]
    fn test_next_start() {
        assert_eq!(create_week().next_start(), make_date("2024-03-18"));
    }

    #[test]
    fn test_iso_range() {
        let (start, end) = create_week().iso_range();
        assert_eq!(start, "2024-03-11");
        assert_eq!(end, "2024-03-17");
    }

    #[test]
    fn test_serialize_pay_period() {
        let json = serde_json::to_string(&create_week()).unwrap();
        assert_eq!(json, r#"{"start":"2024-03-11","end":"2024-03-17"}"#);
    }

    #[test]
    fn test_deserialize_pay_period() {
        let period: PayPeriod =
            serde_json::from_str(r#"{"start":"2024-02-01","end":"2024-02-29"}"#).unwrap();
        assert_eq!(period.start, make_date("2024-02-01"));
        assert_eq!(period.end, make_date("2024-02-29"));
    }

    #[test]
    fn test_direction_from_integer() {
        assert_eq!(Direction::try_from(-1_i64).unwrap(), Direction::Previous);
        assert_eq!(Direction::try_from(1_i64).unwrap(), Direction::Next);
    }

    #[test]
    fn test_direction_rejects_other_integers() {
        for value in [-2_i64, 0, 2, 14] {
            match Direction::try_from(value) {
                Err(EngineError::InvalidDirection { value: v }) => assert_eq!(v, value),
                other => panic!("Expected InvalidDirection, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_direction_signum() {
        assert_eq!(Direction::Previous.signum(), -1);
        assert_eq!(Direction::Next.signum(), 1);
    }
}
