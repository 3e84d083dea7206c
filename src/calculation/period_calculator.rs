//! Pay period calculation and navigation.
//!
//! These are the entry points used by callers: [`compute_period`] maps a date to
//! the period containing it, [`step_period`] moves to the adjacent period, and
//! [`reset_to_current`] jumps back to the period containing today.
//!
//! All three are pure and synchronous. They never fail: an unrecognized pay
//! frequency is treated as weekly so a caller always has a period to show.

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use crate::models::{Direction, PayFrequency, PayPeriod, PayrollSettings};

use super::biweekly::biweekly_period;
use super::monthly::monthly_period;
use super::semimonthly::semimonthly_period;
use super::weekly::weekly_period;

/// Computes the pay period containing `date`.
///
/// The result always satisfies `start <= date <= end`. Consecutive non-daily
/// periods tile the calendar: each `end` is the day before the next `start`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::compute_period;
/// use timesheet_engine::models::{PayFrequency, PayrollSettings};
/// use chrono::NaiveDate;
///
/// let settings = PayrollSettings::new(PayFrequency::Weekly);
/// let period = compute_period(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(), &settings);
/// assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
///
/// // Unknown frequencies fall back to weekly periods.
/// let bogus = PayrollSettings::new(PayFrequency::parse("BOGUS"));
/// assert_eq!(compute_period(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(), &bogus), period);
/// ```
pub fn compute_period(date: NaiveDate, settings: &PayrollSettings) -> PayPeriod {
    match &settings.pay_frequency {
        PayFrequency::Daily => PayPeriod::single_day(date),
        PayFrequency::Weekly => weekly_period(date, settings.week_start_day()),
        PayFrequency::Biweekly => biweekly_period(date, settings),
        PayFrequency::Semimonthly => semimonthly_period(date, settings),
        PayFrequency::Monthly => monthly_period(date),
        PayFrequency::Unrecognized(raw) => {
            debug!(pay_frequency = %raw, "Unrecognized pay frequency, using weekly periods");
            weekly_period(date, settings.week_start_day())
        }
    }
}

/// Computes the period adjacent to the one starting at `current_start`.
///
/// The current period is re-derived from `current_start` first, so an
/// unaligned start still steps by exactly one period. The probe date is the day
/// after the current period ([`Direction::Next`]) or the day before it
/// ([`Direction::Previous`]), which lands in the neighbouring period for every
/// frequency, including half-months of unequal length.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::step_period;
/// use timesheet_engine::models::{Direction, PayFrequency, PayrollSettings};
/// use chrono::NaiveDate;
///
/// let settings = PayrollSettings::new(PayFrequency::Semimonthly);
/// let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let previous = step_period(march, Direction::Previous, &settings);
/// assert_eq!(previous.start, NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
/// assert_eq!(previous.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn step_period(
    current_start: NaiveDate,
    direction: Direction,
    settings: &PayrollSettings,
) -> PayPeriod {
    let current = compute_period(current_start, settings);
    let probe = match direction {
        Direction::Next => current.next_start(),
        Direction::Previous => current.start - Duration::days(1),
    };
    compute_period(probe, settings)
}

/// Computes the pay period containing today's local date.
pub fn reset_to_current(settings: &PayrollSettings) -> PayPeriod {
    reset_to_current_at(Local::now().date_naive(), settings)
}

/// Computes the pay period containing `today`.
///
/// Equivalent to [`compute_period`]; kept separate so callers can inject the
/// clock.
pub fn reset_to_current_at(today: NaiveDate, settings: &PayrollSettings) -> PayPeriod {
    compute_period(today, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn settings_for(frequency: PayFrequency) -> PayrollSettings {
        PayrollSettings::new(frequency)
    }

    fn all_frequencies() -> Vec<PayrollSettings> {
        vec![
            settings_for(PayFrequency::Daily),
            settings_for(PayFrequency::Weekly),
            settings_for(PayFrequency::Biweekly),
            settings_for(PayFrequency::Semimonthly),
            settings_for(PayFrequency::Monthly),
            PayrollSettings {
                pay_days: Some([10, 25]),
                ..settings_for(PayFrequency::Semimonthly)
            },
            PayrollSettings {
                pay_weekday: 3,
                ..settings_for(PayFrequency::Biweekly)
            },
        ]
    }

    // ==========================================================================
    // PC-001..PC-006: Reference scenarios
    // ==========================================================================
    #[test]
    fn test_pc_001_weekly_monday_thursday() {
        let settings = PayrollSettings {
            pay_weekday: 1,
            ..settings_for(PayFrequency::Weekly)
        };
        let period = compute_period(make_date("2024-03-14"), &settings);
        assert_eq!(period.start, make_date("2024-03-11"));
        assert_eq!(period.end, make_date("2024-03-17"));
    }

    #[test]
    fn test_pc_002_monthly_leap_february() {
        let period = compute_period(make_date("2024-02-10"), &settings_for(PayFrequency::Monthly));
        assert_eq!(period.start, make_date("2024-02-01"));
        assert_eq!(period.end, make_date("2024-02-29"));
    }

    #[test]
    fn test_pc_003_semimonthly_january_second_half() {
        let settings = PayrollSettings {
            pay_days: Some([15, 31]),
            ..settings_for(PayFrequency::Semimonthly)
        };
        let period = compute_period(make_date("2024-01-20"), &settings);
        assert_eq!(period.start, make_date("2024-01-16"));
        assert_eq!(period.end, make_date("2024-01-31"));
    }

    #[test]
    fn test_pc_004_semimonthly_february_without_31st() {
        let settings = PayrollSettings {
            pay_days: Some([15, 31]),
            ..settings_for(PayFrequency::Semimonthly)
        };
        let period = compute_period(make_date("2024-02-20"), &settings);
        assert_eq!(period.start, make_date("2024-02-16"));
        assert_eq!(period.end, make_date("2024-02-29"));
    }

    #[test]
    fn test_pc_005_biweekly_cycle_one() {
        let settings = PayrollSettings {
            biweekly_anchor_date: make_date("2024-01-01"),
            ..settings_for(PayFrequency::Biweekly)
        };
        let period = compute_period(make_date("2024-01-20"), &settings);
        assert_eq!(period.start, make_date("2024-01-15"));
        assert_eq!(period.end, make_date("2024-01-28"));
    }

    #[test]
    fn test_pc_006_daily() {
        let period = compute_period(make_date("2024-05-05"), &settings_for(PayFrequency::Daily));
        assert_eq!(period, PayPeriod::single_day(make_date("2024-05-05")));
    }

    // ==========================================================================
    // Fallback behaviour
    // ==========================================================================
    #[test]
    fn test_unrecognized_frequency_falls_back_to_weekly() {
        let settings = settings_for(PayFrequency::parse("BOGUS"));
        let date = make_date("2024-03-14");
        let period = compute_period(date, &settings);
        assert!(period.contains_date(date));
        assert_eq!(period.start, make_date("2024-03-11"));
        assert_eq!(period.num_days(), 7);
    }

    #[test]
    fn test_default_settings_are_weekly_monday() {
        let period = compute_period(make_date("2024-03-17"), &PayrollSettings::default());
        assert_eq!(period.start, make_date("2024-03-11"));
        assert_eq!(period.end, make_date("2024-03-17"));
    }

    #[test]
    fn test_out_of_range_weekday_falls_back_to_monday() {
        let settings = PayrollSettings {
            pay_weekday: 12,
            ..settings_for(PayFrequency::Weekly)
        };
        let period = compute_period(make_date("2024-03-14"), &settings);
        assert_eq!(period.start, make_date("2024-03-11"));
    }

    // ==========================================================================
    // Navigation
    // ==========================================================================
    #[test]
    fn test_step_next_weekly() {
        let settings = settings_for(PayFrequency::Weekly);
        let next = step_period(make_date("2024-03-11"), Direction::Next, &settings);
        assert_eq!(next.start, make_date("2024-03-18"));
        assert_eq!(next.end, make_date("2024-03-24"));
    }

    #[test]
    fn test_step_previous_daily() {
        let settings = settings_for(PayFrequency::Daily);
        let previous = step_period(make_date("2024-03-01"), Direction::Previous, &settings);
        assert_eq!(previous, PayPeriod::single_day(make_date("2024-02-29")));
    }

    #[test]
    fn test_step_next_biweekly() {
        let settings = settings_for(PayFrequency::Biweekly);
        let next = step_period(make_date("2024-01-15"), Direction::Next, &settings);
        assert_eq!(next.start, make_date("2024-01-29"));
        assert_eq!(next.end, make_date("2024-02-11"));
    }

    #[test]
    fn test_step_next_monthly_into_leap_february() {
        let settings = settings_for(PayFrequency::Monthly);
        let next = step_period(make_date("2024-01-01"), Direction::Next, &settings);
        assert_eq!(next.start, make_date("2024-02-01"));
        assert_eq!(next.end, make_date("2024-02-29"));
    }

    #[test]
    fn test_step_semimonthly_back_across_february() {
        let settings = settings_for(PayFrequency::Semimonthly);
        let previous = step_period(make_date("2024-03-01"), Direction::Previous, &settings);
        assert_eq!(previous.start, make_date("2024-02-16"));
        let previous = step_period(previous.start, Direction::Previous, &settings);
        assert_eq!(previous.start, make_date("2024-02-01"));
        assert_eq!(previous.end, make_date("2024-02-15"));
    }

    #[test]
    fn test_step_from_unaligned_start() {
        let settings = settings_for(PayFrequency::Weekly);
        // 2024-03-14 is a Thursday inside the 03-11 week.
        let next = step_period(make_date("2024-03-14"), Direction::Next, &settings);
        assert_eq!(next.start, make_date("2024-03-18"));
    }

    #[test]
    fn test_round_trip_navigation_all_frequencies() {
        for settings in all_frequencies() {
            for date in make_date("2023-12-01").iter_days().take(120) {
                let period = compute_period(date, &settings);
                let next = step_period(period.start, Direction::Next, &settings);
                let back = step_period(next.start, Direction::Previous, &settings);
                assert_eq!(back, period, "round trip from {} ({})", period, settings.pay_frequency);
                assert_eq!(next.start, period.next_start());
            }
        }
    }

    // ==========================================================================
    // Invariants
    // ==========================================================================
    #[test]
    fn test_containment_and_idempotence() {
        for settings in all_frequencies() {
            for date in make_date("2023-11-01").iter_days().take(500) {
                let period = compute_period(date, &settings);
                assert!(period.start <= period.end);
                assert!(period.contains_date(date), "{} not in {}", date, period);
                assert_eq!(compute_period(period.start, &settings), period);
                assert_eq!(compute_period(period.end, &settings), period);
            }
        }
    }

    #[test]
    fn test_reset_to_current_at_matches_compute() {
        let settings = settings_for(PayFrequency::Biweekly);
        let today = make_date("2024-06-19");
        assert_eq!(
            reset_to_current_at(today, &settings),
            compute_period(today, &settings)
        );
    }

    #[test]
    fn test_reset_to_current_contains_today() {
        let settings = settings_for(PayFrequency::Monthly);
        let before = Local::now().date_naive();
        let period = reset_to_current(&settings);
        let after = Local::now().date_naive();
        assert!(period.contains_date(before) || period.contains_date(after));
    }
}
