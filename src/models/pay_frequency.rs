//! Pay frequency model.
//!
//! This module defines the [`PayFrequency`] enum describing the cadence at which
//! pay periods are cut. Parsing is lenient: the settings come from an external
//! payroll service and an unknown cadence must never make the calculator fail.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The cadence that defines how pay periods are cut.
///
/// Values are serialized in upper case (`"WEEKLY"`, `"BIWEEKLY"`, ...). When
/// deserializing, matching is case-insensitive and any other value is kept as
/// [`PayFrequency::Unrecognized`], which the calculator treats as weekly.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::PayFrequency;
///
/// assert_eq!(PayFrequency::parse("biweekly"), PayFrequency::Biweekly);
/// assert_eq!(
///     PayFrequency::parse("BOGUS"),
///     PayFrequency::Unrecognized("BOGUS".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PayFrequency {
    /// One period per calendar day.
    Daily,
    /// Seven-day periods starting on the configured pay weekday.
    #[default]
    Weekly,
    /// Fourteen-day periods aligned to the biweekly anchor date.
    Biweekly,
    /// Half-month periods split at the two configured cutover days.
    Semimonthly,
    /// One period per calendar month.
    Monthly,
    /// A value that is not one of the known cadences.
    Unrecognized(String),
}

impl PayFrequency {
    /// Parses a frequency string, ignoring case and surrounding whitespace.
    ///
    /// `SEMI_MONTHLY`, `SEMI-MONTHLY` and `BI_WEEKLY` style spellings are accepted
    /// alongside the canonical names.
    pub fn parse(value: &str) -> Self {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "DAILY" => PayFrequency::Daily,
            "WEEKLY" => PayFrequency::Weekly,
            "BIWEEKLY" => PayFrequency::Biweekly,
            "SEMIMONTHLY" => PayFrequency::Semimonthly,
            "MONTHLY" => PayFrequency::Monthly,
            _ => PayFrequency::Unrecognized(value.to_string()),
        }
    }

    /// Returns the canonical name of the frequency.
    ///
    /// Unrecognized values return the original string.
    pub fn as_str(&self) -> &str {
        match self {
            PayFrequency::Daily => "DAILY",
            PayFrequency::Weekly => "WEEKLY",
            PayFrequency::Biweekly => "BIWEEKLY",
            PayFrequency::Semimonthly => "SEMIMONTHLY",
            PayFrequency::Monthly => "MONTHLY",
            PayFrequency::Unrecognized(raw) => raw,
        }
    }

    /// Returns true if the value is one of the five known cadences.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PayFrequency::Unrecognized(_))
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PayFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PayFrequency {
    /// Never fails on a well-formed document: `null` is weekly, strings go
    /// through [`PayFrequency::parse`], and numbers, booleans, arrays or
    /// objects are kept as [`PayFrequency::Unrecognized`] in their JSON form.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::Null => PayFrequency::default(),
            serde_json::Value::String(value) => PayFrequency::parse(&value),
            other => PayFrequency::Unrecognized(other.to_string()),
        })
    }
}
