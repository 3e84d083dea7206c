//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollSettings;

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```text
/// pay_frequency: BIWEEKLY        # DAILY | WEEKLY | BIWEEKLY | SEMIMONTHLY | MONTHLY
/// pay_weekday: 1                 # 0 = Sunday ... 6 = Saturday
/// pay_days: [15, 31]             # semimonthly cutover days
/// biweekly_anchor_date: 2024-01-01
/// overtime_rate: 1.5
/// processing_lead_time: 3
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
/// use timesheet_engine::calculation::compute_period;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let period = compute_period(date, loader.settings());
/// println!("Current period: {}", period);
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: PayrollSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read.
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML or a
    ///   field has the wrong type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: PayrollSettings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if !settings.pay_frequency.is_recognized() {
            warn!(
                path = %path_str,
                pay_frequency = %settings.pay_frequency,
                "Unrecognized pay frequency, periods will be weekly"
            );
        }

        if !settings.has_valid_pay_weekday() {
            warn!(
                path = %path_str,
                pay_weekday = settings.pay_weekday,
                "pay_weekday out of range, weeks will start on Monday"
            );
        }

        info!(
            path = %path_str,
            pay_frequency = %settings.pay_frequency,
            "Loaded payroll settings"
        );

        Ok(Self { settings })
    }

    /// Loads configuration, falling back to the default weekly settings.
    ///
    /// The settings come from an external service and a missing or broken file
    /// must not stop callers from computing periods, so failures are logged
    /// and replaced with [`PayrollSettings::default`].
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(loader) => loader,
            Err(err) => {
                warn!(error = %err, "Using default payroll settings");
                Self::default()
            }
        }
    }

    /// Creates a loader around already-available settings.
    pub fn from_settings(settings: PayrollSettings) -> Self {
        Self { settings }
    }

    /// Returns the loaded payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }
}
