//! Configuration loading for the Timesheet Engine.
//!
//! Payroll settings are read from a single YAML document whose fields mirror
//! [`PayrollSettings`](crate::models::PayrollSettings). Every field is optional.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Pay frequency: {}", config.settings().pay_frequency);
//! ```

mod loader;

pub use loader::ConfigLoader;
