//! HTTP API module for the timesheet engine.
//!
//! This module exposes the pay period calculator, entry grid derivation and
//! pay estimation as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntriesRequest, EstimateRequest, PeriodRequest, StepRequest};
pub use response::{ApiError, ApiErrorResponse, TimesheetResponse};
pub use state::AppState;
