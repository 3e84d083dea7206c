//! HTTP request handlers for the timesheet API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    TimesheetTotals, compute_period, estimate_pay, merge_persisted_entries, reset_to_current,
    step_period,
};
use crate::models::Direction;

use super::request::{EntriesRequest, EstimateRequest, PeriodRequest, StepRequest};
use super::response::{ApiError, ApiErrorResponse, TimesheetResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pay-period", post(period_handler))
        .route("/pay-period/step", post(step_handler))
        .route("/pay-period/current", get(current_handler))
        .route("/timesheet/entries", post(entries_handler))
        .route("/timesheet/estimate", post(estimate_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Well-formed JSON that does not fit the request type: a missing
            // field, a wrong type, or an impossible date such as 2024-02-30.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

/// Handler for `POST /pay-period`.
async fn period_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay period request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = state.effective_settings(request.settings);
    let period = compute_period(request.date, &settings);
    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        pay_frequency = %settings.pay_frequency,
        period = %period,
        "Pay period computed"
    );
    json_ok(period)
}

/// Handler for `POST /pay-period/step`.
async fn step_handler(
    State(state): State<AppState>,
    payload: Result<Json<StepRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay period step request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let direction = match Direction::try_from(request.direction) {
        Ok(direction) => direction,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected step request");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let settings = state.effective_settings(request.settings);
    let period = step_period(request.start, direction, &settings);
    info!(
        correlation_id = %correlation_id,
        start = %request.start,
        direction = direction.signum(),
        period = %period,
        "Pay period stepped"
    );
    json_ok(period)
}

/// Handler for `GET /pay-period/current`.
async fn current_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let period = reset_to_current(state.config().settings());
    info!(correlation_id = %correlation_id, period = %period, "Current pay period");
    json_ok(period)
}

/// Handler for `POST /timesheet/entries`.
///
/// Returns the period containing `date` with one entry per day, filled from
/// the persisted entries supplied by the caller.
async fn entries_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntriesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet entries request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Some(err) = request
        .persisted
        .iter()
        .find_map(|entry| entry.validate().err())
    {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected persisted entry");
        return ApiErrorResponse::from(err).into_response();
    }

    let settings = state.effective_settings(request.settings);
    let period = compute_period(request.date, &settings);
    let entries = merge_persisted_entries(&period, &request.persisted);
    let totals = TimesheetTotals::from_entries(&entries);

    info!(
        correlation_id = %correlation_id,
        period = %period,
        persisted_count = request.persisted.len(),
        total_hours = %totals.total_hours,
        "Timesheet entries built"
    );
    json_ok(TimesheetResponse {
        period,
        entries,
        totals,
    })
}

/// Handler for `POST /timesheet/estimate`.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = state.effective_settings(request.settings);
    let start_time = Instant::now();
    match estimate_pay(&request.entries, request.hourly_rate, &settings) {
        Ok(estimate) => {
            info!(
                correlation_id = %correlation_id,
                entries_count = request.entries.len(),
                gross_pay = %estimate.gross_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Pay estimate completed"
            );
            json_ok(estimate)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Pay estimate failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{PayFrequency, PayPeriod, PayrollSettings};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::from_settings(PayrollSettings::new(
            PayFrequency::Weekly,
        )))
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_period_uses_server_settings() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("/pay-period", r#"{"date":"2024-03-14"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let period: PayPeriod = serde_json::from_slice(&body).unwrap();
        assert_eq!(period.start, make_date("2024-03-11"));
        assert_eq!(period.end, make_date("2024-03-17"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("/pay-period", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("/pay-period/step", r#"{"direction":1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("start"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/pay-period")
                    .body(Body::from(r#"{"date":"2024-03-14"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_invalid_direction_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "/pay-period/step",
                r#"{"start":"2024-03-11","direction":0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DIRECTION");
    }

    #[tokio::test]
    async fn test_current_period_contains_today() {
        let router = create_router(create_test_state());
        let before = chrono::Local::now().date_naive();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/pay-period/current")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let after = chrono::Local::now().date_naive();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let period: PayPeriod = serde_json::from_slice(&body).unwrap();
        assert_eq!(period.num_days(), 7);
        assert!(period.contains_date(before) || period.contains_date(after));
    }

    #[tokio::test]
    async fn test_negative_persisted_entry_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "date": "2024-03-14",
            "persisted": [{"date": "2024-03-12", "sick_hours": "-1"}]
        }"#;
        let response = router
            .oneshot(json_request("/timesheet/entries", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_ENTRY");
    }

    #[tokio::test]
    async fn test_negative_hourly_rate_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "/timesheet/estimate",
                r#"{"entries":[],"hourly_rate":"-5"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "CALCULATION_ERROR");
    }
}
