//! HTTP request handlers for the Duty Rotation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::engine::{SeededRandom, generate_schedule};

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse, HolidaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/holidays", get(holidays_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a roster, a date range and optional options, and returns the
/// generated schedule. An unbalanced schedule is still a 200. Requests over
/// the configured budget or range limits are rejected before any work, and
/// the retry loop runs on the blocking pool.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // serde's message is only in the body text
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let ScheduleRequest {
        roster,
        date_range,
        config,
        seed,
    } = request;
    let config = config.unwrap_or_else(|| state.config().rotation_config());

    if let Err(err) = state.config().defaults().check_limits(&config, &date_range) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request exceeds configured limits"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let participants = roster.len();
    let worker_state = state.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut rng = match seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        generate_schedule(
            &roster,
            date_range,
            &config,
            worker_state.config().calendar(),
            &mut rng,
        )
    })
    .await;

    match outcome {
        Ok(Ok(result)) => {
            info!(
                correlation_id = %correlation_id,
                participants,
                scheduled_days = result.schedule.len(),
                balanced = result.balanced,
                deviation = result.deviation,
                "Schedule generated"
            );
            json_response(StatusCode::OK, result)
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule generation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule worker did not complete"
            );
            ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", "Schedule generation was interrupted"),
            }
            .into_response()
        }
    }
}

/// Handler for GET /holidays endpoint.
async fn holidays_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        HolidaysResponse {
            holidays: state.config().calendar().clone(),
            names: state.config().holiday_names(),
        },
    )
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse::ok())
}
