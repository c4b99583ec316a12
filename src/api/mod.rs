//! HTTP API module for the Duty Rotation Engine.
//!
//! This module provides the REST endpoints for generating duty schedules
//! and inspecting the configured holiday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ScheduleRequest;
pub use response::{ApiError, HealthResponse, HolidaysResponse};
pub use state::AppState;
