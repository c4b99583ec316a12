//! Duty Rotation Engine
//!
//! This crate assigns one participant per eligible duty day over a date range,
//! honoring rest/duty overrides and an injected holiday calendar, while
//! converging toward an even distribution of duties across the roster.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
