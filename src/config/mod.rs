//! Configuration loading and management for the duty rotation engine.
//!
//! This module provides the per-run [`RotationConfig`] and the
//! [`ConfigLoader`] that reads engine defaults and the holiday calendar
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use duty_rotation::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Retry budget: {}", config.defaults().retry_budget);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_RANGE_DAYS, DEFAULT_MAX_RETRY_BUDGET, DEFAULT_RETRY_BUDGET, EngineDefaults,
    HolidayEntry, HolidaysConfig, RemainderPolicy, RotationConfig,
};
