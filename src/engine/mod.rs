//! Scheduling logic for the Duty Rotation Engine.
//!
//! This module derives duty days from a date range, computes fair target
//! counts, runs weighted assignment attempts that avoid back-to-back duty,
//! scores them against the targets and retries until a balanced schedule
//! is found or the retry budget is spent.

mod attempt;
mod distribution;
mod duty_days;
pub(crate) mod random;
mod rotation;
mod scoring;
mod selection;

pub use attempt::{DEFAULT_DUTY_LABEL, DEFAULT_REST_LABEL, try_schedule};
pub use distribution::target_distribution;
pub use duty_days::{duty_days, is_duty_day};
pub use random::{RandomSource, SeededRandom};
pub use rotation::generate_schedule;
pub use scoring::{deviation, statistics};
