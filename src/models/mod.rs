//! Core data models for the duty rotation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod date_range;
mod distribution;
mod holiday;
mod participant;
mod schedule;
mod schedule_result;

pub use assignment::{Assignment, AssignmentKind, Override};
pub use date_range::DateRange;
pub use distribution::TargetDistribution;
pub use holiday::{HolidayCalendar, MonthDay};
pub use participant::Participant;
pub use schedule::{Schedule, ScheduleRow};
pub use schedule_result::{ParticipantStats, ScheduleResult};
