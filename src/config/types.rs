//! Configuration types for duty rotation.
//!
//! This module contains the per-run [`RotationConfig`] and the structures
//! deserialized from the YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Override};

/// Default number of attempts before settling for the best schedule.
pub const DEFAULT_RETRY_BUDGET: u32 = 10;

/// Default ceiling on the retry budget a request may ask for.
pub const DEFAULT_MAX_RETRY_BUDGET: u32 = 1_000;

/// Default ceiling on the number of calendar days a request may span.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 3_660;

fn default_retry_budget() -> u32 {
    DEFAULT_RETRY_BUDGET
}

fn default_max_retry_budget() -> u32 {
    DEFAULT_MAX_RETRY_BUDGET
}

fn default_max_range_days() -> u32 {
    DEFAULT_MAX_RANGE_DAYS
}

/// Who receives the extra duty day when duty days do not divide evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// The first participants in roster order.
    #[default]
    Positional,
    /// Participants picked by a shuffle drawn from the run's random source.
    Shuffled,
}

/// Options for a single scheduling run.
///
/// # Example
///
/// ```
/// use duty_rotation::config::{RemainderPolicy, RotationConfig};
///
/// let config: RotationConfig = serde_json::from_str(r#"{"include_saturday": true}"#).unwrap();
/// assert!(config.include_saturday);
/// assert!(!config.include_sunday);
/// assert_eq!(config.retry_budget, 10);
/// assert_eq!(config.remainder_policy, RemainderPolicy::Positional);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Treat Saturdays as duty days.
    #[serde(default)]
    pub include_saturday: bool,
    /// Treat Sundays as duty days.
    #[serde(default)]
    pub include_sunday: bool,
    /// Forced outcomes; later entries for a date shadow earlier ones.
    #[serde(default)]
    pub overrides: Vec<Override>,
    /// Maximum number of assignment attempts. Must be at least 1.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    /// Remainder allocation policy.
    #[serde(default)]
    pub remainder_policy: RemainderPolicy,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            include_saturday: false,
            include_sunday: false,
            overrides: Vec::new(),
            retry_budget: DEFAULT_RETRY_BUDGET,
            remainder_policy: RemainderPolicy::default(),
        }
    }
}

impl From<&EngineDefaults> for RotationConfig {
    fn from(defaults: &EngineDefaults) -> Self {
        Self {
            include_saturday: defaults.include_saturday,
            include_sunday: defaults.include_sunday,
            overrides: Vec::new(),
            retry_budget: defaults.retry_budget,
            remainder_policy: defaults.remainder_policy,
        }
    }
}

/// Engine defaults from `engine.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineDefaults {
    /// Default for [`RotationConfig::include_saturday`].
    #[serde(default)]
    pub include_saturday: bool,
    /// Default for [`RotationConfig::include_sunday`].
    #[serde(default)]
    pub include_sunday: bool,
    /// Default for [`RotationConfig::retry_budget`].
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    /// Default for [`RotationConfig::remainder_policy`].
    #[serde(default)]
    pub remainder_policy: RemainderPolicy,
    /// Largest retry budget a request may ask for.
    #[serde(default = "default_max_retry_budget")]
    pub max_retry_budget: u32,
    /// Largest number of calendar days a request may span.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            include_saturday: false,
            include_sunday: false,
            retry_budget: DEFAULT_RETRY_BUDGET,
            remainder_policy: RemainderPolicy::default(),
            max_retry_budget: DEFAULT_MAX_RETRY_BUDGET,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}

impl EngineDefaults {
    /// Checks the defaults are usable, returning a description of the
    /// first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.retry_budget == 0 {
            return Err("retry_budget must be at least 1".to_string());
        }
        if self.max_retry_budget == 0 {
            return Err("max_retry_budget must be at least 1".to_string());
        }
        if self.retry_budget > self.max_retry_budget {
            return Err(format!(
                "retry_budget {} exceeds max_retry_budget {}",
                self.retry_budget, self.max_retry_budget
            ));
        }
        if self.max_range_days == 0 {
            return Err("max_range_days must be at least 1".to_string());
        }
        Ok(())
    }

    /// Rejects a request whose budget or range exceeds the configured
    /// limits.
    ///
    /// # Example
    ///
    /// ```
    /// use duty_rotation::config::{EngineDefaults, RotationConfig};
    /// use duty_rotation::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let defaults = EngineDefaults::default();
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    /// );
    /// let greedy = RotationConfig { retry_budget: 1_000_000, ..RotationConfig::default() };
    /// assert!(defaults.check_limits(&RotationConfig::default(), &range).is_ok());
    /// assert!(defaults.check_limits(&greedy, &range).is_err());
    /// ```
    pub fn check_limits(&self, config: &RotationConfig, range: &DateRange) -> EngineResult<()> {
        if config.retry_budget > self.max_retry_budget {
            return Err(EngineError::invalid_input(
                "retry_budget",
                format!(
                    "retry budget {} exceeds the maximum of {}",
                    config.retry_budget, self.max_retry_budget
                ),
            ));
        }
        if range.span_days() > i64::from(self.max_range_days) {
            return Err(EngineError::invalid_input(
                "date_range",
                format!(
                    "range spans {} days, more than the maximum of {}",
                    range.span_days(),
                    self.max_range_days
                ),
            ));
        }
        Ok(())
    }
}

/// A named holiday entry in `holidays.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayEntry {
    /// Recurring date as `MM-DD`.
    pub date: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Recurring holidays.
    pub holidays: Vec<HolidayEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_config_full_deserialization() {
        let json = r#"{
            "include_saturday": true,
            "include_sunday": true,
            "overrides": [{"date": "2026-01-15", "kind": "rest", "label": "Audit day"}],
            "retry_budget": 25,
            "remainder_policy": "shuffled"
        }"#;
        let config: RotationConfig = serde_json::from_str(json).unwrap();
        assert!(config.include_sunday);
        assert_eq!(config.overrides.len(), 1);
        assert_eq!(config.retry_budget, 25);
        assert_eq!(config.remainder_policy, RemainderPolicy::Shuffled);
    }

    #[test]
    fn test_engine_defaults_yaml() {
        let yaml = "include_sunday: true\nretry_budget: 5\n";
        let defaults: EngineDefaults = serde_yaml::from_str(yaml).unwrap();
        assert!(!defaults.include_saturday);
        assert!(defaults.include_sunday);
        assert_eq!(defaults.retry_budget, 5);

        let config = RotationConfig::from(&defaults);
        assert!(config.include_sunday);
        assert_eq!(config.retry_budget, 5);
        assert!(config.overrides.is_empty());
        assert_eq!(defaults.max_retry_budget, DEFAULT_MAX_RETRY_BUDGET);
    }

    fn make_range(start: &str, end: &str) -> DateRange {
        DateRange::new(
            chrono::NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            chrono::NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let defaults = EngineDefaults {
            retry_budget: 0,
            ..EngineDefaults::default()
        };
        assert!(defaults.validate().unwrap_err().contains("retry_budget"));
    }

    #[test]
    fn test_validate_rejects_budget_above_ceiling() {
        let defaults = EngineDefaults {
            retry_budget: 50,
            max_retry_budget: 20,
            ..EngineDefaults::default()
        };
        assert!(defaults.validate().is_err());
        assert!(EngineDefaults::default().validate().is_ok());
    }

    #[test]
    fn test_check_limits_budget_ceiling_is_inclusive() {
        let defaults = EngineDefaults {
            max_retry_budget: 20,
            ..EngineDefaults::default()
        };
        let range = make_range("2026-01-12", "2026-01-16");
        let at_limit = RotationConfig {
            retry_budget: 20,
            ..RotationConfig::default()
        };
        let over = RotationConfig {
            retry_budget: 21,
            ..RotationConfig::default()
        };
        assert!(defaults.check_limits(&at_limit, &range).is_ok());
        match defaults.check_limits(&over, &range) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "retry_budget"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_check_limits_range_length() {
        let defaults = EngineDefaults {
            max_range_days: 7,
            ..EngineDefaults::default()
        };
        let config = RotationConfig::default();
        assert!(
            defaults
                .check_limits(&config, &make_range("2026-01-12", "2026-01-18"))
                .is_ok()
        );
        match defaults.check_limits(&config, &make_range("2026-01-12", "2026-01-19")) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "date_range"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
