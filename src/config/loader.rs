//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! defaults and the holiday calendar from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, MonthDay};

use super::types::{EngineDefaults, HolidayEntry, HolidaysConfig, RotationConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Weekend inclusion, retry budget, remainder policy
/// └── holidays.yaml  # Recurring MM-DD holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use duty_rotation::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} holidays configured", loader.calendar().len());
/// # Ok::<(), duty_rotation::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    defaults: EngineDefaults,
    holidays: Vec<HolidayEntry>,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if either file is missing or is not valid YAML, if the
    /// defaults in `engine.yaml` are unusable (such as a zero retry budget),
    /// or if a holiday is not a real `MM-DD` date.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let defaults = Self::load_yaml::<EngineDefaults>(&engine_path)?;
        defaults
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message,
            })?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?.holidays;

        let days = holidays
            .iter()
            .map(|entry| entry.date.parse::<MonthDay>())
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            defaults,
            holidays,
            calendar: HolidayCalendar::new(days),
        })
    }

    /// Configuration used when no directory is given: default options and
    /// the built-in holiday calendar.
    pub fn builtin() -> Self {
        let calendar = HolidayCalendar::default_calendar();
        let holidays = calendar
            .iter()
            .map(|md| HolidayEntry {
                date: md.to_string(),
                name: String::new(),
            })
            .collect();
        Self {
            defaults: EngineDefaults::default(),
            holidays,
            calendar,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine defaults.
    pub fn defaults(&self) -> &EngineDefaults {
        &self.defaults
    }

    /// A fresh per-run configuration seeded from the defaults.
    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig::from(&self.defaults)
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the named holiday entries as configured.
    pub fn holidays(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    /// Holiday names keyed by `MM-DD`, skipping unnamed entries.
    pub fn holiday_names(&self) -> BTreeMap<String, String> {
        self.holidays
            .iter()
            .filter(|entry| !entry.name.is_empty())
            .map(|entry| (entry.date.clone(), entry.name.clone()))
            .collect()
    }
}
