//! Runtime configuration, loaded from TOML.
//!
//! Every key is optional; anything missing falls back to the defaults below.
//!
//! ```toml
//! [pomodoro]
//! default_duration_min = 25
//! default_break_min = 5
//! max_duration_min = 120
//! max_break_min = 30
//!
//! [alerts]
//! window_days = 3
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StudyError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub pomodoro: PomodoroConfig,
    pub alerts: AlertConfig,
}

/// Defaults and upper bounds for new Pomodoro sessions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PomodoroConfig {
    pub default_duration_min: u32,
    pub default_break_min: u32,
    pub max_duration_min: u32,
    pub max_break_min: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            default_duration_min: 25,
            default_break_min: 5,
            max_duration_min: 120,
            max_break_min: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    /// Tasks due within this many days (inclusive) raise a deadline alert.
    pub window_days: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { window_days: 3 }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| StudyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StudyError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.pomodoro;
        if p.max_duration_min == 0 || p.max_break_min == 0 {
            return Err(StudyError::Config(
                "pomodoro maxima must be at least 1 minute".to_string(),
            ));
        }
        if !(1..=p.max_duration_min).contains(&p.default_duration_min) {
            return Err(StudyError::Config(format!(
                "default_duration_min {} outside 1..={}",
                p.default_duration_min, p.max_duration_min
            )));
        }
        if !(1..=p.max_break_min).contains(&p.default_break_min) {
            return Err(StudyError::Config(format!(
                "default_break_min {} outside 1..={}",
                p.default_break_min, p.max_break_min
            )));
        }
        Ok(())
    }
}
