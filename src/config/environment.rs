// ABOUTME: Tracker configuration loaded from environment variables with constant defaults
// ABOUTME: Validates the undo window and water increment before the tracker starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use crate::constants::{hydration, storage, undo};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Data directory override
pub const DATA_DIR_ENV: &str = "CALORIESNAP_DATA_DIR";
/// Undo window override, in seconds
pub const UNDO_WINDOW_ENV: &str = "CALORIESNAP_UNDO_WINDOW_SECS";
/// Water quick-add override, in millilitres
pub const WATER_INCREMENT_ENV: &str = "CALORIESNAP_WATER_INCREMENT_ML";

/// Runtime settings for the nutrition tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Directory holding the persisted state blob
    pub data_dir: PathBuf,
    /// Seconds during which the last logged meal can be undone
    pub undo_window_secs: u64,
    /// Amount added by the water quick-add action (ml)
    pub water_increment_ml: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(storage::DEFAULT_DATA_DIR),
            undo_window_secs: undo::DEFAULT_UNDO_WINDOW_SECS,
            water_increment_ml: hydration::DEFAULT_WATER_INCREMENT_ML,
        }
    }
}

impl TrackerConfig {
    /// Load tracker configuration from environment
    ///
    /// Unset or unparseable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: env::var(DATA_DIR_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map_or_else(|| PathBuf::from(storage::DEFAULT_DATA_DIR), PathBuf::from),
            undo_window_secs: env::var(UNDO_WINDOW_ENV)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(undo::DEFAULT_UNDO_WINDOW_SECS),
            water_increment_ml: env::var(WATER_INCREMENT_ENV)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(hydration::DEFAULT_WATER_INCREMENT_ML),
        };
        debug!(?config, "Loaded tracker configuration");
        config
    }

    /// Same configuration pointed at another data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Undo window as a duration
    #[must_use]
    pub const fn undo_window(&self) -> Duration {
        Duration::from_secs(self.undo_window_secs)
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero undo window or a non-positive water increment
    pub fn validate(&self) -> AppResult<()> {
        if self.undo_window_secs == 0 {
            return Err(AppError::config(format!(
                "{UNDO_WINDOW_ENV} must be at least 1 second"
            )));
        }
        if !(self.water_increment_ml.is_finite() && self.water_increment_ml > 0.0) {
            return Err(AppError::config(format!(
                "{WATER_INCREMENT_ENV} must be a positive amount"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.undo_window(), Duration::from_secs(5));
        assert!((config.water_increment_ml - 250.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = TrackerConfig {
            undo_window_secs: 0,
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_err());

        config.undo_window_secs = 5;
        config.water_increment_ml = 0.0;
        assert!(config.validate().is_err());
    }
}
