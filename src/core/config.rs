//! Engine configuration with documented constants
//!
//! Everything the scheduler and the seed world need that is not part of the
//! per-day model itself. The model coefficients live next to the formulas.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, SimError};

/// Configuration for the engine and scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === SCHEDULER ===
    /// Real milliseconds per simulated day at game speed 1
    ///
    /// At 1000, one day passes per second. Game speed multiplies the
    /// elapsed time, so speed 5 means five days per second.
    pub ms_per_day: u64,

    /// Maximum number of days a single tick may advance
    ///
    /// A stalled frame (tab in background, debugger pause) would otherwise
    /// try to replay minutes of simulation in one go. Excess time is dropped.
    pub max_days_per_tick: u32,

    /// Game speed the seed world starts with (0 = paused)
    pub initial_game_speed: u32,

    // === SEED WORLD ===
    /// Budget available for interventions at day 0
    pub initial_budget: f64,

    /// Atmospheric CO2 at day 0, in ppm
    pub co2_ppm: f64,

    /// Yearly CO2 increase, in ppm
    pub co2_ppm_delta: f64,

    /// Global temperature difference to the pre-industrial baseline at day 0
    pub global_temp_diff: f64,

    /// Yearly change of the global temperature difference
    pub global_temp_diff_delta: f64,

    // === NEWS ===
    /// Number of news entries kept for the ticker
    pub news_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ms_per_day: 1000,
            max_days_per_tick: 30,
            initial_game_speed: 1,

            initial_budget: 100_000_000_000.0,
            co2_ppm: 410.0,
            co2_ppm_delta: 2.5,
            global_temp_diff: 1.1,
            global_temp_diff_delta: 0.02,

            news_capacity: 64,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.ms_per_day == 0 {
            return Err(SimError::InvalidConfig("ms_per_day must be positive".into()));
        }

        if self.max_days_per_tick == 0 {
            return Err(SimError::InvalidConfig(
                "max_days_per_tick must be positive".into(),
            ));
        }

        if !self.initial_budget.is_finite() || self.initial_budget < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "initial_budget ({}) must be finite and non-negative",
                self.initial_budget
            )));
        }

        let scalars = [
            ("co2_ppm", self.co2_ppm),
            ("co2_ppm_delta", self.co2_ppm_delta),
            ("global_temp_diff", self.global_temp_diff),
            ("global_temp_diff_delta", self.global_temp_diff_delta),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(SimError::InvalidConfig(format!("{} must be finite", name)));
            }
        }

        if self.news_capacity == 0 {
            return Err(SimError::InvalidConfig("news_capacity must be positive".into()));
        }

        Ok(())
    }
}
