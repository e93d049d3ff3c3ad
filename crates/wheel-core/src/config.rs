//! Wheel configuration: validation tolerance, spin tuning, and defaults.
//!
//! Every field has a default, so a partial JSON object only overrides
//! what it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options shown on first load and after a reset.
pub const DEFAULT_OPTIONS: [&str; 6] = [
    "Pizza 20%",
    "Sushi 18%",
    "Tacos 15%",
    "Ramen 17%",
    "Salad 12%",
    "Burgers 18%",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Largest canvas side in pixels.
    pub max_size: f64,
    /// Required sum of all percentages.
    pub target_total: f64,
    /// Allowed deviation from `target_total`, in percentage points.
    pub tolerance: f64,
    /// Full turns every spin makes at minimum.
    pub min_extra_turns: f64,
    /// Random extra turns on top of `min_extra_turns`, in `[0, range)`.
    pub extra_turn_range: f64,
    pub min_duration_ms: f64,
    pub duration_range_ms: f64,
    /// One `"<label> <number>%"` entry per line.
    pub default_options: Vec<String>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            max_size: 460.0,
            target_total: 100.0,
            tolerance: 0.01,
            min_extra_turns: 4.0,
            extra_turn_range: 3.0,
            min_duration_ms: 3200.0,
            duration_range_ms: 600.0,
            default_options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WheelConfig {
    /// Parse a (possibly partial) JSON config and check its ranges.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("tolerance", self.tolerance),
            ("min_extra_turns", self.min_extra_turns),
            ("extra_turn_range", self.extra_turn_range),
            ("min_duration_ms", self.min_duration_ms),
            ("duration_range_ms", self.duration_range_ms),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "`{name}` must be a non-negative number, got {value}"
                )));
            }
        }
        if !(self.max_size.is_finite() && self.max_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "`max_size` must be positive, got {}",
                self.max_size
            )));
        }
        if !(self.target_total.is_finite() && self.target_total > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "`target_total` must be positive, got {}",
                self.target_total
            )));
        }
        Ok(())
    }

    /// The default options joined into editor text.
    pub fn default_text(&self) -> String {
        self.default_options.join("\n")
    }

    /// `total` is within `tolerance` of `target_total`.
    ///
    /// A 1e-9 slack absorbs binary rounding, so `100.01` passes with the
    /// default tolerance.
    pub fn total_ok(&self, total: f64) -> bool {
        (total - self.target_total).abs() <= self.tolerance + 1e-9
    }
}
