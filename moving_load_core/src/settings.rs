//! # Analysis Settings
//!
//! Discretization and reporting precision for both analyses. The step couples
//! accuracy to run time (the envelope scan is quadratic in `span / step`), so
//! it is passed explicitly with every call instead of living in a constant.
//!
//! Settings serialize to a small JSON document. Missing fields fall back to
//! their defaults, so `{}` is a valid settings file.
//!
//! ```rust
//! use moving_load_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_json_str(r#"{ "step_m": 0.05 }"#).unwrap();
//! assert_eq!(settings.step_m, 0.05);
//! assert_eq!(settings.decimals, 2);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default sampling step along the span (m)
pub const DEFAULT_STEP_M: f64 = 0.1;

/// Default number of decimals for sample positions and reported values
pub const DEFAULT_DECIMALS: u32 = 2;

/// Largest rounding precision accepted
pub const MAX_DECIMALS: u32 = 6;

/// Most steps allowed along one span. The envelope scan visits up to the
/// square of this many sections.
pub const MAX_SPAN_STEPS: f64 = 20_000.0;

/// Discretization and output precision for an analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Spacing between load placements and between scan points (m)
    #[serde(default = "default_step")]
    pub step_m: f64,

    /// Decimal places used to round sample positions and reported results
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_step() -> f64 {
    DEFAULT_STEP_M
}

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            step_m: DEFAULT_STEP_M,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl AnalysisSettings {
    /// Settings with a custom step and the default precision.
    pub fn with_step(step_m: f64) -> Self {
        AnalysisSettings {
            step_m,
            ..Default::default()
        }
    }

    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file and validate them.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), step_m = settings.step_m, decimals = settings.decimals, "loaded analysis settings");
        Ok(settings)
    }

    /// Check that the step is usable at the requested precision.
    ///
    /// A step finer than the rounding resolution would make neighbouring
    /// samples round onto the same position.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.step_m.is_finite() || self.step_m <= 0.0 {
            return Err(CalcError::invalid_settings(
                "step_m",
                self.step_m.to_string(),
                "Step must be a positive, finite length",
            ));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(CalcError::invalid_settings(
                "decimals",
                self.decimals.to_string(),
                format!("At most {} decimals are supported", MAX_DECIMALS),
            ));
        }
        if self.step_m < self.resolution() {
            return Err(CalcError::invalid_settings(
                "step_m",
                self.step_m.to_string(),
                format!("Step is finer than the rounding resolution of {} m", self.resolution()),
            ));
        }
        Ok(())
    }

    /// Check that `span_m` can be sampled at this step without exceeding
    /// [`MAX_SPAN_STEPS`].
    pub fn check_sample_count(&self, span_m: f64) -> CalcResult<()> {
        let steps = span_m / self.step_m;
        if !steps.is_finite() || steps > MAX_SPAN_STEPS {
            return Err(CalcError::invalid_settings(
                "step_m",
                self.step_m.to_string(),
                format!(
                    "A {} m span needs {} steps at this step; at most {} are supported",
                    span_m, steps, MAX_SPAN_STEPS
                ),
            ));
        }
        Ok(())
    }

    /// Smallest distinguishable length at this precision (10^-decimals)
    pub fn resolution(&self) -> f64 {
        10f64.powi(-(self.decimals as i32))
    }
}
