//! # Simply-Supported Beam Under a Two-Load Group
//!
//! Geometry and statics shared by the envelope and profile analyses: the beam
//! and its load pair, where the pair sits on the span, and the support
//! reactions that hold it in equilibrium.
//!
//! ## Sign Convention
//! - Loads positive downward, reactions positive upward
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//!
//! ## Example
//! ```rust
//! use moving_load_core::calculations::beam::{BeamConfig, LoadPlacement};
//!
//! // 10 m span, 10 kN + 10 kN at 2 m spacing
//! let beam = BeamConfig::new(10.0, 10.0, 10.0, 2.0);
//! beam.validate().unwrap();
//!
//! let placement = LoadPlacement::centered(&beam);
//! assert_eq!(placement.lead_m, 4.0);
//! assert_eq!(placement.trail_m, 6.0);
//!
//! let reactions = beam.reactions(&placement);
//! assert_eq!(reactions.left_kn, 10.0);
//! assert_eq!(reactions.right_kn, 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A simply supported span carrying two point loads at a fixed spacing.
///
/// ## JSON Example
///
/// ```json
/// { "span_m": 10.0, "load_1_kn": 10.0, "load_2_kn": 10.0, "spacing_m": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Distance between the two supports (m)
    pub span_m: f64,
    /// Leading load W1 (kN)
    pub load_1_kn: f64,
    /// Trailing load W2 (kN)
    pub load_2_kn: f64,
    /// Fixed distance from W1 to W2 (m)
    pub spacing_m: f64,
}

impl BeamConfig {
    pub fn new(span_m: f64, load_1_kn: f64, load_2_kn: f64, spacing_m: f64) -> Self {
        BeamConfig {
            span_m,
            load_1_kn,
            load_2_kn,
            spacing_m,
        }
    }

    /// Total applied load W1 + W2 (kN)
    pub fn total_load_kn(&self) -> f64 {
        self.load_1_kn + self.load_2_kn
    }

    /// Length over which the leading load can travel: L - x (m)
    pub fn travel_m(&self) -> f64 {
        self.span_m - self.spacing_m
    }

    /// Reject inputs that cannot describe a loaded span.
    ///
    /// Negative loads are accepted and computed through as given.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("span_m", self.span_m),
            ("load_1_kn", self.load_1_kn),
            ("load_2_kn", self.load_2_kn),
            ("spacing_m", self.spacing_m),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
            }
        }

        if self.span_m <= 0.0 {
            return Err(CalcError::invalid_span(self.span_m, "Span must be positive"));
        }
        if self.spacing_m < 0.0 || self.spacing_m >= self.span_m {
            return Err(CalcError::invalid_separation(self.spacing_m, self.span_m));
        }
        Ok(())
    }

    /// Support reactions for the pair at `placement`.
    ///
    /// Moments about the right support give
    /// `RA * L = W1 * (L - a) + W2 * (L - b)`; vertical equilibrium gives RB.
    pub fn reactions(&self, placement: &LoadPlacement) -> ReactionPair {
        let l = self.span_m;
        let left_kn = (self.load_1_kn * (l - placement.lead_m) + self.load_2_kn * (l - placement.trail_m)) / l;
        ReactionPair {
            left_kn,
            right_kn: self.total_load_kn() - left_kn,
        }
    }
}

/// Where the load pair sits on the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadPlacement {
    /// Position of W1 from the left support, `a` (m)
    pub lead_m: f64,
    /// Position of W2 from the left support, `b = a + x` (m)
    pub trail_m: f64,
}

impl LoadPlacement {
    /// Place W1 at `lead_m` with W2 following at the beam's spacing.
    pub fn at(beam: &BeamConfig, lead_m: f64) -> Self {
        LoadPlacement {
            lead_m,
            trail_m: lead_m + beam.spacing_m,
        }
    }

    /// The pair centered on midspan: `a = (L - x) / 2`.
    pub fn centered(beam: &BeamConfig) -> Self {
        Self::at(beam, beam.travel_m() / 2.0)
    }

    /// Placement obtained by reflecting this one about midspan.
    ///
    /// The loads swap ends, so the mirrored lead is `L - b`.
    pub fn mirrored(&self, beam: &BeamConfig) -> Self {
        Self::at(beam, beam.span_m - self.trail_m)
    }
}

/// Left and right support reactions (kN), positive upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionPair {
    /// RA at the left support
    pub left_kn: f64,
    /// RB at the right support
    pub right_kn: f64,
}

impl ReactionPair {
    /// RA + RB, equal to the total applied load
    pub fn sum_kn(&self) -> f64 {
        self.left_kn + self.right_kn
    }
}
