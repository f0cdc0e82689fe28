//! # Moving Load Envelope
//!
//! Sweeps the load pair across the span and records the governing support
//! reactions, shear and bending moment seen at any section for any placement.
//!
//! For every sweep placement `a` (stepping from 0 toward `L - x`) the
//! reactions are recomputed and the whole span is scanned at the same step.
//! Cost is quadratic in `L / step`.
//!
//! All reported values are rounded to [`AnalysisSettings::decimals`]; the
//! intermediate arithmetic is carried at full precision.
//!
//! ## Example
//! ```rust
//! use moving_load_core::calculations::beam::BeamConfig;
//! use moving_load_core::calculations::envelope::analyze;
//! use moving_load_core::settings::AnalysisSettings;
//!
//! let beam = BeamConfig::new(6.0, 5.0, 0.0, 1.0);
//! let result = analyze(&beam, &AnalysisSettings::default()).unwrap();
//!
//! // Single 5 kN load: PL/4 at midspan
//! assert_eq!(result.max_moment_knm, 7.5);
//! assert_eq!(result.max_moment_at_m, 3.0);
//! ```

use serde::{Deserialize, Serialize};

use super::beam::{BeamConfig, LoadPlacement, ReactionPair};
use super::discretize::{round_to, stepped_positions};
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// Report keys, in report order.
pub const REPORT_KEYS: [&str; 8] = [
    "Max Reaction A",
    "Max Reaction B",
    "BM_01",
    "SF_01",
    "BM_max",
    "BM_max at z (m)",
    "SF_max",
    "SF_max at y (m)",
];

/// Governing values over all placements of the load pair.
///
/// Serializes with the report key names, e.g. `"Max Reaction A"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvelopeResult {
    /// Largest RA over the sweep (kN). Starts at zero, so only positive
    /// (upward) reactions are tracked.
    #[serde(rename = "Max Reaction A")]
    pub max_reaction_left_kn: f64,

    /// Largest RB over the sweep (kN), tracked like RA
    #[serde(rename = "Max Reaction B")]
    pub max_reaction_right_kn: f64,

    /// Moment at the left support with W1 over it (kNm)
    #[serde(rename = "BM_01")]
    pub support_moment_knm: f64,

    /// Shear between the loads for the last placement straddling midspan (kN)
    #[serde(rename = "SF_01")]
    pub midspan_shear_kn: f64,

    /// Largest sagging moment seen anywhere (kNm)
    #[serde(rename = "BM_max")]
    pub max_moment_knm: f64,

    /// Section where `max_moment_knm` occurs (m)
    #[serde(rename = "BM_max at z (m)")]
    pub max_moment_at_m: f64,

    /// Shear with the largest magnitude seen anywhere, sign retained (kN)
    #[serde(rename = "SF_max")]
    pub max_shear_kn: f64,

    /// Section where `max_shear_kn` occurs (m)
    #[serde(rename = "SF_max at y (m)")]
    pub max_shear_at_m: f64,
}

impl EnvelopeResult {
    /// `(key, value)` pairs in report order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        let values = [
            self.max_reaction_left_kn,
            self.max_reaction_right_kn,
            self.support_moment_knm,
            self.midspan_shear_kn,
            self.max_moment_knm,
            self.max_moment_at_m,
            self.max_shear_kn,
            self.max_shear_at_m,
        ];
        std::array::from_fn(|i| (REPORT_KEYS[i], values[i]))
    }

    fn rounded(self, decimals: u32) -> Self {
        EnvelopeResult {
            max_reaction_left_kn: round_to(self.max_reaction_left_kn, decimals),
            max_reaction_right_kn: round_to(self.max_reaction_right_kn, decimals),
            support_moment_knm: round_to(self.support_moment_knm, decimals),
            midspan_shear_kn: round_to(self.midspan_shear_kn, decimals),
            max_moment_knm: round_to(self.max_moment_knm, decimals),
            max_moment_at_m: round_to(self.max_moment_at_m, decimals),
            max_shear_kn: round_to(self.max_shear_kn, decimals),
            max_shear_at_m: round_to(self.max_shear_at_m, decimals),
        }
    }
}

/// Shear (kN) and moment (kNm) at one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionForces {
    pub shear_kn: f64,
    pub moment_knm: f64,
}

/// Section forces at `z` with the pair at `placement`.
///
/// Sections under either load belong to the segment between the loads
/// (`a <= z <= b`).
pub fn section_forces(beam: &BeamConfig, placement: &LoadPlacement, reactions: &ReactionPair, z: f64) -> SectionForces {
    let ra = reactions.left_kn;
    let (a, b) = (placement.lead_m, placement.trail_m);
    let (w1, w2) = (beam.load_1_kn, beam.load_2_kn);

    if z < a {
        SectionForces {
            shear_kn: ra,
            moment_knm: ra * z,
        }
    } else if z <= b {
        SectionForces {
            shear_kn: ra - w1,
            moment_knm: ra * z - w1 * (z - a),
        }
    } else {
        SectionForces {
            shear_kn: ra - w1 - w2,
            moment_knm: ra * z - w1 * (z - a) - w2 * (z - b),
        }
    }
}

/// Every placement visited by the sweep, in order.
pub fn sweep_placements(beam: &BeamConfig, settings: &AnalysisSettings) -> Vec<LoadPlacement> {
    stepped_positions(beam.travel_m(), settings.step_m, settings.decimals)
        .into_iter()
        .map(|a| LoadPlacement::at(beam, a))
        .collect()
}

/// Run the moving load sweep and return the rounded envelope.
///
/// # Errors
///
/// Returns the validation error when the beam or settings are unusable
/// (non-positive span, spacing not shorter than the span, bad step).
pub fn analyze(beam: &BeamConfig, settings: &AnalysisSettings) -> CalcResult<EnvelopeResult> {
    settings.validate()?;
    if let Err(e) = beam.validate().and_then(|_| settings.check_sample_count(beam.span_m)) {
        tracing::warn!(error = %e, "rejected beam for envelope analysis");
        return Err(e);
    }

    let decimals = settings.decimals;
    let midspan = beam.span_m / 2.0;
    let sections = stepped_positions(beam.span_m, settings.step_m, decimals);
    let placements = sweep_placements(beam, settings);

    tracing::debug!(
        span_m = beam.span_m,
        load_1_kn = beam.load_1_kn,
        load_2_kn = beam.load_2_kn,
        spacing_m = beam.spacing_m,
        placements = placements.len(),
        sections = sections.len(),
        "starting envelope sweep"
    );

    let mut env = EnvelopeResult::default();

    for placement in &placements {
        let reactions = beam.reactions(placement);
        let a = placement.lead_m;
        tracing::trace!(lead_m = a, ra_kn = reactions.left_kn, rb_kn = reactions.right_kn, "placement");

        env.max_reaction_left_kn = env.max_reaction_left_kn.max(reactions.left_kn);
        env.max_reaction_right_kn = env.max_reaction_right_kn.max(reactions.right_kn);

        if a == 0.0 {
            env.support_moment_knm = reactions.left_kn * a;
        }

        // Pair straddles midspan: a <= L/2 < b
        if round_to(a, decimals) <= midspan && midspan < round_to(placement.trail_m, decimals) {
            env.midspan_shear_kn = reactions.left_kn - beam.load_1_kn;
        }

        for &z in &sections {
            let forces = section_forces(beam, placement, &reactions, z);
            if forces.moment_knm > env.max_moment_knm {
                env.max_moment_knm = forces.moment_knm;
                env.max_moment_at_m = z;
            }
            if forces.shear_kn.abs() > env.max_shear_kn.abs() {
                env.max_shear_kn = forces.shear_kn;
                env.max_shear_at_m = z;
            }
        }
    }

    let env = env.rounded(decimals);
    tracing::debug!(
        max_moment_knm = env.max_moment_knm,
        at_m = env.max_moment_at_m,
        max_shear_kn = env.max_shear_kn,
        "envelope complete"
    );
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn run(span: f64, w1: f64, w2: f64, x: f64) -> EnvelopeResult {
        analyze(&BeamConfig::new(span, w1, w2, x), &AnalysisSettings::default()).unwrap()
    }

    #[test]
    fn test_equal_pair_on_ten_metre_span() {
        let r = run(10.0, 10.0, 10.0, 2.0);
        assert!(approx_eq(r.max_reaction_left_kn, 18.0, EPSILON));
        assert!(approx_eq(r.max_reaction_right_kn, 18.0, EPSILON));
        assert_eq!(r.support_moment_knm, 0.0);
        assert!(approx_eq(r.midspan_shear_kn, -2.0, EPSILON));
        assert!(approx_eq(r.max_moment_knm, 40.5, EPSILON));
        assert!(approx_eq(r.max_moment_at_m, 5.5, EPSILON));
        assert!(approx_eq(r.max_shear_kn, 17.8, EPSILON));
        assert_eq!(r.max_shear_at_m, 0.0);
    }

    #[test]
    fn test_unequal_pair_rounds_results() {
        let r = run(8.0, 20.0, 10.0, 3.0);
        assert!(approx_eq(r.max_reaction_left_kn, 26.25, EPSILON));
        assert!(approx_eq(r.max_reaction_right_kn, 22.5, EPSILON));
        assert!(approx_eq(r.midspan_shear_kn, -8.75, EPSILON));
        assert!(approx_eq(r.max_moment_knm, 45.94, EPSILON));
        assert!(approx_eq(r.max_moment_at_m, 3.5, EPSILON));
        assert!(approx_eq(r.max_shear_kn, 25.88, EPSILON));
    }

    #[test]
    fn test_negative_shear_keeps_sign() {
        // Uplift load: governing shear is negative, right of both loads
        let r = run(10.0, 10.0, -5.0, 2.0);
        assert!(approx_eq(r.max_reaction_left_kn, 6.0, EPSILON));
        assert!(approx_eq(r.max_reaction_right_kn, 3.0, EPSILON));
        assert!(approx_eq(r.max_moment_knm, 18.0, EPSILON));
        assert!(approx_eq(r.max_shear_kn, -8.0, EPSILON));
        assert!(approx_eq(r.max_shear_at_m, 8.0, EPSILON));
    }

    #[test]
    fn test_zero_spacing_never_straddles_midspan() {
        let r = run(5.0, 10.0, 10.0, 0.0);
        assert_eq!(r.midspan_shear_kn, 0.0);
        assert!(approx_eq(r.max_moment_knm, 25.0, EPSILON));
        assert!(approx_eq(r.max_moment_at_m, 2.5, EPSILON));
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // RA = 1.125 with W1 over the left support
        let r = run(10.0, 1.125, 0.0, 1.0);
        assert!(approx_eq(r.max_reaction_left_kn, 1.12, EPSILON));
        assert!(approx_eq(r.max_reaction_right_kn, 1.01, EPSILON));
        assert!(approx_eq(r.midspan_shear_kn, -0.56, EPSILON));
        assert!(approx_eq(r.max_moment_knm, 2.81, EPSILON));
        assert!(approx_eq(r.max_shear_kn, 1.11, EPSILON));

        let r = run(10.0, 0.625, 0.625, 2.0);
        assert!(approx_eq(r.max_reaction_left_kn, 1.12, EPSILON));
        assert!(approx_eq(r.max_reaction_right_kn, 1.12, EPSILON));
        assert!(approx_eq(r.midspan_shear_kn, -0.12, EPSILON));
        assert!(approx_eq(r.max_moment_knm, 2.53, EPSILON));
        assert!(approx_eq(r.max_moment_at_m, 5.5, EPSILON));
    }

    #[test]
    fn test_span_too_long_for_step_is_an_error() {
        let err = analyze(&BeamConfig::new(1e30, 1.0, 1.0, 1.0), &AnalysisSettings::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidSettings { ref field, .. } if field == "step_m"));
    }

    #[test]
    fn test_section_forces_segments() {
        let beam = BeamConfig::new(10.0, 10.0, 10.0, 2.0);
        let placement = LoadPlacement::at(&beam, 4.0);
        let reactions = beam.reactions(&placement);

        let left = section_forces(&beam, &placement, &reactions, 2.0);
        assert!(approx_eq(left.shear_kn, 10.0, EPSILON));
        assert!(approx_eq(left.moment_knm, 20.0, EPSILON));

        // Under W1 counts as between the loads
        let under = section_forces(&beam, &placement, &reactions, 4.0);
        assert!(approx_eq(under.shear_kn, 0.0, EPSILON));
        assert!(approx_eq(under.moment_knm, 40.0, EPSILON));

        let right = section_forces(&beam, &placement, &reactions, 8.0);
        assert!(approx_eq(right.shear_kn, -10.0, EPSILON));
        assert!(approx_eq(right.moment_knm, 20.0, EPSILON));
    }

    #[test]
    fn test_sweep_covers_travel() {
        let beam = BeamConfig::new(10.0, 1.0, 1.0, 2.0);
        let placements = sweep_placements(&beam, &AnalysisSettings::default());
        assert_eq!(placements.len(), 81);
        assert_eq!(placements[0].lead_m, 0.0);
        assert_eq!(placements[80].lead_m, 8.0);
        assert!(approx_eq(placements[80].trail_m, 10.0, EPSILON));
    }

    #[test]
    fn test_degenerate_spacing_is_an_error() {
        let err = analyze(&BeamConfig::new(4.0, 1.0, 1.0, 4.0), &AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SEPARATION");
    }

    #[test]
    fn test_zero_span_is_an_error() {
        let err = analyze(&BeamConfig::new(0.0, 1.0, 1.0, 0.0), &AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SPAN");
    }

    #[test]
    fn test_report_keys_and_order() {
        let r = run(6.0, 5.0, 0.0, 1.0);
        let entries = r.entries();
        assert_eq!(entries[0], ("Max Reaction A", 5.0));
        assert_eq!(entries[1], ("Max Reaction B", 4.17));
        assert_eq!(entries[4], ("BM_max", 7.5));

        let json = serde_json::to_value(r).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 8);
        for key in REPORT_KEYS {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
