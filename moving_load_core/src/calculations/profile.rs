//! # Shear and Moment Diagrams
//!
//! Diagrams for one representative placement: the load pair centered on
//! midspan. This is not the governing placement (see [`super::envelope`]);
//! the curves are meant for plotting and are returned unrounded.
//!
//! At a sample exactly under a load the load has already been applied, so the
//! shear curve steps down at `a` and at `b` ("post" steps).

use serde::{Deserialize, Serialize};

use super::beam::{BeamConfig, LoadPlacement, ReactionPair};
use super::discretize::diagram_positions;
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// One diagram sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakValue {
    /// Position from the left support (m)
    pub position_m: f64,
    /// Shear (kN) or moment (kNm) at that position
    pub value: f64,
}

/// Shear force and bending moment diagrams for the centered placement.
///
/// `x_vals`, `sfd` and `bmd` are parallel and always the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCurves {
    /// Placement used for the diagrams
    pub placement: LoadPlacement,
    /// Support reactions for that placement
    pub reactions: ReactionPair,
    /// Sample positions from the left support (m)
    pub x_vals: Vec<f64>,
    /// Shear force at each sample (kN)
    pub sfd: Vec<f64>,
    /// Bending moment at each sample (kNm)
    pub bmd: Vec<f64>,
}

impl ProfileCurves {
    /// Number of samples along the span
    pub fn len(&self) -> usize {
        self.x_vals.len()
    }

    /// True when the curves hold no samples
    pub fn is_empty(&self) -> bool {
        self.x_vals.is_empty()
    }

    /// Sample with the largest shear magnitude, sign retained.
    /// The first such sample wins on ties.
    pub fn peak_shear(&self) -> Option<PeakValue> {
        peak_by(&self.x_vals, &self.sfd, f64::abs)
    }

    /// Sample with the largest (sagging) moment. The first such sample wins on ties.
    pub fn peak_moment(&self) -> Option<PeakValue> {
        peak_by(&self.x_vals, &self.bmd, |m| m)
    }

    /// `(x_vals, sfd, bmd)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x_vals, self.sfd, self.bmd)
    }

    /// Iterate `(x, shear, moment)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x_vals
            .iter()
            .zip(&self.sfd)
            .zip(&self.bmd)
            .map(|((&x, &sf), &bm)| (x, sf, bm))
    }
}

fn peak_by(xs: &[f64], values: &[f64], key: impl Fn(f64) -> f64) -> Option<PeakValue> {
    let mut best: Option<PeakValue> = None;
    for (&position_m, &value) in xs.iter().zip(values) {
        match best {
            Some(b) if key(value) <= key(b.value) => {}
            _ => best = Some(PeakValue { position_m, value }),
        }
    }
    best
}

/// Build the diagrams with the pair centered on the span.
///
/// # Errors
///
/// Returns the validation error when the beam or settings are unusable.
///
/// # Example
/// ```rust
/// use moving_load_core::calculations::beam::BeamConfig;
/// use moving_load_core::calculations::profile::profile;
/// use moving_load_core::settings::AnalysisSettings;
///
/// let curves = profile(&BeamConfig::new(10.0, 10.0, 10.0, 2.0), &AnalysisSettings::default()).unwrap();
/// assert_eq!(curves.len(), 101);
/// assert_eq!(curves.sfd[0], 10.0);
/// ```
pub fn profile(beam: &BeamConfig, settings: &AnalysisSettings) -> CalcResult<ProfileCurves> {
    settings.validate()?;
    if let Err(e) = beam.validate().and_then(|_| settings.check_sample_count(beam.span_m)) {
        tracing::warn!(error = %e, "rejected beam for diagram profile");
        return Err(e);
    }

    let placement = LoadPlacement::centered(beam);
    let reactions = beam.reactions(&placement);
    let (a, b) = (placement.lead_m, placement.trail_m);
    let ra = reactions.left_kn;

    let x_vals = diagram_positions(beam.span_m, settings.step_m);
    let mut sfd = Vec::with_capacity(x_vals.len());
    let mut bmd = Vec::with_capacity(x_vals.len());

    for &xi in &x_vals {
        let mut sf = ra;
        let mut bm = ra * xi;
        if xi >= a {
            sf -= beam.load_1_kn;
            bm -= beam.load_1_kn * (xi - a);
        }
        if xi >= b {
            sf -= beam.load_2_kn;
            bm -= beam.load_2_kn * (xi - b);
        }
        sfd.push(sf);
        bmd.push(bm);
    }

    tracing::debug!(lead_m = a, trail_m = b, samples = x_vals.len(), "built diagrams");

    Ok(ProfileCurves {
        placement,
        reactions,
        x_vals,
        sfd,
        bmd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn curves(span: f64, w1: f64, w2: f64, x: f64) -> ProfileCurves {
        profile(&BeamConfig::new(span, w1, w2, x), &AnalysisSettings::default()).unwrap()
    }

    #[test]
    fn test_symmetric_pair_diagrams() {
        let c = curves(10.0, 10.0, 10.0, 2.0);
        assert_eq!(c.placement.lead_m, 4.0);
        assert_eq!(c.placement.trail_m, 6.0);
        assert!(approx_eq(c.reactions.left_kn, 10.0, EPSILON));

        assert!(approx_eq(c.sfd[0], 10.0, EPSILON));
        assert!(approx_eq(c.sfd[50], 0.0, EPSILON));
        assert!(approx_eq(c.sfd[100], -10.0, EPSILON));
        assert!(approx_eq(c.bmd[0], 0.0, EPSILON));
        assert!(approx_eq(c.bmd[50], 40.0, EPSILON));
        assert!(approx_eq(c.bmd[100], 0.0, 1e-6));
    }

    #[test]
    fn test_single_load_diagrams() {
        // 5 kN at 2.5 m on a 6 m span, W2 inert at 3.5 m
        let c = curves(6.0, 5.0, 0.0, 1.0);
        assert_eq!(c.len(), 61);
        let ra = 5.0 * 3.5 / 6.0;
        assert!(approx_eq(c.reactions.left_kn, ra, EPSILON));

        let peak = c.peak_moment().unwrap();
        assert!(approx_eq(peak.value, ra * 2.5, 1e-6));
        assert!(approx_eq(peak.position_m, 2.5, 1e-6));
        assert!(approx_eq(*c.sfd.last().unwrap(), ra - 5.0, EPSILON));
    }

    #[test]
    fn test_peak_shear_keeps_first_and_sign() {
        let c = curves(8.0, 20.0, 10.0, 3.0);
        let peak = c.peak_shear().unwrap();
        assert!(approx_eq(peak.value, 16.875, EPSILON));
        assert_eq!(peak.position_m, 0.0);
    }

    #[test]
    fn test_peak_of_negative_curve() {
        let xs = [0.0, 1.0, 2.0];
        let peak = peak_by(&xs, &[1.0, -3.0, 3.0], f64::abs).unwrap();
        assert_eq!(peak, PeakValue { position_m: 1.0, value: -3.0 });
        assert!(peak_by(&[], &[], f64::abs).is_none());
    }

    #[test]
    fn test_zero_loads_give_flat_curves() {
        let c = curves(7.3, 0.0, 0.0, 1.2);
        assert!(c.sfd.iter().all(|&v| v == 0.0));
        assert!(c.bmd.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_parts_and_rows_stay_parallel() {
        let c = curves(8.7, 3.0, 4.0, 1.0);
        assert_eq!(c.rows().count(), 87);
        let (x, sf, bm) = c.into_parts();
        assert_eq!(x.len(), 87);
        assert_eq!(sf.len(), x.len());
        assert_eq!(bm.len(), x.len());
    }

    #[test]
    fn test_huge_span_is_rejected_before_sampling() {
        let err = profile(&BeamConfig::new(1e30, 1.0, 1.0, 1.0), &AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");

        // Largest span the default step still samples
        assert_eq!(curves(2000.0, 1.0, 1.0, 1.0).len(), 20_001);
    }

    #[test]
    fn test_rejects_spacing_longer_than_span() {
        let err = profile(&BeamConfig::new(3.0, 1.0, 1.0, 5.0), &AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SEPARATION");
    }
}
