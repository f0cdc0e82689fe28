//! # moving_load_core - Moving Load Analysis Engine
//!
//! Support reactions, shear force and bending moment for a simply supported
//! beam of span L carrying two point loads W1 and W2 at a fixed spacing x, as
//! the pair travels across the span.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize
//! - **Rich Errors**: Invalid spans and spacings are reported, never silently zeroed
//!
//! ## Quick Start
//!
//! ```rust
//! use moving_load_core::{analyze_beam, compute_sfd_bmd};
//!
//! let envelope = analyze_beam(10.0, 10.0, 10.0, 2.0).unwrap();
//! assert_eq!(envelope.max_moment_knm, 40.5);
//!
//! let (x_vals, sfd, bmd) = compute_sfd_bmd(10.0, 10.0, 10.0, 2.0).unwrap();
//! assert_eq!(x_vals.len(), sfd.len());
//! assert_eq!(sfd.len(), bmd.len());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Envelope sweep and diagram profile
//! - [`settings`] - Discretization step and reporting precision
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BeamConfig, EnvelopeResult, ProfileCurves};
pub use errors::{CalcError, CalcResult};
pub use settings::AnalysisSettings;

/// Governing envelope for span `l`, loads `w1`/`w2` and spacing `x`, using
/// the default settings (0.1 m step, 2 decimals).
pub fn analyze_beam(l: f64, w1: f64, w2: f64, x: f64) -> CalcResult<EnvelopeResult> {
    calculations::envelope::analyze(&BeamConfig::new(l, w1, w2, x), &AnalysisSettings::default())
}

/// `(x_vals, sfd, bmd)` for the pair centered on the span, using the default
/// settings.
pub fn compute_sfd_bmd(l: f64, w1: f64, w2: f64, x: f64) -> CalcResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    calculations::profile::profile(&BeamConfig::new(l, w1, w2, x), &AnalysisSettings::default())
        .map(ProfileCurves::into_parts)
}
