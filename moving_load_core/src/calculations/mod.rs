//! # Structural Calculations
//!
//! Moving load analysis of a simply supported beam carrying two point loads
//! at a fixed spacing. Each analysis follows the pattern:
//!
//! - [`BeamConfig`] - the beam and its load pair (JSON-serializable)
//! - `*Result` / `*Curves` - analysis output (JSON-serializable)
//! - `fn(&BeamConfig, &AnalysisSettings) -> CalcResult<_>` - pure function
//!
//! ## Available Calculations
//!
//! - [`envelope`] - governing reactions, shear and moment as the pair traverses the span
//! - [`profile`] - shear and moment diagrams with the pair centered on midspan
//!
//! [`AnalysisSettings`]: crate::settings::AnalysisSettings

pub mod beam;
pub mod discretize;
pub mod envelope;
pub mod profile;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

// Re-export commonly used types
pub use beam::{BeamConfig, LoadPlacement, ReactionPair};
pub use envelope::EnvelopeResult;
pub use profile::{PeakValue, ProfileCurves};

/// Enum wrapper for the available analyses.
///
/// Lets a caller describe a request as JSON, e.g.
/// `{ "type": "Envelope", "span_m": 10.0, "load_1_kn": 10.0, "load_2_kn": 10.0, "spacing_m": 2.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Governing envelope over all placements
    Envelope(BeamConfig),
    /// Diagrams for the centered placement
    Profile(BeamConfig),
}

/// Output of a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    Envelope(EnvelopeResult),
    Profile(ProfileCurves),
}

impl CalculationItem {
    /// The beam this calculation runs on
    pub fn beam(&self) -> &BeamConfig {
        match self {
            CalculationItem::Envelope(b) | CalculationItem::Profile(b) => b,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Envelope(_) => "Envelope",
            CalculationItem::Profile(_) => "Profile",
        }
    }

    /// Run the calculation.
    pub fn run(&self, settings: &AnalysisSettings) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Envelope(beam) => envelope::analyze(beam, settings).map(CalculationOutput::Envelope),
            CalculationItem::Profile(beam) => profile::profile(beam, settings).map(CalculationOutput::Profile),
        }
    }
}
