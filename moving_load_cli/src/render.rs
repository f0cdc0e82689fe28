//! Text, JSON and CSV rendering of analysis results.

use std::io::Write;

use moving_load_core::{BeamConfig, EnvelopeResult, ProfileCurves};
use serde::Serialize;

use crate::error::Result;

const RULE: &str = "═══════════════════════════════════════";

pub fn write_beam(out: &mut impl Write, beam: &BeamConfig) -> Result<()> {
    writeln!(out, "Input:")?;
    writeln!(out, "  Span L:   {} m", beam.span_m)?;
    writeln!(out, "  Load W1:  {} kN", beam.load_1_kn)?;
    writeln!(out, "  Load W2:  {} kN", beam.load_2_kn)?;
    writeln!(out, "  Spacing:  {} m", beam.spacing_m)?;
    Ok(())
}

pub fn write_envelope(out: &mut impl Write, envelope: &EnvelopeResult) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  MOVING LOAD ENVELOPE")?;
    writeln!(out, "{}", RULE)?;
    for (key, value) in envelope.entries() {
        writeln!(out, "  {:<18} {:>10.2}", key, value)?;
    }
    Ok(())
}

pub fn write_profile_summary(out: &mut impl Write, curves: &ProfileCurves) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  DIAGRAMS (loads centered on span)")?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  W1 at {:.2} m, W2 at {:.2} m",
        curves.placement.lead_m, curves.placement.trail_m
    )?;
    writeln!(
        out,
        "  RA = {:.2} kN, RB = {:.2} kN",
        curves.reactions.left_kn, curves.reactions.right_kn
    )?;
    writeln!(out, "  Samples: {}", curves.len())?;
    if let Some(peak) = curves.peak_shear() {
        writeln!(out, "  Max SF = {:.2} kN at {:.2} m", peak.value, peak.position_m)?;
    }
    if let Some(peak) = curves.peak_moment() {
        writeln!(out, "  Max BM = {:.2} kNm at {:.2} m", peak.value, peak.position_m)?;
    }
    Ok(())
}

pub fn write_profile_csv(out: &mut impl Write, curves: &ProfileCurves) -> Result<()> {
    writeln!(out, "x_m,shear_kn,moment_knm")?;
    for (x, sf, bm) in curves.rows() {
        writeln!(out, "{},{},{}", x, sf, bm)?;
    }
    Ok(())
}

pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
