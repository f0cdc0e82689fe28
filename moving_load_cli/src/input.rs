//! Turns command-line flags, JSON files and stdin prompts into the core's
//! input types.

use std::fs;
use std::io::{BufRead, Write};

use moving_load_core::{AnalysisSettings, BeamConfig};

use crate::cli::{BeamArgs, SettingsArgs};
use crate::error::{CliError, Result};

/// Fields that can still be missing once flags and the input file are merged.
#[derive(Debug, Default, Clone, Copy)]
struct PartialBeam {
    span_m: Option<f64>,
    load_1_kn: Option<f64>,
    load_2_kn: Option<f64>,
    spacing_m: Option<f64>,
}

/// Build the beam from `--input`, then flags, then prompts for what is left.
pub fn resolve_beam(args: &BeamArgs, reader: &mut impl BufRead, writer: &mut impl Write) -> Result<BeamConfig> {
    let mut beam = PartialBeam::default();

    if let Some(path) = &args.input {
        let contents = fs::read_to_string(path)?;
        let from_file: BeamConfig = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded beam from file");
        beam = PartialBeam {
            span_m: Some(from_file.span_m),
            load_1_kn: Some(from_file.load_1_kn),
            load_2_kn: Some(from_file.load_2_kn),
            spacing_m: Some(from_file.spacing_m),
        };
    }

    beam.span_m = args.span.or(beam.span_m);
    beam.load_1_kn = args.w1.or(beam.load_1_kn);
    beam.load_2_kn = args.w2.or(beam.load_2_kn);
    beam.spacing_m = args.spacing.or(beam.spacing_m);

    Ok(BeamConfig::new(
        value_or_prompt(beam.span_m, "Beam Length L (m): ", reader, writer)?,
        value_or_prompt(beam.load_1_kn, "Load W1 (kN): ", reader, writer)?,
        value_or_prompt(beam.load_2_kn, "Load W2 (kN): ", reader, writer)?,
        value_or_prompt(beam.spacing_m, "Distance between Loads x (m): ", reader, writer)?,
    ))
}

fn value_or_prompt(value: Option<f64>, prompt: &str, reader: &mut impl BufRead, writer: &mut impl Write) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => prompt_f64(prompt, reader, writer),
    }
}

fn prompt_f64(prompt: &str, reader: &mut impl BufRead, writer: &mut impl Write) -> Result<f64> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(CliError::Argument(format!("no value given for '{}'", prompt.trim_end_matches(|c: char| c == ':' || c == ' '))));
    }

    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| CliError::Argument(format!("'{}' is not a number", trimmed)))
}

/// Settings from `--config` (or defaults) with `--step` / `--decimals` applied.
pub fn resolve_settings(args: &SettingsArgs) -> Result<AnalysisSettings> {
    let mut settings = match &args.config {
        Some(path) => AnalysisSettings::load(path)?,
        None => AnalysisSettings::default(),
    };
    if let Some(step) = args.step {
        settings.step_m = step;
    }
    if let Some(decimals) = args.decimals {
        settings.decimals = decimals;
    }
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn full_args() -> BeamArgs {
        BeamArgs {
            span: Some(10.0),
            w1: Some(10.0),
            w2: Some(10.0),
            spacing: Some(2.0),
            input: None,
        }
    }

    #[test]
    fn flags_need_no_prompt() {
        let mut out: Vec<u8> = Vec::new();
        let beam = resolve_beam(&full_args(), &mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(beam, BeamConfig::new(10.0, 10.0, 10.0, 2.0));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_values_are_prompted() {
        let args = BeamArgs {
            w2: None,
            spacing: None,
            ..full_args()
        };
        let mut out: Vec<u8> = Vec::new();
        let beam = resolve_beam(&args, &mut Cursor::new("0\n 1.5 \n"), &mut out).unwrap();
        assert_eq!(beam, BeamConfig::new(10.0, 10.0, 0.0, 1.5));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Load W2 (kN): "));
        assert!(shown.contains("Distance between Loads x (m): "));
        assert!(!shown.contains("Beam Length"));
    }

    #[test]
    fn bad_prompt_answer_is_an_argument_error() {
        let args = BeamArgs {
            span: None,
            ..full_args()
        };
        let err = resolve_beam(&args, &mut Cursor::new("abc\n"), &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::Argument(ref msg) if msg.contains("'abc'")));
    }

    #[test]
    fn closed_stdin_is_an_argument_error() {
        let args = BeamArgs {
            span: None,
            ..full_args()
        };
        let err = resolve_beam(&args, &mut Cursor::new(""), &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::Argument(ref msg) if msg.contains("Beam Length L (m)")));
    }

    #[test]
    fn settings_overrides_apply() {
        let args = SettingsArgs {
            config: None,
            step: Some(0.05),
            decimals: Some(3),
        };
        let settings = resolve_settings(&args).unwrap();
        assert_eq!(settings.step_m, 0.05);
        assert_eq!(settings.decimals, 3);
    }

    #[test]
    fn invalid_step_override_is_rejected() {
        let args = SettingsArgs {
            step: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(resolve_settings(&args), Err(CliError::Calc(_))));
    }
}
