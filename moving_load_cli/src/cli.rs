use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Moving load analysis of a simply supported beam carrying two point loads at a fixed spacing."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep the load pair across the span and report the governing envelope.
    Analyze(AnalyzeArgs),
    /// Shear force and bending moment diagrams with the pair centered on the span.
    Profile(ProfileArgs),
    /// Envelope report followed by the diagram summary.
    Report(ReportArgs),
    /// Run a JSON calculation request ({"type": "Envelope" | "Profile", ...beam}) and print JSON.
    Run(RunArgs),
}

/// Beam geometry and loads. Any value left out is prompted for on stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct BeamArgs {
    /// Beam span L (m)
    #[arg(short = 'L', long, value_name = "M", allow_hyphen_values = true)]
    pub span: Option<f64>,

    /// Leading load W1 (kN)
    #[arg(long, value_name = "KN", allow_hyphen_values = true)]
    pub w1: Option<f64>,

    /// Trailing load W2 (kN)
    #[arg(long, value_name = "KN", allow_hyphen_values = true)]
    pub w2: Option<f64>,

    /// Distance between the loads x (m)
    #[arg(short = 'x', long, value_name = "M", allow_hyphen_values = true)]
    pub spacing: Option<f64>,

    /// Read the beam from a JSON file ({"span_m", "load_1_kn", "load_2_kn", "spacing_m"}).
    /// Flags given alongside override the file.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Discretization overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to an analysis settings file in JSON format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the sampling step (m).
    #[arg(long, value_name = "M")]
    pub step: Option<f64>,

    /// Override the number of decimals used for positions and reported values.
    #[arg(long, value_name = "N")]
    pub decimals: Option<u32>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub beam: BeamArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the envelope as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub beam: BeamArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output format for the diagrams.
    #[arg(short, long, value_enum, default_value_t = ProfileFormat::Summary)]
    pub format: ProfileFormat,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub beam: BeamArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print both results as one JSON document.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the calculation request file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub request: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// Reactions and diagram peaks
    Summary,
    /// Full curves as JSON
    Json,
    /// One `x_m,shear_kn,moment_knm` row per sample
    Csv,
}
