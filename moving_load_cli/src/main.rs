//! # Moving Load CLI
//!
//! Terminal front end for the moving load analysis. Reads the span, the two
//! loads and their spacing from flags, a JSON file or stdin prompts, runs the
//! core analyses, and prints the results as a table, JSON or CSV.
//!
//! Every analysis for a command is completed before anything is printed, so a
//! failed run leaves no partial report behind.

mod cli;
mod error;
mod input;
mod logging;
mod render;

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;

use moving_load_core::calculations::{envelope, profile, CalculationItem};
use moving_load_core::{BeamConfig, EnvelopeResult, ProfileCurves};

use crate::cli::{AnalyzeArgs, Cli, Commands, ProfileArgs, ProfileFormat, ReportArgs, RunArgs};
use crate::error::Result;

#[derive(Serialize)]
struct FullReport<'a> {
    beam: &'a BeamConfig,
    envelope: &'a EnvelopeResult,
    profile: &'a ProfileCurves,
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    tracing::debug!(?cli, "parsed arguments");

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "analysis failed");
        eprintln!("Error: {}", e);
        if let Some(json) = e.to_json() {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let stdin = io::stdin();
    let mut prompt_in = stdin.lock();
    let mut prompt_out = io::stderr();
    let mut out = io::stdout().lock();

    match command {
        Commands::Analyze(args) => run_analyze(args, &mut prompt_in, &mut prompt_out, &mut out),
        Commands::Profile(args) => run_profile(args, &mut prompt_in, &mut prompt_out, &mut out),
        Commands::Report(args) => run_report(args, &mut prompt_in, &mut prompt_out, &mut out),
        Commands::Run(args) => run_request(args, &mut out),
    }
}

fn run_request(args: RunArgs, out: &mut impl Write) -> Result<()> {
    let settings = input::resolve_settings(&args.settings)?;
    let contents = std::fs::read_to_string(&args.request)?;
    let item: CalculationItem = serde_json::from_str(&contents)?;
    tracing::info!(calc_type = item.calc_type(), path = %args.request.display(), "running request");

    let output = item.run(&settings)?;
    render::write_json(out, &output)
}

fn run_analyze(
    args: AnalyzeArgs,
    prompt_in: &mut impl io::BufRead,
    prompt_out: &mut impl Write,
    out: &mut impl Write,
) -> Result<()> {
    let settings = input::resolve_settings(&args.settings)?;
    let beam = input::resolve_beam(&args.beam, prompt_in, prompt_out)?;
    let result = envelope::analyze(&beam, &settings)?;
    tracing::info!(max_moment_knm = result.max_moment_knm, max_shear_kn = result.max_shear_kn, "envelope computed");

    if args.json {
        render::write_json(out, &result)
    } else {
        render::write_beam(out, &beam)?;
        writeln!(out)?;
        render::write_envelope(out, &result)
    }
}

fn run_profile(
    args: ProfileArgs,
    prompt_in: &mut impl io::BufRead,
    prompt_out: &mut impl Write,
    out: &mut impl Write,
) -> Result<()> {
    let settings = input::resolve_settings(&args.settings)?;
    let beam = input::resolve_beam(&args.beam, prompt_in, prompt_out)?;
    let curves = profile::profile(&beam, &settings)?;
    tracing::info!(samples = curves.len(), "diagrams computed");

    match args.format {
        ProfileFormat::Summary => {
            render::write_beam(out, &beam)?;
            writeln!(out)?;
            render::write_profile_summary(out, &curves)
        }
        ProfileFormat::Json => render::write_json(out, &curves),
        ProfileFormat::Csv => render::write_profile_csv(out, &curves),
    }
}

fn run_report(
    args: ReportArgs,
    prompt_in: &mut impl io::BufRead,
    prompt_out: &mut impl Write,
    out: &mut impl Write,
) -> Result<()> {
    let settings = input::resolve_settings(&args.settings)?;
    let beam = input::resolve_beam(&args.beam, prompt_in, prompt_out)?;
    let envelope = envelope::analyze(&beam, &settings)?;
    let curves = profile::profile(&beam, &settings)?;

    if args.json {
        return render::write_json(
            out,
            &FullReport {
                beam: &beam,
                envelope: &envelope,
                profile: &curves,
            },
        );
    }

    render::write_beam(out, &beam)?;
    writeln!(out)?;
    render::write_envelope(out, &envelope)?;
    writeln!(out)?;
    render::write_profile_summary(out, &curves)
}
