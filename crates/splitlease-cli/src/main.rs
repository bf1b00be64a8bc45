//! # splitlease CLI entry point
//!
//! Parses command-line arguments, loads the optional listing file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splitlease_cli::check_in_out::{run_check_in_out, run_span, CheckInOutArgs, SpanArgs};
use splitlease_cli::listing::load_listing;
use splitlease_cli::move_in::{run_move_in, MoveInArgs};
use splitlease_cli::validate::{run_validate, ValidateArgs};
use splitlease_schedule::ListingConstraints;

/// Split-lease weekly schedule toolkit.
///
/// Validates recurring weekday selections, derives check-in and check-out
/// days, and checks move-in dates against listing availability.
#[derive(Parser, Debug)]
#[command(name = "splitlease", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Listing constraints file (YAML or JSON).
    #[arg(long, global = true)]
    listing: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a weekday selection against listing constraints.
    Validate(ValidateArgs),

    /// Derive check-in and check-out days for a selection.
    CheckInOut(CheckInOutArgs),

    /// Rebuild a selection from check-in and check-out days.
    Span(SpanArgs),

    /// Check a move-in date against the listing and schedule.
    MoveIn(MoveInArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("splitlease CLI starting");

    let listing = match &cli.listing {
        Some(path) => match load_listing(path) {
            Ok(listing) => listing,
            Err(e) => {
                tracing::error!("{e:#}");
                return ExitCode::from(2);
            }
        },
        None => ListingConstraints::default(),
    };

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &listing),
        Commands::CheckInOut(args) => run_check_in_out(&args),
        Commands::Span(args) => run_span(&args),
        Commands::MoveIn(args) => run_move_in(&args, &listing),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
