//! # Check-in/Check-out and Span Subcommands
//!
//! `check-in-out` derives endpoint days from a selection; `span` goes the
//! other way and rebuilds the selection from two endpoint days.

use anyhow::{Context, Result};
use clap::Args;

use splitlease_core::Weekday;
use splitlease_schedule::{
    calculate_check_in_out_days, is_contiguous_selection, nights_between,
    selection_from_check_in_out, CheckInOut,
};

use crate::SelectionArgs;

/// Arguments for the `splitlease check-in-out` subcommand.
#[derive(Args, Debug)]
pub struct CheckInOutArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check-in-out subcommand. Always exits 0 once the selection
/// parses; a gapped selection only logs a warning.
pub fn run_check_in_out(args: &CheckInOutArgs) -> Result<u8> {
    let selected = args.selection.resolve()?;
    if !selected.is_empty() && !is_contiguous_selection(&selected) {
        tracing::warn!(%selected, "selection is not contiguous; endpoint days are not meaningful");
    }
    let days = calculate_check_in_out_days(&selected);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else {
        println!("{}", render_check_in_out(&days));
    }
    Ok(0)
}

/// One-line rendering of a check-in/check-out pair.
pub fn render_check_in_out(days: &CheckInOut) -> String {
    if !days.is_resolved() {
        return "no days selected".to_string();
    }
    format!(
        "check-in {}, check-out {}",
        days.check_in_name.unwrap_or_default(),
        days.check_out_name.unwrap_or_default()
    )
}

/// Arguments for the `splitlease span` subcommand.
#[derive(Args, Debug)]
pub struct SpanArgs {
    /// Check-in day name, e.g. `Friday` or `fri`.
    #[arg(long)]
    pub check_in: String,

    /// Check-out day name. Equal to check-in means a full week.
    #[arg(long)]
    pub check_out: String,

    /// Print the 1-based URL form instead of day names.
    #[arg(long)]
    pub url: bool,
}

/// Execute the span subcommand.
pub fn run_span(args: &SpanArgs) -> Result<u8> {
    let check_in = Weekday::from_name(&args.check_in).context("invalid --check-in")?;
    let check_out = Weekday::from_name(&args.check_out).context("invalid --check-out")?;
    let selected = selection_from_check_in_out(check_in, check_out);

    if args.url {
        println!("{}", selected.to_url_params());
    } else {
        println!(
            "{} ({} nights)",
            selected.names().join(", "),
            nights_between(check_in, check_out)
        );
    }
    Ok(0)
}
