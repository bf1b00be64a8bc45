//! # Validate Subcommand
//!
//! Validates a weekday selection the same way the day picker does on each
//! toggle, and reports errors, warnings, night count, and endpoint days.
//!
//! Exit code: 0 when the selection is valid, 1 when it is not.

use anyhow::Result;
use clap::Args;

use splitlease_core::WeekdaySet;
use splitlease_schedule::{validate_schedule_selection, ListingConstraints, ScheduleValidationResult};

use crate::listing::ListingOverrides;
use crate::SelectionArgs;

/// Arguments for the `splitlease validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub overrides: ListingOverrides,

    /// Print the result as JSON in the web client's field naming.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, listing: &ListingConstraints) -> Result<u8> {
    let selected = args.selection.resolve()?;
    let constraints = args.overrides.apply(listing.clone());
    let result = validate_schedule_selection(&selected, &constraints);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&selected, &result));
    }

    Ok(if result.valid { 0 } else { 1 })
}

/// Human-readable report for a validation result.
pub fn render_report(selected: &WeekdaySet, result: &ScheduleValidationResult) -> String {
    let mut out = String::new();
    let status = if result.valid { "OK" } else { "FAIL" };
    let nights = match result.nights_count {
        1 => "1 night".to_string(),
        n => format!("{n} nights"),
    };
    out.push_str(&format!("{status}: {selected} ({nights})\n"));

    if let (Some(check_in), Some(check_out)) = (result.check_in_day, result.check_out_day) {
        out.push_str(&format!("  check-in {check_in}, check-out {check_out}\n"));
    }
    for error in &result.errors {
        out.push_str(&format!("  ERROR: {error}\n"));
    }
    for warning in &result.warnings {
        out.push_str(&format!("  WARN: {warning}\n"));
    }
    out
}
