//! # Move-in Subcommand
//!
//! Checks a requested move-in date against the listing's window, its
//! blocked dates, and the schedule's check-in weekday.
//!
//! The reference "today" comes from `--today` or, when absent, the local
//! calendar date read once here. The library never reads the clock.
//!
//! Exit code: 0 when the date is accepted, 1 when it is rejected.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use splitlease_core::CalendarDate;
use splitlease_schedule::{validate_move_in_date, ListingConstraints};

use crate::SelectionArgs;

/// Arguments for the `splitlease move-in` subcommand.
#[derive(Args, Debug)]
pub struct MoveInArgs {
    /// Requested move-in date (`YYYY-MM-DD` or RFC 3339).
    #[arg(long)]
    pub date: String,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Reference date for the "in the past" check. Defaults to today.
    #[arg(long)]
    pub today: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveInReport {
    move_in_date: CalendarDate,
    valid: bool,
    error: Option<String>,
}

/// Execute the move-in subcommand.
pub fn run_move_in(args: &MoveInArgs, listing: &ListingConstraints) -> Result<u8> {
    let move_in = CalendarDate::parse(&args.date).context("invalid --date")?;
    let today = match &args.today {
        Some(raw) => CalendarDate::parse(raw).context("invalid --today")?,
        None => CalendarDate::new(chrono::Local::now().date_naive()),
    };
    let selected = args.selection.resolve()?;
    tracing::debug!(%move_in, %today, %selected, "checking move-in date");

    let outcome = validate_move_in_date(&move_in, listing, &selected, &today);
    let report = MoveInReport {
        move_in_date: move_in,
        valid: outcome.is_ok(),
        error: outcome.as_ref().err().map(ToString::to_string),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &report.error {
            None => println!("OK: move-in {move_in} accepted"),
            Some(e) => println!("FAIL: move-in {move_in}: {e}"),
        }
    }

    Ok(if report.valid { 0 } else { 1 })
}
