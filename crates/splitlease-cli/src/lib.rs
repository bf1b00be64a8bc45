//! # splitlease-cli — Command-Line Interface for the Split-Lease Scheduler
//!
//! Provides the `splitlease` binary. Argument parsing and output formatting
//! live here; every decision is delegated to `splitlease-schedule`.
//!
//! ## Subcommands
//!
//! - `validate` — Validate a weekday selection against listing constraints.
//! - `check-in-out` — Derive check-in and check-out days for a selection.
//! - `span` — Rebuild a selection from check-in and check-out days.
//! - `move-in` — Check a move-in date against the listing and schedule.
//!
//! ```bash
//! splitlease --listing listing.yaml validate --days 5,6,0
//! splitlease validate --url-days 2,3,4 --min-nights 4 --json
//! splitlease move-in --date 2026-11-06 --days 5,6,0 --today 2026-10-18
//! ```

pub mod check_in_out;
pub mod listing;
pub mod move_in;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;

use splitlease_core::WeekdaySet;

/// Weekday selection flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Selected days as 0-based indices (0 = Sunday), e.g. `5,6,0`.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "url_days"
    )]
    pub days: Vec<i64>,

    /// Selected days in the 1-based listing URL form (1 = Sunday), e.g. `6,7,1`.
    #[arg(long)]
    pub url_days: Option<String>,
}

impl SelectionArgs {
    /// Convert the flags into a `WeekdaySet`.
    ///
    /// Out-of-range values are reported as errors, never dropped.
    pub fn resolve(&self) -> Result<WeekdaySet> {
        match &self.url_days {
            Some(params) => WeekdaySet::from_url_params(params)
                .with_context(|| format!("invalid --url-days value {params:?}")),
            None => WeekdaySet::from_indices(&self.days).context("invalid --days value"),
        }
    }
}
