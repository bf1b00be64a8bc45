//! # Schedule Selection Validator
//!
//! Runs on every day-picker toggle and decides whether the selection can move
//! forward to a proposal.
//!
//! ## Two-tier outcome
//!
//! - **Errors** make `valid` false: empty selection, non-contiguous
//!   selection, or overlap with a day the listing is never available.
//! - **Warnings** leave `valid` untouched: the selection is below or above
//!   the host's preferred night count.
//!
//! Empty and non-contiguous selections short-circuit; nothing else is
//! evaluated for them. Every invalid outcome carries at least one error.
//!
//! ## Nights
//!
//! `nights_count` is the number of selected days, for every outcome. A full
//! week is seven nights, not six: the guest holds the unit every night of
//! the recurring week.

use serde::{Deserialize, Serialize};

use splitlease_core::{CoreError, Weekday, WeekdaySet};

use crate::check_in_out::calculate_check_in_out_days;
use crate::constraints::ListingConstraints;
use crate::contiguity::is_contiguous_selection;

/// Error for an empty selection.
pub const EMPTY_SELECTION_ERROR: &str = "Please select at least one day";

/// Error for a selection with gaps.
pub const NON_CONTIGUOUS_ERROR: &str =
    "Please check for contiguous nights to continue with your proposal";

/// Error for a selection that includes a day the listing is never available.
pub const UNAVAILABLE_DAYS_ERROR: &str = "Some selected days are not available for this listing";

/// Outcome of validating a weekday selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleValidationResult {
    /// Whether the selection may proceed.
    pub valid: bool,
    /// Number of selected days.
    pub nights_count: usize,
    /// Whether the selection is one block, wrap-around allowed.
    pub is_contiguous: bool,
    /// First night, when the selection is contiguous.
    pub check_in_day: Option<Weekday>,
    /// Day the guest vacates, when the selection is contiguous.
    pub check_out_day: Option<Weekday>,
    /// Hard errors.
    pub errors: Vec<String>,
    /// Soft warnings.
    pub warnings: Vec<String>,
    /// Hint for the client to show the contiguity tutorial.
    pub show_tutorial: bool,
}

/// Validate `selected` against `constraints`.
pub fn validate_schedule_selection(
    selected: &WeekdaySet,
    constraints: &ListingConstraints,
) -> ScheduleValidationResult {
    let mut result = ScheduleValidationResult {
        nights_count: selected.len(),
        ..Default::default()
    };

    if selected.is_empty() {
        result.errors.push(EMPTY_SELECTION_ERROR.to_string());
        tracing::debug!("rejected empty selection");
        return result;
    }

    result.is_contiguous = is_contiguous_selection(selected);
    if !result.is_contiguous {
        result.errors.push(NON_CONTIGUOUS_ERROR.to_string());
        result.show_tutorial = true;
        tracing::debug!(%selected, "rejected non-contiguous selection");
        return result;
    }

    let days = calculate_check_in_out_days(selected);
    result.check_in_day = days.check_in_day;
    result.check_out_day = days.check_out_day;

    let nights = result.nights_count;
    if let Some(min) = constraints.minimum_nights_per_stay {
        if nights < min as usize {
            result
                .warnings
                .push(format!("Host prefers at least {min} nights per week"));
        }
    }
    if let Some(max) = constraints.maximum_nights_per_stay {
        if nights > max as usize {
            result
                .warnings
                .push(format!("Host prefers at most {max} nights per week"));
        }
    }

    let blocked = constraints.unavailable_days();
    if selected.iter().any(|d| blocked.contains(d)) {
        result.errors.push(UNAVAILABLE_DAYS_ERROR.to_string());
    }

    result.valid = result.errors.is_empty();
    tracing::debug!(
        %selected,
        valid = result.valid,
        nights,
        warnings = result.warnings.len(),
        "validated schedule selection"
    );
    result
}

/// Validate raw 0-based day indices, as received from a client.
///
/// # Errors
///
/// Returns [`CoreError::InvalidWeekdayIndex`] if any index is outside
/// `[0, 6]`. Such input never reaches the validator.
pub fn validate_day_indices(
    indices: &[i64],
    constraints: &ListingConstraints,
) -> Result<ScheduleValidationResult, CoreError> {
    let selected = WeekdaySet::from_indices(indices)?;
    Ok(validate_schedule_selection(&selected, constraints))
}
