//! # Move-in Date Checks
//!
//! Predicates over calendar dates for the date-range picker, plus the
//! composed move-in validation. All comparisons are at calendar-day
//! granularity; see [`CalendarDate`].
//!
//! "Today" is always a parameter. Nothing here reads the system clock.

use thiserror::Error;

use splitlease_core::{CalendarDate, Weekday, WeekdaySet};

use crate::check_in_out::calculate_check_in_out_days;
use crate::constraints::ListingConstraints;

/// Reason a move-in date was rejected. Only the first applicable reason is
/// reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveInError {
    /// The date is before today.
    #[error("Move-in date cannot be in the past")]
    InPast {
        /// The rejected date.
        date: CalendarDate,
        /// The reference date.
        today: CalendarDate,
    },

    /// The date is outside the listing's availability window.
    #[error("Move-in date is outside the listing's available range")]
    OutOfRange {
        /// The rejected date.
        date: CalendarDate,
    },

    /// The host blocked this specific date.
    #[error("Selected move-in date is not available")]
    Blocked {
        /// The rejected date.
        date: CalendarDate,
    },

    /// The date's weekday differs from the schedule's check-in day.
    #[error("Move-in date must fall on a {expected} to match your schedule, not a {actual}")]
    WeekdayMismatch {
        /// Check-in day derived from the selection.
        expected: Weekday,
        /// Weekday of the requested date.
        actual: Weekday,
    },
}

/// Whether `date` appears in `blocked_dates`.
///
/// Entries are normalized to calendar days before comparison, so a
/// timestamp entry blocks its whole UTC day. Unparseable entries are
/// skipped with a warning.
pub fn is_date_blocked<S: AsRef<str>>(date: &CalendarDate, blocked_dates: &[S]) -> bool {
    blocked_dates
        .iter()
        .filter_map(|raw| match CalendarDate::parse(raw.as_ref()) {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed blocked date");
                None
            }
        })
        .any(|blocked| blocked == *date)
}

/// Whether `date` lies within `[first_available, last_available]`.
/// A missing bound leaves that side open.
pub fn is_date_in_range(
    date: &CalendarDate,
    first_available: Option<&CalendarDate>,
    last_available: Option<&CalendarDate>,
) -> bool {
    first_available.map_or(true, |first| date >= first)
        && last_available.map_or(true, |last| date <= last)
}

/// Validate a requested move-in date.
///
/// Checks run in order: past, availability window, blocked dates, and, when
/// `selected` is non-empty, agreement with the schedule's check-in weekday.
///
/// # Errors
///
/// Returns the first [`MoveInError`] that applies.
pub fn validate_move_in_date(
    move_in: &CalendarDate,
    constraints: &ListingConstraints,
    selected: &WeekdaySet,
    today: &CalendarDate,
) -> Result<(), MoveInError> {
    if move_in < today {
        return Err(MoveInError::InPast {
            date: *move_in,
            today: *today,
        });
    }

    if !is_date_in_range(
        move_in,
        constraints.first_available.as_ref(),
        constraints.last_available.as_ref(),
    ) {
        return Err(MoveInError::OutOfRange { date: *move_in });
    }

    if is_date_blocked(move_in, &constraints.blocked_dates) {
        return Err(MoveInError::Blocked { date: *move_in });
    }

    if let Some(expected) = calculate_check_in_out_days(selected).check_in_day {
        let actual = move_in.weekday();
        if actual != expected {
            return Err(MoveInError::WeekdayMismatch { expected, actual });
        }
    }

    Ok(())
}
