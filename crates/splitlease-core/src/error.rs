//! # Error Types — Boundary Conversion Failures
//!
//! Every error here describes input that could not be turned into a core
//! type: a weekday index outside `[0, 6]`, an unrecognized day name, a
//! malformed 1-based URL parameter, or an unparseable date.
//!
//! Schedule *validity* is not an error. An empty or non-contiguous selection
//! is a well-formed input that the validator reports on; only out-of-domain
//! values fail here.

use thiserror::Error;

/// Error raised when raw input cannot be converted into a core type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A 0-based weekday index fell outside `[0, 6]`.
    #[error("invalid weekday index {0}: expected a value in 0..=6 (0 = Sunday)")]
    InvalidWeekdayIndex(i64),

    /// A day name did not match any weekday.
    #[error("unknown weekday name {0:?}")]
    UnknownWeekdayName(String),

    /// A 1-based URL day parameter was malformed or outside `[1, 7]`.
    #[error("invalid URL day parameter {0:?}: expected comma-separated values in 1..=7")]
    InvalidUrlParam(String),

    /// A date string was neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
