//! # splitlease-schedule — Weekly Schedule Validation
//!
//! Validates the weekdays a guest picks for a recurring weekly stay and
//! derives what the booking flow needs from them:
//!
//! - **Contiguity** (`contiguity.rs`): one unbroken block, with the week
//!   treated as a cycle so Friday–Monday is a single block.
//!
//! - **Check-in / check-out** (`check_in_out.rs`): arrival day and the day
//!   the guest vacates.
//!
//! - **Validator** (`validator.rs`): hard errors, soft host-preference
//!   warnings, and the night count.
//!
//! - **Move-in** (`move_in.rs`): blocked dates, availability window, and
//!   agreement between the move-in date and the schedule's check-in day.
//!
//! - **Span** (`span.rs`): rebuilds a selection from its endpoint days.
//!
//! ## Crate Policy
//!
//! - Pure functions only. No I/O, no clock reads, no global state; every
//!   input is a parameter and repeated calls return identical results.
//! - Depends only on `splitlease-core` internally.

pub mod check_in_out;
pub mod constraints;
pub mod contiguity;
pub mod move_in;
pub mod span;
pub mod validator;

pub use check_in_out::{calculate_check_in_out_days, CheckInOut};
pub use constraints::ListingConstraints;
pub use contiguity::{is_contiguous_selection, is_standard_run, is_wrap_around};
pub use move_in::{is_date_blocked, is_date_in_range, validate_move_in_date, MoveInError};
pub use span::{nights_between, selection_from_check_in_out};
pub use validator::{validate_day_indices, validate_schedule_selection, ScheduleValidationResult};
