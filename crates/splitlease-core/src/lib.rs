//! # splitlease-core — Foundational Types for the Split-Lease Scheduler
//!
//! This crate defines the day and date primitives every other crate in the
//! workspace builds on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One weekday representation.** `Weekday` is Sunday-first and 0-based.
//!    Day names and 1-based URL parameters convert through explicit
//!    functions at the boundary. No bare integers past that point.
//!
//! 2. **`WeekdaySet` is normalized.** A seven-bit mask iterated in ascending
//!    order. Out-of-range indices are rejected at construction rather than
//!    dropped.
//!
//! 3. **Day-granularity dates.** `CalendarDate` compares by calendar day
//!    only, with timestamps normalized to their UTC date.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `splitlease-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod calendar;
pub mod error;
pub mod weekday;
pub mod weekday_set;

// Re-export primary types for ergonomic imports.
pub use calendar::CalendarDate;
pub use error::CoreError;
pub use weekday::{Weekday, DAYS_IN_WEEK};
pub use weekday_set::WeekdaySet;
