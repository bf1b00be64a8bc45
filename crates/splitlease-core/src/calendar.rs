//! # Calendar Dates — Day-Granularity Comparison
//!
//! Defines `CalendarDate`, a date with no time-of-day component. Move-in
//! dates, blocked dates, and availability bounds are all compared at this
//! granularity.
//!
//! ## Normalization
//!
//! Listing data mixes plain `YYYY-MM-DD` strings with full timestamps
//! (`2026-03-02T00:00:00.000Z`). Both normalize to the same calendar day:
//! timestamps are converted to UTC and truncated to their date, so
//! `2026-03-02` and `2026-03-02T17:45:00Z` compare equal. Timestamps that
//! carry no offset (`2026-03-02T00:00:00`) are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::weekday::Weekday;

const OFFSET_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A calendar day, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wrap a `chrono::NaiveDate`.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Construct from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if the components do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: "no such calendar day".to_string(),
            })
    }

    /// Parse a plain date or a timestamp.
    ///
    /// Accepted forms, tried in order:
    /// - `YYYY-MM-DD`
    /// - RFC 3339 (`2026-11-02T00:00:00.000Z`, `2026-11-02T08:00:00-05:00`)
    /// - offset timestamps with a space separator or an hour-only offset,
    ///   as Postgres renders them (`2026-11-03 00:00:00+00`)
    /// - timestamps with no offset (`2026-11-02T00:00:00`,
    ///   `2026-11-02 00:00:00.5`), taken as UTC
    ///
    /// Timestamps with an offset are converted to UTC before the date is
    /// taken, so the result never depends on the host's local timezone.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if no form parses.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc).date_naive()));
        }
        for format in OFFSET_TIMESTAMP_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
                return Ok(Self(dt.with_timezone(&Utc).date_naive()));
            }
        }
        let mut last_err = None;
        for format in NAIVE_TIMESTAMP_FORMATS {
            match NaiveDateTime::parse_from_str(trimmed, format) {
                Ok(dt) => return Ok(Self(dt.date())),
                Err(e) => last_err = Some(e),
            }
        }
        Err(CoreError::InvalidDate {
            input: s.to_string(),
            reason: last_err.map_or_else(|| "unrecognized date".to_string(), |e| e.to_string()),
        })
    }

    /// The weekday this date falls on.
    pub fn weekday(&self) -> Weekday {
        chrono::Datelike::weekday(&self.0).into()
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_date())
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_iso_date()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
