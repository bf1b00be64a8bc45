//! # Weekday — Single Day Representation
//!
//! Defines the `Weekday` enum, the only day representation the scheduler
//! accepts internally. Days are Sunday-first and 0-based: `Sunday = 0` …
//! `Saturday = 6`.
//!
//! Web clients pass days around in three shapes: full names (`"Tuesday"`),
//! 0-based numbers, and 1-based numbers in listing URLs (`?days-selected=2,3`).
//! Each shape has exactly one conversion function here. Nothing downstream
//! sees an ambiguous integer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Day of the week, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Weekday {
    /// Index 0.
    Sunday = 0,
    /// Index 1.
    Monday = 1,
    /// Index 2.
    Tuesday = 2,
    /// Index 3.
    Wednesday = 3,
    /// Index 4.
    Thursday = 4,
    /// Index 5.
    Friday = 5,
    /// Index 6.
    Saturday = 6,
}

/// Number of days in a week.
pub const DAYS_IN_WEEK: u8 = 7;

impl Weekday {
    /// All weekdays in Sunday-first order.
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Convert a 0-based index (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidWeekdayIndex`] for values outside `[0, 6]`.
    pub fn from_index(index: i64) -> Result<Self, CoreError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CoreError::InvalidWeekdayIndex(index))
    }

    /// The 0-based index of this day.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Convert a 1-based URL parameter (1 = Sunday … 7 = Saturday).
    pub fn from_url_param(param: i64) -> Result<Self, CoreError> {
        if !(1..=7).contains(&param) {
            return Err(CoreError::InvalidUrlParam(param.to_string()));
        }
        Self::from_index(param - 1)
    }

    /// The 1-based URL parameter for this day.
    pub const fn to_url_param(self) -> u8 {
        self.index() + 1
    }

    /// Full English name, e.g. `"Tuesday"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation, e.g. `"Tue"`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Parse a day name.
    ///
    /// Matching is case-insensitive, ignores surrounding whitespace, and
    /// accepts both full names and three-letter abbreviations.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownWeekdayName`] if nothing matches.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|day| {
                day.name().eq_ignore_ascii_case(trimmed)
                    || day.short_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| CoreError::UnknownWeekdayName(name.to_string()))
    }

    /// The following day, wrapping Saturday → Sunday.
    pub fn next(self) -> Self {
        Self::ALL[usize::from((self.index() + 1) % DAYS_IN_WEEK)]
    }

    /// The preceding day, wrapping Sunday → Saturday.
    pub fn previous(self) -> Self {
        Self::ALL[usize::from((self.index() + DAYS_IN_WEEK - 1) % DAYS_IN_WEEK)]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<i64> for Weekday {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}
