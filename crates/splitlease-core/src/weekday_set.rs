//! # Weekday Set — Recurring Weekly Occupancy
//!
//! `WeekdaySet` is the set of weekdays a guest occupies, repeating every
//! week. It is a seven-bit mask: bit `i` is set when the day with index `i`
//! (0 = Sunday) is selected.
//!
//! Iteration is always ascending by index, so every consumer sees the same
//! normalized order regardless of the order in which days were toggled.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::weekday::Weekday;

const FULL_MASK: u8 = 0b0111_1111;

/// A set of weekdays, iterated in ascending (Sunday-first) order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty selection.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All seven days.
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Build a set from 0-based indices. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidWeekdayIndex`] on the first value outside
    /// `[0, 6]`. Out-of-range values are never dropped silently.
    pub fn from_indices(indices: &[i64]) -> Result<Self, CoreError> {
        indices
            .iter()
            .map(|&i| Weekday::from_index(i))
            .collect::<Result<Self, _>>()
    }

    /// Build a set from day names (see [`Weekday::from_name`]).
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, CoreError> {
        names
            .iter()
            .map(|n| Weekday::from_name(n.as_ref()))
            .collect::<Result<Self, _>>()
    }

    /// Parse the comma-separated, 1-based form used in listing URLs,
    /// e.g. `"2,3,4"` for Monday–Wednesday. An empty string is the empty set.
    pub fn from_url_params(params: &str) -> Result<Self, CoreError> {
        let trimmed = params.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }
        trimmed
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i64>()
                    .map_err(|_| CoreError::InvalidUrlParam(part.to_string()))
                    .and_then(Weekday::from_url_param)
            })
            .collect::<Result<Self, _>>()
    }

    /// Render the 1-based URL form, ascending.
    pub fn to_url_params(&self) -> String {
        self.iter()
            .map(|d| d.to_url_param().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Add a day. Returns `true` if it was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let added = !self.contains(day);
        self.0 |= bit(day);
        added
    }

    /// Remove a day. Returns `true` if it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.0 &= !bit(day);
        present
    }

    /// Flip a day's membership, as a day-picker click does. Returns whether
    /// the day is selected afterwards.
    pub fn toggle(&mut self, day: Weekday) -> bool {
        self.0 ^= bit(day);
        self.contains(day)
    }

    /// Whether `day` is selected.
    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of selected days.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no day is selected.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The days not selected.
    pub const fn complement(&self) -> Self {
        Self(!self.0 & FULL_MASK)
    }

    /// Selected days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Selected 0-based indices in ascending order.
    pub fn to_indices(&self) -> Vec<u8> {
        self.iter().map(Weekday::index).collect()
    }

    /// Selected day names in ascending order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(Weekday::name).collect()
    }
}

const fn bit(day: Weekday) -> u8 {
    1 << day.index()
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl TryFrom<Vec<i64>> for WeekdaySet {
    type Error = CoreError;

    fn try_from(value: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_indices(&value)
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.to_indices()
    }
}

impl std::fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(Weekday::short_name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
