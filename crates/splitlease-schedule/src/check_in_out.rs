//! # Check-in / Check-out Derivation
//!
//! Maps a weekday selection to the day the guest arrives (the first night)
//! and the day the guest vacates (the day after the last night).
//!
//! For a plain run the first selected day is check-in. For a wrap-around
//! selection such as `{0, 5, 6}` (Fri–Sun) the ascending order starts in
//! the middle of the stay, so check-in is the day right after the first gap
//! in ascending order, and the night right before that gap is the last one.

use serde::Serialize;

use splitlease_core::{Weekday, WeekdaySet};

use crate::contiguity::is_wrap_around;

/// Arrival and departure days for a weekly selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInOut {
    /// Weekday of the first night.
    pub check_in_day: Option<Weekday>,
    /// Weekday the guest vacates.
    pub check_out_day: Option<Weekday>,
    /// Display name of `check_in_day`.
    pub check_in_name: Option<&'static str>,
    /// Display name of `check_out_day`.
    pub check_out_name: Option<&'static str>,
}

impl CheckInOut {
    fn new(check_in: Weekday, check_out: Weekday) -> Self {
        Self {
            check_in_day: Some(check_in),
            check_out_day: Some(check_out),
            check_in_name: Some(check_in.name()),
            check_out_name: Some(check_out.name()),
        }
    }

    /// Whether both days are known. False only for an empty selection.
    pub fn is_resolved(&self) -> bool {
        self.check_in_day.is_some() && self.check_out_day.is_some()
    }
}

/// Compute check-in and check-out days for `selected`.
///
/// The empty selection yields all-`None` fields. Non-contiguous selections
/// still get an answer computed by the same rules; callers gate on
/// [`is_contiguous_selection`](crate::contiguity::is_contiguous_selection)
/// first when the answer must be meaningful.
pub fn calculate_check_in_out_days(selected: &WeekdaySet) -> CheckInOut {
    let days: Vec<Weekday> = selected.iter().collect();
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return CheckInOut::default();
    };

    if is_wrap_around(selected) {
        let gap = (1..days.len()).find(|&i| days[i].index() != days[i - 1].index() + 1);
        if let Some(i) = gap {
            return CheckInOut::new(days[i], days[i - 1].next());
        }
    }

    CheckInOut::new(first, last.next())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(indices: &[i64]) -> WeekdaySet {
        WeekdaySet::from_indices(indices).unwrap()
    }

    #[test]
    fn test_empty_selection_is_all_none() {
        let r = calculate_check_in_out_days(&WeekdaySet::empty());
        assert_eq!(r, CheckInOut::default());
        assert!(!r.is_resolved());
        assert!(r.check_in_name.is_none());
    }

    #[test]
    fn test_singletons() {
        for day in Weekday::ALL {
            let set: WeekdaySet = [day].into_iter().collect();
            let r = calculate_check_in_out_days(&set);
            assert_eq!(r.check_in_day, Some(day));
            assert_eq!(r.check_out_day, Some(day.next()));
        }
    }

    #[test]
    fn test_monday_to_friday_nights() {
        let r = calculate_check_in_out_days(&days(&[1, 2, 3, 4, 5]));
        assert_eq!(r.check_in_day, Some(Weekday::Monday));
        assert_eq!(r.check_out_day, Some(Weekday::Saturday));
        assert_eq!(r.check_in_name, Some("Monday"));
        assert_eq!(r.check_out_name, Some("Saturday"));
    }

    #[test]
    fn test_wrap_around_weekend() {
        let r = calculate_check_in_out_days(&days(&[5, 6, 0]));
        assert_eq!(r.check_in_day, Some(Weekday::Friday));
        assert_eq!(r.check_out_day, Some(Weekday::Monday));
    }

    #[test]
    fn test_wrap_around_thursday_to_monday() {
        let r = calculate_check_in_out_days(&days(&[4, 5, 6, 0, 1]));
        assert_eq!(r.check_in_day, Some(Weekday::Thursday));
        assert_eq!(r.check_out_day, Some(Weekday::Tuesday));
    }

    #[test]
    fn test_saturday_sunday() {
        let r = calculate_check_in_out_days(&days(&[6, 0]));
        assert_eq!(r.check_in_day, Some(Weekday::Saturday));
        assert_eq!(r.check_out_day, Some(Weekday::Monday));
    }

    #[test]
    fn test_full_week_checks_out_on_check_in_day() {
        let r = calculate_check_in_out_days(&WeekdaySet::full());
        assert_eq!(r.check_in_day, Some(Weekday::Sunday));
        assert_eq!(r.check_out_day, Some(Weekday::Sunday));
    }

    #[test]
    fn test_six_days_missing_friday() {
        let r = calculate_check_in_out_days(&days(&[0, 1, 2, 3, 4, 6]));
        assert_eq!(r.check_in_day, Some(Weekday::Saturday));
        assert_eq!(r.check_out_day, Some(Weekday::Friday));
    }

    #[test]
    fn test_serializes_camel_case() {
        let r = calculate_check_in_out_days(&days(&[5, 6, 0]));
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["checkInDay"], 5);
        assert_eq!(json["checkOutDay"], 1);
        assert_eq!(json["checkInName"], "Friday");
        assert_eq!(json["checkOutName"], "Monday");
    }
}
