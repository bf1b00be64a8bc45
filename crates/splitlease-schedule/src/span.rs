//! Reconstruct a weekly selection from its check-in and check-out days.
//!
//! Listing links and saved proposals often carry only the two endpoint days.
//! Nights run from check-in up to, but not including, check-out. Equal
//! endpoints mean the whole week.

use std::iter::successors;

use splitlease_core::{Weekday, WeekdaySet, DAYS_IN_WEEK};

/// Nights between `check_in` and `check_out`, in `1..=7`.
pub fn nights_between(check_in: Weekday, check_out: Weekday) -> usize {
    let forward = (check_out.index() + DAYS_IN_WEEK - check_in.index()) % DAYS_IN_WEEK;
    if forward == 0 {
        usize::from(DAYS_IN_WEEK)
    } else {
        usize::from(forward)
    }
}

/// The occupied nights from `check_in` up to the day before `check_out`.
pub fn selection_from_check_in_out(check_in: Weekday, check_out: Weekday) -> WeekdaySet {
    successors(Some(check_in), |d| Some(d.next()))
        .take(nights_between(check_in, check_out))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(Weekday::Monday, Weekday::Saturday), 5);
        assert_eq!(nights_between(Weekday::Friday, Weekday::Monday), 3);
        assert_eq!(nights_between(Weekday::Sunday, Weekday::Sunday), 7);
        assert_eq!(nights_between(Weekday::Saturday, Weekday::Sunday), 1);
    }

    #[test]
    fn test_selection_wraps_week() {
        let set = selection_from_check_in_out(Weekday::Friday, Weekday::Monday);
        assert_eq!(set.to_indices(), vec![0, 5, 6]);
    }

    #[test]
    fn test_equal_endpoints_is_full_week() {
        let set = selection_from_check_in_out(Weekday::Wednesday, Weekday::Wednesday);
        assert_eq!(set, WeekdaySet::full());
    }
}
