//! # Contiguity — One Unbroken Block per Week
//!
//! A recurring weekly stay must read as "move in on day X, move out on day
//! Y" with no gaps. Because the week is cyclic, a block may cross the
//! Saturday → Sunday boundary: Friday–Sunday (`{5, 6, 0}`) is contiguous even
//! though its sorted indices are not consecutive.
//!
//! ## Rules, in order
//!
//! 1. Empty → not contiguous.
//! 2. One day → contiguous.
//! 3. Six or seven days → contiguous. This is a count-based shortcut; it is
//!    applied before any gap inspection.
//! 4. Sorted indices consecutive → contiguous.
//! 5. Contains both Sunday and Saturday and the unselected days are
//!    themselves consecutive → contiguous (wrap-around).
//! 6. Anything else → not contiguous.

use splitlease_core::{Weekday, WeekdaySet};

/// Selections at least this large are contiguous without further checks.
pub const ALWAYS_CONTIGUOUS_MIN_DAYS: usize = 6;

/// Whether `selected` forms one contiguous block, allowing wrap-around.
pub fn is_contiguous_selection(selected: &WeekdaySet) -> bool {
    match selected.len() {
        0 => false,
        1 => true,
        n if n >= ALWAYS_CONTIGUOUS_MIN_DAYS => true,
        _ => {
            if is_standard_run(selected) {
                return true;
            }
            if !spans_week_boundary(selected) {
                return false;
            }
            let gap = selected.complement();
            gap.is_empty() || is_standard_run(&gap)
        }
    }
}

/// Whether the ascending indices of `set` increase by exactly one at every
/// step. The empty set and singletons count as runs.
pub fn is_standard_run(set: &WeekdaySet) -> bool {
    let indices = set.to_indices();
    indices.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Whether `set` crosses Saturday → Sunday: it holds both ends of the week
/// but is not a plain ascending run.
pub fn is_wrap_around(set: &WeekdaySet) -> bool {
    spans_week_boundary(set) && !is_standard_run(set)
}

fn spans_week_boundary(set: &WeekdaySet) -> bool {
    set.contains(Weekday::Sunday) && set.contains(Weekday::Saturday)
}
