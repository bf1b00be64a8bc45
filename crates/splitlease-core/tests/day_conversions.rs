//! # Day Representation Conversion Tests
//!
//! The web client encodes days three ways: 0-based indices, names, and
//! 1-based URL parameters. These tests check that every encoding of the same
//! selection produces the same `WeekdaySet`, and that out-of-domain values
//! are rejected rather than dropped.

use proptest::prelude::*;
use splitlease_core::{CoreError, Weekday, WeekdaySet};

#[test]
fn test_three_encodings_agree() {
    let by_index = WeekdaySet::from_indices(&[5, 6, 0]).unwrap();
    let by_name = WeekdaySet::from_names(&["Friday", "Saturday", "Sunday"]).unwrap();
    let by_url = WeekdaySet::from_url_params("6,7,1").unwrap();
    assert_eq!(by_index, by_name);
    assert_eq!(by_index, by_url);
}

#[test]
fn test_out_of_range_index_is_an_error_not_a_drop() {
    let err = WeekdaySet::from_indices(&[1, 2, 7]).unwrap_err();
    assert_eq!(err, CoreError::InvalidWeekdayIndex(7));
    assert!(err.to_string().contains("0 = Sunday"));
}

#[test]
fn test_url_param_zero_is_rejected() {
    // 0 is a valid 0-based index but never a valid 1-based URL parameter.
    assert!(matches!(
        WeekdaySet::from_url_params("0"),
        Err(CoreError::InvalidUrlParam(_))
    ));
}

proptest! {
    #[test]
    fn prop_mask_roundtrips_through_indices(mask in 0u8..128) {
        let set: WeekdaySet = Weekday::ALL
            .into_iter()
            .filter(|d| mask & (1 << d.index()) != 0)
            .collect();
        let indices: Vec<i64> = set.to_indices().into_iter().map(i64::from).collect();
        prop_assert_eq!(WeekdaySet::from_indices(&indices).unwrap(), set);
        prop_assert_eq!(WeekdaySet::from_url_params(&set.to_url_params()).unwrap(), set);
        prop_assert_eq!(WeekdaySet::from_names(&set.names()).unwrap(), set);
    }

    #[test]
    fn prop_complement_partitions_week(mask in 0u8..128) {
        let set: WeekdaySet = Weekday::ALL
            .into_iter()
            .filter(|d| mask & (1 << d.index()) != 0)
            .collect();
        let complement = set.complement();
        prop_assert_eq!(set.len() + complement.len(), 7);
        for day in Weekday::ALL {
            prop_assert!(set.contains(day) != complement.contains(day));
        }
    }

    #[test]
    fn prop_indices_outside_week_rejected(i in prop_oneof![-100i64..0, 7i64..100]) {
        prop_assert!(Weekday::from_index(i).is_err());
    }
}
