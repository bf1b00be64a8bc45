//! # Listing Constraints
//!
//! Host-supplied availability data consumed read-only by the validators:
//! preferred night bounds, weekdays the listing is never available, and the
//! date window with its blocked dates.
//!
//! Field names accept both the snake_case form used in listing files and the
//! camelCase form the web client sends.

use serde::{Deserialize, Serialize};

use splitlease_core::{CalendarDate, Weekday, WeekdaySet};

/// Availability constraints for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConstraints {
    /// Host's preferred minimum nights per week. Soft constraint.
    #[serde(alias = "minimumNightsPerStay", skip_serializing_if = "Option::is_none")]
    pub minimum_nights_per_stay: Option<u32>,

    /// Host's preferred maximum nights per week. Soft constraint.
    #[serde(alias = "maximumNightsPerStay", skip_serializing_if = "Option::is_none")]
    pub maximum_nights_per_stay: Option<u32>,

    /// Weekday names the listing is never available on. Hard constraint.
    #[serde(alias = "daysNotAvailable", skip_serializing_if = "Vec::is_empty")]
    pub days_not_available: Vec<String>,

    /// First date a stay may start, inclusive.
    #[serde(alias = "firstAvailable", skip_serializing_if = "Option::is_none")]
    pub first_available: Option<CalendarDate>,

    /// Last date a stay may start, inclusive.
    #[serde(alias = "lastAvailable", skip_serializing_if = "Option::is_none")]
    pub last_available: Option<CalendarDate>,

    /// Specific dates the host has blocked, as `YYYY-MM-DD` or timestamps.
    #[serde(alias = "blockedDates", skip_serializing_if = "Vec::is_empty")]
    pub blocked_dates: Vec<String>,
}

impl ListingConstraints {
    /// Resolve `days_not_available` into a set.
    ///
    /// Names that do not parse are skipped with a warning. Host data is
    /// loosely typed upstream and a stray value must not block every
    /// selection.
    pub fn unavailable_days(&self) -> WeekdaySet {
        self.days_not_available
            .iter()
            .filter_map(|name| match Weekday::from_name(name) {
                Ok(day) => Some(day),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unrecognized unavailable day");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let c = ListingConstraints::default();
        assert!(c.minimum_nights_per_stay.is_none());
        assert!(c.maximum_nights_per_stay.is_none());
        assert!(c.unavailable_days().is_empty());
    }

    #[test]
    fn test_unavailable_days_skips_unknown_names() {
        let c = ListingConstraints {
            days_not_available: vec![
                "Tuesday".to_string(),
                "funday".to_string(),
                "sat".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(c.unavailable_days().names(), vec!["Tuesday", "Saturday"]);
    }

    #[test]
    fn test_deserialize_camel_case_client_payload() {
        let json = r#"{
            "minimumNightsPerStay": 3,
            "maximumNightsPerStay": 5,
            "daysNotAvailable": ["Tuesday"],
            "firstAvailable": "2026-11-01T00:00:00.000Z",
            "blockedDates": ["2026-11-09"]
        }"#;
        let c: ListingConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(c.minimum_nights_per_stay, Some(3));
        assert_eq!(c.maximum_nights_per_stay, Some(5));
        assert_eq!(c.days_not_available, vec!["Tuesday"]);
        assert_eq!(
            c.first_available,
            Some(CalendarDate::from_ymd(2026, 11, 1).unwrap())
        );
        assert!(c.last_available.is_none());
        assert_eq!(c.blocked_dates, vec!["2026-11-09"]);
    }

    #[test]
    fn test_deserialize_snake_case_yaml() {
        let yaml = "minimum_nights_per_stay: 2\ndays_not_available:\n  - Sunday\n";
        let c: ListingConstraints = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(c.minimum_nights_per_stay, Some(2));
        assert_eq!(c.unavailable_days().names(), vec!["Sunday"]);
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let c = ListingConstraints {
            minimum_nights_per_stay: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"minimum_nights_per_stay":2}"#
        );
    }
}
