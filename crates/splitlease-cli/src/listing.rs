//! # Listing Files and Overrides
//!
//! Loads `ListingConstraints` from a YAML or JSON file (`--listing`) and
//! layers per-invocation flag overrides on top. Flags win over file values.
//!
//! ```yaml
//! minimum_nights_per_stay: 3
//! maximum_nights_per_stay: 5
//! days_not_available: [Tuesday]
//! first_available: 2026-11-01
//! blocked_dates: ["2026-11-09"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use splitlease_schedule::ListingConstraints;

/// Load listing constraints from `path`.
///
/// YAML is a superset of JSON, so both the snake_case listing file form and
/// a camelCase payload captured from the web client parse here.
pub fn load_listing(path: &Path) -> Result<ListingConstraints> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read listing file: {}", path.display()))?;
    let listing: ListingConstraints = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse listing file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded listing constraints");
    Ok(listing)
}

/// Flags that override listing file values.
#[derive(Args, Debug, Clone, Default)]
pub struct ListingOverrides {
    /// Host's preferred minimum nights per week.
    #[arg(long)]
    pub min_nights: Option<u32>,

    /// Host's preferred maximum nights per week.
    #[arg(long)]
    pub max_nights: Option<u32>,

    /// Day the listing is never available (repeatable, e.g. `--unavailable Tuesday`).
    #[arg(long = "unavailable", value_name = "DAY")]
    pub unavailable: Vec<String>,
}

impl ListingOverrides {
    /// Apply the overrides to `base`.
    pub fn apply(&self, mut base: ListingConstraints) -> ListingConstraints {
        if let Some(min) = self.min_nights {
            base.minimum_nights_per_stay = Some(min);
        }
        if let Some(max) = self.max_nights {
            base.maximum_nights_per_stay = Some(max);
        }
        if !self.unavailable.is_empty() {
            base.days_not_available = self.unavailable.clone();
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitlease_core::CalendarDate;

    #[test]
    fn test_load_yaml_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.yaml");
        std::fs::write(
            &path,
            "minimum_nights_per_stay: 3\ndays_not_available: [Tuesday]\nfirst_available: \"2026-11-01\"\n",
        )
        .unwrap();

        let listing = load_listing(&path).unwrap();
        assert_eq!(listing.minimum_nights_per_stay, Some(3));
        assert_eq!(listing.days_not_available, vec!["Tuesday"]);
        assert_eq!(
            listing.first_available,
            Some(CalendarDate::from_ymd(2026, 11, 1).unwrap())
        );
    }

    #[test]
    fn test_load_camel_case_json_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.json");
        std::fs::write(
            &path,
            r#"{"maximumNightsPerStay": 4, "blockedDates": ["2026-11-09T00:00:00.000Z"]}"#,
        )
        .unwrap();

        let listing = load_listing(&path).unwrap();
        assert_eq!(listing.maximum_nights_per_stay, Some(4));
        assert_eq!(listing.blocked_dates.len(), 1);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_listing(Path::new("/nonexistent/listing.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/listing.yaml"));
    }

    #[test]
    fn test_load_malformed_date_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.yaml");
        std::fs::write(&path, "last_available: \"soon\"\n").unwrap();
        assert!(load_listing(&path).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let base = ListingConstraints {
            minimum_nights_per_stay: Some(2),
            maximum_nights_per_stay: Some(6),
            days_not_available: vec!["Sunday".to_string()],
            ..Default::default()
        };
        let overrides = ListingOverrides {
            min_nights: Some(4),
            max_nights: None,
            unavailable: vec!["Monday".to_string()],
        };
        let merged = overrides.apply(base);
        assert_eq!(merged.minimum_nights_per_stay, Some(4));
        assert_eq!(merged.maximum_nights_per_stay, Some(6));
        assert_eq!(merged.days_not_available, vec!["Monday"]);
    }

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = ListingConstraints {
            minimum_nights_per_stay: Some(2),
            ..Default::default()
        };
        assert_eq!(ListingOverrides::default().apply(base.clone()), base);
    }
}
