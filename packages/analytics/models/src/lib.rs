#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived comparison and trend result types.
//!
//! Everything here is computed fresh per request from fetched metric rows
//! and never persisted.

use serde::{Deserialize, Serialize};

/// Which side of a pairwise comparison came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// The first district wins this metric.
    #[serde(rename = "district1")]
    District1,
    /// The second district wins this metric.
    #[serde(rename = "district2")]
    District2,
    /// Values are within the tie threshold, or data is missing.
    #[serde(rename = "tie")]
    Tie,
}

/// Outcome of comparing one metric between two districts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Non-negative magnitude of the relative difference, one decimal.
    pub percentage: f64,
    /// Winner under the metric's direction flag.
    pub winner: Winner,
    /// Signed relative difference, one decimal. Absent on the degenerate
    /// missing/zero-value path; may be non-zero even when `winner` is a
    /// tie (the tie threshold is wider than zero).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
}

impl MetricComparison {
    /// The degenerate result used when either compared value is missing or
    /// zero.
    #[must_use]
    pub const fn degenerate() -> Self {
        Self {
            percentage: 0.0,
            winner: Winner::Tie,
            difference: None,
        }
    }
}

/// Pairwise comparison outcomes for all four tracked metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSet {
    /// Jobs provided (higher is better).
    pub jobs: MetricComparison,
    /// Wages-paid percentage (higher is better).
    pub wages: MetricComparison,
    /// Pending payments (lower is better).
    pub pending: MetricComparison,
    /// Person-days (higher is better).
    pub person_days: MetricComparison,
}

/// Month-over-month trend strings for all four tracked metrics.
///
/// Values are formatted percentages (`"+10.0%"`, `"-3.2%"`), or the plain
/// `"0%"` guard value when there is no usable previous period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSet {
    /// Jobs provided trend.
    pub jobs: String,
    /// Wages-paid percentage trend.
    pub wages: String,
    /// Pending payments trend.
    pub pending: String,
    /// Person-days trend.
    pub person_days: String,
}

impl TrendSet {
    /// The neutral result: every metric at the `"0%"` guard value.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            jobs: "0%".to_string(),
            wages: "0%".to_string(),
            pending: "0%".to_string(),
            person_days: "0%".to_string(),
        }
    }
}

/// One district's current-period metric values as fed to the comparator.
///
/// `None` means the district has no record for the period; the comparator
/// treats that the same as a zero value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricReadings {
    /// Jobs provided.
    pub jobs_provided: Option<f64>,
    /// Wages-paid percentage.
    pub wages_paid_percentage: Option<f64>,
    /// Pending payments in crores.
    pub pending_payments_crores: Option<f64>,
    /// Person-days.
    pub person_days: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&Winner::District1).unwrap(),
            "\"district1\""
        );
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"tie\"");
    }

    #[test]
    fn degenerate_comparison_omits_difference() {
        let json = serde_json::to_value(MetricComparison::degenerate()).unwrap();
        assert_eq!(json["percentage"], 0.0);
        assert_eq!(json["winner"], "tie");
        assert!(json.get("difference").is_none());
    }

    #[test]
    fn comparison_set_uses_camel_case_person_days() {
        let set = ComparisonSet {
            jobs: MetricComparison::degenerate(),
            wages: MetricComparison::degenerate(),
            pending: MetricComparison::degenerate(),
            person_days: MetricComparison::degenerate(),
        };

        let json = serde_json::to_value(set).unwrap();
        assert!(json.get("personDays").is_some());
        assert!(json.get("person_days").is_none());
    }

    #[test]
    fn neutral_trends_use_the_bare_zero_guard_string() {
        let trends = TrendSet::neutral();
        assert_eq!(trends.jobs, "0%");
        let json = serde_json::to_value(&trends).unwrap();
        assert_eq!(json["personDays"], "0%");
    }
}
