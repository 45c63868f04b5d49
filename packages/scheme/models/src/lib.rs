#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! MGNREGA scheme vocabulary shared across the system.
//!
//! Defines the four tracked performance indicators and the citizen issue
//! taxonomy. Every crate that compares, trends, or stores scheme data speaks
//! in terms of these types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A tracked MGNREGA performance indicator.
///
/// Each indicator carries a direction: for most, a higher value means the
/// district is doing better, but pending payments invert that.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MetricKind {
    /// Number of jobs provided under the scheme in the period.
    JobsProvided,
    /// Percentage of wages paid out on time (0-100).
    WagesPaidPercentage,
    /// Payments still pending, in crores of rupees.
    PendingPaymentsCrores,
    /// Total person-days of work performed in the period.
    PersonDays,
}

impl MetricKind {
    /// All tracked metrics, in the canonical comparison order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::JobsProvided,
            Self::WagesPaidPercentage,
            Self::PendingPaymentsCrores,
            Self::PersonDays,
        ]
    }

    /// Whether a larger value of this metric is the better outcome.
    ///
    /// Pending payments are money owed to workers, so lower wins there.
    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        match self {
            Self::JobsProvided | Self::WagesPaidPercentage | Self::PersonDays => true,
            Self::PendingPaymentsCrores => false,
        }
    }
}

/// Category of a citizen-submitted issue report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueType {
    /// Wages delayed beyond the statutory payment window.
    WageDelay,
    /// Poor quality or incomplete worksite output.
    WorkQuality,
    /// Suspected corruption or fund leakage.
    Corruption,
    /// Anything not covered by the specific categories.
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_payments_is_the_only_lower_is_better_metric() {
        for kind in MetricKind::all() {
            assert_eq!(
                kind.higher_is_better(),
                *kind != MetricKind::PendingPaymentsCrores,
                "{kind:?} direction flag is wrong"
            );
        }
    }

    #[test]
    fn metric_kind_wire_format_is_snake_case() {
        assert_eq!(MetricKind::JobsProvided.to_string(), "jobs_provided");
        assert_eq!(MetricKind::PersonDays.as_ref(), "person_days");
    }

    #[test]
    fn issue_type_parses_wire_values() {
        assert_eq!("wage_delay".parse::<IssueType>(), Ok(IssueType::WageDelay));
        assert_eq!(
            "work_quality".parse::<IssueType>(),
            Ok(IssueType::WorkQuality)
        );
        assert_eq!("corruption".parse::<IssueType>(), Ok(IssueType::Corruption));
        assert_eq!("other".parse::<IssueType>(), Ok(IssueType::Other));
        assert!("road_quality".parse::<IssueType>().is_err());
    }

    #[test]
    fn issue_type_display_roundtrip() {
        for ty in [
            IssueType::WageDelay,
            IssueType::WorkQuality,
            IssueType::Corruption,
            IssueType::Other,
        ] {
            assert_eq!(ty.to_string().parse::<IssueType>(), Ok(ty));
        }
    }
}
