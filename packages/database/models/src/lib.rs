#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Database row types and query parameter definitions.
//!
//! These are the shapes of data as stored in and retrieved from the
//! database. Several endpoints expose rows directly, so the JSON field
//! names stay `snake_case` to match the storage columns byte-for-byte.
//! The API envelope types live in `mgnrega_pulse_server_models`.

use chrono::{DateTime, Utc};
use mgnrega_pulse_scheme_models::IssueType;
use serde::{Deserialize, Serialize};

/// A full MGNREGA metric record row, as returned by the upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecordRow {
    /// Primary key.
    pub id: i64,
    /// District this record belongs to.
    pub district_id: i32,
    /// Reporting month (1-12).
    pub month: i32,
    /// Reporting year.
    pub year: i32,
    /// Jobs provided under the scheme.
    pub jobs_provided: i64,
    /// Percentage of wages paid on time (0-100).
    pub wages_paid_percentage: f64,
    /// Pending payments in crores of rupees.
    pub pending_payments_crores: f64,
    /// Person-days of work performed.
    pub person_days: i64,
    /// When the row was last written.
    pub last_updated: DateTime<Utc>,
}

/// The four metric values carried by a sync request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValues {
    /// Jobs provided under the scheme.
    pub jobs_provided: i64,
    /// Percentage of wages paid on time (0-100).
    pub wages_paid_percentage: f64,
    /// Pending payments in crores of rupees.
    pub pending_payments_crores: f64,
    /// Person-days of work performed.
    pub person_days: i64,
}

/// Current-period metrics for one district, joined with district identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentMetricsRow {
    /// Jobs provided under the scheme.
    pub jobs_provided: i64,
    /// Percentage of wages paid on time (0-100).
    pub wages_paid_percentage: f64,
    /// Pending payments in crores of rupees.
    pub pending_payments_crores: f64,
    /// Person-days of work performed.
    pub person_days: i64,
    /// Reporting month (1-12).
    pub month: i32,
    /// Reporting year.
    pub year: i32,
    /// When the row was last written.
    pub last_updated: DateTime<Utc>,
    /// District name.
    pub district_name: String,
    /// District state.
    pub state: String,
}

/// A single historical metric row for one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricHistoryRow {
    /// Jobs provided under the scheme.
    pub jobs_provided: i64,
    /// Percentage of wages paid on time (0-100).
    pub wages_paid_percentage: f64,
    /// Pending payments in crores of rupees.
    pub pending_payments_crores: f64,
    /// Person-days of work performed.
    pub person_days: i64,
    /// Reporting month (1-12).
    pub month: i32,
    /// Reporting year.
    pub year: i32,
}

/// One side of a district comparison: district identity left-joined with
/// its current-period metrics. Metric fields are `None` when the district
/// has no record for the period.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictMetricsRow {
    /// District primary key.
    pub id: i32,
    /// District name.
    pub district_name: String,
    /// District state.
    pub state: String,
    /// Jobs provided, if a current-period record exists.
    pub jobs_provided: Option<i64>,
    /// Wages-paid percentage, if a current-period record exists.
    pub wages_paid_percentage: Option<f64>,
    /// Pending payments in crores, if a current-period record exists.
    pub pending_payments_crores: Option<f64>,
    /// Person-days, if a current-period record exists.
    pub person_days: Option<i64>,
    /// When the record was last written, if it exists.
    pub last_updated: Option<DateTime<Utc>>,
}

/// A historical metric row spanning both compared districts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairHistoryRow {
    /// Name of the district the row belongs to.
    pub district_name: String,
    /// Jobs provided under the scheme.
    pub jobs_provided: i64,
    /// Percentage of wages paid on time (0-100).
    pub wages_paid_percentage: f64,
    /// Pending payments in crores of rupees.
    pub pending_payments_crores: f64,
    /// Person-days of work performed.
    pub person_days: i64,
    /// Reporting month (1-12).
    pub month: i32,
    /// Reporting year.
    pub year: i32,
}

/// Parameters for inserting a citizen issue report.
#[derive(Debug, Clone)]
pub struct NewIssueReport {
    /// District the issue was observed in.
    pub district_id: i32,
    /// Issue category.
    pub issue_type: IssueType,
    /// Free-text description.
    pub description: Option<String>,
    /// URL of an uploaded voice note.
    pub voice_note_url: Option<String>,
    /// Reporter's contact number.
    pub contact_number: Option<String>,
}

/// An issue report row joined with its district, as listed for review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueReportRow {
    /// Primary key.
    pub id: i32,
    /// Issue category.
    pub issue_type: IssueType,
    /// Free-text description.
    pub description: Option<String>,
    /// Reporter's contact number.
    pub contact_number: Option<String>,
    /// Review status (`pending` until an official acts on it).
    pub status: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// District name.
    pub district_name: String,
    /// District state.
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_values_accepts_camel_case_sync_payload() {
        let values: MetricValues = serde_json::from_str(
            r#"{
                "jobsProvided": 2250000,
                "wagesPaidPercentage": 89.5,
                "pendingPaymentsCrores": 50,
                "personDays": 1200000
            }"#,
        )
        .unwrap();

        assert_eq!(values.jobs_provided, 2_250_000);
        assert_eq!(values.wages_paid_percentage, 89.5);
        assert_eq!(values.pending_payments_crores, 50.0);
        assert_eq!(values.person_days, 1_200_000);
    }

    #[test]
    fn history_row_serializes_with_storage_column_names() {
        let row = MetricHistoryRow {
            jobs_provided: 100,
            wages_paid_percentage: 91.2,
            pending_payments_crores: 12.5,
            person_days: 4000,
            month: 3,
            year: 2025,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["jobs_provided"], 100);
        assert_eq!(json["wages_paid_percentage"], 91.2);
        assert!(json.get("jobsProvided").is_none());
    }

    #[test]
    fn issue_report_row_uses_snake_case_issue_type() {
        let row = IssueReportRow {
            id: 1,
            issue_type: IssueType::WageDelay,
            description: None,
            contact_number: None,
            status: "pending".to_string(),
            created_at: DateTime::from_timestamp(1_715_500_000, 0).unwrap(),
            district_name: "Raipur".to_string(),
            state: "Chhattisgarh".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["issue_type"], "wage_delay");
    }
}
