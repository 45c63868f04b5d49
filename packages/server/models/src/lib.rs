#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the MGNREGA metrics server.
//!
//! Envelope keys (`currentData`, `historicalData`, `reportId`) are
//! camelCase; row-shaped payloads keep their storage column names. Both
//! follow the production wire format exactly, so the two conventions
//! deliberately coexist.

use chrono::{DateTime, Utc};
use mgnrega_pulse_analytics_models::{ComparisonSet, TrendSet};
use mgnrega_pulse_database_models::{
    CurrentMetricsRow, DistrictMetricsRow, IssueReportRow, MetricHistoryRow, MetricRecordRow,
    MetricValues, PairHistoryRow,
};
use mgnrega_pulse_geography_models::{District, NearestDistrict};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters for the district listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictsQueryParams {
    /// State to list districts for; defaults to Chhattisgarh.
    pub state: Option<String>,
}

/// Response for the district listing endpoint.
#[derive(Debug, Serialize)]
pub struct DistrictsResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Districts in the requested state, ordered by name.
    pub districts: Vec<District>,
}

/// Body of a locate-by-coordinates request.
#[derive(Debug, Clone, Deserialize)]
pub struct LocateRequest {
    /// Device latitude.
    pub latitude: Option<f64>,
    /// Device longitude.
    pub longitude: Option<f64>,
}

/// Response for the locate-by-coordinates endpoint.
#[derive(Debug, Serialize)]
pub struct LocateResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The nearest district with its planar distance.
    pub district: NearestDistrict,
}

/// Query parameters for the metrics endpoint.
///
/// Both values arrive as strings; `months` parses leniently and falls back
/// to its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsQueryParams {
    /// District to fetch metrics for. Required.
    pub district_id: Option<String>,
    /// Number of historical periods to return (default 6).
    pub months: Option<String>,
}

/// Response for the metrics endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Current-period record, or `null` when none exists yet.
    pub current_data: Option<CurrentMetricsRow>,
    /// Historical records, most recent period first.
    pub historical_data: Vec<MetricHistoryRow>,
    /// Month-over-month trend per metric.
    pub trends: TrendSet,
}

/// Body of a metric sync request from the external job runner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// District the payload belongs to. Required.
    pub district_id: Option<i32>,
    /// The four metric values for the current period. Required.
    pub data: Option<MetricValues>,
}

/// Response for the metric sync endpoint.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The stored record after the upsert.
    pub data: MetricRecordRow,
}

/// Query parameters for the comparison endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareQueryParams {
    /// First district ID. Required.
    pub district1: Option<String>,
    /// Second district ID. Required.
    pub district2: Option<String>,
}

/// Response for the comparison endpoint.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The full comparison payload.
    pub comparison: Comparison,
}

/// A two-district comparison: identities, per-metric outcomes, insight
/// sentences, and recent shared history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// First compared district (lower ID).
    pub district1: ComparedDistrict,
    /// Second compared district (higher ID).
    pub district2: ComparedDistrict,
    /// Per-metric comparison outcomes.
    pub comparisons: ComparisonSet,
    /// Insight sentences, fixed order, ties omitted.
    pub insights: Vec<String>,
    /// Recent history rows for both districts, most recent first.
    pub historical_data: Vec<PairHistoryRow>,
}

/// One side of a comparison as presented to clients.
#[derive(Debug, Serialize)]
pub struct ComparedDistrict {
    /// District primary key.
    pub id: i32,
    /// District name.
    pub name: String,
    /// District state.
    pub state: String,
    /// Current-period metric values, zero-filled when absent.
    pub data: ComparedMetrics,
}

/// Current-period metric values for one compared district. Missing values
/// render as zeros.
#[derive(Debug, Serialize)]
pub struct ComparedMetrics {
    /// Jobs provided.
    pub jobs_provided: i64,
    /// Wages-paid percentage.
    pub wages_paid_percentage: f64,
    /// Pending payments in crores.
    pub pending_payments_crores: f64,
    /// Person-days.
    pub person_days: i64,
}

impl From<&DistrictMetricsRow> for ComparedDistrict {
    fn from(row: &DistrictMetricsRow) -> Self {
        Self {
            id: row.id,
            name: row.district_name.clone(),
            state: row.state.clone(),
            data: ComparedMetrics {
                jobs_provided: row.jobs_provided.unwrap_or(0),
                wages_paid_percentage: row.wages_paid_percentage.unwrap_or(0.0),
                pending_payments_crores: row.pending_payments_crores.unwrap_or(0.0),
                person_days: row.person_days.unwrap_or(0),
            },
        }
    }
}

/// Body of an issue report submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// District the issue was observed in. Required.
    pub district_id: Option<i32>,
    /// Issue category wire name. Required, validated against the taxonomy.
    pub issue_type: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// URL of an uploaded voice note.
    pub voice_note_url: Option<String>,
    /// Reporter's contact number.
    pub contact_number: Option<String>,
}

/// Response for a submitted issue report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmitted {
    /// Always `true` on the success path.
    pub success: bool,
    /// The stored report's ID.
    pub report_id: i32,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
    /// Confirmation message for the reporter.
    pub message: String,
}

/// Query parameters for the issue report listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsQueryParams {
    /// Restrict to one district.
    pub district_id: Option<String>,
    /// Review status to list (default `pending`).
    pub status: Option<String>,
    /// Maximum number of reports (default 50).
    pub limit: Option<String>,
}

/// Response for the issue report listing endpoint.
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Matching reports, most recent first.
    pub reports: Vec<IssueReportRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compared_district_zero_fills_missing_metrics() {
        let row = DistrictMetricsRow {
            id: 3,
            district_name: "Korba".to_string(),
            state: "Chhattisgarh".to_string(),
            jobs_provided: None,
            wages_paid_percentage: None,
            pending_payments_crores: None,
            person_days: None,
            last_updated: None,
        };

        let compared = ComparedDistrict::from(&row);
        assert_eq!(compared.data.jobs_provided, 0);
        assert_eq!(compared.data.wages_paid_percentage, 0.0);

        let json = serde_json::to_value(&compared).unwrap();
        assert_eq!(json["data"]["jobs_provided"], 0);
    }

    #[test]
    fn metrics_response_envelope_is_camel_case() {
        let response = MetricsResponse {
            success: true,
            current_data: None,
            historical_data: Vec::new(),
            trends: TrendSet::neutral(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("currentData").is_some());
        assert!(json.get("historicalData").is_some());
        assert_eq!(json["trends"]["jobs"], "0%");
    }

    #[test]
    fn sync_request_accepts_the_job_runner_payload() {
        let request: SyncRequest = serde_json::from_str(
            r#"{"districtId": 5, "data": {
                "jobsProvided": 1000,
                "wagesPaidPercentage": 88.0,
                "pendingPaymentsCrores": 4.2,
                "personDays": 52000
            }}"#,
        )
        .unwrap();

        assert_eq!(request.district_id, Some(5));
        assert_eq!(request.data.unwrap().person_days, 52_000);
    }
}
