//! HTTP handler functions for the MGNREGA metrics API.
//!
//! Validation happens here, before any fetch or computation. The analytics
//! core never fails; every error response below originates from a missing
//! parameter or the database gateway.

use actix_web::{HttpResponse, web};
use chrono::{Datelike, Utc};
use mgnrega_pulse_analytics::{compare, insights, trends};
use mgnrega_pulse_analytics_models::{MetricReadings, TrendSet};
use mgnrega_pulse_database::queries;
use mgnrega_pulse_database_models::{DistrictMetricsRow, NewIssueReport};
use mgnrega_pulse_geography::{locate, queries as geo_queries};
use mgnrega_pulse_scheme_models::IssueType;
use mgnrega_pulse_server_models::{
    ApiHealth, Comparison, CompareQueryParams, ComparedDistrict, CompareResponse,
    DistrictsQueryParams, DistrictsResponse, LocateRequest, LocateResponse, MetricsQueryParams,
    MetricsResponse, ReportRequest, ReportSubmitted, ReportsQueryParams, ReportsResponse,
    SyncRequest, SyncResponse,
};

use crate::AppState;

/// The state used when a district listing doesn't name one.
const DEFAULT_STATE: &str = "Chhattisgarh";

/// Maximum combined history rows returned by a comparison.
const COMPARE_HISTORY_LIMIT: u32 = 12;

/// Historical periods returned by the metrics endpoint by default.
const DEFAULT_HISTORY_MONTHS: u32 = 6;

/// The reporting period in effect right now (UTC month and year).
#[allow(clippy::cast_possible_wrap)]
fn current_period() -> (i32, i32) {
    let now = Utc::now();
    (now.month() as i32, now.year())
}

/// Comparator inputs for one side of a comparison.
#[allow(clippy::cast_precision_loss)]
fn readings(row: &DistrictMetricsRow) -> MetricReadings {
    MetricReadings {
        jobs_provided: row.jobs_provided.map(|v| v as f64),
        wages_paid_percentage: row.wages_paid_percentage,
        pending_payments_crores: row.pending_payments_crores,
        person_days: row.person_days.map(|v| v as f64),
    }
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/districts`
///
/// Lists districts in a state, ordered by name.
pub async fn districts(
    state: web::Data<AppState>,
    params: web::Query<DistrictsQueryParams>,
) -> HttpResponse {
    let state_name = params
        .state
        .clone()
        .unwrap_or_else(|| DEFAULT_STATE.to_string());

    match geo_queries::districts_by_state(state.db.as_ref(), &state_name).await {
        Ok(districts) => HttpResponse::Ok().json(DistrictsResponse {
            success: true,
            districts,
        }),
        Err(e) => {
            log::error!("Failed to query districts: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to fetch districts"
            }))
        }
    }
}

/// `POST /api/districts`
///
/// Resolves GPS coordinates to the nearest district.
pub async fn locate_district(
    state: web::Data<AppState>,
    body: web::Json<LocateRequest>,
) -> HttpResponse {
    let (Some(latitude), Some(longitude)) = (body.latitude, body.longitude) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Latitude and longitude required"
        }));
    };

    match geo_queries::all_districts(state.db.as_ref()).await {
        Ok(districts) => match locate::nearest_district(&districts, latitude, longitude) {
            Some(district) => HttpResponse::Ok().json(LocateResponse {
                success: true,
                district,
            }),
            None => HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": "No districts found"
            })),
        },
        Err(e) => {
            log::error!("Failed to resolve district by location: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to find district"
            }))
        }
    }
}

/// `GET /api/mgnrega-data`
///
/// Returns a district's current-period record, recent history, and
/// month-over-month trends.
#[allow(clippy::cast_precision_loss)]
pub async fn metrics(
    state: web::Data<AppState>,
    params: web::Query<MetricsQueryParams>,
) -> HttpResponse {
    let Some(district_id) = params
        .district_id
        .as_deref()
        .and_then(|id| id.parse::<i32>().ok())
    else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "District ID required"
        }));
    };

    let months = params
        .months
        .as_deref()
        .and_then(|m| m.parse::<u32>().ok())
        .unwrap_or(DEFAULT_HISTORY_MONTHS);

    let (month, year) = current_period();

    let current_data =
        match queries::current_metrics(state.db.as_ref(), district_id, month, year).await {
            Ok(current) => current,
            Err(e) => {
                log::error!("Failed to fetch current metrics: {e}");
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "success": false,
                    "error": "Failed to fetch MGNREGA data"
                }));
            }
        };

    let historical_data =
        match queries::metric_history(state.db.as_ref(), district_id, months).await {
            Ok(history) => history,
            Err(e) => {
                log::error!("Failed to fetch metric history: {e}");
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "success": false,
                    "error": "Failed to fetch MGNREGA data"
                }));
            }
        };

    let trends = TrendSet {
        jobs: trends::period_trend(&historical_data, |r| r.jobs_provided as f64),
        wages: trends::period_trend(&historical_data, |r| r.wages_paid_percentage),
        pending: trends::period_trend(&historical_data, |r| r.pending_payments_crores),
        person_days: trends::period_trend(&historical_data, |r| r.person_days as f64),
    };

    HttpResponse::Ok().json(MetricsResponse {
        success: true,
        current_data,
        historical_data,
        trends,
    })
}

/// `POST /api/mgnrega-data`
///
/// Upserts the current-period record for a district. Called by the
/// external sync job, not by end users.
pub async fn sync_metrics(
    state: web::Data<AppState>,
    body: web::Json<SyncRequest>,
) -> HttpResponse {
    let (Some(district_id), Some(data)) = (body.district_id, body.data) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "District ID and data required"
        }));
    };

    let (month, year) = current_period();

    match queries::upsert_metrics(state.db.as_ref(), district_id, month, year, &data).await {
        Ok(record) => HttpResponse::Ok().json(SyncResponse {
            success: true,
            data: record,
        }),
        Err(e) => {
            log::error!("Failed to sync metrics: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to sync data"
            }))
        }
    }
}

/// `GET /api/compare-districts`
///
/// Compares two districts' current-period metrics and generates insight
/// sentences. The response's `district1` is the row with the lower ID,
/// matching the fetch ordering.
pub async fn compare_districts(
    state: web::Data<AppState>,
    params: web::Query<CompareQueryParams>,
) -> HttpResponse {
    let ids = (
        params
            .district1
            .as_deref()
            .and_then(|id| id.parse::<i32>().ok()),
        params
            .district2
            .as_deref()
            .and_then(|id| id.parse::<i32>().ok()),
    );
    let (Some(district1_id), Some(district2_id)) = ids else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Both district IDs required for comparison"
        }));
    };

    let (month, year) = current_period();

    let rows = match queries::district_pair_current(
        state.db.as_ref(),
        district1_id,
        district2_id,
        month,
        year,
    )
    .await
    {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Failed to fetch comparison data: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to compare districts"
            }));
        }
    };

    // Both districts must exist and have a record for the current period.
    if rows.len() != 2 || rows.iter().any(|row| row.last_updated.is_none()) {
        return HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "error": "District data not found"
        }));
    }

    let historical_data = match queries::pair_history(
        state.db.as_ref(),
        district1_id,
        district2_id,
        COMPARE_HISTORY_LIMIT,
    )
    .await
    {
        Ok(history) => history,
        Err(e) => {
            log::error!("Failed to fetch comparison history: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to compare districts"
            }));
        }
    };

    let comparisons = compare::compare_all(&readings(&rows[0]), &readings(&rows[1]));
    let insights = insights::generate_insights(
        &comparisons,
        &rows[0].district_name,
        &rows[1].district_name,
    );

    HttpResponse::Ok().json(CompareResponse {
        success: true,
        comparison: Comparison {
            district1: ComparedDistrict::from(&rows[0]),
            district2: ComparedDistrict::from(&rows[1]),
            comparisons,
            insights,
            historical_data,
        },
    })
}

/// `POST /api/issue-reports`
///
/// Stores a citizen issue report. Pass-through persistence; no analytics.
pub async fn submit_report(
    state: web::Data<AppState>,
    body: web::Json<ReportRequest>,
) -> HttpResponse {
    let (Some(district_id), Some(issue_type_raw)) =
        (body.district_id, body.issue_type.as_deref())
    else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "District ID and issue type required"
        }));
    };

    let Ok(issue_type) = issue_type_raw.parse::<IssueType>() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Invalid issue type"
        }));
    };

    let report = NewIssueReport {
        district_id,
        issue_type,
        description: body.description.clone(),
        voice_note_url: body.voice_note_url.clone(),
        contact_number: body.contact_number.clone(),
    };

    match queries::insert_issue_report(state.db.as_ref(), &report).await {
        Ok((report_id, submitted_at)) => HttpResponse::Ok().json(ReportSubmitted {
            success: true,
            report_id,
            submitted_at,
            message: "Issue reported successfully. Your report will be reviewed by authorities."
                .to_string(),
        }),
        Err(e) => {
            log::error!("Failed to store issue report: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to submit issue report"
            }))
        }
    }
}

/// `GET /api/issue-reports`
///
/// Lists issue reports for review, most recent first.
pub async fn list_reports(
    state: web::Data<AppState>,
    params: web::Query<ReportsQueryParams>,
) -> HttpResponse {
    let district_id = match params.district_id.as_deref() {
        Some(raw) => match raw.parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "success": false,
                    "error": "Invalid district ID"
                }));
            }
        },
        None => None,
    };

    let status = params.status.as_deref().unwrap_or("pending");
    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.parse::<u32>().ok())
        .unwrap_or(50);

    match queries::issue_reports(state.db.as_ref(), district_id, status, limit).await {
        Ok(reports) => HttpResponse::Ok().json(ReportsResponse {
            success: true,
            reports,
        }),
        Err(e) => {
            log::error!("Failed to query issue reports: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to fetch reports"
            }))
        }
    }
}
