//! Database query functions for MGNREGA metric records and issue reports.
//!
//! All access goes through `query_raw_params()` / `exec_raw_params()` with
//! positional parameters; no SQL is ever built from user input.

use chrono::{DateTime, NaiveDateTime, Utc};
use mgnrega_pulse_database_models::{
    CurrentMetricsRow, DistrictMetricsRow, IssueReportRow, MetricHistoryRow, MetricRecordRow,
    MetricValues, NewIssueReport, PairHistoryRow,
};
use mgnrega_pulse_scheme_models::IssueType;
use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue};

use crate::DbError;

fn utc_from_naive(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)
}

/// Fetches a district's metric record for one period, joined with the
/// district's identity. Returns `None` when no record exists for the
/// period.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn current_metrics(
    db: &dyn Database,
    district_id: i32,
    month: i32,
    year: i32,
) -> Result<Option<CurrentMetricsRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT md.jobs_provided, md.wages_paid_percentage,
                    md.pending_payments_crores, md.person_days,
                    md.month, md.year, md.last_updated,
                    d.name as district_name, d.state
             FROM mgnrega_data md
             JOIN districts d ON md.district_id = d.id
             WHERE md.district_id = $1 AND md.month = $2 AND md.year = $3
             LIMIT 1",
            &[
                DatabaseValue::Int32(district_id),
                DatabaseValue::Int32(month),
                DatabaseValue::Int32(year),
            ],
        )
        .await?;

    Ok(rows.first().map(|row| {
        let last_updated: NaiveDateTime = row.to_value("last_updated").unwrap_or_default();
        CurrentMetricsRow {
            jobs_provided: row.to_value("jobs_provided").unwrap_or(0),
            wages_paid_percentage: row.to_value("wages_paid_percentage").unwrap_or(0.0),
            pending_payments_crores: row.to_value("pending_payments_crores").unwrap_or(0.0),
            person_days: row.to_value("person_days").unwrap_or(0),
            month: row.to_value("month").unwrap_or(0),
            year: row.to_value("year").unwrap_or(0),
            last_updated: utc_from_naive(last_updated),
            district_name: row.to_value("district_name").unwrap_or_default(),
            state: row.to_value("state").unwrap_or_default(),
        }
    }))
}

/// Fetches up to `limit` metric records for a district, most recent period
/// first.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn metric_history(
    db: &dyn Database,
    district_id: i32,
    limit: u32,
) -> Result<Vec<MetricHistoryRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT jobs_provided, wages_paid_percentage,
                    pending_payments_crores, person_days, month, year
             FROM mgnrega_data
             WHERE district_id = $1
             ORDER BY year DESC, month DESC
             LIMIT $2",
            &[
                DatabaseValue::Int32(district_id),
                DatabaseValue::Int64(i64::from(limit)),
            ],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| MetricHistoryRow {
            jobs_provided: row.to_value("jobs_provided").unwrap_or(0),
            wages_paid_percentage: row.to_value("wages_paid_percentage").unwrap_or(0.0),
            pending_payments_crores: row.to_value("pending_payments_crores").unwrap_or(0.0),
            person_days: row.to_value("person_days").unwrap_or(0),
            month: row.to_value("month").unwrap_or(0),
            year: row.to_value("year").unwrap_or(0),
        })
        .collect())
}

/// Inserts or overwrites a district's metric record for one period and
/// returns the stored row.
///
/// The `(district_id, month, year)` triple is unique; a sync for an
/// existing period replaces the values and refreshes `last_updated`.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or the returned row
/// cannot be converted.
pub async fn upsert_metrics(
    db: &dyn Database,
    district_id: i32,
    month: i32,
    year: i32,
    values: &MetricValues,
) -> Result<MetricRecordRow, DbError> {
    let rows = db
        .query_raw_params(
            "INSERT INTO mgnrega_data (
                district_id, month, year,
                jobs_provided, wages_paid_percentage,
                pending_payments_crores, person_days
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (district_id, month, year)
            DO UPDATE SET
                jobs_provided = EXCLUDED.jobs_provided,
                wages_paid_percentage = EXCLUDED.wages_paid_percentage,
                pending_payments_crores = EXCLUDED.pending_payments_crores,
                person_days = EXCLUDED.person_days,
                last_updated = CURRENT_TIMESTAMP
            RETURNING id, district_id, month, year, jobs_provided,
                      wages_paid_percentage, pending_payments_crores,
                      person_days, last_updated",
            &[
                DatabaseValue::Int32(district_id),
                DatabaseValue::Int32(month),
                DatabaseValue::Int32(year),
                DatabaseValue::Int64(values.jobs_provided),
                DatabaseValue::Real64(values.wages_paid_percentage),
                DatabaseValue::Real64(values.pending_payments_crores),
                DatabaseValue::Int64(values.person_days),
            ],
        )
        .await?;

    let row = rows.first().ok_or_else(|| DbError::Conversion {
        message: "Upsert returned no row".to_string(),
    })?;

    let id: i64 = row.to_value("id").map_err(|e| DbError::Conversion {
        message: format!("Failed to parse record id: {e}"),
    })?;
    let last_updated: NaiveDateTime = row.to_value("last_updated").unwrap_or_default();

    Ok(MetricRecordRow {
        id,
        district_id: row.to_value("district_id").unwrap_or(0),
        month: row.to_value("month").unwrap_or(0),
        year: row.to_value("year").unwrap_or(0),
        jobs_provided: row.to_value("jobs_provided").unwrap_or(0),
        wages_paid_percentage: row.to_value("wages_paid_percentage").unwrap_or(0.0),
        pending_payments_crores: row.to_value("pending_payments_crores").unwrap_or(0.0),
        person_days: row.to_value("person_days").unwrap_or(0),
        last_updated: utc_from_naive(last_updated),
    })
}

/// Fetches the two compared districts with their current-period metrics
/// left-joined, ordered by district ID.
///
/// A district with no record for the period still produces a row; its
/// metric fields are `None`.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn district_pair_current(
    db: &dyn Database,
    district1_id: i32,
    district2_id: i32,
    month: i32,
    year: i32,
) -> Result<Vec<DistrictMetricsRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT d.id, d.name as district_name, d.state,
                    md.jobs_provided, md.wages_paid_percentage,
                    md.pending_payments_crores, md.person_days, md.last_updated
             FROM districts d
             LEFT JOIN mgnrega_data md ON d.id = md.district_id
                 AND md.month = $3 AND md.year = $4
             WHERE d.id IN ($1, $2)
             ORDER BY d.id",
            &[
                DatabaseValue::Int32(district1_id),
                DatabaseValue::Int32(district2_id),
                DatabaseValue::Int32(month),
                DatabaseValue::Int32(year),
            ],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| {
            let last_updated: Option<NaiveDateTime> =
                row.to_value("last_updated").unwrap_or(None);
            DistrictMetricsRow {
                id: row.to_value("id").unwrap_or(0),
                district_name: row.to_value("district_name").unwrap_or_default(),
                state: row.to_value("state").unwrap_or_default(),
                jobs_provided: row.to_value("jobs_provided").unwrap_or(None),
                wages_paid_percentage: row.to_value("wages_paid_percentage").unwrap_or(None),
                pending_payments_crores: row.to_value("pending_payments_crores").unwrap_or(None),
                person_days: row.to_value("person_days").unwrap_or(None),
                last_updated: last_updated.map(utc_from_naive),
            }
        })
        .collect())
}

/// Fetches the combined recent history of two districts, most recent period
/// first, capped at `limit` rows across both.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn pair_history(
    db: &dyn Database,
    district1_id: i32,
    district2_id: i32,
    limit: u32,
) -> Result<Vec<PairHistoryRow>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT d.name as district_name,
                    md.jobs_provided, md.wages_paid_percentage,
                    md.pending_payments_crores, md.person_days,
                    md.month, md.year
             FROM mgnrega_data md
             JOIN districts d ON md.district_id = d.id
             WHERE md.district_id IN ($1, $2)
             ORDER BY md.year DESC, md.month DESC, d.name
             LIMIT $3",
            &[
                DatabaseValue::Int32(district1_id),
                DatabaseValue::Int32(district2_id),
                DatabaseValue::Int64(i64::from(limit)),
            ],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| PairHistoryRow {
            district_name: row.to_value("district_name").unwrap_or_default(),
            jobs_provided: row.to_value("jobs_provided").unwrap_or(0),
            wages_paid_percentage: row.to_value("wages_paid_percentage").unwrap_or(0.0),
            pending_payments_crores: row.to_value("pending_payments_crores").unwrap_or(0.0),
            person_days: row.to_value("person_days").unwrap_or(0),
            month: row.to_value("month").unwrap_or(0),
            year: row.to_value("year").unwrap_or(0),
        })
        .collect())
}

/// Inserts a citizen issue report and returns its ID and submission
/// timestamp.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails or the returned row
/// cannot be converted.
pub async fn insert_issue_report(
    db: &dyn Database,
    report: &NewIssueReport,
) -> Result<(i32, DateTime<Utc>), DbError> {
    let rows = db
        .query_raw_params(
            "INSERT INTO issue_reports (
                district_id, issue_type, description,
                voice_note_url, contact_number
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at",
            &[
                DatabaseValue::Int32(report.district_id),
                DatabaseValue::String(report.issue_type.to_string()),
                report
                    .description
                    .as_ref()
                    .map_or(DatabaseValue::Null, |d| DatabaseValue::String(d.clone())),
                report
                    .voice_note_url
                    .as_ref()
                    .map_or(DatabaseValue::Null, |u| DatabaseValue::String(u.clone())),
                report
                    .contact_number
                    .as_ref()
                    .map_or(DatabaseValue::Null, |c| DatabaseValue::String(c.clone())),
            ],
        )
        .await?;

    let row = rows.first().ok_or_else(|| DbError::Conversion {
        message: "Failed to get report id from insert".to_string(),
    })?;

    let id: i32 = row.to_value("id").map_err(|e| DbError::Conversion {
        message: format!("Failed to parse report id: {e}"),
    })?;
    let created_at: NaiveDateTime = row.to_value("created_at").unwrap_or_default();

    Ok((id, utc_from_naive(created_at)))
}

/// Lists issue reports with a given status, most recent first, optionally
/// restricted to one district.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn issue_reports(
    db: &dyn Database,
    district_id: Option<i32>,
    status: &str,
    limit: u32,
) -> Result<Vec<IssueReportRow>, DbError> {
    let rows = if let Some(district_id) = district_id {
        db.query_raw_params(
            "SELECT ir.id, ir.issue_type, ir.description, ir.contact_number,
                    ir.status, ir.created_at,
                    d.name as district_name, d.state
             FROM issue_reports ir
             JOIN districts d ON ir.district_id = d.id
             WHERE ir.district_id = $1 AND ir.status = $2
             ORDER BY ir.created_at DESC
             LIMIT $3",
            &[
                DatabaseValue::Int32(district_id),
                DatabaseValue::String(status.to_string()),
                DatabaseValue::Int64(i64::from(limit)),
            ],
        )
        .await?
    } else {
        db.query_raw_params(
            "SELECT ir.id, ir.issue_type, ir.description, ir.contact_number,
                    ir.status, ir.created_at,
                    d.name as district_name, d.state
             FROM issue_reports ir
             JOIN districts d ON ir.district_id = d.id
             WHERE ir.status = $1
             ORDER BY ir.created_at DESC
             LIMIT $2",
            &[
                DatabaseValue::String(status.to_string()),
                DatabaseValue::Int64(i64::from(limit)),
            ],
        )
        .await?
    };

    Ok(rows
        .iter()
        .map(|row| {
            let issue_type: String = row.to_value("issue_type").unwrap_or_default();
            let created_at: NaiveDateTime = row.to_value("created_at").unwrap_or_default();
            IssueReportRow {
                id: row.to_value("id").unwrap_or(0),
                issue_type: issue_type.parse::<IssueType>().unwrap_or(IssueType::Other),
                description: row.to_value("description").unwrap_or(None),
                contact_number: row.to_value("contact_number").unwrap_or(None),
                status: row.to_value("status").unwrap_or_default(),
                created_at: utc_from_naive(created_at),
                district_name: row.to_value("district_name").unwrap_or_default(),
                state: row.to_value("state").unwrap_or_default(),
            }
        })
        .collect())
}
