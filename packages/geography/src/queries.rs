//! Database queries for district reference data.

use mgnrega_pulse_geography_models::District;
use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue};

use crate::GeoError;

fn district_from_row(row: &switchy_database::Row) -> District {
    District {
        id: row.to_value("id").unwrap_or(0),
        name: row.to_value("name").unwrap_or_default(),
        state: row.to_value("state").unwrap_or_default(),
        district_code: row.to_value("district_code").unwrap_or_default(),
        latitude: row.to_value("latitude").unwrap_or(0.0),
        longitude: row.to_value("longitude").unwrap_or(0.0),
    }
}

/// Returns all districts in a state, ordered by name ascending.
///
/// # Errors
///
/// Returns [`GeoError`] if the database operation fails.
pub async fn districts_by_state(
    db: &dyn Database,
    state: &str,
) -> Result<Vec<District>, GeoError> {
    let rows = db
        .query_raw_params(
            "SELECT id, name, state, district_code, latitude, longitude
             FROM districts
             WHERE state = $1
             ORDER BY name ASC",
            &[DatabaseValue::String(state.to_string())],
        )
        .await?;

    Ok(rows.iter().map(district_from_row).collect())
}

/// Returns the full district reference set, in primary-key order.
///
/// Primary-key order is the set's natural ordering; [`crate::locate`]
/// relies on it for deterministic tie-breaking.
///
/// # Errors
///
/// Returns [`GeoError`] if the database operation fails.
pub async fn all_districts(db: &dyn Database) -> Result<Vec<District>, GeoError> {
    let rows = db
        .query_raw_params(
            "SELECT id, name, state, district_code, latitude, longitude
             FROM districts
             ORDER BY id",
            &[],
        )
        .await?;

    Ok(rows.iter().map(district_from_row).collect())
}
