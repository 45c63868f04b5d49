#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District reference data types.
//!
//! Districts are immutable reference rows seeded by migration; nothing in
//! the service mutates them. JSON field names match the storage columns
//! exactly (`district_code`, not `districtCode`) because the wire format
//! exposes rows as-is.

use serde::{Deserialize, Serialize};

/// An administrative district as stored in the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    /// Primary key.
    pub id: i32,
    /// District name (e.g. "Raipur").
    pub name: String,
    /// State the district belongs to.
    pub state: String,
    /// Short administrative code (e.g. "CG-RPR").
    pub district_code: String,
    /// Headquarters latitude (WGS84).
    pub latitude: f64,
    /// Headquarters longitude (WGS84).
    pub longitude: f64,
}

/// A district resolved from a query point, with the planar distance that
/// ranked it first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestDistrict {
    /// The winning district, inlined into the JSON object.
    #[serde(flatten)]
    pub district: District,
    /// Planar (Euclidean) distance in coordinate degrees.
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_district_flattens_into_one_object() {
        let nearest = NearestDistrict {
            district: District {
                id: 7,
                name: "Bilaspur".to_string(),
                state: "Chhattisgarh".to_string(),
                district_code: "CG-BSP".to_string(),
                latitude: 22.0797,
                longitude: 82.1409,
            },
            distance: 0.25,
        };

        let json = serde_json::to_value(&nearest).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["district_code"], "CG-BSP");
        assert_eq!(json["distance"], 0.25);
        assert!(json.get("district").is_none());
    }
}
