//! Nearest-district resolution for GPS coordinates.
//!
//! Distance is planar Euclidean over raw coordinate degrees, not geodesic.
//! The reference set spans a single state, so the approximation holds; a
//! multi-state deployment would need a haversine-based resolver.

use mgnrega_pulse_geography_models::{District, NearestDistrict};

/// Resolves a query point to the closest district in the reference set.
///
/// Scans `districts` in order and keeps the first strictly-smaller
/// distance, so ties resolve to the earliest entry. Returns `None` when the
/// reference set is empty.
#[must_use]
pub fn nearest_district(
    districts: &[District],
    latitude: f64,
    longitude: f64,
) -> Option<NearestDistrict> {
    let mut best: Option<(f64, &District)> = None;

    for district in districts {
        let distance = planar_distance(
            district.latitude,
            district.longitude,
            latitude,
            longitude,
        );
        match best {
            None => best = Some((distance, district)),
            Some((best_distance, _)) if distance < best_distance => {
                best = Some((distance, district));
            }
            _ => {}
        }
    }

    best.map(|(distance, district)| NearestDistrict {
        district: district.clone(),
        distance,
    })
}

fn planar_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    ((lat_a - lat_b).powi(2) + (lon_a - lon_b).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(id: i32, name: &str, latitude: f64, longitude: f64) -> District {
        District {
            id,
            name: name.to_string(),
            state: "Chhattisgarh".to_string(),
            district_code: format!("CG-{id:02}"),
            latitude,
            longitude,
        }
    }

    #[test]
    fn empty_reference_set_resolves_to_none() {
        assert_eq!(nearest_district(&[], 21.25, 81.63), None);
    }

    #[test]
    fn exact_coordinate_match_has_distance_zero() {
        let districts = vec![
            district(1, "Raipur", 21.2514, 81.6296),
            district(2, "Bilaspur", 22.0797, 82.1409),
        ];

        let nearest = nearest_district(&districts, 21.2514, 81.6296).unwrap();
        assert_eq!(nearest.district.name, "Raipur");
        assert_eq!(nearest.distance, 0.0);
    }

    #[test]
    fn picks_the_closer_of_two_districts() {
        let districts = vec![
            district(1, "Raipur", 21.2514, 81.6296),
            district(2, "Durg", 21.1904, 81.2849),
        ];

        // Just west of Durg.
        let nearest = nearest_district(&districts, 21.19, 81.20).unwrap();
        assert_eq!(nearest.district.name, "Durg");
        assert!(nearest.distance < 0.1);
    }

    #[test]
    fn equidistant_points_resolve_to_the_first_entry() {
        let districts = vec![
            district(1, "West", 21.0, 80.0),
            district(2, "East", 21.0, 82.0),
        ];

        let nearest = nearest_district(&districts, 21.0, 81.0).unwrap();
        assert_eq!(nearest.district.id, 1);
    }
}
