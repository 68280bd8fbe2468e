//! First-match district classification.

use location_tracker_district_models::DistrictSet;
use location_tracker_geometry::contains_point;

/// Sentinel classification for points contained by no district.
pub const OUTSIDE_DISTRICTS: &str = "Outside Districts";

/// Classifies a point against a district set.
///
/// Districts are tested in set order and the first containment hit wins,
/// so overlaps resolve deterministically by insertion order. A polygon
/// that cannot contain anything (fewer than 3 vertices) simply never
/// matches; classification always returns a value.
#[must_use]
pub fn classify(lat: f64, lng: f64, districts: &DistrictSet) -> String {
    for district in districts {
        if contains_point(&district.polygon, lat, lng) {
            log::debug!("Point ({lat}, {lng}) found in district: {}", district.name);
            return district.name.clone();
        }
    }

    log::debug!("Point ({lat}, {lng}) is outside all districts");
    OUTSIDE_DISTRICTS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district_set(value: serde_json::Value) -> DistrictSet {
        match value {
            serde_json::Value::Object(map) => DistrictSet::from_json_map(&map).unwrap(),
            other => panic!("expected JSON object, got {other}"),
        }
    }

    #[test]
    fn first_match_wins_for_overlapping_districts() {
        let districts = district_set(serde_json::json!({
            "A": [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]],
            "B": [[1.0, 1.0], [1.0, 3.0], [3.0, 3.0], [3.0, 1.0]],
        }));

        // (1.5, 1.5) lies in both rectangles; A was registered first.
        assert_eq!(classify(1.5, 1.5, &districts), "A");
        // (2.5, 2.5) lies only in B.
        assert_eq!(classify(2.5, 2.5, &districts), "B");
    }

    #[test]
    fn uncovered_point_gets_the_sentinel() {
        let districts = district_set(serde_json::json!({
            "A": [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]],
        }));
        assert_eq!(classify(10.0, 10.0, &districts), OUTSIDE_DISTRICTS);
    }

    #[test]
    fn empty_set_gets_the_sentinel() {
        assert_eq!(classify(1.0, 1.0, &DistrictSet::default()), OUTSIDE_DISTRICTS);
    }

    #[test]
    fn degenerate_polygon_is_skipped_not_fatal() {
        // A <3-vertex polygon can't come in through from_json_map, but a
        // set built elsewhere may carry one; it must never match and must
        // not stop iteration, so a later district still wins.
        let districts = DistrictSet::from_pairs(&[
            ("degenerate", &[[0.0, 0.0], [1.0, 1.0]]),
            ("valid", &[[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]),
        ]);

        assert_eq!(classify(0.5, 0.5, &districts), "valid");
        assert_eq!(classify(10.0, 10.0, &districts), OUTSIDE_DISTRICTS);
    }
}
