#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District boundary types and wire-format validation.
//!
//! The wire and persistence format is a single JSON object mapping
//! district name to an ordered array of `[latitude, longitude]` pairs.
//! Object key order is significant: it is the classification order, so
//! the document is parsed and emitted with `serde_json`'s order-preserving
//! map. [`DistrictSet::from_json_map`] is the explicit parse step that
//! turns untyped input into typed districts (or a [`ValidationError`])
//! before the core ever sees the data.

use location_tracker_geometry::Vertex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// An ordered, implicitly closed polygon boundary.
pub type Polygon = Vec<Vertex>;

/// Errors produced when a district document fails validation.
///
/// Validation is all-or-nothing: the first failure aborts the whole
/// replacement and names the offending district.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The district's value is not an array of at least 3 points.
    #[error("Invalid polygon for district {name}")]
    InvalidPolygon {
        /// Name of the offending district.
        name: String,
    },

    /// A point is not a 2-element array of numbers.
    #[error("Invalid point in district {name}")]
    InvalidPoint {
        /// Name of the offending district.
        name: String,
        /// Index of the offending point within the polygon.
        index: usize,
    },
}

/// A named district with its polygon boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// Unique district name, used as the map key on the wire.
    pub name: String,
    /// Boundary polygon as `[latitude, longitude]` vertices.
    pub polygon: Polygon,
}

/// An ordered set of districts with unique names.
///
/// Iteration order is the document/insertion order and determines
/// first-match classification, so it is preserved end to end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistrictSet {
    districts: Vec<District>,
}

impl DistrictSet {
    /// Parses and validates a raw JSON object into a typed district set.
    ///
    /// Each value must be an array of at least 3 points, and each point
    /// must be exactly a 2-element array of numbers. Name uniqueness is
    /// guaranteed by the JSON object's map semantics.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first offending district;
    /// no partial set is produced.
    pub fn from_json_map(
        map: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, ValidationError> {
        let mut districts = Vec::with_capacity(map.len());

        for (name, value) in map {
            let points = value
                .as_array()
                .filter(|points| points.len() >= 3)
                .ok_or_else(|| ValidationError::InvalidPolygon { name: name.clone() })?;

            let mut polygon = Vec::with_capacity(points.len());
            for (index, point) in points.iter().enumerate() {
                let pair = point
                    .as_array()
                    .filter(|pair| pair.len() == 2)
                    .and_then(|pair| Some([pair[0].as_f64()?, pair[1].as_f64()?]))
                    .ok_or_else(|| ValidationError::InvalidPoint {
                        name: name.clone(),
                        index,
                    })?;
                polygon.push(pair);
            }

            districts.push(District {
                name: name.clone(),
                polygon,
            });
        }

        Ok(Self { districts })
    }

    /// Builds a set from a static table of `(name, vertices)` pairs.
    ///
    /// Used for the compile-time default district table, which is trusted
    /// to satisfy the polygon invariants.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &[Vertex])]) -> Self {
        let districts = pairs
            .iter()
            .map(|(name, polygon)| District {
                name: (*name).to_string(),
                polygon: polygon.to_vec(),
            })
            .collect();
        Self { districts }
    }

    /// Iterates districts in classification order.
    pub fn iter(&self) -> std::slice::Iter<'_, District> {
        self.districts.iter()
    }

    /// Looks up a district's polygon by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Polygon> {
        self.districts
            .iter()
            .find(|district| district.name == name)
            .map(|district| &district.polygon)
    }

    /// Number of districts in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    /// Whether the set contains no districts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

impl<'a> IntoIterator for &'a DistrictSet {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter {
        self.districts.iter()
    }
}

/// Serializes as the wire-format JSON object, keys in set order.
impl Serialize for DistrictSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.districts.len()))?;
        for district in &self.districts {
            map.serialize_entry(&district.name, &district.polygon)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected JSON object, got {other}"),
        }
    }

    #[test]
    fn parses_valid_document() {
        let map = json_map(serde_json::json!({
            "A": [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]],
            "B": [[10, 10], [10, 12], [12, 12]],
        }));
        let set = DistrictSet::from_json_map(&map).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("A").unwrap().len(), 4);
        assert_eq!(set.get("B").unwrap(), &vec![[10.0, 10.0], [10.0, 12.0], [12.0, 12.0]]);
    }

    #[test]
    fn preserves_document_order() {
        let map = json_map(serde_json::json!({
            "zebra": [[0, 0], [0, 1], [1, 1]],
            "alpha": [[5, 5], [5, 6], [6, 6]],
        }));
        let set = DistrictSet::from_json_map(&map).unwrap();
        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["zebra", "alpha"]);
    }

    #[test]
    fn rejects_polygon_with_two_points() {
        let map = json_map(serde_json::json!({
            "bad": [[0, 0], [1, 1]],
        }));
        assert_eq!(
            DistrictSet::from_json_map(&map),
            Err(ValidationError::InvalidPolygon {
                name: "bad".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_array_polygon() {
        let map = json_map(serde_json::json!({ "bad": "not a polygon" }));
        assert_eq!(
            DistrictSet::from_json_map(&map),
            Err(ValidationError::InvalidPolygon {
                name: "bad".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let map = json_map(serde_json::json!({
            "bad": [[0, 0], [0, "x"], [1, 1]],
        }));
        assert_eq!(
            DistrictSet::from_json_map(&map),
            Err(ValidationError::InvalidPoint {
                name: "bad".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn rejects_point_that_is_not_a_pair() {
        let map = json_map(serde_json::json!({
            "bad": [[0, 0], [0, 1, 2], [1, 1]],
        }));
        assert_eq!(
            DistrictSet::from_json_map(&map),
            Err(ValidationError::InvalidPoint {
                name: "bad".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn serializes_back_to_the_same_document() {
        let doc = serde_json::json!({
            "A": [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0]],
            "B": [[10.0, 10.0], [10.0, 12.0], [12.0, 12.0]],
        });
        let set = DistrictSet::from_json_map(&json_map(doc.clone())).unwrap();
        assert_eq!(serde_json::to_value(&set).unwrap(), doc);
    }
}
