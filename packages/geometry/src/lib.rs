#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Point-in-polygon containment test for district boundaries.
//!
//! Districts are defined by small hand-drawn polygons, so an exhaustive
//! edge scan per query is fine; no spatial index is needed. Containment
//! uses the even-odd ray casting rule: a horizontal ray is cast from the
//! query point toward +∞ longitude and the number of edge crossings is
//! counted. An odd count means the point is inside.

/// A polygon vertex as `[latitude, longitude]`.
pub type Vertex = [f64; 2];

/// Returns whether a point lies inside a polygon.
///
/// The polygon is an ordered vertex list and is implicitly closed: the
/// last vertex connects back to the first. Polygons with fewer than 3
/// vertices contain nothing. Self-intersecting polygons are accepted and
/// resolve per the even-odd rule. Behavior for points exactly on an edge
/// or vertex is implementation-defined but always terminates.
#[must_use]
pub fn contains_point(polygon: &[Vertex], lat: f64, lng: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (y, x) = (lat, lng);
    let mut inside = false;

    // Walk every edge, including the closing edge from last to first.
    // An edge straddles the query latitude iff exactly one endpoint is
    // above it; horizontal edges never straddle, so the intersection
    // division below cannot divide by zero.
    let mut prev = polygon[polygon.len() - 1];
    for &vertex in polygon {
        let [yi, xi] = vertex;
        let [yj, xj] = prev;

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }

        prev = vertex;
    }

    inside
}
