//! Built-in default district set for the Point Loma area.
//!
//! Used when no districts file exists yet, when the persisted document is
//! malformed, and by the reset operation. Each entry is a `(name,
//! vertices)` pair; adding a district means adding a row here.

use location_tracker_district_models::DistrictSet;
use location_tracker_geometry::Vertex;

/// Number of built-in districts. Enforced by a test.
#[cfg(test)]
const EXPECTED_DEFAULT_COUNT: usize = 4;

/// Default polygon districts, in classification order.
const DEFAULT_DISTRICTS: &[(&str, &[Vertex])] = &[
    (
        "Point Loma Naval Base",
        &[
            [32.6967, -117.2186],
            [32.6967, -117.2050],
            [32.6850, -117.2050],
            [32.6850, -117.2186],
        ],
    ),
    (
        "Sunset Cliffs",
        &[
            [32.7150, -117.2550],
            [32.7150, -117.2350],
            [32.7050, -117.2350],
            [32.7050, -117.2550],
        ],
    ),
    (
        "Liberty Station",
        &[
            [32.7350, -117.2150],
            [32.7350, -117.1950],
            [32.7250, -117.1950],
            [32.7250, -117.2150],
        ],
    ),
    (
        "Point Loma Village",
        &[
            [32.7450, -117.2350],
            [32.7450, -117.2150],
            [32.7350, -117.2150],
            [32.7350, -117.2350],
        ],
    ),
];

/// Returns the built-in default district set.
#[must_use]
pub fn default_districts() -> DistrictSet {
    DistrictSet::from_pairs(DEFAULT_DISTRICTS)
}
