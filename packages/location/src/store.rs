//! Per-user last-known-location store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use location_tracker_district_models::DistrictSet;
use serde::{Deserialize, Serialize};

use crate::classify::classify;

/// A user's last reported position with its cached classification.
///
/// The cached `district` is not authoritative: it is computed fresh on
/// every report and recomputed after every registry mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    /// Last reported latitude.
    pub latitude: f64,
    /// Last reported longitude.
    pub longitude: f64,
    /// When the position was reported (RFC 3339).
    pub timestamp: DateTime<Utc>,
    /// District name the position classified into, or the sentinel.
    pub district: String,
}

/// Process-wide store of user locations, keyed by username.
///
/// Constructed once at startup and handed to every request handler.
/// Repeated reports for the same username overwrite; there is no
/// deletion path.
#[derive(Debug, Default)]
pub struct LocationStore {
    locations: RwLock<BTreeMap<String, UserLocation>>,
}

impl LocationStore {
    /// Classifies a reported position and stores it, overwriting any
    /// previous entry for the username. Returns the stored record.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn report(
        &self,
        username: &str,
        latitude: f64,
        longitude: f64,
        timestamp: DateTime<Utc>,
        districts: &DistrictSet,
    ) -> UserLocation {
        let location = UserLocation {
            latitude,
            longitude,
            timestamp,
            district: classify(latitude, longitude, districts),
        };

        self.locations
            .write()
            .expect("location store lock poisoned")
            .insert(username.to_string(), location.clone());

        location
    }

    /// Returns a read-consistent snapshot of all stored locations.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn list_all(&self) -> BTreeMap<String, UserLocation> {
        self.locations
            .read()
            .expect("location store lock poisoned")
            .clone()
    }

    /// Re-classifies every stored location against `districts` in place.
    ///
    /// Runs under the store's write lock, so concurrent reports never
    /// observe a partially recomputed store. Must be called after every
    /// registry mutation; idempotent for a fixed district set.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn recompute_all(&self, districts: &DistrictSet) {
        let mut locations = self
            .locations
            .write()
            .expect("location store lock poisoned");

        for location in locations.values_mut() {
            location.district = classify(location.latitude, location.longitude, districts);
        }

        log::info!(
            "Recomputed districts for {} stored locations",
            locations.len()
        );
    }

    /// Number of stored locations.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations
            .read()
            .expect("location store lock poisoned")
            .len()
    }

    /// Whether the store holds no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
