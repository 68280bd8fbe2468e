#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District registry: the single source of truth for classification.
//!
//! Owns the current name-to-polygon mapping behind a read/write lock.
//! The mapping mutates as a whole (full replace or reset to the built-in
//! defaults) and every successful mutation is persisted as one JSON
//! document. Loading degrades to the defaults when the persisted document
//! is missing or malformed, so startup never fails on bad data.

pub mod defaults;
pub mod store;

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use location_tracker_district_models::{DistrictSet, ValidationError};
use thiserror::Error;

/// Errors from reading or writing the persisted districts document.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem access failed.
    #[error("Failed to access districts file {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Invalid districts document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed as JSON but failed district validation.
    #[error("Invalid districts document: {0}")]
    Invalid(#[from] ValidationError),
}

/// Process-wide registry of district definitions.
///
/// Constructed once at startup and handed to every request handler.
/// Readers take point-in-time snapshots; writers replace the whole
/// mapping, so no reader ever observes a mid-mutation state.
pub struct DistrictRegistry {
    districts: RwLock<DistrictSet>,
    path: PathBuf,
}

impl DistrictRegistry {
    /// Loads the registry from the districts document at `path`.
    ///
    /// A missing or malformed document degrades to the built-in default
    /// set with a logged warning; this never fails.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let districts = match store::read(&path) {
            Ok(districts) => {
                log::info!(
                    "Loaded {} districts from {}",
                    districts.len(),
                    path.display()
                );
                districts
            }
            Err(PersistError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::info!("No districts file at {}, using defaults", path.display());
                defaults::default_districts()
            }
            Err(e) => {
                log::warn!(
                    "Failed to load districts from {}: {e}. Using defaults",
                    path.display()
                );
                defaults::default_districts()
            }
        };

        Self {
            districts: RwLock::new(districts),
            path,
        }
    }

    /// Returns a point-in-time snapshot of the current mapping.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> DistrictSet {
        self.districts
            .read()
            .expect("district registry lock poisoned")
            .clone()
    }

    /// Replaces the entire mapping with an already-validated set and
    /// persists it.
    ///
    /// The in-memory mapping is committed before the write; a failed
    /// write leaves memory on the new mapping and reports the failure to
    /// the caller, who must still treat the registry as changed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the document cannot be written.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    pub fn replace_all(&self, new_districts: DistrictSet) -> Result<(), PersistError> {
        let mut districts = self
            .districts
            .write()
            .expect("district registry lock poisoned");
        *districts = new_districts;

        match store::write(&self.path, &districts) {
            Ok(()) => {
                log::info!(
                    "Saved {} districts to {}",
                    districts.len(),
                    self.path.display()
                );
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save districts to {}: {e}", self.path.display());
                Err(e)
            }
        }
    }

    /// Resets the mapping to the built-in default set and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the document cannot be written; the
    /// in-memory mapping is reset regardless.
    pub fn reset_to_default(&self) -> Result<(), PersistError> {
        log::info!("Resetting districts to defaults");
        self.replace_all(defaults::default_districts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn district_set(value: serde_json::Value) -> DistrictSet {
        match value {
            serde_json::Value::Object(map) => DistrictSet::from_json_map(&map).unwrap(),
            other => panic!("expected JSON object, got {other}"),
        }
    }

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = std::env::temp_dir().join("district_registry_missing_test");
        let _ = fs::remove_dir_all(&tmp);

        let registry = DistrictRegistry::load(tmp.join("districts.json"));
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), defaults::default_districts().len());
        assert!(snapshot.get("Sunset Cliffs").is_some());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let tmp = std::env::temp_dir().join("district_registry_malformed_test");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("districts.json");
        fs::write(&path, "not json at all").unwrap();

        let registry = DistrictRegistry::load(&path);
        assert_eq!(registry.snapshot(), defaults::default_districts());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn replace_all_commits_and_persists() {
        let tmp = std::env::temp_dir().join("district_registry_replace_test");
        let _ = fs::remove_dir_all(&tmp);
        let path = tmp.join("districts.json");

        let registry = DistrictRegistry::load(&path);
        let replacement = district_set(serde_json::json!({
            "B": [[10.0, 10.0], [10.0, 12.0], [12.0, 12.0], [12.0, 10.0]],
        }));

        registry.replace_all(replacement.clone()).unwrap();
        assert_eq!(registry.snapshot(), replacement);

        // A fresh registry sees the persisted document, not the defaults.
        let reloaded = DistrictRegistry::load(&path);
        assert_eq!(reloaded.snapshot(), replacement);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn reset_restores_default_names() {
        let tmp = std::env::temp_dir().join("district_registry_reset_test");
        let _ = fs::remove_dir_all(&tmp);
        let path = tmp.join("districts.json");

        let registry = DistrictRegistry::load(&path);
        registry
            .replace_all(district_set(serde_json::json!({
                "Custom": [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
            })))
            .unwrap();

        registry.reset_to_default().unwrap();
        assert_eq!(registry.snapshot(), defaults::default_districts());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn failed_validation_never_reaches_the_registry() {
        // Validation happens in DistrictSet::from_json_map before
        // replace_all is ever called; a failed parse leaves the
        // snapshot untouched.
        let tmp = std::env::temp_dir().join("district_registry_validation_test");
        let _ = fs::remove_dir_all(&tmp);

        let registry = DistrictRegistry::load(tmp.join("districts.json"));
        let before = registry.snapshot();

        let bad = serde_json::json!({ "bad": [[0, 0], [1, 1]] });
        let serde_json::Value::Object(map) = bad else {
            unreachable!()
        };
        assert!(DistrictSet::from_json_map(&map).is_err());
        assert_eq!(registry.snapshot(), before);
    }
}
