//! Whole-document JSON persistence for the district set.
//!
//! The districts file is one JSON object mapping name to vertex pairs,
//! always read and written in full. Key order in the document is the
//! classification order and survives the round trip.

use std::fs;
use std::path::Path;

use location_tracker_district_models::DistrictSet;

use crate::PersistError;

/// Reads and validates the districts document at `path`.
///
/// # Errors
///
/// Returns [`PersistError`] if the file cannot be read, is not a JSON
/// object, or fails district validation.
pub fn read(path: &Path) -> Result<DistrictSet, PersistError> {
    let contents = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)?;

    Ok(DistrictSet::from_json_map(&document)?)
}

/// Writes the full districts document to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`PersistError`] if the directory or file cannot be written.
pub fn write(path: &Path, districts: &DistrictSet) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    let contents = serde_json::to_string_pretty(districts)?;

    fs::write(path, contents).map_err(|source| PersistError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips_in_order() {
        let tmp = std::env::temp_dir().join("district_store_roundtrip_test");
        let _ = fs::remove_dir_all(&tmp);
        let path = tmp.join("districts.json");

        let map = match serde_json::json!({
            "Outer": [[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]],
            "Inner": [[1.0, 1.0], [1.0, 2.0], [2.0, 2.0]],
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let districts = DistrictSet::from_json_map(&map).unwrap();

        write(&path, &districts).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, districts);

        let names: Vec<&str> = loaded.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Outer", "Inner"]);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("district_store_missing_test/districts.json");
        assert!(matches!(read(&path), Err(PersistError::Io { .. })));
    }

    #[test]
    fn read_malformed_json_is_an_error() {
        let tmp = std::env::temp_dir().join("district_store_malformed_test");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("districts.json");

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read(&path), Err(PersistError::Json(_))));

        fs::write(&path, r#"{"bad": [[0, 0], [1, 1]]}"#).unwrap();
        assert!(matches!(read(&path), Err(PersistError::Invalid(_))));

        let _ = fs::remove_dir_all(&tmp);
    }
}
