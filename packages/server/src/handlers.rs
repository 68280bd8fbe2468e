//! HTTP handler functions for the location tracker API.
//!
//! Every error is converted to a structured `{"error": ...}` JSON body
//! at this boundary; nothing propagates out of a handler.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use location_tracker_district_models::DistrictSet;
use location_tracker_geometry::contains_point;
use location_tracker_location::classify;
use location_tracker_server_models::{
    AddTestUserRequest, ApiHealth, DebugPointRequest, LocationAccepted, LocationReport,
    StatusMessage,
};

use crate::AppState;

/// Fixed seed coordinates for synthetic test users, spread across the
/// Point Loma area so most land in different districts.
const TEST_LOCATIONS: &[(f64, f64)] = &[
    (32.7157, -117.1611),
    (32.7280, -117.1950),
    (32.7045, -117.1500),
    (32.7200, -117.1700),
    (32.7150, -117.2400),
    (32.7350, -117.1800),
    (32.7100, -117.1900),
];

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/location`
///
/// Accepts a user's position report, classifies it against the current
/// districts, and stores it keyed by username.
pub async fn receive_location(
    state: web::Data<AppState>,
    body: web::Json<LocationReport>,
) -> HttpResponse {
    let (Some(latitude), Some(longitude)) = (body.latitude, body.longitude) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing latitude or longitude"
        }));
    };

    let username = body.username.as_deref().unwrap_or("unknown");
    let timestamp = body.timestamp.unwrap_or_else(Utc::now);

    let districts = state.registry.snapshot();
    let stored = state
        .locations
        .report(username, latitude, longitude, timestamp, &districts);

    log::info!("Received location from {username}: {latitude}, {longitude} in {}", stored.district);

    HttpResponse::Ok().json(LocationAccepted {
        status: "success".to_string(),
        district: stored.district,
    })
}

/// `GET /api/user_districts`
///
/// Returns all stored locations with their classifications, keyed by
/// username.
pub async fn user_districts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.locations.list_all())
}

/// `GET /api/districts`
///
/// Returns the current district definitions document.
pub async fn get_districts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.registry.snapshot())
}

/// `POST /api/districts`
///
/// Replaces the full district document. Validation failure aborts the
/// replacement; after a successful replace every stored location is
/// re-classified, even when persisting the new document failed (memory
/// has already changed, so stale classifications must not survive).
pub async fn update_districts(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Map<String, serde_json::Value>>,
) -> HttpResponse {
    let new_districts = match DistrictSet::from_json_map(&body) {
        Ok(districts) => districts,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let count = new_districts.len();
    let persisted = state.registry.replace_all(new_districts);
    state
        .locations
        .recompute_all(&state.registry.snapshot());

    match persisted {
        Ok(()) => HttpResponse::Ok().json(StatusMessage {
            status: "success".to_string(),
            message: format!("Saved {count} districts to file"),
        }),
        Err(e) => {
            log::error!("Failed to persist replaced districts: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to save districts to file"
            }))
        }
    }
}

/// `POST /api/districts/reset`
///
/// Resets the district document to the built-in defaults and
/// re-classifies every stored location.
pub async fn reset_districts(state: web::Data<AppState>) -> HttpResponse {
    let persisted = state.registry.reset_to_default();
    state
        .locations
        .recompute_all(&state.registry.snapshot());

    match persisted {
        Ok(()) => HttpResponse::Ok().json(StatusMessage {
            status: "success".to_string(),
            message: "Reset to default districts".to_string(),
        }),
        Err(e) => {
            log::error!("Failed to persist default districts: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to save districts to file"
            }))
        }
    }
}

/// `POST /api/debug/point`
///
/// Evaluates one point against every district and reports per-district
/// containment plus the winning classification.
pub async fn debug_point(
    state: web::Data<AppState>,
    body: web::Json<DebugPointRequest>,
) -> HttpResponse {
    let (Some(lat), Some(lng)) = (body.lat, body.lng) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing lat or lng parameters"
        }));
    };

    let districts = state.registry.snapshot();

    let mut all_results = serde_json::Map::new();
    for district in &districts {
        all_results.insert(
            district.name.clone(),
            serde_json::json!({
                "inside": contains_point(&district.polygon, lat, lng),
                "polygon_points": district.polygon.len(),
                "first_point": district.polygon.first(),
                "last_point": district.polygon.last(),
            }),
        );
    }

    HttpResponse::Ok().json(serde_json::json!({
        "point": { "lat": lat, "lng": lng },
        "detected_district": classify(lat, lng, &districts),
        "all_results": all_results,
    }))
}

/// `POST /api/add_test_user`
///
/// Seeds a synthetic user at one of the fixed test coordinates,
/// classified against the current districts. Coordinates rotate with the
/// store size so repeated calls cover the table deterministically.
pub async fn add_test_user(
    state: web::Data<AppState>,
    body: web::Json<AddTestUserRequest>,
) -> HttpResponse {
    let username = match body.username.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("testuser_{}", state.locations.len() + 1),
    };

    let (lat, lng) = TEST_LOCATIONS[state.locations.len() % TEST_LOCATIONS.len()];

    let districts = state.registry.snapshot();
    let stored = state
        .locations
        .report(&username, lat, lng, Utc::now(), &districts);

    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "username": username,
        "location": stored,
    }))
}
