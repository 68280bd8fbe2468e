#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the location tracker.
//!
//! Serves the REST API used by the mobile client: location reports,
//! district definitions (read, full replace, reset to defaults), and the
//! point-classification debug endpoint. The district registry and the
//! location store are constructed once at startup and injected into every
//! handler through [`AppState`].

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use location_tracker_district::DistrictRegistry;
use location_tracker_location::LocationStore;

/// Default path of the persisted districts document.
pub const DEFAULT_DISTRICTS_FILE: &str = "data/districts.json";

/// Builds the `/api` route table.
fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health))
        .route("/location", web::post().to(handlers::receive_location))
        .route("/user_districts", web::get().to(handlers::user_districts))
        .route("/districts", web::get().to(handlers::get_districts))
        .route("/districts", web::post().to(handlers::update_districts))
        .route("/districts/reset", web::post().to(handlers::reset_districts))
        .route("/debug/point", web::post().to(handlers::debug_point))
        .route("/add_test_user", web::post().to(handlers::add_test_user))
}

/// Shared application state.
pub struct AppState {
    /// District definitions, the single source of truth for
    /// classification.
    pub registry: Arc<DistrictRegistry>,
    /// Per-user last known locations.
    pub locations: Arc<LocationStore>,
}

/// Starts the location tracker API server.
///
/// Loads the district registry from `DISTRICTS_FILE` (falling back to the
/// built-in defaults), creates an empty location store, and starts the
/// Actix-Web HTTP server. This is a regular async function — the caller
/// is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let districts_file = std::env::var("DISTRICTS_FILE")
        .unwrap_or_else(|_| DEFAULT_DISTRICTS_FILE.to_string());

    log::info!("Loading districts from {districts_file}");
    let registry = Arc::new(DistrictRegistry::load(districts_file));
    let locations = Arc::new(LocationStore::default());

    let state = web::Data::new(AppState {
        registry,
        locations,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(api_scope())
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
