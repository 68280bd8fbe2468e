#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the location tracker server.
//!
//! These types are serialized to JSON for the REST API consumed by the
//! mobile client and the dashboard. Field names are snake_case to match
//! the established wire contract. Required-but-missing fields are modeled
//! as `Option` and rejected in the handlers, so a bad report is a 400,
//! never a deserialization 500.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A location report submitted by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationReport {
    /// Reporting username; defaults to `"unknown"` when omitted.
    pub username: Option<String>,
    /// Reported latitude. Required; enforced by the handler.
    pub latitude: Option<f64>,
    /// Reported longitude. Required; enforced by the handler.
    pub longitude: Option<f64>,
    /// Client-side report time; defaults to the server clock.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Successful response to a location report.
#[derive(Debug, Clone, Serialize)]
pub struct LocationAccepted {
    /// Always `"success"`.
    pub status: String,
    /// District the reported position classified into.
    pub district: String,
}

/// Successful response to a district mutation (replace or reset).
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    /// Always `"success"`.
    pub status: String,
    /// Human-readable outcome description.
    pub message: String,
}

/// Request body for the point-classification debug endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugPointRequest {
    /// Query latitude. Required; enforced by the handler.
    pub lat: Option<f64>,
    /// Query longitude. Required; enforced by the handler.
    pub lng: Option<f64>,
}

/// Request body for seeding a synthetic test user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTestUserRequest {
    /// Username for the test user; generated when omitted or empty.
    pub username: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
