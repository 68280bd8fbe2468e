#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location classification and the per-user location store.
//!
//! [`classify`] resolves a coordinate to a district name by first match
//! over the registry's district order, falling back to the
//! [`OUTSIDE_DISTRICTS`] sentinel. [`LocationStore`] keeps each user's
//! last reported position with its cached classification and recomputes
//! every cached value whenever the district registry changes.

mod classify;
mod store;

pub use classify::{OUTSIDE_DISTRICTS, classify};
pub use store::{LocationStore, UserLocation};
