// src/config/mod.rs

//! Trip file loading and validation for tripdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a trip file from disk (`loader.rs`).
//! - Validate references and settings (`validate.rs`).
//!
//! Precedence cycles are *not* rejected here. They are a user-correctable
//! condition of the request and are reported by
//! [`TripRequest::validate`](crate::selection::TripRequest::validate).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{LegConfig, LocationConfig, RawTripFile, SettingsSection, TripFile, TripSection};
