// src/selection/mod.rs

//! The trip request as the submit action collects it, and its validation.
//!
//! - [`request`] holds the raw selections (locations, start / end, pins and
//!   "must go after" choices).
//! - [`validate`] turns a request into a [`ValidatedTrip`] with dense
//!   indices for the planner, or rejects it without side effects.

pub mod request;
pub mod validate;

pub use request::{LocationChoice, PrecedenceChoice, TripRequest};
pub use validate::{SelectionLimits, ValidatedTrip, DEFAULT_MAX_LOCATIONS};
