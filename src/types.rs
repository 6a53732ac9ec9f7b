// src/types.rs

use serde::Deserialize;

/// Identifier of a location as written in the trip file (`[location.<id>]`).
pub type LocationId = String;

/// How leg distances and durations are obtained.
///
/// - `Table`: only the `[[leg]]` entries of the trip file; a missing pair is
///   an error.
/// - `Haversine`: great-circle estimate from coordinates, ignoring legs.
/// - `Mixed`: `[[leg]]` entries first, falling back to the estimate for
///   pairs that are not listed (default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    Table,
    Haversine,
    Mixed,
}

impl Default for DistanceMode {
    fn default() -> Self {
        DistanceMode::Mixed
    }
}

/// Latitude / longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

/// A location as seen by distance sources: its id plus optional position.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: LocationId,
    pub coordinate: Option<Coordinate>,
}
