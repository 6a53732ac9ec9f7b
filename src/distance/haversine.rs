// src/distance/haversine.rs

use crate::errors::{Result, TripdagError};
use crate::types::{Coordinate, Stop};

use super::{DistanceSource, Leg};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Straight-line (great-circle) estimate with a constant average speed.
#[derive(Debug, Clone, Copy)]
pub struct HaversineSource {
    average_speed_kmh: f64,
}

impl HaversineSource {
    pub fn new(average_speed_kmh: f64) -> Self {
        Self { average_speed_kmh }
    }
}

/// Great-circle distance in metres.
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

impl DistanceSource for HaversineSource {
    fn measure(&self, from: &Stop, to: &Stop) -> Result<Leg> {
        let (a, b) = match (from.coordinate, to.coordinate) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => return Err(missing_coordinate(&from.id)),
            (_, None) => return Err(missing_coordinate(&to.id)),
        };

        let metres = haversine_m(a, b);
        let speed_ms = self.average_speed_kmh / 3.6;
        Ok(Leg {
            distance_m: metres.round() as u64,
            duration_s: (metres / speed_ms).round() as u64,
        })
    }
}

fn missing_coordinate(id: &str) -> TripdagError {
    TripdagError::ConfigError(format!(
        "location '{}' has no coordinate and no explicit leg",
        id
    ))
}
