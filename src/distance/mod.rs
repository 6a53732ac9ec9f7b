// src/distance/mod.rs

//! Leg measurement between locations.
//!
//! The planner only sees cost matrices. Where the numbers come from is
//! decided by a [`DistanceSource`]:
//!
//! - [`TableSource`] reads the explicit `[[leg]]` entries of a trip file and
//!   can fall back to another source for pairs it does not know.
//! - [`HaversineSource`] estimates legs from coordinates and an average
//!   speed.
//!
//! Tests can plug in their own source without touching the planner.

pub mod haversine;
pub mod table;

use tracing::debug;

use crate::errors::Result;
use crate::planner::{CostMatrix, DurationMatrix};
use crate::types::Stop;

pub use haversine::HaversineSource;
pub use table::TableSource;

/// Distance and travel time of one directed leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Leg {
    pub distance_m: u64,
    pub duration_s: u64,
}

/// Trait abstracting how a leg between two stops is measured.
pub trait DistanceSource {
    fn measure(&self, from: &Stop, to: &Stop) -> Result<Leg>;
}

impl<T: DistanceSource + ?Sized> DistanceSource for Box<T> {
    fn measure(&self, from: &Stop, to: &Stop) -> Result<Leg> {
        (**self).measure(from, to)
    }
}

/// Measure every ordered pair of `stops` and return the distance and
/// duration matrices, indexed like `stops`.
///
/// The diagonal stays zero and is never queried.
pub fn build_matrices<S>(source: &S, stops: &[Stop]) -> Result<(CostMatrix, DurationMatrix)>
where
    S: DistanceSource + ?Sized,
{
    let n = stops.len();
    let mut distances = CostMatrix::new(n);
    let mut durations = DurationMatrix::new(n);

    for (i, from) in stops.iter().enumerate() {
        for (j, to) in stops.iter().enumerate() {
            if i == j {
                continue;
            }
            let leg = source.measure(from, to)?;
            distances.set(i, j, leg.distance_m);
            durations.set(i, j, leg.duration_s);
        }
    }

    debug!(stops = n, "built distance and duration matrices");
    Ok((distances, durations))
}
