// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::distance::{DistanceSource, HaversineSource, Leg, TableSource};
use crate::selection::{LocationChoice, PrecedenceChoice, SelectionLimits, TripRequest, ValidatedTrip};
use crate::types::{Coordinate, DistanceMode, LocationId, Stop};

/// Top-level trip file as read from TOML.
///
/// ```toml
/// [settings]
/// max_locations = 8
/// average_speed_kmh = 25.0
/// distance = "mixed"
///
/// [trip]
/// name = "Old quarter walk"
/// start = "ben-thanh"
///
/// [location.ben-thanh]
/// name = "Ben Thanh Market"
/// coordinate = [10.7725, 106.6980]
///
/// [location.post-office]
/// coordinate = [10.7799, 106.6999]
/// after = "ben-thanh"
///
/// [[leg]]
/// from = "ben-thanh"
/// to = "post-office"
/// distance_m = 1400
/// duration_s = 420
/// ```
///
/// All sections are optional and have reasonable defaults; validation then
/// requires at least one location.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTripFile {
    #[serde(default)]
    pub settings: SettingsSection,

    #[serde(default)]
    pub trip: TripSection,

    /// All locations from `[location.<id>]`, keyed by id.
    #[serde(default)]
    pub location: BTreeMap<LocationId, LocationConfig>,

    /// Explicit directed legs from `[[leg]]`.
    #[serde(default)]
    pub leg: Vec<LegConfig>,
}

/// A trip file that passed [`validate`](crate::config::validate).
///
/// Only constructible via `TryFrom<RawTripFile>`.
#[derive(Debug, Clone)]
pub struct TripFile {
    pub settings: SettingsSection,
    pub trip: TripSection,
    pub location: BTreeMap<LocationId, LocationConfig>,
    pub leg: Vec<LegConfig>,
}

/// `[settings]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsSection {
    /// Upper bound on selected locations (the web UI uses 8).
    #[serde(default = "default_max_locations")]
    pub max_locations: usize,

    /// Speed used to estimate durations from straight-line distance.
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,

    #[serde(default)]
    pub distance: DistanceMode,
}

fn default_max_locations() -> usize {
    crate::selection::DEFAULT_MAX_LOCATIONS
}

fn default_average_speed_kmh() -> f64 {
    25.0
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            max_locations: default_max_locations(),
            average_speed_kmh: default_average_speed_kmh(),
            distance: DistanceMode::default(),
        }
    }
}

/// `[trip]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TripSection {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub start: Option<LocationId>,

    #[serde(default)]
    pub end: Option<LocationId>,
}

/// `[location.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Display name; the id is used when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// `[lat, lon]` in decimal degrees.
    #[serde(default)]
    pub coordinate: Option<Coordinate>,

    /// Unselected locations stay in the file but take no part in the trip.
    #[serde(default = "default_selected")]
    pub selected: bool,

    /// "Must go after" choice: the id of the predecessor.
    #[serde(default)]
    pub after: Option<LocationId>,

    /// A disabled choice is kept in the file but never submitted.
    #[serde(default)]
    pub after_disabled: bool,

    /// 1-based visiting slot.
    #[serde(default)]
    pub pinned: Option<usize>,
}

fn default_selected() -> bool {
    true
}

/// `[[leg]]` entry: measured distance and duration of one directed leg.
#[derive(Debug, Clone, Deserialize)]
pub struct LegConfig {
    pub from: LocationId,
    pub to: LocationId,
    pub distance_m: u64,
    pub duration_s: u64,
}

impl TripFile {
    pub(crate) fn new_unchecked(raw: RawTripFile) -> Self {
        Self {
            settings: raw.settings,
            trip: raw.trip,
            location: raw.location,
            leg: raw.leg,
        }
    }

    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits {
            max_locations: self.settings.max_locations,
        }
    }

    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.location
            .get(id)
            .and_then(|l| l.name.as_deref())
            .unwrap_or(id)
    }

    /// Build the request the submit action would send for this file.
    ///
    /// Selection order follows the file's key order.
    pub fn to_request(&self) -> TripRequest {
        let mut request = TripRequest::new(self.trip.name.clone());
        request.start = self.trip.start.clone();
        request.end = self.trip.end.clone();

        for (id, loc) in self.location.iter() {
            if loc.selected {
                request.selected.push(id.clone());
            }
            request.choices.insert(
                id.clone(),
                LocationChoice {
                    pinned: loc.pinned,
                    precedence: PrecedenceChoice {
                        after: loc.after.clone(),
                        disabled: loc.after_disabled,
                    },
                },
            );
        }

        request
    }

    /// Stops for the validated trip, in planner index order.
    pub fn stops(&self, trip: &ValidatedTrip) -> Vec<Stop> {
        trip.locations
            .iter()
            .map(|id| Stop {
                id: id.clone(),
                coordinate: self.location.get(id).and_then(|l| l.coordinate),
            })
            .collect()
    }

    /// Distance source matching `[settings].distance`.
    pub fn distance_source(&self) -> Box<dyn DistanceSource> {
        let estimate = HaversineSource::new(self.settings.average_speed_kmh);
        match self.settings.distance {
            DistanceMode::Haversine => Box::new(estimate),
            DistanceMode::Table => Box::new(self.leg_table()),
            DistanceMode::Mixed => Box::new(self.leg_table().with_fallback(Box::new(estimate))),
        }
    }

    fn leg_table(&self) -> TableSource {
        let mut table = TableSource::new();
        for leg in &self.leg {
            table.insert(
                leg.from.clone(),
                leg.to.clone(),
                Leg {
                    distance_m: leg.distance_m,
                    duration_s: leg.duration_s,
                },
            );
        }
        table
    }
}
