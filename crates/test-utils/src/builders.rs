#![allow(dead_code)]

use std::collections::BTreeMap;

use tripdag::config::{LegConfig, LocationConfig, RawTripFile, SettingsSection, TripFile, TripSection};
use tripdag::selection::{LocationChoice, PrecedenceChoice, TripRequest};
use tripdag::types::{Coordinate, DistanceMode};

/// Builder for `TripRequest` to simplify test setup.
pub struct TripRequestBuilder {
    request: TripRequest,
}

impl TripRequestBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            request: TripRequest::new(name),
        }
    }

    /// Select the given locations, in order.
    pub fn select(mut self, ids: &[&str]) -> Self {
        self.request
            .selected
            .extend(ids.iter().map(|s| s.to_string()));
        self
    }

    pub fn start(mut self, id: &str) -> Self {
        self.request.start = Some(id.to_string());
        self
    }

    pub fn end(mut self, id: &str) -> Self {
        self.request.end = Some(id.to_string());
        self
    }

    /// `id` must go after `after`.
    pub fn after(mut self, id: &str, after: &str) -> Self {
        self.choice(id).precedence = PrecedenceChoice::after(after);
        self
    }

    /// Same as [`after`](Self::after) but the control is disabled.
    pub fn after_disabled(mut self, id: &str, after: &str) -> Self {
        self.choice(id).precedence = PrecedenceChoice {
            after: Some(after.to_string()),
            disabled: true,
        };
        self
    }

    /// Pin `id` to a 1-based slot.
    pub fn pin(mut self, id: &str, slot: usize) -> Self {
        self.choice(id).pinned = Some(slot);
        self
    }

    fn choice(&mut self, id: &str) -> &mut LocationChoice {
        self.request.choices.entry(id.to_string()).or_default()
    }

    pub fn build(self) -> TripRequest {
        self.request
    }
}

/// Builder for `TripFile`.
pub struct TripFileBuilder {
    raw: RawTripFile,
}

impl TripFileBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            raw: RawTripFile {
                settings: SettingsSection::default(),
                trip: TripSection {
                    name: name.to_string(),
                    start: None,
                    end: None,
                },
                location: BTreeMap::new(),
                leg: Vec::new(),
            },
        }
    }

    pub fn with_location(mut self, id: &str, loc: LocationConfig) -> Self {
        self.raw.location.insert(id.to_string(), loc);
        self
    }

    pub fn with_leg(mut self, from: &str, to: &str, distance_m: u64, duration_s: u64) -> Self {
        self.raw.leg.push(LegConfig {
            from: from.to_string(),
            to: to.to_string(),
            distance_m,
            duration_s,
        });
        self
    }

    /// Add `from -> to` and `to -> from` with the same numbers.
    pub fn with_both_legs(self, a: &str, b: &str, distance_m: u64, duration_s: u64) -> Self {
        self.with_leg(a, b, distance_m, duration_s)
            .with_leg(b, a, distance_m, duration_s)
    }

    pub fn start(mut self, id: &str) -> Self {
        self.raw.trip.start = Some(id.to_string());
        self
    }

    pub fn end(mut self, id: &str) -> Self {
        self.raw.trip.end = Some(id.to_string());
        self
    }

    pub fn distance_mode(mut self, mode: DistanceMode) -> Self {
        self.raw.settings.distance = mode;
        self
    }

    pub fn max_locations(mut self, max: usize) -> Self {
        self.raw.settings.max_locations = max;
        self
    }

    pub fn build_raw(self) -> RawTripFile {
        self.raw
    }

    pub fn build(self) -> TripFile {
        TripFile::try_from(self.raw).expect("Failed to build valid trip file from builder")
    }
}

/// Builder for `LocationConfig`.
pub struct LocationBuilder {
    loc: LocationConfig,
}

impl LocationBuilder {
    pub fn new() -> Self {
        Self {
            loc: LocationConfig {
                name: None,
                coordinate: None,
                selected: true,
                after: None,
                after_disabled: false,
                pinned: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.loc.name = Some(name.to_string());
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.loc.coordinate = Some(Coordinate::new(lat, lon));
        self
    }

    pub fn unselected(mut self) -> Self {
        self.loc.selected = false;
        self
    }

    pub fn after(mut self, id: &str) -> Self {
        self.loc.after = Some(id.to_string());
        self
    }

    pub fn after_disabled(mut self, val: bool) -> Self {
        self.loc.after_disabled = val;
        self
    }

    pub fn pinned(mut self, slot: usize) -> Self {
        self.loc.pinned = Some(slot);
        self
    }

    pub fn build(self) -> LocationConfig {
        self.loc
    }
}

impl Default for LocationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
