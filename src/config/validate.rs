// src/config/validate.rs

use crate::config::model::{RawTripFile, TripFile};
use crate::errors::{Result, TripdagError};
use crate::planner::MAX_PLANNABLE_LOCATIONS;

impl TryFrom<RawTripFile> for TripFile {
    type Error = crate::errors::TripdagError;

    fn try_from(raw: RawTripFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_trip(&raw)?;
        Ok(TripFile::new_unchecked(raw))
    }
}

fn validate_raw_trip(cfg: &RawTripFile) -> Result<()> {
    ensure_has_locations(cfg)?;
    validate_settings(cfg)?;
    validate_locations(cfg)?;
    validate_endpoints(cfg)?;
    validate_legs(cfg)?;
    Ok(())
}

fn ensure_has_locations(cfg: &RawTripFile) -> Result<()> {
    if cfg.location.is_empty() {
        return Err(TripdagError::ConfigError(
            "trip file must contain at least one [location.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_settings(cfg: &RawTripFile) -> Result<()> {
    let max = cfg.settings.max_locations;
    if max == 0 || max > MAX_PLANNABLE_LOCATIONS {
        return Err(TripdagError::ConfigError(format!(
            "[settings].max_locations must be in 1..={} (got {})",
            MAX_PLANNABLE_LOCATIONS, max
        )));
    }

    let speed = cfg.settings.average_speed_kmh;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(TripdagError::ConfigError(format!(
            "[settings].average_speed_kmh must be > 0 (got {})",
            speed
        )));
    }

    Ok(())
}

fn validate_locations(cfg: &RawTripFile) -> Result<()> {
    for (id, loc) in cfg.location.iter() {
        // A location naming itself in `after` is left for the precedence
        // check, which reports it as a cycle.
        if let Some(after) = loc.after.as_deref() {
            if !after.trim().is_empty() && !cfg.location.contains_key(after) {
                return Err(TripdagError::UnknownLocation(format!(
                    "location '{}' has unknown location '{}' in `after`",
                    id, after
                )));
            }
        }

        if let Some(coord) = loc.coordinate {
            if !coord.is_valid() {
                return Err(TripdagError::ConfigError(format!(
                    "location '{}' has out-of-range coordinate [{}, {}]",
                    id, coord.lat, coord.lon
                )));
            }
        }
    }
    Ok(())
}

fn validate_endpoints(cfg: &RawTripFile) -> Result<()> {
    for (which, id) in [("start", &cfg.trip.start), ("end", &cfg.trip.end)] {
        if let Some(id) = id {
            if !cfg.location.contains_key(id) {
                return Err(TripdagError::UnknownLocation(format!(
                    "[trip].{} refers to unknown location '{}'",
                    which, id
                )));
            }
        }
    }
    Ok(())
}

fn validate_legs(cfg: &RawTripFile) -> Result<()> {
    for leg in cfg.leg.iter() {
        for id in [&leg.from, &leg.to] {
            if !cfg.location.contains_key(id) {
                return Err(TripdagError::UnknownLocation(format!(
                    "[[leg]] {} -> {} refers to unknown location '{}'",
                    leg.from, leg.to, id
                )));
            }
        }
        if leg.from == leg.to {
            return Err(TripdagError::ConfigError(format!(
                "[[leg]] from '{}' to itself is not allowed",
                leg.from
            )));
        }
    }
    Ok(())
}
