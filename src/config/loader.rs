// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawTripFile, TripFile};
use crate::errors::Result;

/// Load a trip file from a given path and return the raw `RawTripFile`.
///
/// This only performs TOML deserialization; it does **not** check
/// references or settings. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTripFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawTripFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), locations = raw.location.len(), "trip file parsed");

    Ok(raw)
}

/// Load a trip file from path and run basic validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - unknown location references in `after`, `[trip]` and `[[leg]]`,
///   - out-of-range settings and coordinates.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TripFile> {
    let raw = load_from_path(&path)?;
    TripFile::try_from(raw)
}
