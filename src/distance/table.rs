// src/distance/table.rs

use std::collections::BTreeMap;

use tracing::trace;

use crate::errors::{Result, TripdagError};
use crate::types::{LocationId, Stop};

use super::{DistanceSource, Leg};

/// Explicit per-pair legs, optionally backed by another source.
pub struct TableSource {
    legs: BTreeMap<(LocationId, LocationId), Leg>,
    fallback: Option<Box<dyn DistanceSource>>,
}

impl TableSource {
    pub fn new() -> Self {
        Self {
            legs: BTreeMap::new(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn DistanceSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Register the leg `from -> to`. A later insert for the same pair wins.
    pub fn insert(&mut self, from: impl Into<LocationId>, to: impl Into<LocationId>, leg: Leg) {
        self.legs.insert((from.into(), to.into()), leg);
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl Default for TableSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceSource for TableSource {
    fn measure(&self, from: &Stop, to: &Stop) -> Result<Leg> {
        if let Some(leg) = self.legs.get(&(from.id.clone(), to.id.clone())) {
            return Ok(*leg);
        }
        match &self.fallback {
            Some(fallback) => {
                trace!(from = %from.id, to = %to.id, "leg not in table, using fallback");
                fallback.measure(from, to)
            }
            None => Err(TripdagError::ConfigError(format!(
                "no leg defined from '{}' to '{}'",
                from.id, to.id
            ))),
        }
    }
}
