// src/selection/validate.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::errors::{Result, TripdagError};
use crate::planner::{RouteConstraints, MAX_PLANNABLE_LOCATIONS};
use crate::precedence::{describe_cycles, Constraint, PrecedenceGraph};
use crate::selection::request::TripRequest;
use crate::types::LocationId;

/// Maximum number of locations selectable at once in the web UI.
pub const DEFAULT_MAX_LOCATIONS: usize = 8;

/// Caller-chosen selection cap. Values above
/// [`MAX_PLANNABLE_LOCATIONS`] are clamped to it during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimits {
    pub max_locations: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_locations: DEFAULT_MAX_LOCATIONS,
        }
    }
}

/// A request that passed every check, translated to dense indices.
///
/// Index `i` in [`RouteConstraints`] refers to `locations[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTrip {
    pub name: String,
    pub locations: Vec<LocationId>,
    pub constraints: RouteConstraints,
    /// One topological order of every location that appears in a submitted
    /// constraint.
    pub precedence_order: Vec<LocationId>,
}

impl ValidatedTrip {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.locations.iter().position(|l| l == id)
    }

    /// Map a planner order back to location ids.
    pub fn ids_for(&self, order: &[usize]) -> Vec<LocationId> {
        order.iter().map(|&i| self.locations[i].clone()).collect()
    }
}

impl TripRequest {
    /// Run every check the create action performs, in order, and build the
    /// solver input.
    ///
    /// Nothing is mutated on failure; the caller reports the error and the
    /// user corrects the selections.
    pub fn validate(&self, limits: SelectionLimits) -> Result<ValidatedTrip> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("please enter a trip name"));
        }

        if self.selected.is_empty() {
            return Err(invalid("please select at least one location"));
        }

        let locations = unique_preserve(&self.selected);
        let max_locations = limits.max_locations.min(MAX_PLANNABLE_LOCATIONS);
        if locations.len() > max_locations {
            return Err(invalid(format!(
                "at most {} locations can be selected (got {})",
                max_locations,
                locations.len()
            )));
        }

        let n = locations.len();
        let index: HashMap<&str, usize> = locations
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let start = resolve_endpoint("start", self.start.as_deref(), &index)?;
        let end = resolve_endpoint("end", self.end.as_deref(), &index)?;
        if let (Some(s), Some(e)) = (start, end) {
            if s == e && n > 1 {
                return Err(invalid(
                    "start and end point can only be the same for a single-location trip",
                ));
            }
        }

        let fixed = self.pinned_slots(&locations, start, end)?;

        let submitted = self.constraints();
        let graph = PrecedenceGraph::from_constraints(&submitted);
        let precedence_order = match graph.topological_order() {
            Ok(order) => order,
            Err(blocked) => {
                let cycles = describe_cycles(
                    submitted
                        .iter()
                        .map(|c| Constraint::new(c.before.as_str(), c.after.as_str())),
                );
                warn!(%blocked, %cycles, "rejecting trip: precedence cycle");
                return Err(TripdagError::PrecedenceCycle(cycles));
            }
        };

        let precedence: Vec<(usize, usize)> = submitted
            .iter()
            .filter_map(|c| match (index.get(c.before.as_str()), index.get(c.after.as_str())) {
                (Some(&b), Some(&a)) => Some((b, a)),
                _ => {
                    debug!(constraint = %c, "dropping constraint on unselected location");
                    None
                }
            })
            .collect();

        debug!(
            locations = n,
            constraints = precedence.len(),
            ?start,
            ?end,
            "trip request validated"
        );

        Ok(ValidatedTrip {
            name: name.to_string(),
            locations,
            constraints: RouteConstraints {
                fixed,
                precedence,
                start,
                end,
            },
            precedence_order,
        })
    }

    /// Resolve 1-based pins into a 0-based slot table.
    fn pinned_slots(
        &self,
        locations: &[LocationId],
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<Vec<Option<usize>>> {
        let n = locations.len();
        let mut fixed: Vec<Option<usize>> = vec![None; n];

        for (idx, id) in locations.iter().enumerate() {
            if Some(idx) == start || Some(idx) == end {
                continue;
            }
            let Some(pinned) = self.choices.get(id).and_then(|c| c.pinned) else {
                continue;
            };
            if pinned == 0 || pinned > n {
                warn!(location = %id, pinned, "ignoring pinned slot outside 1..={}", n);
                continue;
            }

            let slot = pinned - 1;
            if slot == 0 && start.is_some() {
                return Err(invalid(format!(
                    "location '{}' is pinned to slot 1, which is taken by the start point",
                    id
                )));
            }
            if slot == n - 1 && end.is_some() {
                return Err(invalid(format!(
                    "location '{}' is pinned to slot {}, which is taken by the end point",
                    id, n
                )));
            }
            if let Some(other) = fixed[slot] {
                return Err(invalid(format!(
                    "locations '{}' and '{}' are both pinned to slot {}",
                    locations[other], id, pinned
                )));
            }
            fixed[slot] = Some(idx);
        }

        Ok(fixed)
    }
}

fn resolve_endpoint(
    which: &str,
    id: Option<&str>,
    index: &HashMap<&str, usize>,
) -> Result<Option<usize>> {
    let Some(id) = id.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match index.get(id) {
        Some(&idx) => Ok(Some(idx)),
        None => Err(invalid(format!(
            "{} point '{}' is not a selected location",
            which, id
        ))),
    }
}

fn unique_preserve(ids: &[LocationId]) -> Vec<LocationId> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if seen.insert(id.as_str()) {
            out.push(id.clone());
        }
    }
    out
}

fn invalid(msg: impl Into<String>) -> TripdagError {
    TripdagError::InvalidRequest(msg.into())
}
