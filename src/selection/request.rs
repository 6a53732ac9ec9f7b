// src/selection/request.rs

use std::collections::BTreeMap;

use crate::precedence::Constraint;
use crate::types::LocationId;

/// The "must go after" dropdown of one selected location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceChoice {
    /// Chosen predecessor, `None` (or blank) when nothing is chosen.
    pub after: Option<LocationId>,
    /// Disabled controls are never submitted.
    pub disabled: bool,
}

impl PrecedenceChoice {
    pub fn after(id: impl Into<LocationId>) -> Self {
        Self {
            after: Some(id.into()),
            disabled: false,
        }
    }

    /// The chosen predecessor if this control would be submitted.
    pub fn submitted(&self) -> Option<&str> {
        if self.disabled {
            return None;
        }
        self.after
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Per-location inputs next to a selected location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationChoice {
    /// 1-based visiting slot, if the user pinned one.
    pub pinned: Option<usize>,
    pub precedence: PrecedenceChoice,
}

/// Everything the submit action collects for one trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripRequest {
    pub name: String,
    /// Selected locations, in selection order. May contain duplicates.
    pub selected: Vec<LocationId>,
    pub start: Option<LocationId>,
    pub end: Option<LocationId>,
    /// Inputs keyed by location. Entries for unselected locations are kept
    /// but behave as disabled.
    pub choices: BTreeMap<LocationId, LocationChoice>,
}

impl TripRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Collect the precedence constraints exactly as the submit action does:
    /// one `(after, current)` pair per non-empty, enabled choice on a
    /// selected location.
    ///
    /// `after` is not checked against the selection here.
    pub fn constraints(&self) -> Vec<Constraint<LocationId>> {
        self.choices
            .iter()
            .filter(|(id, _)| self.is_selected(id))
            .filter_map(|(id, choice)| {
                choice
                    .precedence
                    .submitted()
                    .map(|after| Constraint::new(after.to_string(), id.clone()))
            })
            .collect()
    }
}
