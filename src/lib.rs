// src/lib.rs

pub mod cli;
pub mod config;
pub mod distance;
pub mod errors;
pub mod logging;
pub mod planner;
pub mod precedence;
pub mod selection;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::config::model::TripFile;
use crate::distance::build_matrices;
use crate::errors::TripdagError;
use crate::planner::Strategy;
use crate::selection::ValidatedTrip;
use crate::types::LocationId;

pub use crate::precedence::has_cycle;

/// Outcome of planning a trip file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTrip {
    pub name: String,
    pub order: Vec<LocationId>,
    pub distance_m: u64,
    pub duration_s: u64,
    pub strategy: Strategy,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - trip file loading
/// - request validation (including the precedence cycle check)
/// - leg measurement and route planning
pub fn run(args: CliArgs) -> Result<()> {
    let trip_path = PathBuf::from(&args.trip);
    let file = load_and_validate(&trip_path)?;

    if args.dry_run {
        print_dry_run(&file);
        return Ok(());
    }

    match args.command() {
        Command::Check => {
            let trip = check_trip(&file)?;
            print_check(&file, &trip);
        }
        Command::Plan => {
            let planned = plan_trip(&file)?;
            print_plan(&file, &planned);
        }
    }
    Ok(())
}

/// Validate the trip file's request without planning.
pub fn check_trip(file: &TripFile) -> errors::Result<ValidatedTrip> {
    file.to_request().validate(file.limits())
}

/// Validate the request, measure every leg and solve for the cheapest order.
pub fn plan_trip(file: &TripFile) -> errors::Result<PlannedTrip> {
    let trip = check_trip(file)?;

    let source = file.distance_source();
    let (distances, durations) = build_matrices(&source, &file.stops(&trip))?;

    let strategy = Strategy::for_constraints(&trip.constraints);
    let route = planner::solve(&distances, &trip.constraints).ok_or_else(|| {
        TripdagError::Infeasible(
            "unable to generate a valid trip with the selected constraints".to_string(),
        )
    })?;

    let planned = PlannedTrip {
        name: trip.name.clone(),
        order: trip.ids_for(&route.order),
        distance_m: route.cost,
        duration_s: route.total_duration(&durations),
        strategy,
    };
    info!(
        trip = %planned.name,
        stops = planned.order.len(),
        distance_m = planned.distance_m,
        duration_s = planned.duration_s,
        "trip planned"
    );
    Ok(planned)
}

fn print_check(file: &TripFile, trip: &ValidatedTrip) {
    println!("trip '{}': {} locations", trip.name, trip.len());
    println!("ok: no cycle in 'must go after' constraints");
    if !trip.precedence_order.is_empty() {
        let names: Vec<&str> = trip
            .precedence_order
            .iter()
            .map(|id| file.display_name(id))
            .collect();
        println!("precedence order: {}", names.join(" -> "));
    }
}

fn print_plan(file: &TripFile, planned: &PlannedTrip) {
    println!("route for '{}' ({:?}):", planned.name, planned.strategy);
    for (i, id) in planned.order.iter().enumerate() {
        println!("  {}. {}", i + 1, file.display_name(id));
    }
    println!(
        "total distance: {:.2} km",
        planned.distance_m as f64 / 1000.0
    );
    println!("total duration: {} min", planned.duration_s.div_ceil(60));
}

/// Simple dry-run output: print locations, choices and legs.
fn print_dry_run(file: &TripFile) {
    println!("tripdag dry-run");
    println!("  settings.max_locations = {}", file.settings.max_locations);
    println!(
        "  settings.average_speed_kmh = {}",
        file.settings.average_speed_kmh
    );
    println!("  settings.distance = {:?}", file.settings.distance);
    println!();

    println!("trip: {}", file.trip.name);
    if let Some(ref start) = file.trip.start {
        println!("  start: {start}");
    }
    if let Some(ref end) = file.trip.end {
        println!("  end: {end}");
    }
    println!();

    println!("locations ({}):", file.location.len());
    for (id, loc) in file.location.iter() {
        println!("  - {id}");
        if let Some(ref name) = loc.name {
            println!("      name: {name}");
        }
        if !loc.selected {
            println!("      selected: false");
        }
        if let Some(coord) = loc.coordinate {
            println!("      coordinate: [{}, {}]", coord.lat, coord.lon);
        }
        if let Some(ref after) = loc.after {
            let suffix = if loc.after_disabled { " (disabled)" } else { "" };
            println!("      after: {after}{suffix}");
        }
        if let Some(pinned) = loc.pinned {
            println!("      pinned: {pinned}");
        }
    }

    if !file.leg.is_empty() {
        println!();
        println!("legs ({}):", file.leg.len());
        for leg in file.leg.iter() {
            println!(
                "  - {} -> {}: {} m, {} s",
                leg.from, leg.to, leg.distance_m, leg.duration_s
            );
        }
    }

    debug!("dry-run complete (no checks run)");
}
