// tests/integration/trip_files.rs

use tripdag::config::{load_and_validate, load_from_path};
use tripdag::planner::Strategy;
use tripdag::types::DistanceMode;
use tripdag::{check_trip, plan_trip};
use tripdag_test_utils::builders::{LocationBuilder, TripFileBuilder};
use tripdag_test_utils::init_tracing;

use crate::trip_file;

const OLD_QUARTER: &str = r#"
[settings]
max_locations = 8
distance = "table"

[trip]
name = "Old quarter walk"
start = "market"
end = "opera"

[location.market]
name = "Ben Thanh Market"
coordinate = [10.7725, 106.6980]

[location.museum]
name = "Fine Arts Museum"
coordinate = [10.7697, 106.6994]

[location.opera]
name = "Opera House"
coordinate = [10.7767, 106.7031]

[location.post-office]
name = "Central Post Office"
coordinate = [10.7799, 106.6999]

[[leg]]
from = "market"
to = "museum"
distance_m = 400
duration_s = 300

[[leg]]
from = "market"
to = "post-office"
distance_m = 1000
duration_s = 700

[[leg]]
from = "museum"
to = "post-office"
distance_m = 1300
duration_s = 900

[[leg]]
from = "post-office"
to = "museum"
distance_m = 1300
duration_s = 900

[[leg]]
from = "museum"
to = "opera"
distance_m = 1100
duration_s = 800

[[leg]]
from = "post-office"
to = "opera"
distance_m = 500
duration_s = 400

[[leg]]
from = "market"
to = "opera"
distance_m = 1200
duration_s = 850

[[leg]]
from = "museum"
to = "market"
distance_m = 400
duration_s = 300

[[leg]]
from = "post-office"
to = "market"
distance_m = 1000
duration_s = 700

[[leg]]
from = "opera"
to = "market"
distance_m = 1200
duration_s = 850

[[leg]]
from = "opera"
to = "museum"
distance_m = 1100
duration_s = 800

[[leg]]
from = "opera"
to = "post-office"
distance_m = 500
duration_s = 400
"#;

#[test]
fn raw_file_keeps_defaults_and_sections() {
    let file = trip_file(OLD_QUARTER);
    let raw = load_from_path(file.path()).unwrap();

    assert_eq!(raw.settings.distance, DistanceMode::Table);
    assert_eq!(raw.settings.average_speed_kmh, 25.0);
    assert_eq!(raw.location.len(), 4);
    assert_eq!(raw.leg.len(), 12);
    assert!(raw.location["museum"].selected);
    assert_eq!(raw.location["museum"].coordinate.unwrap().lat, 10.7697);
}

#[test]
fn start_and_end_route_uses_held_karp() {
    init_tracing();

    let file = trip_file(OLD_QUARTER);
    let trip = load_and_validate(file.path()).unwrap();

    let planned = plan_trip(&trip).unwrap();
    assert_eq!(planned.name, "Old quarter walk");
    assert_eq!(planned.strategy, Strategy::HeldKarp);
    // market -> museum -> post-office -> opera = 400 + 1300 + 500
    assert_eq!(planned.order, vec!["market", "museum", "post-office", "opera"]);
    assert_eq!(planned.distance_m, 2200);
    assert_eq!(planned.duration_s, 300 + 900 + 400);
}

#[test]
fn must_go_after_changes_the_route() {
    // Same file, but the museum must come after the post office.
    let contents = OLD_QUARTER.replace(
        "name = \"Fine Arts Museum\"",
        "name = \"Fine Arts Museum\"\nafter = \"post-office\"",
    );
    let file = trip_file(&contents);
    let trip = load_and_validate(file.path()).unwrap();

    let checked = check_trip(&trip).unwrap();
    assert_eq!(checked.precedence_order, vec!["post-office", "museum"]);

    let planned = plan_trip(&trip).unwrap();
    assert_eq!(planned.strategy, Strategy::Exhaustive);
    // market -> post-office -> museum -> opera = 1000 + 1300 + 1100
    assert_eq!(planned.order, vec!["market", "post-office", "museum", "opera"]);
    assert_eq!(planned.distance_m, 3400);
}

#[test]
fn disabled_choice_is_ignored_when_planning() {
    let contents = OLD_QUARTER.replace(
        "name = \"Fine Arts Museum\"",
        "name = \"Fine Arts Museum\"\nafter = \"post-office\"\nafter_disabled = true",
    );
    let file = trip_file(&contents);
    let trip = load_and_validate(file.path()).unwrap();

    let planned = plan_trip(&trip).unwrap();
    assert_eq!(planned.order, vec!["market", "museum", "post-office", "opera"]);
}

#[test]
fn unselected_location_is_left_out() {
    let contents = OLD_QUARTER.replace(
        "name = \"Central Post Office\"",
        "name = \"Central Post Office\"\nselected = false",
    );
    let file = trip_file(&contents);
    let trip = load_and_validate(file.path()).unwrap();

    let planned = plan_trip(&trip).unwrap();
    assert_eq!(planned.order, vec!["market", "museum", "opera"]);
    assert_eq!(planned.distance_m, 1500);
}

#[test]
fn builder_file_with_haversine_distances() {
    let trip = TripFileBuilder::new("estimate")
        .distance_mode(DistanceMode::Haversine)
        .with_location("a", LocationBuilder::new().at(10.00, 106.0).build())
        .with_location("b", LocationBuilder::new().at(10.01, 106.0).build())
        .with_location("c", LocationBuilder::new().at(10.02, 106.0).build())
        .build();

    let planned = plan_trip(&trip).unwrap();
    // Points on a meridian: walking them in order is optimal either way.
    assert!(
        planned.order == vec!["a", "b", "c"] || planned.order == vec!["c", "b", "a"],
        "got {:?}",
        planned.order
    );
    assert!((2_200..2_250).contains(&planned.distance_m));
    assert!(planned.duration_s > 0);
}

#[test]
fn mixed_mode_prefers_listed_legs() {
    // The listed a -> c leg is absurdly cheap, so the route goes a, c, b.
    let trip = TripFileBuilder::new("mixed")
        .with_location("a", LocationBuilder::new().at(10.00, 106.0).build())
        .with_location("b", LocationBuilder::new().at(10.01, 106.0).build())
        .with_location("c", LocationBuilder::new().at(10.02, 106.0).build())
        .with_leg("a", "c", 1, 1)
        .start("a")
        .build();

    let planned = plan_trip(&trip).unwrap();
    assert_eq!(planned.order, vec!["a", "c", "b"]);
}

#[test]
fn pinned_location_keeps_its_slot() {
    let trip = TripFileBuilder::new("pinned")
        .distance_mode(DistanceMode::Table)
        .with_location("a", LocationBuilder::new().build())
        .with_location("b", LocationBuilder::new().pinned(1).build())
        .with_location("c", LocationBuilder::new().build())
        .with_both_legs("a", "b", 10, 1)
        .with_both_legs("b", "c", 10, 1)
        .with_both_legs("a", "c", 10, 1)
        .build();

    let planned = plan_trip(&trip).unwrap();
    assert_eq!(planned.order[0], "b");
    assert_eq!(planned.distance_m, 20);
}

#[test]
fn selection_limit_comes_from_settings() {
    let trip = TripFileBuilder::new("small")
        .max_locations(2)
        .with_location("a", LocationBuilder::new().build())
        .with_location("b", LocationBuilder::new().build())
        .with_location("c", LocationBuilder::new().build())
        .build();

    assert!(matches!(
        check_trip(&trip),
        Err(tripdag::errors::TripdagError::InvalidRequest(_))
    ));
}

#[test]
fn display_name_falls_back_to_id() {
    let trip = TripFileBuilder::new("names")
        .with_location("a", LocationBuilder::new().name("Alpha").build())
        .with_location("b", LocationBuilder::new().build())
        .build();

    assert_eq!(trip.display_name("a"), "Alpha");
    assert_eq!(trip.display_name("b"), "b");
}
