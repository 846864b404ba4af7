//! Leg segmentation: carving a route into daily driving legs.
//!
//! The trip is treated as a single continuous distance/time budget.
//! Each day takes the tighter of the style's two ceilings: the distance
//! ceiling, or the distance coverable within the time ceiling at the
//! route's mean speed. A long day in slow terrain therefore hits the time
//! ceiling before the distance ceiling.

use roadtrip_core::geodesy::{
    distance_along_km, haversine_km, point_at_distance, polyline_length_km,
};
use roadtrip_core::{Crossing, DrivingStyleLimits, Leg, Location, RouteSummary};

/// Trips at or below this distance collapse to a single zero-ish day.
const NEGLIGIBLE_DISTANCE_KM: f64 = 0.1;

/// Tolerance for cumulative-distance comparisons.
const EPSILON_KM: f64 = 1e-6;

/// Split a routed trip into an ordered list of daily legs.
///
/// Rest markers are embedded after every `rest_day_frequency` consecutive
/// driving legs (`0` disables them) and never appear as the final leg. A
/// supplied crossing becomes its own leg at the point along the route
/// nearest its departure terminal; its fixed duration is exempt from the
/// daily ceilings. The final driving leg always terminates exactly at the
/// trip end, even when that makes it shorter than a full day.
#[must_use]
pub fn segment_trip(
    route: &RouteSummary,
    start: &Location,
    end: &Location,
    limits: &DrivingStyleLimits,
    rest_day_frequency: u8,
    crossing: Option<&Crossing>,
) -> Vec<Leg> {
    if route.distance_km <= NEGLIGIBLE_DISTANCE_KM {
        // Start equals end (or close enough): one driving day, no search.
        return vec![Leg::driving(
            start.clone(),
            end.clone(),
            route.distance_km,
            route.driving_time,
        )];
    }

    let mut legs = carve_driving_legs(route, start, end, daily_ceiling_km(route, limits));
    if let Some(crossing) = crossing {
        splice_crossing(&mut legs, route, start, crossing);
    }
    if rest_day_frequency > 0 {
        legs = insert_rest_days(legs, rest_day_frequency);
    }
    legs
}

/// The tighter of the distance and time ceilings, expressed in km.
fn daily_ceiling_km(route: &RouteSummary, limits: &DrivingStyleLimits) -> f64 {
    let time_h = route.driving_time.as_secs_f64() / 3600.0;
    if time_h <= 0.0 {
        return limits.max_daily_distance_km;
    }
    let mean_speed_kmh = route.distance_km / time_h;
    let time_bound_km = limits.max_daily_drive_time.as_secs_f64() / 3600.0 * mean_speed_kmh;
    limits.max_daily_distance_km.min(time_bound_km)
}

fn carve_driving_legs(
    route: &RouteSummary,
    start: &Location,
    end: &Location,
    ceiling_km: f64,
) -> Vec<Leg> {
    let total_km = route.distance_km;
    let mut legs = Vec::new();
    let mut cursor_km = 0.0;
    let mut cursor_loc = start.clone();
    let mut stop_number = 0u32;

    loop {
        let remaining = total_km - cursor_km;
        let is_last = remaining <= ceiling_km + EPSILON_KM;
        let leg_km = if is_last { remaining } else { ceiling_km };
        let leg_end_km = cursor_km + leg_km;

        let end_loc = if is_last {
            end.clone()
        } else {
            stop_number += 1;
            en_route_stop(route, start, end, leg_end_km, stop_number)
        };

        let fraction = leg_km / total_km;
        let leg_time = route.driving_time.mul_f64(fraction);
        legs.push(Leg::driving(cursor_loc, end_loc.clone(), leg_km, leg_time));

        if is_last {
            return legs;
        }
        cursor_km = leg_end_km;
        cursor_loc = end_loc;
    }
}

/// Ratio of geometry polyline length to the provider's reported route
/// distance. Simplified geometries are typically shorter than the road
/// distance; positions measured in route kilometres are scaled by this
/// factor before walking the polyline.
fn geometry_scale(route: &RouteSummary) -> f64 {
    let polyline_km = polyline_length_km(&route.geometry);
    if polyline_km <= 0.0 || route.distance_km <= 0.0 {
        1.0
    } else {
        polyline_km / route.distance_km
    }
}

/// Interpolated overnight point along the route at `target_km` (measured
/// in route kilometres).
///
/// Falls back to straight-line interpolation when the provider supplied
/// no geometry.
fn en_route_stop(
    route: &RouteSummary,
    start: &Location,
    end: &Location,
    target_km: f64,
    stop_number: u32,
) -> Location {
    let name = format!("En route stop {stop_number}");
    point_at_distance(&route.geometry, target_km * geometry_scale(route)).map_or_else(
        || {
            let t = target_km / route.distance_km;
            Location::from_coord(
                name.clone(),
                geo::Coord {
                    x: start.coord.x + (end.coord.x - start.coord.x) * t,
                    y: start.coord.y + (end.coord.y - start.coord.y) * t,
                },
            )
        },
        |coord| Location::from_coord(name.clone(), coord),
    )
}

/// Insert the crossing as its own leg at the route point nearest its
/// departure terminal.
fn splice_crossing(legs: &mut Vec<Leg>, route: &RouteSummary, start: &Location, crossing: &Crossing) {
    let position_km = distance_along_km(&route.geometry, crossing.from)
        .map(|along| along / geometry_scale(route))
        .unwrap_or_else(|| haversine_km(start.coord, crossing.from).min(route.distance_km));

    let mut cumulative = 0.0;
    let mut index = legs.len();
    for (i, leg) in legs.iter().enumerate() {
        cumulative += leg.distance_km;
        if cumulative > position_km + EPSILON_KM {
            index = i;
            break;
        }
    }

    let depart = Location::from_coord(format!("{} departure", crossing.name), crossing.from);
    let arrive = Location::from_coord(format!("{} arrival", crossing.name), crossing.to);
    legs.insert(index, Leg::crossing(crossing.clone(), depart, arrive));
    log::debug!(
        "spliced crossing '{}' at {position_km:.0} km (leg index {index})",
        crossing.name
    );
}

/// Insert a rest leg after every `frequency` consecutive driving legs.
///
/// Rest days repeat the preceding leg's end location and are never
/// appended after the final leg. Crossings reset the consecutive-driving
/// counter.
fn insert_rest_days(legs: Vec<Leg>, frequency: u8) -> Vec<Leg> {
    let total = legs.len();
    let mut out = Vec::with_capacity(total + total / usize::from(frequency));
    let mut consecutive = 0u8;

    for (i, leg) in legs.into_iter().enumerate() {
        let end_loc = leg.end.clone();
        consecutive = if leg.is_driving() { consecutive + 1 } else { 0 };
        out.push(leg);
        if consecutive >= frequency && i + 1 < total {
            out.push(Leg::rest(end_loc));
            consecutive = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_core::test_support::line_geometry;
    use roadtrip_core::{CrossingKind, DrivingStyle, FareRange, LegKind};
    use rstest::{fixture, rstest};
    use std::time::Duration;

    fn london() -> Location {
        Location::new("London", 51.5074, -0.1278)
    }

    fn milan() -> Location {
        Location::new("Milan", 45.4642, 9.19)
    }

    #[fixture]
    fn route() -> RouteSummary {
        RouteSummary {
            distance_km: 1450.0,
            driving_time: Duration::from_secs(14 * 3600),
            geometry: line_geometry(&london(), &milan(), 201),
        }
    }

    fn driving_distances(legs: &[Leg]) -> Vec<f64> {
        legs.iter()
            .filter(|l| l.is_driving())
            .map(|l| l.distance_km)
            .collect()
    }

    #[rstest]
    fn relaxed_london_milan_needs_five_driving_days(route: RouteSummary) {
        let limits = DrivingStyle::Relaxed.limits();
        let legs = segment_trip(&route, &london(), &milan(), &limits, 0, None);

        let distances = driving_distances(&legs);
        assert_eq!(distances.len(), 5);
        for d in &distances {
            assert!(*d <= limits.max_daily_distance_km + EPSILON_KM);
        }
        // Remainder becomes the last day rather than being padded.
        assert!((distances[4] - 250.0).abs() < 1.0);
        assert_eq!(legs.last().map(|l| l.end.clone()), Some(milan()));
    }

    #[rstest]
    fn distances_sum_to_route_total(route: RouteSummary) {
        let limits = DrivingStyle::Moderate.limits();
        let legs = segment_trip(&route, &london(), &milan(), &limits, 0, None);
        let sum: f64 = driving_distances(&legs).iter().sum();
        assert!((sum - route.distance_km).abs() < 1e-6);
    }

    #[rstest]
    fn slow_terrain_hits_time_ceiling_first() {
        // 600 km in 20 hours: 30 km/h mean speed. Relaxed allows four
        // hours a day, so the time bound (120 km) undercuts the 300 km
        // distance ceiling.
        let route = RouteSummary {
            distance_km: 600.0,
            driving_time: Duration::from_secs(20 * 3600),
            geometry: line_geometry(&london(), &milan(), 201),
        };
        let limits = DrivingStyle::Relaxed.limits();
        let legs = segment_trip(&route, &london(), &milan(), &limits, 0, None);

        let distances = driving_distances(&legs);
        assert_eq!(distances.len(), 5);
        assert!((distances[0] - 120.0).abs() < 1e-6);
        for leg in legs.iter().filter(|l| l.is_driving()) {
            assert!(leg.travel_time <= limits.max_daily_drive_time + Duration::from_secs(1));
        }
    }

    #[rstest]
    fn zero_distance_trip_is_a_single_driving_day() {
        let route = RouteSummary {
            distance_km: 0.0,
            driving_time: Duration::ZERO,
            geometry: Vec::new(),
        };
        let limits = DrivingStyle::Relaxed.limits();
        let legs = segment_trip(&route, &london(), &london(), &limits, 3, None);
        assert_eq!(legs.len(), 1);
        assert!(legs[0].is_driving());
        assert_eq!(legs[0].distance_km, 0.0);
    }

    #[rstest]
    fn rest_days_follow_every_third_driving_leg(route: RouteSummary) {
        let limits = DrivingStyle::Relaxed.limits();
        let legs = segment_trip(&route, &london(), &milan(), &limits, 3, None);

        let kinds: Vec<bool> = legs.iter().map(Leg::is_driving).collect();
        // Five driving legs with a rest after the third.
        assert_eq!(kinds, vec![true, true, true, false, true, true]);
        let rest = &legs[3];
        assert_eq!(rest.start, rest.end);
        assert_eq!(rest.end, legs[2].end);
    }

    #[rstest]
    fn rest_day_never_appears_last() {
        // Three driving days at frequency three: the rest would land
        // after the final leg and must be suppressed.
        let route = RouteSummary {
            distance_km: 900.0,
            driving_time: Duration::from_secs(9 * 3600),
            geometry: line_geometry(&london(), &milan(), 201),
        };
        let limits = DrivingStyle::Relaxed.limits();
        let legs = segment_trip(&route, &london(), &milan(), &limits, 3, None);
        assert_eq!(driving_distances(&legs).len(), 3);
        assert!(legs.last().is_some_and(Leg::is_driving));
    }

    #[rstest]
    fn crossing_splices_between_the_right_days(route: RouteSummary) {
        let limits = DrivingStyle::Relaxed.limits();
        let plain = segment_trip(&route, &london(), &milan(), &limits, 0, None);

        // A terminal halfway between the day-2 and day-3 endpoints.
        let day2_end = plain[1].end.coord;
        let day3_end = plain[2].end.coord;
        let terminal = geo::Coord {
            x: (day2_end.x + day3_end.x) / 2.0,
            y: (day2_end.y + day3_end.y) / 2.0,
        };
        let crossing = Crossing::new(
            "Midway Ferry",
            CrossingKind::Ferry,
            terminal,
            terminal,
            Duration::from_secs(2 * 3600),
            Vec::new(),
            FareRange { min: 10.0, max: 90.0 },
        )
        .expect("valid crossing");

        let legs = segment_trip(&route, &london(), &milan(), &limits, 0, Some(&crossing));
        assert_eq!(legs.len(), 6);
        assert!(matches!(legs[2].kind, LegKind::Crossing(_)));
        assert_eq!(legs[2].travel_time, Duration::from_secs(2 * 3600));
        assert_eq!(legs[2].distance_km, 0.0);
        // Subsequent driving legs shift by one position.
        assert!(legs[3].is_driving());
    }

    #[rstest]
    fn intermediate_stops_are_named_in_order(route: RouteSummary) {
        let limits = DrivingStyle::Relaxed.limits();
        let legs = segment_trip(&route, &london(), &milan(), &limits, 0, None);
        assert_eq!(legs[0].end.name, "En route stop 1");
        assert_eq!(legs[3].end.name, "En route stop 4");
        assert_eq!(legs[4].end.name, "Milan");
    }
}
