//! Test-only in-memory collaborator doubles used by unit and behaviour
//! tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use geo::{Coord, Rect};

use crate::{
    Location, OvernightStop, OvernightStopProvider, RouteError, RouteProvider, RouteSummary,
    SearchError, StopCategory, VehicleProfile, VehicleProfileStore,
};

/// Straight-line geometry between two locations with `points` vertices.
///
/// Good enough for exercising leg splitting and corridor maths without a
/// routing service.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "test geometry only")]
pub fn line_geometry(start: &Location, end: &Location, points: usize) -> Vec<Coord<f64>> {
    let n = points.max(2);
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Coord {
                x: start.coord.x + (end.coord.x - start.coord.x) * t,
                y: start.coord.y + (end.coord.y - start.coord.y) * t,
            }
        })
        .collect()
}

/// Route provider returning one scripted outcome for every request.
///
/// Counts calls so tests can assert that cancellation stopped further
/// provider traffic.
#[derive(Debug)]
pub struct FixedRouteProvider {
    outcome: Result<RouteSummary, RouteError>,
    calls: AtomicUsize,
}

impl FixedRouteProvider {
    /// Always answer with the given summary.
    #[must_use]
    pub const fn ok(summary: RouteSummary) -> Self {
        Self {
            outcome: Ok(summary),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider for a straight-line route with the given totals.
    #[must_use]
    pub fn straight(
        start: &Location,
        end: &Location,
        distance_km: f64,
        driving_time: Duration,
    ) -> Self {
        Self::ok(RouteSummary {
            distance_km,
            driving_time,
            geometry: line_geometry(start, end, 101),
        })
    }

    /// Always answer with the given error.
    #[must_use]
    pub const fn failing(error: RouteError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of routing requests issued so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteProvider for FixedRouteProvider {
    async fn compute_route(
        &self,
        _start: &Location,
        _end: &Location,
    ) -> Result<RouteSummary, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Overnight-stop provider answering from a FIFO script.
///
/// Each search pops the next scripted outcome; once the script is
/// exhausted every further search succeeds with the default stop list.
/// The planner dispatches day searches in day order, so scripted
/// outcomes line up with days for providers that answer without
/// suspending.
#[derive(Debug, Default)]
pub struct ScriptedStopProvider {
    script: Mutex<VecDeque<Result<Vec<OvernightStop>, SearchError>>>,
    default_stops: Vec<OvernightStop>,
    calls: AtomicUsize,
}

impl ScriptedStopProvider {
    /// A provider that always succeeds with `stops`.
    #[must_use]
    pub fn with_stops(stops: Vec<OvernightStop>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default_stops: stops,
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue an outcome for the next unanswered search.
    #[must_use]
    pub fn then(self, outcome: Result<Vec<OvernightStop>, SearchError>) -> Self {
        self.script
            .lock()
            .expect("script mutex poisoned")
            .push_back(outcome);
        self
    }

    /// Number of searches issued so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OvernightStopProvider for ScriptedStopProvider {
    async fn search_stops(
        &self,
        _bbox: &Rect<f64>,
        _categories: &[StopCategory],
        _vehicle: Option<&VehicleProfile>,
    ) -> Result<Vec<OvernightStop>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .script
            .lock()
            .expect("script mutex poisoned")
            .pop_front();
        scripted.unwrap_or_else(|| Ok(self.default_stops.clone()))
    }
}

/// Vehicle store returning a fixed optional profile.
#[derive(Debug, Default)]
pub struct FixedVehicleStore(pub Option<VehicleProfile>);

impl VehicleProfileStore for FixedVehicleStore {
    fn vehicle_profile(&self) -> Option<VehicleProfile> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_outcomes_apply_in_order() {
        let provider = ScriptedStopProvider::with_stops(vec![OvernightStop::bare(
            1,
            "default",
            Coord { x: 0.0, y: 0.0 },
        )])
        .then(Err(SearchError::RateLimited));
        let bbox = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });

        let first = provider.search_stops(&bbox, &[], None).await;
        assert_eq!(first, Err(SearchError::RateLimited));

        let second = provider.search_stops(&bbox, &[], None).await;
        assert_eq!(second.map(|stops| stops.len()), Ok(1));
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn fixed_route_provider_counts_calls() {
        let start = Location::new("a", 0.0, 0.0);
        let end = Location::new("b", 1.0, 1.0);
        let provider =
            FixedRouteProvider::straight(&start, &end, 100.0, Duration::from_secs(3600));
        let summary = provider
            .compute_route(&start, &end)
            .await
            .expect("scripted success");
        assert_eq!(summary.distance_km, 100.0);
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn line_geometry_spans_endpoints() {
        let start = Location::new("a", 10.0, 20.0);
        let end = Location::new("b", 11.0, 21.0);
        let line = line_geometry(&start, &end, 5);
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], start.coord);
        assert_eq!(line[4], end.coord);
    }
}
