//! The planner: one cancellable generation run per call.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;

use roadtrip_core::{
    GenerationError, Itinerary, OvernightStopProvider, RouteProvider, TripRequest,
    VehicleProfileStore,
};
use roadtrip_scorer::SuitabilityScorer;

use crate::PlannerConfig;
use crate::assemble::assemble_itinerary;
use crate::fetch::{DayCandidates, fetch_day_candidates};
use crate::segment::segment_trip;

/// Generates itineraries from trip requests.
///
/// One planner instance is cheap to share; each [`Planner::generate`]
/// call is an independent, cancellable unit of work. Day tasks share no
/// mutable state: each writes its outcome into its own index-addressed
/// slot.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use tokio_util::sync::CancellationToken;
/// use roadtrip_core::test_support::{FixedRouteProvider, ScriptedStopProvider};
/// use roadtrip_core::{DrivingStyle, Location, TripRequest};
/// use roadtrip_planner::Planner;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let start = Location::new("London", 51.5074, -0.1278);
/// let end = Location::new("Milan", 45.4642, 9.19);
/// let routes = Arc::new(FixedRouteProvider::straight(
///     &start,
///     &end,
///     1450.0,
///     std::time::Duration::from_secs(14 * 3600),
/// ));
/// let stops = Arc::new(ScriptedStopProvider::with_stops(Vec::new()));
///
/// let planner = Planner::new(routes, stops);
/// let request = TripRequest::new(
///     start,
///     end,
///     NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     DrivingStyle::Relaxed,
/// );
/// let itinerary = planner.generate(&request, &CancellationToken::new()).await?;
/// assert!(itinerary.total_days > 0);
/// # Ok(())
/// # }
/// ```
pub struct Planner {
    routes: Arc<dyn RouteProvider>,
    stops: Arc<dyn OvernightStopProvider>,
    vehicles: Option<Arc<dyn VehicleProfileStore>>,
    config: PlannerConfig,
}

impl Planner {
    /// Construct a planner over the two mandatory providers.
    #[must_use]
    pub fn new(routes: Arc<dyn RouteProvider>, stops: Arc<dyn OvernightStopProvider>) -> Self {
        Self {
            routes,
            stops,
            vehicles: None,
            config: PlannerConfig::default(),
        }
    }

    /// Attach a vehicle profile store consulted when the request itself
    /// carries no profile.
    #[must_use]
    pub fn with_vehicle_store(mut self, store: Arc<dyn VehicleProfileStore>) -> Self {
        self.vehicles = Some(store);
        self
    }

    /// Replace the default configuration.
    #[must_use]
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate a complete itinerary for `request`.
    ///
    /// Cancelling `cancel` at any point stops issuing provider calls,
    /// discards in-flight results and returns
    /// [`GenerationError::Cancelled`]; no partial itinerary is ever
    /// returned.
    ///
    /// # Errors
    /// - [`GenerationError::InvalidConfiguration`] for a request failing
    ///   validation, before any I/O;
    /// - [`GenerationError::Route`] when routing fails — fatal, since
    ///   without a route there is no itinerary;
    /// - [`GenerationError::Cancelled`] when the caller withdrew the
    ///   request;
    /// - [`GenerationError::Internal`] for component contract
    ///   violations.
    ///
    /// Overnight-search failures never appear here; they are downgraded
    /// to day notes and itinerary warnings.
    pub async fn generate(
        &self,
        request: &TripRequest,
        cancel: &CancellationToken,
    ) -> Result<Itinerary, GenerationError> {
        request.validate()?;
        let scorer = SuitabilityScorer::new(self.config.weights, self.config.search_radius_km)
            .map_err(|err| GenerationError::Internal {
                message: err.to_string(),
            })?;

        if cancel.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }

        let route = tokio::select! {
            () = cancel.cancelled() => return Err(GenerationError::Cancelled),
            route = self.routes.compute_route(&request.start, &request.end) => route?,
        };
        log::debug!(
            "routed {} -> {}: {:.0} km",
            request.start.name,
            request.end.name,
            route.distance_km
        );

        let limits = request.style.limits();
        let legs = segment_trip(
            &route,
            &request.start,
            &request.end,
            &limits,
            request.rest_day_frequency,
            request.crossing.as_ref(),
        );

        let vehicle = request.vehicle.clone().or_else(|| {
            self.vehicles
                .as_ref()
                .and_then(|store| store.vehicle_profile())
        });

        // Every driving day except the trip's final day gets a search.
        let last_index = legs.len().saturating_sub(1);
        let searches = legs
            .iter()
            .enumerate()
            .filter(|(i, leg)| leg.is_driving() && *i != last_index)
            .map(|(i, leg)| {
                let scorer = &scorer;
                let config = &self.config;
                let provider = self.stops.as_ref();
                let vehicle = vehicle.as_ref();
                async move {
                    (
                        i,
                        fetch_day_candidates(provider, scorer, config, &leg.end, vehicle).await,
                    )
                }
            });

        let outcomes = tokio::select! {
            () = cancel.cancelled() => return Err(GenerationError::Cancelled),
            outcomes = join_all(searches) => outcomes,
        };

        let mut slots: Vec<Option<DayCandidates>> = (0..legs.len()).map(|_| None).collect();
        for (index, outcome) in outcomes {
            slots[index] = Some(outcome);
        }

        assemble_itinerary(request.departure, &legs, slots, &limits).map_err(|err| {
            GenerationError::Internal {
                message: err.to_string(),
            }
        })
    }
}
