//! Facade crate for the roadtrip itinerary engine.
//!
//! This crate re-exports the core domain types, the suitability scorer and
//! the itinerary planner, and exposes the HTTP provider implementations
//! behind a feature flag.

#![forbid(unsafe_code)]

pub use roadtrip_core::{
    AccessLimits, Amenity, Crossing, CrossingError, CrossingKind, Day, DayKind, DrivingStyle,
    DrivingStyleLimits, FareRange, GenerationError, Itinerary, Leg, LegKind, Location,
    OvernightCandidate, OvernightStop, OvernightStopProvider, RouteError, RouteProvider,
    RouteSummary, SearchError, SelectionError, StopCategory, TripRequest, TripRequestError,
    UnknownStyleError, VehicleProfile, VehicleProfileStore,
};

pub use roadtrip_planner::{Planner, PlannerConfig};
pub use roadtrip_scorer::{ScoreWeights, SuitabilityScorer, WeightsError};

#[cfg(feature = "providers-http")]
pub use roadtrip_data::{
    OsrmRouteProvider, OsrmRouteProviderConfig, OverpassStopProvider, OverpassStopProviderConfig,
    ProviderBuildError,
};
