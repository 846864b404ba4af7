//! Collaborator contracts consumed by the planner.
//!
//! The engine does no routing or geocoding itself; it consumes these
//! narrow, validated contracts. Route failures are fatal for a generation
//! run, while overnight-search failures are classified and downgraded to
//! per-day notes by the planner.

use async_trait::async_trait;
use geo::{Coord, Rect};
use thiserror::Error;

use crate::{Location, OvernightStop, VehicleProfile};

/// The result of routing between two locations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Total driving distance in kilometres.
    pub distance_km: f64,
    /// Total time behind the wheel.
    pub driving_time: std::time::Duration,
    /// Route geometry as an ordered polyline in WGS84.
    pub geometry: Vec<Coord<f64>>,
}

/// Errors returned by [`RouteProvider::compute_route`].
///
/// Any of these is fatal for the generation run that issued the request:
/// without a route there is no itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RouteError {
    /// No drivable path exists between the points.
    #[error("no drivable route from '{from}' to '{to}'")]
    Unavailable {
        /// Start location name.
        from: String,
        /// End location name.
        to: String,
    },
    /// The routing service did not answer in time.
    #[error("routing service timed out")]
    Timeout,
    /// The routing service failed for another reason.
    #[error("routing service failed: {message}")]
    Provider {
        /// Short description supplied by the transport layer.
        message: String,
    },
}

/// Classified failures from [`OvernightStopProvider::search_stops`].
///
/// The taxonomy is shared with the map-display subsystem's search error
/// classification and must be kept consistent with it. None of these is
/// fatal for a generation run; the planner records a day-level note and
/// continues with an empty candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The search did not complete in time.
    #[error("overnight search timed out")]
    Timeout,
    /// The provider throttled the request.
    #[error("overnight search was rate-limited")]
    RateLimited,
    /// The requested bounding box exceeded the provider's area limit.
    #[error("search area too large for the overnight-stop provider")]
    AreaTooLarge,
    /// The provider holds no data for the area.
    #[error("no overnight-stop data for the search area")]
    NoData,
    /// The provider was unreachable or answered with a server error.
    #[error("overnight-stop provider unavailable: {message}")]
    Unavailable {
        /// Short description supplied by the transport layer.
        message: String,
    },
}

impl SearchError {
    /// Whether a retry within the same generation run could plausibly
    /// succeed. Rate limits and area/data errors will not improve on
    /// immediate retry.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Unavailable { .. })
    }
}

/// Categories of overnight stop a search may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopCategory {
    /// Tent and general campsites.
    Campsite,
    /// Serviced caravan or motorhome sites.
    CaravanSite,
    /// Informal motorhome stopovers (aires).
    Stopover,
}

/// Compute a drivable route between two locations.
///
/// Implementations must be `Send + Sync`; one provider instance is shared
/// across the planner's concurrent day tasks.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Route from `start` to `end`, returning totals and geometry.
    async fn compute_route(
        &self,
        start: &Location,
        end: &Location,
    ) -> Result<RouteSummary, RouteError>;
}

/// Search for overnight stops within a bounding box.
///
/// The bounding box uses WGS84 coordinates (`x = longitude`,
/// `y = latitude`). Implementations must not panic on empty result sets;
/// an empty `Vec` is a successful answer, [`SearchError::NoData`] is a
/// provider-declared absence of coverage.
#[async_trait]
pub trait OvernightStopProvider: Send + Sync {
    /// Return candidate stops inside `bbox` matching `categories`.
    ///
    /// `vehicle` is a hint the provider may use to pre-filter stops that
    /// publish access restrictions; final compatibility checks remain the
    /// scorer's job.
    async fn search_stops(
        &self,
        bbox: &Rect<f64>,
        categories: &[StopCategory],
        vehicle: Option<&VehicleProfile>,
    ) -> Result<Vec<OvernightStop>, SearchError>;
}

/// Supply the traveller's stored vehicle profile, if one exists.
pub trait VehicleProfileStore: Send + Sync {
    /// The stored profile, or `None` when the traveller has not set one.
    fn vehicle_profile(&self) -> Option<VehicleProfile>;
}
