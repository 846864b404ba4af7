//! Core domain types for the roadtrip itinerary engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early,
//! before any provider I/O takes place.
//!
//! Coordinates use WGS84 throughout, with `geo`'s axis order
//! (`x = longitude`, `y = latitude`) in degrees.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod crossing;
mod day;
mod error;
pub mod geodesy;
mod itinerary;
mod leg;
mod location;
mod provider;
mod stop;
mod style;
mod trip;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crossing::{Crossing, CrossingError, CrossingKind, FareRange};
pub use day::{Day, DayKind, OvernightCandidate};
pub use error::GenerationError;
pub use itinerary::{Itinerary, SelectionError};
pub use leg::{Leg, LegKind};
pub use location::Location;
pub use provider::{
    OvernightStopProvider, RouteError, RouteProvider, RouteSummary, SearchError, StopCategory,
    VehicleProfileStore,
};
pub use stop::{AccessLimits, Amenity, OvernightStop};
pub use style::{DrivingStyle, DrivingStyleLimits, UnknownStyleError};
pub use trip::{TripRequest, TripRequestError};
pub use vehicle::VehicleProfile;
