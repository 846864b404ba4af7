//! The itinerary generation engine.
//!
//! Given a [`TripRequest`](roadtrip_core::TripRequest), the planner:
//!
//! 1. validates the request before any I/O;
//! 2. routes between start and end through a
//!    [`RouteProvider`](roadtrip_core::RouteProvider) — a routing failure
//!    is fatal for the run;
//! 3. segments the route into daily legs within the driving style's
//!    budgets, inserting rest days and an optional crossing
//!    ([`segment`]);
//! 4. fans out one concurrent, cancellable overnight search per
//!    non-final driving day and scores the results as they arrive
//!    ([`fetch`]);
//! 5. assembles days, totals and warnings into an
//!    [`Itinerary`](roadtrip_core::Itinerary) ([`assemble`]).
//!
//! Search failures are classified and downgraded to day notes; the caller
//! always receives either a complete itinerary (possibly with warnings)
//! or a single top-level [`GenerationError`](roadtrip_core::GenerationError).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assemble;
mod config;
pub mod fetch;
mod planner;
pub mod segment;

pub use config::PlannerConfig;
pub use planner::Planner;
