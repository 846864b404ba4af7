//! HTTP implementations of the planner's collaborator contracts.
//!
//! Two providers live here:
//!
//! - [`OsrmRouteProvider`] routes between trip endpoints via an OSRM
//!   Route API instance;
//! - [`OverpassStopProvider`] searches an Overpass API instance for
//!   campsites, caravan sites and motorhome stopovers within a bounding
//!   box, mapping OSM tags onto the domain's amenity and access models.
//!
//! Both classify transport failures into the shared error taxonomies of
//! `roadtrip-core` so the planner can distinguish fatal routing failures
//! from degradable per-day search failures.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use thiserror::Error;

pub mod overnight;
pub mod routing;

pub use overnight::{OverpassStopProvider, OverpassStopProviderConfig};
pub use routing::{OsrmRouteProvider, OsrmRouteProviderConfig};

/// Error type for provider construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
