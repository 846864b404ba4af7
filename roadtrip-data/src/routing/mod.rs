//! OSRM-backed route provider.

mod osrm;
mod provider;

pub use provider::{OsrmRouteProvider, OsrmRouteProviderConfig};
