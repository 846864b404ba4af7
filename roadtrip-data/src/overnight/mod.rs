//! Overpass-backed overnight-stop provider.

mod overpass;
mod provider;

pub use provider::{OverpassStopProvider, OverpassStopProviderConfig};
