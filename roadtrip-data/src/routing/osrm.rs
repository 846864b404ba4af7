//! OSRM API response types for the Route service.
//!
//! Deserialisation types for the OSRM Route API response format. The
//! Route service computes the fastest route between supplied coordinates
//! and, with `geometries=geojson`, returns the geometry as a GeoJSON
//! `LineString`.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// The `code` field indicates the response status; `"Ok"` carries at
/// least one route, `"NoRoute"` means the points cannot be connected.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    pub code: String,
    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,
    /// Computed routes, best first. Absent on errors.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One computed route.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Total distance in metres.
    pub distance: f64,
    /// Total duration in seconds.
    pub duration: f64,
    /// Route geometry as a GeoJSON `LineString`.
    pub geometry: GeoJsonLineString,
}

/// Minimal GeoJSON `LineString` carrier.
#[derive(Debug, Deserialize)]
pub struct GeoJsonLineString {
    /// `(lon, lat)` coordinate pairs.
    pub coordinates: Vec<[f64; 2]>,
}
