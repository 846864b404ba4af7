//! HTTP-based `RouteProvider` using OSRM's Route API.
//!
//! This module provides [`OsrmRouteProvider`], an implementation of the
//! [`RouteProvider`] trait that fetches driving routes from an OSRM
//! routing service via HTTP.
//!
//! # Example
//!
//! ```no_run
//! use roadtrip_data::routing::OsrmRouteProvider;
//! use roadtrip_core::{Location, RouteProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OsrmRouteProvider::new("http://localhost:5000")?;
//! let start = Location::new("London", 51.5074, -0.1278);
//! let end = Location::new("Milan", 45.4642, 9.19);
//!
//! let route = provider.compute_route(&start, &end).await?;
//! println!("{} km", route.distance_km);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use reqwest::Client;
use roadtrip_core::{Location, RouteError, RouteProvider, RouteSummary};

use super::osrm::RouteResponse;
use crate::ProviderBuildError;

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "roadtrip-routing/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`OsrmRouteProvider`].
#[derive(Debug, Clone)]
pub struct OsrmRouteProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OsrmRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl OsrmRouteProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based route provider using OSRM's Route API.
///
/// Requests the fastest driving route between two locations with the
/// full overview geometry (`overview=full&geometries=geojson`), which the
/// planner needs for leg segmentation and crossing placement. Metres and
/// seconds from the wire format are converted to the kilometres and
/// [`Duration`] values the domain uses.
#[derive(Debug)]
pub struct OsrmRouteProvider {
    client: Client,
    config: OsrmRouteProviderConfig,
}

impl OsrmRouteProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the OSRM service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmRouteProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: OsrmRouteProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Build the OSRM Route API URL for the given endpoints.
    ///
    /// The URL format is:
    /// `{base_url}/route/v1/driving/{lon},{lat};{lon},{lat}` with the
    /// overview geometry requested in GeoJSON form.
    fn build_route_url(&self, start: &Location, end: &Location) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            start.lon(),
            start.lat(),
            end.lon(),
            end.lat(),
        )
    }

    /// Convert a reqwest error to a `RouteError`.
    fn convert_reqwest_error(error: &reqwest::Error, url: &str) -> RouteError {
        if error.is_timeout() {
            return RouteError::Timeout;
        }
        RouteError::Provider {
            message: format!("request to {url} failed: {error}"),
        }
    }

    /// Convert an OSRM response to a `RouteSummary`.
    fn convert_response(
        response: RouteResponse,
        start: &Location,
        end: &Location,
    ) -> Result<RouteSummary, RouteError> {
        if !response.is_ok() {
            log::warn!(
                "OSRM returned {} for {} -> {}: {}",
                response.code,
                start.name,
                end.name,
                response.message.as_deref().unwrap_or("no message"),
            );
            return Err(RouteError::Unavailable {
                from: start.name.clone(),
                to: end.name.clone(),
            });
        }

        let Some(route) = response.routes.into_iter().next() else {
            return Err(RouteError::Unavailable {
                from: start.name.clone(),
                to: end.name.clone(),
            });
        };

        if !route.duration.is_finite() || route.duration < 0.0 {
            return Err(RouteError::Provider {
                message: format!("OSRM returned an invalid duration: {}", route.duration),
            });
        }

        let geometry = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coord { x: lon, y: lat })
            .collect();

        Ok(RouteSummary {
            distance_km: route.distance / 1000.0,
            driving_time: Duration::from_secs_f64(route.duration),
            geometry,
        })
    }
}

#[async_trait]
impl RouteProvider for OsrmRouteProvider {
    async fn compute_route(
        &self,
        start: &Location,
        end: &Location,
    ) -> Result<RouteSummary, RouteError> {
        let url = self.build_route_url(start, end);
        log::debug!("requesting route {} -> {}", start.name, end.name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| Self::convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| Self::convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response.json().await.map_err(|err| RouteError::Provider {
                message: format!("failed to parse OSRM response: {err}"),
            })?;

        Self::convert_response(route_response, start, end)
    }
}
