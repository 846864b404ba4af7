//! HTTP-based `OvernightStopProvider` using the Overpass API.
//!
//! This module provides [`OverpassStopProvider`], an implementation of
//! the [`OvernightStopProvider`] trait that searches an Overpass API
//! instance for campsites, caravan sites and motorhome stopovers.
//!
//! # Example
//!
//! ```no_run
//! use roadtrip_data::overnight::OverpassStopProvider;
//! use roadtrip_core::{OvernightStopProvider as _, StopCategory};
//! use geo::{Coord, Rect};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OverpassStopProvider::new("https://overpass-api.de/api/interpreter")?;
//! let bbox = Rect::new(Coord { x: 6.0, y: 45.0 }, Coord { x: 7.0, y: 46.0 });
//!
//! let stops = provider
//!     .search_stops(&bbox, &[StopCategory::Campsite], None)
//!     .await?;
//! println!("{} candidates", stops.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use geo::Rect;
use reqwest::{Client, StatusCode};
use roadtrip_core::{OvernightStop, OvernightStopProvider, SearchError, StopCategory, VehicleProfile};

use super::overpass::{OverpassElement, OverpassResponse, build_query};
use crate::ProviderBuildError;

/// Default user agent for Overpass requests.
pub const DEFAULT_USER_AGENT: &str = "roadtrip-overnight/0.1";

/// Default request timeout in seconds.
///
/// Also sent as the server-side `[timeout:..]` in the query so the
/// interpreter gives up before the HTTP client does.
const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Configuration for [`OverpassStopProvider`].
#[derive(Debug, Clone)]
pub struct OverpassStopProviderConfig {
    /// Full interpreter endpoint URL
    /// (e.g., `"https://overpass-api.de/api/interpreter"`).
    pub endpoint: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OverpassStopProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://overpass-api.de/api/interpreter".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl OverpassStopProviderConfig {
    /// Create a new configuration with the given interpreter endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
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

/// HTTP-based overnight-stop provider using the Overpass API.
///
/// Queries are POSTed as Overpass QL and results mapped onto the domain's
/// stop model. Transport and server failures are classified into
/// [`SearchError`] so the planner can decide between retrying and
/// degrading the day to a note.
#[derive(Debug)]
pub struct OverpassStopProvider {
    client: Client,
    config: OverpassStopProviderConfig,
}

impl OverpassStopProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OverpassStopProviderConfig::new(endpoint))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: OverpassStopProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Classify an HTTP status the interpreter answered with.
    ///
    /// Overpass uses 400 for queries it refuses (oversized areas
    /// included), 429 for throttling and 504 when the server-side
    /// timeout fires.
    fn classify_status(status: StatusCode) -> SearchError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => SearchError::RateLimited,
            StatusCode::BAD_REQUEST => SearchError::AreaTooLarge,
            StatusCode::NOT_FOUND => SearchError::NoData,
            StatusCode::GATEWAY_TIMEOUT => SearchError::Timeout,
            other => SearchError::Unavailable {
                message: format!("Overpass answered {other}"),
            },
        }
    }

    /// Convert a reqwest transport error to a `SearchError`.
    fn convert_reqwest_error(error: &reqwest::Error) -> SearchError {
        if error.is_timeout() {
            return SearchError::Timeout;
        }
        SearchError::Unavailable {
            message: error.to_string(),
        }
    }

    /// Map response elements onto stops, pre-filtering on the vehicle hint.
    ///
    /// A stop is dropped only when a posted restriction explicitly rules
    /// the vehicle out; stops without restrictions always pass through.
    fn convert_response(
        response: OverpassResponse,
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<OvernightStop> {
        response
            .elements
            .into_iter()
            .filter_map(OverpassElement::into_stop)
            .filter(|stop| !vehicle.is_some_and(|v| violates_access(stop, v)))
            .collect()
    }
}

/// Whether a posted restriction explicitly rules the vehicle out.
fn violates_access(stop: &OvernightStop, vehicle: &VehicleProfile) -> bool {
    let below = |limit: Option<f64>, dimension: f64| limit.is_some_and(|max| dimension > max);
    below(stop.access.max_height_m, vehicle.height_m)
        || below(stop.access.max_length_m, vehicle.length_m)
        || below(stop.access.max_weight_t, vehicle.weight_t)
}

#[async_trait]
impl OvernightStopProvider for OverpassStopProvider {
    async fn search_stops(
        &self,
        bbox: &Rect<f64>,
        categories: &[StopCategory],
        vehicle: Option<&VehicleProfile>,
    ) -> Result<Vec<OvernightStop>, SearchError> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let query = build_query(bbox, categories, self.config.timeout.as_secs());
        log::debug!(
            "overnight search over ({:.3},{:.3})..({:.3},{:.3})",
            bbox.min().x,
            bbox.min().y,
            bbox.max().x,
            bbox.max().y,
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|err| Self::convert_reqwest_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::classify_status(status));
        }

        let parsed: OverpassResponse =
            response.json().await.map_err(|err| SearchError::Unavailable {
                message: format!("failed to parse Overpass response: {err}"),
            })?;

        Ok(Self::convert_response(parsed, vehicle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parsed(json: &str) -> OverpassResponse {
        serde_json::from_str(json).expect("fixture should deserialise")
    }

    const TWO_STOPS: &str = r#"{
        "elements": [
            {
                "id": 1,
                "lat": 45.5,
                "lon": 6.5,
                "tags": {"name": "Camping des Neiges", "maxheight": "2.8"}
            },
            {
                "id": 2,
                "lat": 45.6,
                "lon": 6.6,
                "tags": {"name": "Aire du Col"}
            }
        ]
    }"#;

    fn tall_motorhome() -> VehicleProfile {
        VehicleProfile {
            name: "Hymer B-Class".to_string(),
            height_m: 3.1,
            length_m: 7.5,
            weight_t: 3.5,
        }
    }

    #[rstest]
    #[case(StatusCode::TOO_MANY_REQUESTS, SearchError::RateLimited)]
    #[case(StatusCode::BAD_REQUEST, SearchError::AreaTooLarge)]
    #[case(StatusCode::NOT_FOUND, SearchError::NoData)]
    #[case(StatusCode::GATEWAY_TIMEOUT, SearchError::Timeout)]
    fn status_classification(#[case] status: StatusCode, #[case] expected: SearchError) {
        assert_eq!(OverpassStopProvider::classify_status(status), expected);
    }

    #[rstest]
    fn server_errors_classify_as_unavailable() {
        let err = OverpassStopProvider::classify_status(StatusCode::BAD_GATEWAY);
        assert!(matches!(err, SearchError::Unavailable { .. }));
        assert!(err.is_transient());
    }

    #[rstest]
    fn convert_response_without_vehicle_keeps_everything() {
        let stops = OverpassStopProvider::convert_response(parsed(TWO_STOPS), None);
        assert_eq!(stops.len(), 2);
    }

    #[rstest]
    fn convert_response_drops_explicitly_incompatible_stops() {
        let vehicle = tall_motorhome();
        let stops = OverpassStopProvider::convert_response(parsed(TWO_STOPS), Some(&vehicle));

        // The 2.8 m height limit rules out a 3.1 m vehicle; the
        // restriction-free stop passes through.
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].name, "Aire du Col");
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = OverpassStopProviderConfig::new("http://localhost/api/interpreter")
            .with_timeout(Duration::from_secs(40))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.endpoint, "http://localhost/api/interpreter");
        assert_eq!(config.timeout, Duration::from_secs(40));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
