//! Planner configuration.

use roadtrip_core::StopCategory;
use roadtrip_scorer::ScoreWeights;

/// Default overnight-search radius around a day's endpoint.
const DEFAULT_SEARCH_RADIUS_KM: f64 = 30.0;

/// Smallest accepted search radius; radii below this are clamped.
const MIN_SEARCH_RADIUS_KM: f64 = 1.0;

/// Default bounded retry budget for transient search failures.
const DEFAULT_SEARCH_RETRIES: u32 = 2;

/// Tunables for one [`Planner`](crate::Planner) instance.
///
/// # Examples
/// ```
/// use roadtrip_planner::PlannerConfig;
///
/// let config = PlannerConfig::default().with_search_radius_km(50.0);
/// assert_eq!(config.search_radius_km, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Radius of the overnight-search corridor around each day's
    /// endpoint, in kilometres. Also the distance at which the proximity
    /// sub-score reaches zero.
    pub search_radius_km: f64,
    /// Stop categories requested from the provider.
    pub categories: Vec<StopCategory>,
    /// Suitability scoring weights.
    pub weights: ScoreWeights,
    /// How many times a transient search failure is retried before being
    /// reported as a day note.
    pub max_search_retries: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            categories: vec![
                StopCategory::Campsite,
                StopCategory::CaravanSite,
                StopCategory::Stopover,
            ],
            weights: ScoreWeights::DEFAULT,
            max_search_retries: DEFAULT_SEARCH_RETRIES,
        }
    }
}

impl PlannerConfig {
    /// Set the search radius, clamped to a sane minimum.
    #[must_use]
    pub fn with_search_radius_km(mut self, radius_km: f64) -> Self {
        self.search_radius_km = radius_km.max(MIN_SEARCH_RADIUS_KM);
        self
    }

    /// Set the requested stop categories.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<StopCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the scoring weights.
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the transient-failure retry budget.
    #[must_use]
    pub const fn with_max_search_retries(mut self, retries: u32) -> Self {
        self.max_search_retries = retries;
        self
    }
}
