//! Errors raised when configuring the scorer.

use thiserror::Error;

/// Errors returned when constructing [`ScoreWeights`](crate::ScoreWeights)
/// or a [`SuitabilityScorer`](crate::SuitabilityScorer).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum WeightsError {
    /// The three weights did not sum to 100.
    #[error("score weights must sum to 100, got {sum}")]
    BadSum {
        /// Actual sum of the supplied weights.
        sum: u32,
    },
    /// The search radius was zero or negative.
    #[error("maximum search radius must be positive, got {radius_km}")]
    NonPositiveRadius {
        /// Supplied radius in kilometres.
        radius_km: f64,
    },
}
