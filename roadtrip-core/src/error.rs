//! Top-level generation errors.

use thiserror::Error;

use crate::{RouteError, TripRequestError};

/// Errors terminating a whole generation run.
///
/// Per-day overnight-search failures never appear here; they are
/// downgraded to day notes and itinerary warnings. The caller receives
/// either a complete [`Itinerary`](crate::Itinerary) (possibly with
/// warnings) or exactly one of these.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// The request failed validation; never retried.
    #[error("invalid trip request: {source}")]
    InvalidConfiguration {
        /// The underlying validation failure.
        #[from]
        source: TripRequestError,
    },
    /// Routing failed; without a route there is no itinerary.
    #[error(transparent)]
    Route {
        /// The routing failure.
        #[from]
        source: RouteError,
    },
    /// The caller withdrew the request. No result, no failure.
    #[error("itinerary generation was cancelled")]
    Cancelled,
    /// A component contract was violated. Never expected from valid
    /// inputs; indicates a planner bug.
    #[error("internal planner error: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_convert() {
        let err: GenerationError = TripRequestError::MissingLocationName { which: "start" }.into();
        assert!(matches!(
            err,
            GenerationError::InvalidConfiguration { .. }
        ));
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn route_errors_convert_transparently() {
        let err: GenerationError = RouteError::Timeout.into();
        assert_eq!(err.to_string(), RouteError::Timeout.to_string());
    }
}
