//! Per-day overnight candidate fetching.
//!
//! Each non-final driving day gets a corridor search around its endpoint.
//! Transient failures are retried a bounded number of times; any final
//! failure is downgraded to a day note with an empty candidate list, so a
//! single day without accommodation never aborts generation.

use std::time::Duration;

use roadtrip_core::geodesy::{bbox_around, haversine_km};
use roadtrip_core::{Location, OvernightCandidate, OvernightStopProvider, VehicleProfile};
use roadtrip_scorer::SuitabilityScorer;

use crate::PlannerConfig;

/// Pause between transient-failure retries.
const RETRY_DELAY: Duration = Duration::from_millis(200);

/// One day's search outcome: ranked candidates plus an optional
/// downgraded-failure note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayCandidates {
    /// Candidates sorted by descending suitability.
    pub candidates: Vec<OvernightCandidate>,
    /// Present when the search ultimately failed; the classified failure
    /// rendered for the day's notes.
    pub note: Option<String>,
}

/// Search for and rank overnight stops near one day's endpoint.
///
/// Scoring runs as soon as this day's raw results arrive; sibling days'
/// fetches are unaffected by this day's outcome.
pub async fn fetch_day_candidates(
    provider: &dyn OvernightStopProvider,
    scorer: &SuitabilityScorer,
    config: &PlannerConfig,
    endpoint: &Location,
    vehicle: Option<&VehicleProfile>,
) -> DayCandidates {
    let bbox = bbox_around(endpoint.coord, config.search_radius_km);

    let mut attempt = 0u32;
    let outcome = loop {
        match provider
            .search_stops(&bbox, &config.categories, vehicle)
            .await
        {
            Ok(stops) => break Ok(stops),
            Err(err) if err.is_transient() && attempt < config.max_search_retries => {
                attempt += 1;
                log::debug!(
                    "overnight search near '{}' failed ({err}); retry {attempt} of {}",
                    endpoint.name,
                    config.max_search_retries
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(err) => break Err(err),
        }
    };

    match outcome {
        Ok(stops) => {
            let pairs = stops
                .into_iter()
                .map(|stop| {
                    let distance_km = haversine_km(endpoint.coord, stop.location);
                    (stop, distance_km)
                })
                .collect();
            DayCandidates {
                candidates: scorer.rank(pairs, vehicle),
                note: None,
            }
        }
        Err(err) => {
            log::warn!("overnight search near '{}' failed: {err}", endpoint.name);
            DayCandidates {
                candidates: Vec::new(),
                note: Some(format!("overnight search failed: {err}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use roadtrip_core::test_support::ScriptedStopProvider;
    use roadtrip_core::{OvernightStop, SearchError};
    use roadtrip_scorer::ScoreWeights;

    fn endpoint() -> Location {
        Location::new("En route stop 1", 47.0, 2.0)
    }

    fn nearby_stop(id: u64) -> OvernightStop {
        OvernightStop::bare(id, format!("stop {id}"), Coord { x: 2.01, y: 47.01 })
    }

    #[tokio::test]
    async fn successful_search_yields_ranked_candidates() {
        let scorer = SuitabilityScorer::new(ScoreWeights::DEFAULT, 30.0).expect("valid config");
        let provider = ScriptedStopProvider::with_stops(vec![nearby_stop(1), nearby_stop(2)]);
        let config = PlannerConfig::default();

        let day = fetch_day_candidates(&provider, &scorer, &config, &endpoint(), None).await;
        assert_eq!(day.candidates.len(), 2);
        assert!(day.note.is_none());
        assert!(day.candidates[0].score >= day.candidates[1].score);
    }

    #[tokio::test]
    async fn classified_failure_becomes_a_note() {
        let scorer = SuitabilityScorer::new(ScoreWeights::DEFAULT, 30.0).expect("valid config");
        let provider =
            ScriptedStopProvider::with_stops(Vec::new()).then(Err(SearchError::AreaTooLarge));
        let config = PlannerConfig::default();

        let day = fetch_day_candidates(&provider, &scorer, &config, &endpoint(), None).await;
        assert!(day.candidates.is_empty());
        let note = day.note.expect("failure note");
        assert!(note.contains("too large"), "note was: {note}");
        // Non-transient failures are not retried.
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn transient_failure_is_retried() {
        let scorer = SuitabilityScorer::new(ScoreWeights::DEFAULT, 30.0).expect("valid config");
        let provider = ScriptedStopProvider::with_stops(vec![nearby_stop(1)])
            .then(Err(SearchError::Timeout));
        let config = PlannerConfig::default().with_max_search_retries(1);

        let day = fetch_day_candidates(&provider, &scorer, &config, &endpoint(), None).await;
        assert_eq!(provider.calls(), 2);
        assert_eq!(day.candidates.len(), 1);
        assert!(day.note.is_none());
    }

    #[tokio::test]
    async fn exhausted_retries_downgrade_to_note() {
        let scorer = SuitabilityScorer::new(ScoreWeights::DEFAULT, 30.0).expect("valid config");
        let provider = ScriptedStopProvider::with_stops(Vec::new())
            .then(Err(SearchError::Timeout))
            .then(Err(SearchError::Timeout));
        let config = PlannerConfig::default().with_max_search_retries(1);

        let day = fetch_day_candidates(&provider, &scorer, &config, &endpoint(), None).await;
        assert_eq!(provider.calls(), 2);
        assert!(day.candidates.is_empty());
        assert!(day.note.is_some());
    }
}
