//! Assembled itineraries and post-generation candidate selection.

use std::time::Duration;

use thiserror::Error;

use crate::Day;

/// The ordered day sequence plus aggregate totals and warnings.
///
/// An itinerary is immutable after generation except for the per-day
/// selected candidate, which the caller updates through
/// [`Itinerary::select_overnight`]. Selection never re-runs scoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Days in travel order, numbered contiguously from 1.
    pub days: Vec<Day>,
    /// Total day count; equals `days.len()`.
    pub total_days: u32,
    /// Sum of per-day distances in kilometres.
    pub total_distance_km: f64,
    /// Sum of per-day travel times.
    pub total_travel_time: Duration,
    /// Itinerary-level warnings, e.g. days with no accommodation found.
    pub warnings: Vec<String>,
}

/// Errors returned by [`Itinerary::select_overnight`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No day carries the given number.
    #[error("itinerary has no day {0}")]
    UnknownDay(u32),
    /// The day exists but lists no candidate with the given id.
    #[error("day {day} has no overnight candidate {candidate_id}")]
    UnknownCandidate {
        /// Day number addressed.
        day: u32,
        /// Candidate (stop) id requested.
        candidate_id: u64,
    },
}

impl Itinerary {
    /// Change the selected overnight candidate for one day.
    ///
    /// Pure and synchronous; scoring is not re-run. The operation is
    /// idempotent and updates to the same day are last-write-wins.
    ///
    /// # Errors
    /// Returns [`SelectionError::UnknownDay`] or
    /// [`SelectionError::UnknownCandidate`] without modifying the
    /// itinerary.
    pub fn select_overnight(
        &mut self,
        day_number: u32,
        candidate_id: u64,
    ) -> Result<(), SelectionError> {
        let day = self
            .days
            .iter_mut()
            .find(|d| d.number == day_number)
            .ok_or(SelectionError::UnknownDay(day_number))?;
        if !day.candidates.iter().any(|c| c.id() == candidate_id) {
            return Err(SelectionError::UnknownCandidate {
                day: day_number,
                candidate_id,
            });
        }
        day.selected = Some(candidate_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayKind, Location, OvernightCandidate, OvernightStop};
    use chrono::NaiveDate;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn candidate(id: u64, score: f32) -> OvernightCandidate {
        OvernightCandidate {
            stop: OvernightStop::bare(id, format!("stop {id}"), Coord { x: 0.0, y: 0.0 }),
            distance_from_route_km: 1.0,
            score,
            amenity_summary: Vec::new(),
        }
    }

    #[fixture]
    fn itinerary() -> Itinerary {
        let day = Day {
            number: 1,
            date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
            kind: DayKind::Driving,
            start: Location::new("a", 0.0, 0.0),
            end: Location::new("b", 1.0, 1.0),
            distance_km: 120.0,
            travel_time: Duration::from_secs(2 * 3600),
            candidates: vec![candidate(1, 90.0), candidate(2, 70.0)],
            selected: Some(1),
            notes: Vec::new(),
            crossing: None,
        };
        Itinerary {
            days: vec![day],
            total_days: 1,
            total_distance_km: 120.0,
            total_travel_time: Duration::from_secs(2 * 3600),
            warnings: Vec::new(),
        }
    }

    #[rstest]
    fn selection_switches_candidate(mut itinerary: Itinerary) {
        itinerary.select_overnight(1, 2).expect("candidate exists");
        assert_eq!(itinerary.days[0].selected, Some(2));
    }

    #[rstest]
    fn selection_is_idempotent(mut itinerary: Itinerary) {
        itinerary.select_overnight(1, 2).expect("first call");
        let after_once = itinerary.clone();
        itinerary.select_overnight(1, 2).expect("second call");
        assert_eq!(itinerary, after_once);
    }

    #[rstest]
    fn unknown_day_is_rejected(mut itinerary: Itinerary) {
        let err = itinerary.select_overnight(4, 1).expect_err("no day 4");
        assert_eq!(err, SelectionError::UnknownDay(4));
        assert_eq!(itinerary.days[0].selected, Some(1));
    }

    #[rstest]
    fn unknown_candidate_is_rejected(mut itinerary: Itinerary) {
        let err = itinerary.select_overnight(1, 99).expect_err("no stop 99");
        assert_eq!(
            err,
            SelectionError::UnknownCandidate {
                day: 1,
                candidate_id: 99
            }
        );
        assert_eq!(itinerary.days[0].selected, Some(1));
    }
}
