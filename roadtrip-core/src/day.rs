//! Days: the externally visible unit of an itinerary.

use std::time::Duration;

use chrono::NaiveDate;

use crate::{Crossing, Location, OvernightStop};

/// How a day is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayKind {
    /// A day behind the wheel.
    Driving,
    /// A day off the road.
    Rest,
    /// A day dominated by a fixed crossing.
    Crossing,
}

/// A scored, ranked place to stay overnight near a day's endpoint.
///
/// Candidates for a given day are sorted descending by suitability score,
/// ties broken by ascending distance from the route; the scorer enforces
/// this ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightCandidate {
    /// The underlying stop.
    pub stop: OvernightStop,
    /// Distance from the day's endpoint in kilometres.
    pub distance_from_route_km: f64,
    /// Suitability score in `[0, 100]`.
    pub score: f32,
    /// Short human-readable amenity summary, e.g. `["power", "wifi"]`.
    pub amenity_summary: Vec<String>,
}

impl OvernightCandidate {
    /// Identifier of the underlying stop.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.stop.id
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day {
    /// 1-based, contiguous day number.
    pub number: u32,
    /// Calendar date; departure date plus the day's offset.
    pub date: NaiveDate,
    /// Driving, rest or crossing.
    pub kind: DayKind,
    /// Where the day starts.
    pub start: Location,
    /// Where the day ends; equals `start` for rest days.
    pub end: Location,
    /// Distance driven in kilometres; zero for rest days.
    pub distance_km: f64,
    /// Time spent travelling.
    pub travel_time: Duration,
    /// Ranked overnight candidates; empty for the final day and for rest
    /// days that repeat the previous night's location.
    pub candidates: Vec<OvernightCandidate>,
    /// Stop id of the currently selected candidate, when any were found.
    pub selected: Option<u64>,
    /// Free-text notes, including downgraded search failures.
    pub notes: Vec<String>,
    /// Crossing details for crossing days.
    pub crossing: Option<Crossing>,
}

impl Day {
    /// The currently selected candidate, when one exists.
    #[must_use]
    pub fn selected_candidate(&self) -> Option<&OvernightCandidate> {
        let id = self.selected?;
        self.candidates.iter().find(|c| c.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    fn candidate(id: u64, score: f32) -> OvernightCandidate {
        OvernightCandidate {
            stop: OvernightStop::bare(id, format!("stop {id}"), Coord { x: 0.0, y: 0.0 }),
            distance_from_route_km: 1.0,
            score,
            amenity_summary: Vec::new(),
        }
    }

    #[test]
    fn selected_candidate_resolves_by_id() {
        let day = Day {
            number: 1,
            date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
            kind: DayKind::Driving,
            start: Location::new("a", 0.0, 0.0),
            end: Location::new("b", 1.0, 1.0),
            distance_km: 100.0,
            travel_time: Duration::from_secs(3600),
            candidates: vec![candidate(7, 80.0), candidate(9, 60.0)],
            selected: Some(9),
            notes: Vec::new(),
            crossing: None,
        };
        assert_eq!(day.selected_candidate().map(OvernightCandidate::id), Some(9));
    }
}
