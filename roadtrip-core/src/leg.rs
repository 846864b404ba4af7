//! Legs: ordered segments produced by the segmenter.
//!
//! Legs are produced in travel order and never reordered after creation.
//! Rest markers are embedded in the sequence as zero-distance legs so the
//! assembler can walk a single ordered list.

use std::time::Duration;

use crate::{Crossing, Location};

/// What a leg represents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegKind {
    /// A day behind the wheel.
    Driving,
    /// A day off; start and end coincide.
    Rest,
    /// A fixed sea or tunnel crossing.
    Crossing(Crossing),
}

/// One contiguous segment of the trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Driving, rest or crossing.
    pub kind: LegKind,
    /// Where the leg begins.
    pub start: Location,
    /// Where the leg ends; equals `start` for rest legs.
    pub end: Location,
    /// Driving distance in kilometres; zero for rest and crossing legs.
    pub distance_km: f64,
    /// Time spent travelling; the crossing's fixed duration for crossing
    /// legs, zero for rest legs.
    pub travel_time: Duration,
}

impl Leg {
    /// A driving leg between two points.
    #[must_use]
    pub const fn driving(
        start: Location,
        end: Location,
        distance_km: f64,
        travel_time: Duration,
    ) -> Self {
        Self {
            kind: LegKind::Driving,
            start,
            end,
            distance_km,
            travel_time,
        }
    }

    /// A rest leg staying at `at`.
    #[must_use]
    pub fn rest(at: Location) -> Self {
        Self {
            kind: LegKind::Rest,
            start: at.clone(),
            end: at,
            distance_km: 0.0,
            travel_time: Duration::ZERO,
        }
    }

    /// A crossing leg between its terminals.
    #[must_use]
    pub fn crossing(crossing: Crossing, start: Location, end: Location) -> Self {
        let travel_time = crossing.duration;
        Self {
            kind: LegKind::Crossing(crossing),
            start,
            end,
            distance_km: 0.0,
            travel_time,
        }
    }

    /// Whether this is a driving leg.
    #[must_use]
    pub const fn is_driving(&self) -> bool {
        matches!(self.kind, LegKind::Driving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_legs_stay_put() {
        let home = Location::new("Lyon", 45.76, 4.84);
        let leg = Leg::rest(home.clone());
        assert_eq!(leg.start, home);
        assert_eq!(leg.end, home);
        assert_eq!(leg.distance_km, 0.0);
        assert_eq!(leg.travel_time, Duration::ZERO);
        assert!(!leg.is_driving());
    }
}
