//! Itinerary assembly: legs plus per-day candidates in, itinerary out.
//!
//! Assembly performs no I/O and cannot fail on valid component output;
//! a slot-count mismatch indicates a planner bug and is surfaced as an
//! internal error, never to end users.

use std::time::Duration;

use chrono::{Days, NaiveDate};
use thiserror::Error;

use roadtrip_core::{Day, DayKind, DrivingStyleLimits, Itinerary, Leg, LegKind, OvernightCandidate};

use crate::fetch::DayCandidates;

/// Internal assembly invariant violations.
///
/// These indicate a component contract violation upstream and should
/// fail loudly in testing; they are mapped to
/// [`GenerationError::Internal`](roadtrip_core::GenerationError::Internal)
/// at the planner boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// The candidate slot list does not line up with the leg list.
    #[error("candidate slots ({slots}) do not match legs ({legs})")]
    SlotMismatch {
        /// Number of legs produced by the segmenter.
        legs: usize,
        /// Number of candidate slots supplied.
        slots: usize,
    },
    /// The departure date plus the day offset left the calendar.
    #[error("date overflow at day offset {offset}")]
    DateOverflow {
        /// Day offset from departure.
        offset: u64,
    },
}

/// Merge legs and per-day search outcomes into the final itinerary.
///
/// `day_slots` is index-aligned with `legs`; `None` marks days that were
/// never searched (rest days and the final day). The top-ranked candidate
/// becomes each day's initial selection.
///
/// # Errors
/// Returns [`AssemblyError`] on malformed component output; never on
/// valid input.
pub fn assemble_itinerary(
    departure: NaiveDate,
    legs: &[Leg],
    day_slots: Vec<Option<DayCandidates>>,
    limits: &DrivingStyleLimits,
) -> Result<Itinerary, AssemblyError> {
    if day_slots.len() != legs.len() {
        return Err(AssemblyError::SlotMismatch {
            legs: legs.len(),
            slots: day_slots.len(),
        });
    }

    let mut days = Vec::with_capacity(legs.len());
    let mut warnings = Vec::new();
    let mut total_distance_km = 0.0;
    let mut total_travel_time = Duration::ZERO;

    for (offset, (leg, slot)) in legs.iter().zip(day_slots).enumerate() {
        let offset = offset as u64;
        #[allow(clippy::cast_possible_truncation, reason = "day counts are tiny")]
        let number = (offset + 1) as u32;
        let date = departure
            .checked_add_days(Days::new(offset))
            .ok_or(AssemblyError::DateOverflow { offset })?;

        let (kind, crossing) = match &leg.kind {
            LegKind::Driving => (DayKind::Driving, None),
            LegKind::Rest => (DayKind::Rest, None),
            LegKind::Crossing(crossing) => (DayKind::Crossing, Some(crossing.clone())),
        };

        let searched = slot.is_some();
        let DayCandidates { candidates, note } = slot.unwrap_or_default();
        let mut notes = Vec::new();

        if let Some(note) = note {
            warnings.push(format!("day {number}: {note}"));
            notes.push(note);
        } else if searched && candidates.is_empty() {
            warnings.push(format!("no accommodation found near day {number}"));
        }

        if kind == DayKind::Crossing && leg.travel_time > limits.max_daily_drive_time {
            notes.push(
                "today's travel exceeds your preferred pace due to a mandatory crossing"
                    .to_owned(),
            );
            warnings.push(format!(
                "travel on day {number} exceeds your preferred pace due to a mandatory crossing"
            ));
        }

        total_distance_km += leg.distance_km;
        total_travel_time += leg.travel_time;

        days.push(Day {
            number,
            date,
            kind,
            start: leg.start.clone(),
            end: leg.end.clone(),
            distance_km: leg.distance_km,
            travel_time: leg.travel_time,
            selected: candidates.first().map(OvernightCandidate::id),
            candidates,
            notes,
            crossing,
        });
    }

    #[allow(clippy::cast_possible_truncation, reason = "day counts are tiny")]
    let total_days = days.len() as u32;
    Ok(Itinerary {
        days,
        total_days,
        total_distance_km,
        total_travel_time,
        warnings,
    })
}
