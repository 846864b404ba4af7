//! Suitability scoring for overnight stops.
//!
//! The scorer ranks a day's candidate stops with a weighted combination of
//! three normalised sub-scores:
//!
//! - **proximity** — linearly decreasing from 100 at zero distance from
//!   the route corridor to 0 at the configured maximum search radius;
//! - **amenity match** — the fraction of the fixed desirable set
//!   ([`Amenity::DESIRABLE`]) present at the stop;
//! - **vehicle compatibility** — 100 unless the stop posts an explicit
//!   restriction the vehicle violates, in which case 0. An absent
//!   restriction field is never treated as a violation.
//!
//! Weights are a named configuration constant validated to sum to 100;
//! they are never recomputed per call. Candidates scoring 0 are kept so
//! the caller can see and override a poor-but-present option.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use roadtrip_core::{Amenity, OvernightCandidate, OvernightStop, VehicleProfile};

mod error;

pub use error::WeightsError;

/// Relative weights of the three sub-scores, in percent.
///
/// # Examples
/// ```
/// use roadtrip_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::new(60, 20, 20)?;
/// assert_eq!(weights.proximity, 60);
/// assert!(ScoreWeights::new(60, 20, 10).is_err());
/// # Ok::<(), roadtrip_scorer::WeightsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Weight of the proximity sub-score.
    pub proximity: u8,
    /// Weight of the amenity-match sub-score.
    pub amenity: u8,
    /// Weight of the vehicle-compatibility sub-score.
    pub vehicle: u8,
}

impl ScoreWeights {
    /// The default split: 50% proximity, 30% amenity, 20% vehicle.
    pub const DEFAULT: Self = Self {
        proximity: 50,
        amenity: 30,
        vehicle: 20,
    };

    /// Validate and construct a custom weight split.
    ///
    /// # Errors
    /// Returns [`WeightsError::BadSum`] unless the weights sum to exactly
    /// 100.
    pub const fn new(proximity: u8, amenity: u8, vehicle: u8) -> Result<Self, WeightsError> {
        let sum = proximity as u32 + amenity as u32 + vehicle as u32;
        if sum != 100 {
            return Err(WeightsError::BadSum { sum });
        }
        Ok(Self {
            proximity,
            amenity,
            vehicle,
        })
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scores and ranks overnight stops for one generation run.
#[derive(Debug, Clone)]
pub struct SuitabilityScorer {
    weights: ScoreWeights,
    max_radius_km: f64,
}

impl SuitabilityScorer {
    /// Construct a scorer for a given search radius.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonPositiveRadius`] when `max_radius_km`
    /// is zero or negative.
    pub fn new(weights: ScoreWeights, max_radius_km: f64) -> Result<Self, WeightsError> {
        if max_radius_km <= 0.0 {
            return Err(WeightsError::NonPositiveRadius {
                radius_km: max_radius_km,
            });
        }
        Ok(Self {
            weights,
            max_radius_km,
        })
    }

    /// Proximity sub-score: 100 at the route, 0 at the search radius.
    #[must_use]
    pub fn proximity_score(&self, distance_km: f64) -> f32 {
        let ratio = 1.0 - (distance_km / self.max_radius_km);
        sanitise(ratio as f32 * 100.0)
    }

    /// Amenity sub-score: fraction of the desirable set present.
    #[must_use]
    pub fn amenity_score(stop: &OvernightStop) -> f32 {
        let present = Amenity::DESIRABLE
            .iter()
            .filter(|a| stop.amenities.contains(a))
            .count();
        #[allow(clippy::cast_precision_loss, reason = "count is at most 4")]
        let fraction = present as f32 / Amenity::DESIRABLE.len() as f32;
        fraction * 100.0
    }

    /// Vehicle-compatibility sub-score.
    ///
    /// 100 when no profile is supplied or the stop posts no restrictions;
    /// 0 when any explicit restriction is violated. Absent restriction
    /// fields never count against a stop.
    #[must_use]
    pub fn vehicle_score(stop: &OvernightStop, vehicle: Option<&VehicleProfile>) -> f32 {
        let Some(vehicle) = vehicle else {
            return 100.0;
        };
        if !stop.access.any() {
            return 100.0;
        }
        let violations = [
            stop.access
                .max_height_m
                .is_some_and(|max| vehicle.height_m > max),
            stop.access
                .max_length_m
                .is_some_and(|max| vehicle.length_m > max),
            stop.access
                .max_weight_t
                .is_some_and(|max| vehicle.weight_t > max),
        ];
        if violations.iter().any(|v| *v) { 0.0 } else { 100.0 }
    }

    /// Overall suitability score in `[0, 100]`.
    #[must_use]
    pub fn score(
        &self,
        stop: &OvernightStop,
        distance_km: f64,
        vehicle: Option<&VehicleProfile>,
    ) -> f32 {
        let weighted = f32::from(self.weights.proximity) * self.proximity_score(distance_km)
            + f32::from(self.weights.amenity) * Self::amenity_score(stop)
            + f32::from(self.weights.vehicle) * Self::vehicle_score(stop, vehicle);
        sanitise(weighted / 100.0)
    }

    /// Score and rank a day's raw stops into ordered candidates.
    ///
    /// The result is sorted descending by score, ties broken by ascending
    /// distance from the route. Zero-scored candidates are kept.
    #[must_use]
    pub fn rank(
        &self,
        stops: Vec<(OvernightStop, f64)>,
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<OvernightCandidate> {
        let mut candidates: Vec<OvernightCandidate> = stops
            .into_iter()
            .map(|(stop, distance_km)| {
                let score = self.score(&stop, distance_km, vehicle);
                let amenity_summary = stop.amenities.iter().map(ToString::to_string).collect();
                OvernightCandidate {
                    stop,
                    distance_from_route_km: distance_km,
                    score,
                    amenity_summary,
                }
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| {
                a.distance_from_route_km
                    .total_cmp(&b.distance_from_route_km)
            })
        });
        log::debug!("ranked {} overnight candidates", candidates.len());
        candidates
    }
}

/// Clamp a raw score into `[0, 100]`, mapping non-finite values to 0.
fn sanitise(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
