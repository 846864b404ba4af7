//! Trip requests: the immutable input to one generation run.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{Crossing, DrivingStyle, Location, VehicleProfile};

/// Everything the planner needs to generate one itinerary.
///
/// A request is consumed once per generation run and never mutated by the
/// engine. Optional inputs use builder-style `with_*` methods.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use roadtrip_core::{DrivingStyle, Location, TripRequest};
///
/// let request = TripRequest::new(
///     Location::new("London", 51.5074, -0.1278),
///     Location::new("Milan", 45.4642, 9.19),
///     NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     DrivingStyle::Relaxed,
/// )
/// .with_rest_day_frequency(3);
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    /// Trip origin.
    pub start: Location,
    /// Trip destination.
    pub end: Location,
    /// First day of the trip.
    pub departure: NaiveDate,
    /// Optional hard return date.
    pub return_date: Option<NaiveDate>,
    /// Driving-intensity preference.
    pub style: DrivingStyle,
    /// Optional pre-validated sea/tunnel crossing.
    pub crossing: Option<Crossing>,
    /// Insert a rest day after every N driving days; `0` disables rest
    /// days.
    pub rest_day_frequency: u8,
    /// Optional vehicle profile used by the suitability scorer.
    pub vehicle: Option<VehicleProfile>,
}

/// Configuration errors detected before any provider I/O.
///
/// These are caller bugs: they are never retried and are surfaced
/// verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TripRequestError {
    /// A location had an empty name.
    #[error("{which} location must have a name")]
    MissingLocationName {
        /// `"start"` or `"end"`.
        which: &'static str,
    },
    /// A coordinate fell outside the WGS84 ranges.
    #[error("{which} location coordinate is out of range")]
    CoordinateOutOfRange {
        /// `"start"` or `"end"`.
        which: &'static str,
    },
    /// The return date preceded the departure date.
    #[error("return date {return_date} is before departure {departure}")]
    ReturnBeforeDeparture {
        /// Requested departure date.
        departure: NaiveDate,
        /// Requested return date.
        return_date: NaiveDate,
    },
}

impl TripRequest {
    /// Construct a minimal request; optional fields via `with_*`.
    #[must_use]
    pub const fn new(
        start: Location,
        end: Location,
        departure: NaiveDate,
        style: DrivingStyle,
    ) -> Self {
        Self {
            start,
            end,
            departure,
            return_date: None,
            style,
            crossing: None,
            rest_day_frequency: 0,
            vehicle: None,
        }
    }

    /// Set the hard return date.
    #[must_use]
    pub const fn with_return_date(mut self, date: NaiveDate) -> Self {
        self.return_date = Some(date);
        self
    }

    /// Set the chosen crossing.
    #[must_use]
    pub fn with_crossing(mut self, crossing: Crossing) -> Self {
        self.crossing = Some(crossing);
        self
    }

    /// Insert a rest day after every `n` driving days (`0` disables).
    #[must_use]
    pub const fn with_rest_day_frequency(mut self, n: u8) -> Self {
        self.rest_day_frequency = n;
        self
    }

    /// Set the vehicle profile.
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: VehicleProfile) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    /// Check the request for configuration errors.
    ///
    /// # Errors
    /// Returns the first [`TripRequestError`] found; the planner calls
    /// this before issuing any provider request.
    pub fn validate(&self) -> Result<(), TripRequestError> {
        for (which, location) in [("start", &self.start), ("end", &self.end)] {
            if location.name.trim().is_empty() {
                return Err(TripRequestError::MissingLocationName { which });
            }
            if !location.in_bounds() {
                return Err(TripRequestError::CoordinateOutOfRange { which });
            }
        }
        if let Some(return_date) = self.return_date
            && return_date < self.departure
        {
            return Err(TripRequestError::ReturnBeforeDeparture {
                departure: self.departure,
                return_date,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> TripRequest {
        TripRequest::new(
            Location::new("London", 51.5074, -0.1278),
            Location::new("Milan", 45.4642, 9.19),
            NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
            DrivingStyle::Moderate,
        )
    }

    #[rstest]
    fn valid_request_passes(request: TripRequest) {
        assert_eq!(request.validate(), Ok(()));
    }

    #[rstest]
    fn blank_start_name_is_rejected(mut request: TripRequest) {
        request.start.name = "  ".into();
        assert_eq!(
            request.validate(),
            Err(TripRequestError::MissingLocationName { which: "start" })
        );
    }

    #[rstest]
    fn out_of_range_end_is_rejected(mut request: TripRequest) {
        request.end = Location::new("Nowhere", 95.0, 0.0);
        assert_eq!(
            request.validate(),
            Err(TripRequestError::CoordinateOutOfRange { which: "end" })
        );
    }

    #[rstest]
    fn return_before_departure_is_rejected(request: TripRequest) {
        let early = NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date");
        let request = request.with_return_date(early);
        assert!(matches!(
            request.validate(),
            Err(TripRequestError::ReturnBeforeDeparture { .. })
        ));
    }

    #[rstest]
    fn return_on_departure_day_is_allowed(request: TripRequest) {
        let same = request.departure;
        assert_eq!(request.with_return_date(same).validate(), Ok(()));
    }
}
