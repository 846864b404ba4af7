//! Sea and tunnel crossings.
//!
//! A crossing is supplied to the engine as a pre-validated value object
//! chosen from an external catalogue; the engine only positions it in the
//! schedule.

use std::time::Duration;

use geo::Coord;
use thiserror::Error;

/// The physical kind of a fixed crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CrossingKind {
    /// A vehicle ferry.
    Ferry,
    /// A drive-on or shuttle tunnel.
    Tunnel,
}

/// An indicative fare band for a crossing, in whole units of currency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FareRange {
    /// Cheapest typical fare.
    pub min: f64,
    /// Most expensive typical fare.
    pub max: f64,
}

/// A fixed-duration sea or tunnel segment inserted into the schedule.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use roadtrip_core::{Crossing, CrossingKind, FareRange};
///
/// let crossing = Crossing::new(
///     "Dover-Calais",
///     CrossingKind::Ferry,
///     Coord { x: 1.31, y: 51.13 },
///     Coord { x: 1.86, y: 50.97 },
///     Duration::from_secs(90 * 60),
///     vec!["P&O Ferries".into()],
///     FareRange { min: 80.0, max: 220.0 },
/// )?;
/// assert_eq!(crossing.name, "Dover-Calais");
/// # Ok::<(), roadtrip_core::CrossingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing {
    /// Display name, e.g. `"Dover-Calais"`.
    pub name: String,
    /// Ferry or tunnel.
    pub kind: CrossingKind,
    /// Departure terminal in WGS84 (`x = lon`, `y = lat`).
    pub from: Coord<f64>,
    /// Arrival terminal in WGS84.
    pub to: Coord<f64>,
    /// Fixed crossing duration, check-in included.
    pub duration: Duration,
    /// Operators serving this crossing.
    pub operators: Vec<String>,
    /// Indicative fare band.
    pub fare: FareRange,
}

/// Errors returned by [`Crossing::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CrossingError {
    /// Crossing duration was zero.
    #[error("crossing duration must be positive")]
    NonPositiveDuration,
    /// The fare band was inverted.
    #[error("fare range minimum {min} exceeds maximum {max}")]
    InvertedFareRange {
        /// Supplied minimum fare.
        min: f64,
        /// Supplied maximum fare.
        max: f64,
    },
}

impl Crossing {
    /// Validates and constructs a [`Crossing`].
    ///
    /// # Errors
    /// Returns [`CrossingError::NonPositiveDuration`] for a zero duration
    /// and [`CrossingError::InvertedFareRange`] when `fare.min > fare.max`.
    pub fn new(
        name: impl Into<String>,
        kind: CrossingKind,
        from: Coord<f64>,
        to: Coord<f64>,
        duration: Duration,
        operators: Vec<String>,
        fare: FareRange,
    ) -> Result<Self, CrossingError> {
        if duration.is_zero() {
            return Err(CrossingError::NonPositiveDuration);
        }
        if fare.min > fare.max {
            return Err(CrossingError::InvertedFareRange {
                min: fare.min,
                max: fare.max,
            });
        }
        Ok(Self {
            name: name.into(),
            kind,
            from,
            to,
            duration,
            operators,
            fare,
        })
    }
}
