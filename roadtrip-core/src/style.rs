//! Driving-intensity styles and their per-day budgets.
//!
//! The closed enum offers compile-time safety for limit lookups; parsing
//! an unrecognised style name is a configuration error surfaced before
//! any provider I/O.

use std::time::Duration;

use thiserror::Error;

/// A named daily-distance/time budget preference.
///
/// # Examples
/// ```
/// use roadtrip_core::DrivingStyle;
///
/// assert_eq!(DrivingStyle::Relaxed.as_str(), "relaxed");
/// assert!(
///     DrivingStyle::Relaxed.limits().max_daily_distance_km
///         < DrivingStyle::Intensive.limits().max_daily_distance_km
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DrivingStyle {
    /// Short days with plenty of time off the road.
    Relaxed,
    /// A balanced touring pace.
    Moderate,
    /// Long days aimed at covering ground quickly.
    Intensive,
}

/// Per-day ceilings and descriptions for one driving style.
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingStyleLimits {
    /// Maximum distance covered in one driving day, in kilometres.
    pub max_daily_distance_km: f64,
    /// Maximum time behind the wheel in one driving day.
    pub max_daily_drive_time: Duration,
    /// One-line label for pickers and summaries.
    pub summary: &'static str,
    /// Longer human-readable description.
    pub description: &'static str,
}

impl DrivingStyle {
    /// All recognised styles, ordered from gentlest to most intensive.
    pub const ALL: [Self; 3] = [Self::Relaxed, Self::Moderate, Self::Intensive];

    /// Return the per-day budget for this style.
    ///
    /// Pure data; the distance ceilings increase strictly from
    /// [`DrivingStyle::Relaxed`] to [`DrivingStyle::Intensive`].
    #[must_use]
    pub const fn limits(self) -> DrivingStyleLimits {
        match self {
            Self::Relaxed => DrivingStyleLimits {
                max_daily_distance_km: 300.0,
                max_daily_drive_time: Duration::from_secs(4 * 3600),
                summary: "Relaxed",
                description: "Up to 300 km or four hours of driving per day.",
            },
            Self::Moderate => DrivingStyleLimits {
                max_daily_distance_km: 500.0,
                max_daily_drive_time: Duration::from_secs(6 * 3600),
                summary: "Moderate",
                description: "Up to 500 km or six hours of driving per day.",
            },
            Self::Intensive => DrivingStyleLimits {
                max_daily_distance_km: 800.0,
                max_daily_drive_time: Duration::from_secs(9 * 3600),
                summary: "Intensive",
                description: "Up to 800 km or nine hours of driving per day.",
            },
        }
    }

    /// Return the style as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Moderate => "moderate",
            Self::Intensive => "intensive",
        }
    }
}

impl std::fmt::Display for DrivingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised driving-style name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown driving style '{0}'; expected one of relaxed, moderate, intensive")]
pub struct UnknownStyleError(pub String);

impl std::str::FromStr for DrivingStyle {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "moderate" => Ok(Self::Moderate),
            "intensive" => Ok(Self::Intensive),
            _ => Err(UnknownStyleError(s.to_owned())),
        }
    }
}
