//! Overnight stops as returned by a stop provider.

use std::collections::BTreeSet;

use geo::Coord;

/// Amenities the scorer treats as desirable.
///
/// # Examples
/// ```
/// use roadtrip_core::Amenity;
///
/// assert_eq!(Amenity::Power.as_str(), "power");
/// assert_eq!(Amenity::DESIRABLE.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Amenity {
    /// Electric hook-up.
    Power,
    /// Drinking water.
    Water,
    /// Showers on site.
    Showers,
    /// Usable internet access.
    Wifi,
}

impl Amenity {
    /// The fixed set of amenities contributing to the amenity sub-score.
    pub const DESIRABLE: [Self; 4] = [Self::Power, Self::Water, Self::Showers, Self::Wifi];

    /// Return the amenity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Water => "water",
            Self::Showers => "showers",
            Self::Wifi => "wifi",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle-access restrictions recorded for a stop.
///
/// Every field is optional; an absent limit is never treated as a
/// violation, only an explicit one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessLimits {
    /// Maximum vehicle height in metres, when posted.
    pub max_height_m: Option<f64>,
    /// Maximum vehicle length in metres, when posted.
    pub max_length_m: Option<f64>,
    /// Maximum vehicle weight in tonnes, when posted.
    pub max_weight_t: Option<f64>,
}

impl AccessLimits {
    /// Whether any restriction is recorded at all.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.max_height_m.is_some() || self.max_length_m.is_some() || self.max_weight_t.is_some()
    }
}

/// A candidate place to spend the night, as returned by a provider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightStop {
    /// Provider-scoped identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Position in WGS84 (`x = lon`, `y = lat`).
    pub location: Coord<f64>,
    /// Amenities recorded for the stop.
    pub amenities: BTreeSet<Amenity>,
    /// Posted vehicle-access restrictions, if any.
    pub access: AccessLimits,
}

impl OvernightStop {
    /// Construct a stop with no amenities and no restrictions.
    #[must_use]
    pub fn bare(id: u64, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            amenities: BTreeSet::new(),
            access: AccessLimits::default(),
        }
    }

    /// Add an amenity, returning `self` for chaining.
    #[must_use]
    pub fn with_amenity(mut self, amenity: Amenity) -> Self {
        self.amenities.insert(amenity);
        self
    }

    /// Set the access restrictions, returning `self` for chaining.
    #[must_use]
    pub const fn with_access(mut self, access: AccessLimits) -> Self {
        self.access = access;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_record_nothing() {
        assert!(!AccessLimits::default().any());
        assert!(
            AccessLimits {
                max_height_m: Some(3.2),
                ..Default::default()
            }
            .any()
        );
    }

    #[test]
    fn chained_amenities_deduplicate() {
        let stop = OvernightStop::bare(1, "Camping du Lac", Coord { x: 2.0, y: 47.0 })
            .with_amenity(Amenity::Power)
            .with_amenity(Amenity::Power)
            .with_amenity(Amenity::Water);
        assert_eq!(stop.amenities.len(), 2);
    }
}
