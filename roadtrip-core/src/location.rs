//! Named geographic locations.

use geo::Coord;

/// A named point on the map, such as a trip origin or a day's endpoint.
///
/// # Examples
/// ```
/// use roadtrip_core::Location;
///
/// let london = Location::new("London", 51.5074, -0.1278);
/// assert_eq!(london.name, "London");
/// assert_eq!(london.coord.y, 51.5074);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Human-readable place name.
    pub name: String,
    /// Position in WGS84 (`x = longitude`, `y = latitude`).
    pub coord: Coord<f64>,
}

impl Location {
    /// Construct a location from a name and latitude/longitude in degrees.
    ///
    /// The latitude/longitude argument order follows common map usage;
    /// internally the coordinate is stored with `geo`'s `(x = lon, y = lat)`
    /// convention.
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            coord: Coord { x: lon, y: lat },
        }
    }

    /// Construct a location directly from a `geo` coordinate.
    #[must_use]
    pub fn from_coord(name: impl Into<String>, coord: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.coord.x
    }

    /// Whether the coordinate lies within the valid WGS84 ranges.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.coord.y) && (-180.0..=180.0).contains(&self.coord.x)
    }
}
