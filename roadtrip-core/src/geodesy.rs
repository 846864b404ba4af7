//! Great-circle helpers for corridor searches and leg splitting.
//!
//! All distances are in kilometres. Bounding boxes are axis-aligned in
//! lon/lat space and do not model regions crossing the antimeridian;
//! callers needing such areas must split them into two ranges.

use geo::{Coord, Rect};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance between two WGS84 coordinates in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roadtrip_core::geodesy::haversine_km;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let milan = Coord { x: 9.19, y: 45.4642 };
/// let km = haversine_km(london, milan);
/// assert!(km > 900.0 && km < 1000.0);
/// ```
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Axis-aligned bounding box of `radius_km` around a centre coordinate.
///
/// The longitudinal extent widens with latitude so the box covers roughly
/// the same ground distance east-west as north-south. Near the poles the
/// longitude span is clamped to a full hemisphere.
#[must_use]
pub fn bbox_around(centre: Coord<f64>, radius_km: f64) -> Rect<f64> {
    let dlat = radius_km / KM_PER_DEGREE;
    let cos_lat = centre.y.to_radians().cos().max(0.01);
    let dlon = (radius_km / (KM_PER_DEGREE * cos_lat)).min(180.0);
    Rect::new(
        Coord {
            x: centre.x - dlon,
            y: (centre.y - dlat).max(-90.0),
        },
        Coord {
            x: centre.x + dlon,
            y: (centre.y + dlat).min(90.0),
        },
    )
}

/// Total length of a polyline in kilometres.
#[must_use]
pub fn polyline_length_km(line: &[Coord<f64>]) -> f64 {
    line.windows(2).map(|w| haversine_km(w[0], w[1])).sum()
}

/// Point on a polyline at a given distance from its start.
///
/// Positions between vertices are linearly interpolated in lon/lat space,
/// which is accurate enough at daily-leg granularity. Distances beyond the
/// ends clamp to the first or last vertex. Returns `None` for an empty
/// polyline.
#[must_use]
pub fn point_at_distance(line: &[Coord<f64>], target_km: f64) -> Option<Coord<f64>> {
    let first = *line.first()?;
    if target_km <= 0.0 {
        return Some(first);
    }
    let mut travelled = 0.0;
    for w in line.windows(2) {
        let step = haversine_km(w[0], w[1]);
        if travelled + step >= target_km && step > 0.0 {
            let t = (target_km - travelled) / step;
            return Some(Coord {
                x: w[0].x + (w[1].x - w[0].x) * t,
                y: w[0].y + (w[1].y - w[0].y) * t,
            });
        }
        travelled += step;
    }
    line.last().copied()
}

/// Distance from the start of a polyline to the vertex nearest `point`.
///
/// Used to place a fixed geographic event (e.g. a ferry terminal) along a
/// route measured in cumulative kilometres. Returns `None` for an empty
/// polyline.
#[must_use]
pub fn distance_along_km(line: &[Coord<f64>], point: Coord<f64>) -> Option<f64> {
    if line.is_empty() {
        return None;
    }
    let mut best = (f64::MAX, 0.0);
    let mut travelled = 0.0;
    for (i, vertex) in line.iter().enumerate() {
        if i > 0 {
            travelled += haversine_km(line[i - 1], *vertex);
        }
        let separation = haversine_km(*vertex, point);
        if separation < best.0 {
            best = (separation, travelled);
        }
    }
    Some(best.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(lat: f64, lon: f64) -> Coord<f64> {
        Coord { x: lon, y: lat }
    }

    #[rstest]
    fn same_point_is_zero() {
        let p = coord(36.1, -115.1);
        assert!(haversine_km(p, p) < 1e-6);
    }

    #[rstest]
    fn known_distance_las_vegas_to_los_angeles() {
        // Actual great-circle distance is roughly 370 km.
        let km = haversine_km(coord(36.17, -115.14), coord(34.05, -118.24));
        assert!((350.0..400.0).contains(&km), "got {km}");
    }

    #[rstest]
    fn haversine_is_symmetric() {
        let a = coord(51.5, -0.1);
        let b = coord(48.9, 2.35);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[rstest]
    fn bbox_contains_centre() {
        let centre = coord(51.5, -0.1);
        let rect = bbox_around(centre, 30.0);
        assert!(rect.min().x < centre.x && centre.x < rect.max().x);
        assert!(rect.min().y < centre.y && centre.y < rect.max().y);
    }

    #[rstest]
    fn bbox_widens_with_latitude() {
        let equatorial = bbox_around(coord(0.0, 0.0), 50.0);
        let northern = bbox_around(coord(60.0, 0.0), 50.0);
        let eq_span = equatorial.max().x - equatorial.min().x;
        let north_span = northern.max().x - northern.min().x;
        assert!(north_span > eq_span);
    }

    #[rstest]
    fn interpolation_walks_the_line() {
        let line = vec![coord(0.0, 0.0), coord(0.0, 1.0), coord(0.0, 2.0)];
        let total = polyline_length_km(&line);
        let mid = point_at_distance(&line, total / 2.0).expect("non-empty line");
        assert!((mid.x - 1.0).abs() < 0.01);
        assert!(mid.y.abs() < 0.01);
    }

    #[rstest]
    fn interpolation_clamps_to_ends() {
        let line = vec![coord(0.0, 0.0), coord(0.0, 1.0)];
        assert_eq!(point_at_distance(&line, -5.0), Some(line[0]));
        assert_eq!(point_at_distance(&line, 1e6), Some(line[1]));
        assert_eq!(point_at_distance(&[], 10.0), None);
    }

    #[rstest]
    fn distance_along_finds_nearest_vertex() {
        let line = vec![coord(0.0, 0.0), coord(0.0, 1.0), coord(0.0, 2.0)];
        let near_second = coord(0.1, 1.05);
        let along = distance_along_km(&line, near_second).expect("non-empty line");
        let to_second = haversine_km(line[0], line[1]);
        assert!((along - to_second).abs() < 1.0);
    }
}
