//! Overpass QL query construction and response mapping.
//!
//! The Overpass API answers ad-hoc queries over OpenStreetMap data. This
//! module builds the QL text for an overnight-stop search and maps the
//! JSON elements it returns onto the domain's [`OvernightStop`] model,
//! including the OSM tag conventions for amenities and posted vehicle
//! restrictions.

use std::collections::HashMap;

use geo::Rect;
use roadtrip_core::{AccessLimits, Amenity, OvernightStop, StopCategory};
use serde::Deserialize;

/// OSM tag selector for one stop category.
const fn category_selector(category: StopCategory) -> &'static str {
    match category {
        StopCategory::Campsite => "[\"tourism\"=\"camp_site\"]",
        StopCategory::CaravanSite => "[\"tourism\"=\"caravan_site\"]",
        StopCategory::Stopover => "[\"amenity\"=\"motorhome_parking\"]",
    }
}

/// Build the Overpass QL query for the given bounding box and categories.
///
/// Overpass bounding boxes are `(south, west, north, east)` in degrees.
/// Nodes, ways and relations are all queried; `out center` collapses ways
/// and relations to a single representative coordinate.
pub fn build_query(bbox: &Rect<f64>, categories: &[StopCategory], timeout_secs: u64) -> String {
    let bounds = format!(
        "({},{},{},{})",
        bbox.min().y,
        bbox.min().x,
        bbox.max().y,
        bbox.max().x,
    );
    let mut query = format!("[out:json][timeout:{timeout_secs}];(");
    for category in categories {
        let selector = category_selector(*category);
        query.push_str(&format!(
            "node{selector}{bounds};way{selector}{bounds};relation{selector}{bounds};"
        ));
    }
    query.push_str(");out center;");
    query
}

/// Top-level Overpass JSON response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    /// Matched OSM elements.
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One matched OSM element.
///
/// Nodes carry `lat`/`lon` directly; ways and relations carry a `center`
/// object instead (requested via `out center`).
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    /// OSM element identifier.
    pub id: u64,
    /// Latitude for node elements.
    pub lat: Option<f64>,
    /// Longitude for node elements.
    pub lon: Option<f64>,
    /// Representative coordinate for way and relation elements.
    pub center: Option<OverpassCenter>,
    /// Raw OSM tags.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Representative coordinate of a way or relation.
#[derive(Debug, Deserialize)]
pub struct OverpassCenter {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl OverpassElement {
    fn position(&self) -> Option<(f64, f64)> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some((lat, lon));
        }
        self.center.as_ref().map(|c| (c.lat, c.lon))
    }

    /// Map this element onto the domain model.
    ///
    /// Returns `None` for elements without a usable coordinate. Unnamed
    /// stops get a category-free placeholder name so they remain
    /// presentable in an itinerary.
    pub fn into_stop(self) -> Option<OvernightStop> {
        let (lat, lon) = self.position()?;
        let name = self
            .tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| format!("Unnamed stop {}", self.id));

        let mut stop = OvernightStop::bare(self.id, name, geo::Coord { x: lon, y: lat });
        for amenity in amenities_from_tags(&self.tags) {
            stop = stop.with_amenity(amenity);
        }
        Some(stop.with_access(access_from_tags(&self.tags)))
    }
}

/// A tag value counts as affirmative unless it explicitly denies.
fn tag_is_affirmative(tags: &HashMap<String, String>, key: &str) -> bool {
    tags.get(key)
        .is_some_and(|value| !matches!(value.as_str(), "no" | "none"))
}

fn amenities_from_tags(tags: &HashMap<String, String>) -> Vec<Amenity> {
    let mut amenities = Vec::new();
    if tag_is_affirmative(tags, "power_supply") {
        amenities.push(Amenity::Power);
    }
    if tag_is_affirmative(tags, "drinking_water") {
        amenities.push(Amenity::Water);
    }
    if tag_is_affirmative(tags, "shower") {
        amenities.push(Amenity::Showers);
    }
    if tag_is_affirmative(tags, "internet_access") {
        amenities.push(Amenity::Wifi);
    }
    amenities
}

/// Parse a numeric restriction tag, ignoring unparsable values.
///
/// OSM restriction tags are free text; plain numbers dominate but values
/// like `"3.5 t"` or `"default"` occur. Only a leading plain number is
/// accepted.
fn parse_limit(tags: &HashMap<String, String>, key: &str) -> Option<f64> {
    let raw = tags.get(key)?;
    let number = raw
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())?;
    (number.is_finite() && number > 0.0).then_some(number)
}

fn access_from_tags(tags: &HashMap<String, String>) -> AccessLimits {
    AccessLimits {
        max_height_m: parse_limit(tags, "maxheight"),
        max_length_m: parse_limit(tags, "maxlength"),
        max_weight_t: parse_limit(tags, "maxweight"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn alpine_bbox() -> Rect<f64> {
        Rect::new(Coord { x: 6.0, y: 45.0 }, Coord { x: 7.0, y: 46.0 })
    }

    #[rstest]
    fn query_covers_every_requested_category() {
        let query = build_query(
            &alpine_bbox(),
            &[StopCategory::Campsite, StopCategory::Stopover],
            25,
        );

        assert!(query.starts_with("[out:json][timeout:25];("));
        assert!(query.contains("node[\"tourism\"=\"camp_site\"](45,6,46,7);"));
        assert!(query.contains("way[\"tourism\"=\"camp_site\"](45,6,46,7);"));
        assert!(query.contains("node[\"amenity\"=\"motorhome_parking\"](45,6,46,7);"));
        assert!(!query.contains("caravan_site"));
        assert!(query.ends_with(");out center;"));
    }

    #[rstest]
    fn node_element_maps_tags_onto_stop() {
        let json = r#"{
            "id": 42,
            "lat": 45.5,
            "lon": 6.5,
            "tags": {
                "name": "Camping des Neiges",
                "tourism": "camp_site",
                "power_supply": "yes",
                "shower": "hot",
                "drinking_water": "no",
                "maxheight": "3.2",
                "maxweight": "3.5 t"
            }
        }"#;
        let element: OverpassElement = serde_json::from_str(json).expect("should deserialise");

        let stop = element.into_stop().expect("has a coordinate");

        assert_eq!(stop.id, 42);
        assert_eq!(stop.name, "Camping des Neiges");
        assert_eq!(stop.location, Coord { x: 6.5, y: 45.5 });
        assert!(stop.amenities.contains(&Amenity::Power));
        assert!(stop.amenities.contains(&Amenity::Showers));
        assert!(!stop.amenities.contains(&Amenity::Water));
        assert!(!stop.amenities.contains(&Amenity::Wifi));
        assert_eq!(stop.access.max_height_m, Some(3.2));
        assert_eq!(stop.access.max_weight_t, Some(3.5));
        assert_eq!(stop.access.max_length_m, None);
    }

    #[rstest]
    fn way_element_uses_its_centre() {
        let json = r#"{
            "id": 7,
            "center": {"lat": 45.9, "lon": 6.1},
            "tags": {"tourism": "caravan_site"}
        }"#;
        let element: OverpassElement = serde_json::from_str(json).expect("should deserialise");

        let stop = element.into_stop().expect("has a centre");

        assert_eq!(stop.location, Coord { x: 6.1, y: 45.9 });
        assert_eq!(stop.name, "Unnamed stop 7");
        assert!(stop.amenities.is_empty());
        assert!(!stop.access.any());
    }

    #[rstest]
    fn element_without_coordinate_is_dropped() {
        let json = r#"{"id": 9, "tags": {"tourism": "camp_site"}}"#;
        let element: OverpassElement = serde_json::from_str(json).expect("should deserialise");

        assert!(element.into_stop().is_none());
    }

    #[rstest]
    #[case("default", None)]
    #[case("-2", None)]
    #[case("4", Some(4.0))]
    #[case("4.1 m", Some(4.1))]
    fn restriction_values_parse_leniently(#[case] raw: &str, #[case] expected: Option<f64>) {
        let tags = HashMap::from([("maxheight".to_string(), raw.to_string())]);
        assert_eq!(parse_limit(&tags, "maxheight"), expected);
    }

    #[rstest]
    fn empty_response_deserialises() {
        let response: OverpassResponse =
            serde_json::from_str(r#"{"version": 0.6}"#).expect("should deserialise");
        assert!(response.elements.is_empty());
    }
}
