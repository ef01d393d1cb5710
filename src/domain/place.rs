//! Normalized place records returned by the place-search service.
//!
//! The raw service payload is reshaped into [`Place`] records: the
//! fields the pipeline's consumers depend on, truncated to at most
//! [`MAX_PLACES_PER_SEARCH`] per search call.

use serde::{Deserialize, Serialize};

/// Maximum number of places retained from one search call.
pub const MAX_PLACES_PER_SEARCH: usize = 10;

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A normalized point-of-interest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name of the place.
    pub name: String,
    /// Formatted address, empty when the service omits it.
    pub address: String,
    /// Aggregate rating, absent for unrated places.
    pub rating: Option<f32>,
    /// Service-side identifier usable for a details lookup.
    pub place_id: String,
    /// Category tags assigned by the service.
    pub types: Vec<String>,
    /// Coordinates, absent when the service omits geometry.
    pub location: Option<LatLng>,
}

/// A geocoded address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedAddress {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
}

/// Raw place record as returned by the search endpoint.
///
/// Only the consumed fields are declared; the rest of the payload is
/// dropped during reshaping.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

/// Geometry block of a raw place record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

impl From<RawPlace> for Place {
    fn from(raw: RawPlace) -> Self {
        Place {
            name: raw.name.unwrap_or_default(),
            address: raw.formatted_address.unwrap_or_default(),
            rating: raw.rating,
            place_id: raw.place_id.unwrap_or_default(),
            types: raw.types,
            location: raw.geometry.and_then(|g| g.location),
        }
    }
}

/// Reshapes raw search results, keeping at most
/// [`MAX_PLACES_PER_SEARCH`] records.
pub fn normalize_places(raw: Vec<RawPlace>) -> Vec<Place> {
    raw.into_iter()
        .take(MAX_PLACES_PER_SEARCH)
        .map(Place::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> RawPlace {
        serde_json::from_str(&format!(
            r#"{{
                "name": "{name}",
                "formatted_address": "Rajpath, New Delhi",
                "rating": 4.6,
                "place_id": "id-{name}",
                "types": ["tourist_attraction", "point_of_interest"],
                "geometry": {{"location": {{"lat": 28.6129, "lng": 77.2295}}}}
            }}"#
        ))
        .expect("raw place should parse")
    }

    #[test]
    fn raw_place_normalizes_all_fields() {
        let place = Place::from(raw("India Gate"));
        assert_eq!(place.name, "India Gate");
        assert_eq!(place.address, "Rajpath, New Delhi");
        assert_eq!(place.rating, Some(4.6));
        assert_eq!(place.place_id, "id-India Gate");
        assert_eq!(place.types.len(), 2);
        let loc = place.location.expect("location should be present");
        assert!((loc.lat - 28.6129).abs() < 1e-9);
    }

    #[test]
    fn missing_fields_become_defaults() {
        let sparse: RawPlace = serde_json::from_str("{}").expect("empty object should parse");
        let place = Place::from(sparse);
        assert_eq!(place.name, "");
        assert_eq!(place.address, "");
        assert_eq!(place.rating, None);
        assert!(place.types.is_empty());
        assert!(place.location.is_none());
    }

    #[test]
    fn missing_geometry_location_is_none() {
        let no_loc: RawPlace =
            serde_json::from_str(r#"{"name": "x", "geometry": {}}"#).expect("should parse");
        assert!(Place::from(no_loc).location.is_none());
    }

    #[test]
    fn normalize_truncates_to_ten() {
        let many: Vec<RawPlace> = (0..15).map(|i| raw(&format!("p{i}"))).collect();
        let places = normalize_places(many);
        assert_eq!(places.len(), MAX_PLACES_PER_SEARCH);
        assert_eq!(places[0].name, "p0");
        assert_eq!(places[9].name, "p9");
    }
}
