//! Place-search and geocoding client.
//!
//! Binding for a Google-Places-shaped HTTP API: text search, place
//! details, and geocoding endpoints under one base URL. Search and
//! geocode calls never raise to the orchestrator: transport and
//! service errors are logged and degrade to an empty result, which is
//! the contract [`PlaceSearch`] promises.

use crate::core::errors::{EnrichError, Stage};
use crate::core::traits::PlaceSearch;
use crate::domain::place::{normalize_places, GeocodedAddress, Place, RawPlace};
use serde::Deserialize;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 60;
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Fields requested from the details endpoint.
const DETAILS_FIELDS: &str = "name,rating,formatted_address,opening_hours,photos,reviews";

/// HTTP client for the external place services.
#[derive(Debug)]
pub struct PlacesClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<RawPlace>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
    formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: crate::domain::place::LatLng,
}

impl PlacesClient {
    /// Creates a client against the production base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self, EnrichError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against an explicit base URL (used to point at
    /// a stand-in service).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, EnrichError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| EnrichError::unavailable("place search", e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Searches for places matching `query`.
    ///
    /// `location` is an optional `"lat,lng"` bias center; `radius` is
    /// in meters and only sent alongside a location. Failures of any
    /// kind are logged and return an empty list.
    pub fn search_places(
        &self,
        query: &str,
        location: Option<&str>,
        radius: Option<u32>,
    ) -> Vec<Place> {
        let endpoint = format!("{}/place/textsearch/json", self.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(center) = location {
            params.push(("location", center.to_string()));
            params.push(("radius", radius.unwrap_or(5000).to_string()));
        }

        let response: SearchResponse = match self.get_json(&endpoint, &params, Stage::PlaceSearch)
        {
            Ok(body) => body,
            Err(_) => return Vec::new(),
        };

        if response.status != "OK" {
            tracing::warn!(status = %response.status, query, "place search returned non-OK status");
            return Vec::new();
        }

        normalize_places(response.results)
    }

    /// Fetches detailed information for one place.
    ///
    /// Returns the raw details object, or an empty object on any
    /// failure.
    pub fn place_details(&self, place_id: &str) -> serde_json::Value {
        let endpoint = format!("{}/place/details/json", self.base_url);
        let params: Vec<(&str, String)> = vec![
            ("place_id", place_id.to_string()),
            ("key", self.api_key.clone()),
            ("fields", DETAILS_FIELDS.to_string()),
        ];

        match self.get_json::<DetailsResponse>(&endpoint, &params, Stage::PlaceSearch) {
            Ok(body) if body.status == "OK" => body.result,
            Ok(body) => {
                tracing::warn!(status = %body.status, place_id, "place details returned non-OK status");
                serde_json::Value::Object(Default::default())
            }
            Err(_) => serde_json::Value::Object(Default::default()),
        }
    }

    /// Converts an address to coordinates.
    ///
    /// Returns `None` on any failure or when the service has no result.
    pub fn geocode(&self, address: &str) -> Option<GeocodedAddress> {
        let endpoint = format!("{}/geocode/json", self.base_url);
        let params: Vec<(&str, String)> = vec![
            ("address", address.to_string()),
            ("key", self.api_key.clone()),
        ];

        let response: GeocodeResponse = self.get_json(&endpoint, &params, Stage::Geocode).ok()?;
        if response.status != "OK" {
            tracing::warn!(status = %response.status, address, "geocode returned non-OK status");
            return None;
        }

        let first = response.results.into_iter().next()?;
        Some(GeocodedAddress {
            lat: first.geometry.location.lat,
            lng: first.geometry.location.lng,
            formatted_address: first.formatted_address,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        stage: Stage,
    ) -> Result<T, EnrichError> {
        let result = self
            .http
            .get(endpoint)
            .query(params)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>());

        result.map_err(|error| {
            tracing::warn!(%error, endpoint, "place service call failed");
            EnrichError::engine_call(stage, "http call", error)
        })
    }
}

impl PlaceSearch for PlacesClient {
    fn search(&self, query: &str, location: Option<&str>, radius: Option<u32>) -> Vec<Place> {
        self.search_places(query, location, radius)
    }
}
