//! Domain types shared across the pipeline.
//!
//! All of these are request-scoped value objects: constructed per call,
//! never cached, never shared between concurrent requests.

pub mod entities;
pub mod language;
pub mod place;
pub mod response;

pub use entities::{CoarseLabel, EntityBag, EntitySpan};
pub use language::Language;
pub use place::{GeocodedAddress, LatLng, Place, MAX_PLACES_PER_SEARCH};
pub use response::{
    ExtractedTextMap, ImageEnrichment, SuggestionGroup, TextEnrichment, Translation,
};
