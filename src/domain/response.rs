//! Aggregate responses assembled by the enrichment orchestrator.
//!
//! These are the payload shapes the excluded HTTP layer depends on.
//! Optional fields are present only when the corresponding sub-stage
//! was requested and produced something.

use crate::domain::entities::EntityBag;
use crate::domain::language::Language;
use crate::domain::place::Place;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text recognized per requested language for one image.
///
/// Every requested language is present as a key; a per-language
/// recognition failure leaves an empty string, never a missing key.
pub type ExtractedTextMap = BTreeMap<Language, String>;

/// A translation result with an explicit fallback tag.
///
/// When the engine fails, `text` echoes the untranslated input and
/// `fallback` is set, so callers can tell "translated" from "echoed"
/// without comparing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// The translated text, or the original input on fallback.
    pub text: String,
    /// True when the engine failed and `text` is the echoed input.
    pub fallback: bool,
}

impl Translation {
    /// A successful engine translation.
    pub fn translated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: false,
        }
    }

    /// The echo fallback for a failed engine call.
    pub fn echoed(original: impl Into<String>) -> Self {
        Self {
            text: original.into(),
            fallback: true,
        }
    }
}

/// Places found for one derived location query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionGroup {
    /// The location string the search ran with.
    pub query: String,
    /// Non-empty list of places for that query.
    pub places: Vec<Place>,
}

/// Response of the text enrichment pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEnrichment {
    /// Echo of the original query text.
    pub original_text: String,
    /// Entities extracted from the query.
    pub entities: EntityBag,
    /// Present when a non-English target language was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,
    /// Present when suggestions were requested; groups with no places
    /// are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<SuggestionGroup>>,
}

/// Response of the image enrichment pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEnrichment {
    /// Language implied by the detected script.
    pub detected_language: Language,
    /// The primary text block recognized in the image.
    pub extracted_text: String,
    /// Null unless a non-English target language was requested.
    pub translation: Option<Translation>,
    /// Entities extracted from the primary text.
    pub entities: EntityBag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_tag_distinguishes_echo_from_translation() {
        let ok = Translation::translated("नमस्ते");
        let echo = Translation::echoed("Hello");
        assert!(!ok.fallback);
        assert!(echo.fallback);
        assert_eq!(echo.text, "Hello");
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let response = TextEnrichment {
            original_text: "restaurants near India Gate".into(),
            entities: EntityBag::new(),
            translation: None,
            suggestions: None,
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(!json.contains("translation"));
        assert!(!json.contains("suggestions"));
        assert!(json.contains("original_text"));
    }

    #[test]
    fn image_response_keeps_translation_field_when_null() {
        let response = ImageEnrichment {
            detected_language: Language::Hindi,
            extracted_text: "ताज महल".into(),
            translation: None,
            entities: EntityBag::new(),
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains("\"translation\":null"));
        assert!(json.contains("\"detected_language\":\"hindi\""));
    }

    #[test]
    fn extracted_text_map_serializes_keyed_by_language_name() {
        let mut map = ExtractedTextMap::new();
        map.insert(Language::English, "India Gate".into());
        map.insert(Language::Hindi, String::new());
        let json = serde_json::to_string(&map).expect("serialize");
        assert!(json.contains("\"english\":\"India Gate\""));
        assert!(json.contains("\"hindi\":\"\""));
    }
}
