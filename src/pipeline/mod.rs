//! The enrichment orchestrator.
//!
//! [`Enricher`] composes the extractor, the OCR processor, the
//! translation engine, and place search into the two pipelines the
//! service exposes: text-query enrichment and image-query enrichment.
//! Engine handles are injected at construction time; there is no
//! process-wide state.
//!
//! Degradation policy: a recognizer failure fails the pipeline (no
//! fallback exists for it); a translation failure falls back to
//! echoing the input, tagged so callers can tell; a place-search
//! failure for one query drops that query only; per-language OCR
//! failures are absorbed inside the OCR processor.

use crate::core::errors::EnrichError;
use crate::core::traits::{EntityRecognizer, OcrEngine, PlaceSearch, TranslationEngine};
use crate::domain::entities::EntityBag;
use crate::domain::language::Language;
use crate::domain::response::{
    ExtractedTextMap, ImageEnrichment, SuggestionGroup, TextEnrichment, Translation,
};
use crate::extractor::EntityExtractor;
use crate::ocr::{OcrProcessor, PreprocessConfig};
use crate::utils::decode_image;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of derived location queries sent to place search.
const MAX_SUGGESTION_QUERIES: usize = 3;

/// Orchestrates extraction, OCR, translation, and place lookup.
pub struct Enricher {
    extractor: EntityExtractor,
    ocr: OcrProcessor,
    translator: Arc<dyn TranslationEngine + Send + Sync>,
    places: Arc<dyn PlaceSearch + Send + Sync>,
}

impl Enricher {
    /// Creates an orchestrator over the four injected engine handles.
    pub fn new(
        recognizer: Arc<dyn EntityRecognizer + Send + Sync>,
        ocr_engine: Arc<dyn OcrEngine + Send + Sync>,
        translator: Arc<dyn TranslationEngine + Send + Sync>,
        places: Arc<dyn PlaceSearch + Send + Sync>,
    ) -> Self {
        Self {
            extractor: EntityExtractor::new(recognizer),
            ocr: OcrProcessor::new(ocr_engine),
            translator,
            places,
        }
    }

    /// As [`Enricher::new`], with explicit preprocessing parameters for
    /// the OCR stage.
    pub fn with_preprocess_config(
        recognizer: Arc<dyn EntityRecognizer + Send + Sync>,
        ocr_engine: Arc<dyn OcrEngine + Send + Sync>,
        translator: Arc<dyn TranslationEngine + Send + Sync>,
        places: Arc<dyn PlaceSearch + Send + Sync>,
        config: PreprocessConfig,
    ) -> Self {
        Self {
            extractor: EntityExtractor::new(recognizer),
            ocr: OcrProcessor::with_config(ocr_engine, config),
            translator,
            places,
        }
    }

    /// Enriches a natural-language travel query.
    ///
    /// Entities are extracted unconditionally. A translation is
    /// attached when a non-English target is given; engine failure
    /// there degrades to the tagged echo fallback rather than failing
    /// the request. When `include_suggestions` is set, up to three
    /// location strings derived from the query each get a place
    /// search; queries with no places are
    /// dropped. Group order follows the derivation order, which is
    /// itself unordered; best effort, not contractual.
    pub fn enrich_text(
        &self,
        text: &str,
        target_lang: Option<Language>,
        include_suggestions: bool,
    ) -> Result<TextEnrichment, EnrichError> {
        if text.trim().is_empty() {
            return Err(EnrichError::invalid_input("no text provided"));
        }

        let entities = self.extractor.extract(text)?;

        let translation = match target_lang {
            Some(target) if target != Language::English => {
                Some(self.translate_with_fallback(text, Language::English, target))
            }
            _ => None,
        };

        let suggestions = if include_suggestions {
            Some(self.collect_suggestions(text)?)
        } else {
            None
        };

        info!(
            suggestions = suggestions.as_ref().map(Vec::len),
            translated = translation.is_some(),
            "text enrichment complete"
        );

        Ok(TextEnrichment {
            original_text: text.to_string(),
            entities,
            translation,
            suggestions,
        })
    }

    /// Enriches a photographed travel query.
    ///
    /// Detects the script-implied language, extracts text for English
    /// plus the detected language, and runs the text stages on the
    /// primary block (the English entry when non-empty, otherwise the
    /// detected-language entry). An image with no usable text fails
    /// with [`EnrichError::NoTextRecognized`] before any entity or
    /// translation work runs.
    pub fn enrich_image(
        &self,
        image_bytes: &[u8],
        target_lang: Language,
    ) -> Result<ImageEnrichment, EnrichError> {
        let image = decode_image(image_bytes)?;

        let detected = self.ocr.detect_language(&image);
        let texts = self.ocr.extract_text(&image, &[Language::English, detected]);

        let primary = texts
            .get(&Language::English)
            .filter(|text| !text.is_empty())
            .or_else(|| texts.get(&detected))
            .filter(|text| !text.is_empty())
            .cloned();

        let Some(primary) = primary else {
            debug!(detected_language = %detected, "image produced no usable text");
            return Err(EnrichError::NoTextRecognized);
        };

        let entities = self.extractor.extract(&primary)?;

        let translation = (target_lang != Language::English)
            .then(|| self.translate_with_fallback(&primary, Language::English, target_lang));

        info!(
            detected_language = %detected,
            characters = primary.chars().count(),
            "image enrichment complete"
        );

        Ok(ImageEnrichment {
            detected_language: detected,
            extracted_text: primary,
            translation,
            entities,
        })
    }

    /// Translates between two domain languages.
    ///
    /// Engine failure degrades to the tagged echo fallback; only empty
    /// input is an error.
    pub fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Translation, EnrichError> {
        if text.trim().is_empty() {
            return Err(EnrichError::invalid_input("no text provided"));
        }
        Ok(self.translate_with_fallback(text, source, target))
    }

    /// Translates several texts, preserving input order.
    pub fn batch_translate(
        &self,
        texts: &[String],
        source: Language,
        target: Language,
    ) -> Vec<Translation> {
        texts
            .iter()
            .map(|text| self.translate_with_fallback(text, source, target))
            .collect()
    }

    /// Extracts travel entities from text (standalone operation).
    pub fn extract_entities(&self, text: &str) -> Result<EntityBag, EnrichError> {
        if text.trim().is_empty() {
            return Err(EnrichError::invalid_input("no text provided"));
        }
        self.extractor.extract(text)
    }

    /// Extracts per-language text from an image (standalone operation).
    pub fn extract_text(
        &self,
        image_bytes: &[u8],
        languages: &[Language],
    ) -> Result<ExtractedTextMap, EnrichError> {
        let image = decode_image(image_bytes)?;
        Ok(self.ocr.extract_text(&image, languages))
    }

    /// Calls the translation engine, degrading to the echo fallback on
    /// failure.
    fn translate_with_fallback(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Translation {
        match self
            .translator
            .translate(text, source.translation_code(), target.translation_code())
        {
            Ok(translated) => Translation::translated(translated),
            Err(error) => {
                warn!(%error, target = %target, "translation failed, echoing input");
                Translation::echoed(text)
            }
        }
    }

    /// Derives location queries and gathers non-empty place groups.
    fn collect_suggestions(&self, text: &str) -> Result<Vec<SuggestionGroup>, EnrichError> {
        let locations = self.extractor.locations_for_maps(text)?;

        let mut groups = Vec::new();
        for query in locations.into_iter().take(MAX_SUGGESTION_QUERIES) {
            let places = self.places.search(&query, None, None);
            if places.is_empty() {
                debug!(query = %query, "no places for derived location");
                continue;
            }
            groups.push(SuggestionGroup { query, places });
        }
        Ok(groups)
    }
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher").finish_non_exhaustive()
    }
}
