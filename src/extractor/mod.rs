//! Keyword-enhanced entity extraction.
//!
//! Wraps the injected recognizer and recovers the venue mentions a
//! general-purpose model misses: any noun phrase containing a travel
//! lexicon keyword is appended to `attractions`, whichever lexicon
//! partition the keyword came from. That single-bucket routing is a
//! deliberate simplification, not per-category dispatch.

pub mod chunker;
pub mod lexicon;

use crate::core::errors::EnrichError;
use crate::core::traits::EntityRecognizer;
use crate::domain::entities::EntityBag;
use chunker::noun_phrases;
use lexicon::TRAVEL_LEXICON;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Minimum length (in characters, exclusive) for a map query string.
const MIN_MAP_QUERY_CHARS: usize = 3;

/// Entity extractor combining a recognizer pass with lexicon matching.
pub struct EntityExtractor {
    recognizer: Arc<dyn EntityRecognizer + Send + Sync>,
}

impl EntityExtractor {
    /// Creates an extractor over the given recognizer handle.
    pub fn new(recognizer: Arc<dyn EntityRecognizer + Send + Sync>) -> Self {
        Self { recognizer }
    }

    /// Extracts travel-relevant entities from `text`.
    ///
    /// Recognizer spans are routed by coarse label, then every noun
    /// phrase containing a lexicon keyword is appended to
    /// `attractions`. Each category is duplicate-free in insertion
    /// order. A recognizer failure propagates; there is no fallback
    /// for that engine.
    pub fn extract(&self, text: &str) -> Result<EntityBag, EnrichError> {
        let mut bag = EntityBag::new();

        for span in self.recognizer.recognize(text)? {
            bag.push_span(span);
        }

        self.enhance_with_keywords(text, &mut bag);

        debug!(
            locations = bag.locations.len(),
            attractions = bag.attractions.len(),
            organizations = bag.organizations.len(),
            misc = bag.misc.len(),
            "entity extraction complete"
        );

        Ok(bag)
    }

    /// Appends keyword-bearing noun phrases to `attractions`.
    fn enhance_with_keywords(&self, text: &str, bag: &mut EntityBag) {
        let text_lower = text.to_lowercase();
        // Chunked once, on first keyword hit.
        let mut phrases: Option<Vec<String>> = None;

        for (_, keywords) in TRAVEL_LEXICON {
            for keyword in *keywords {
                if !text_lower.contains(keyword) {
                    continue;
                }
                let phrases = phrases.get_or_insert_with(|| noun_phrases(text));
                for phrase in phrases.iter() {
                    if phrase.to_lowercase().contains(keyword) {
                        bag.push_attraction(phrase.clone());
                    }
                }
            }
        }
    }

    /// Derives location strings suitable for place-search queries.
    ///
    /// Union of `locations` and `attractions`, keeping strings longer
    /// than three characters. The result is deduplicated and
    /// **unordered**; callers must not depend on iteration order.
    pub fn locations_for_maps(&self, text: &str) -> Result<Vec<String>, EnrichError> {
        let bag = self.extract(text)?;

        let unique: HashSet<String> = bag
            .locations
            .into_iter()
            .chain(bag.attractions)
            .filter(|loc| loc.chars().count() > MIN_MAP_QUERY_CHARS)
            .collect();

        Ok(unique.into_iter().collect())
    }
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor").finish_non_exhaustive()
    }
}
