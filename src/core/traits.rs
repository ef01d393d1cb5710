//! Engine seams for the enrichment pipeline.
//!
//! Every pretrained model and external service the pipeline depends on
//! (named-entity recognizer, OCR engine, translation engine, place
//! search) sits behind one of these traits. The orchestrator receives
//! the handles at construction time, so production bindings and test
//! doubles plug in the same way and no engine lives in process-wide
//! state.
//!
//! The traits are object-safe and are shared as
//! `Arc<dyn Trait + Send + Sync>`. A binding that is not internally
//! thread-safe can be made shareable with [`Serialized`], which guards
//! every call with a mutex.

use crate::core::errors::EnrichError;
use crate::domain::entities::EntitySpan;
use crate::domain::place::Place;
use image::{DynamicImage, GrayImage};
use std::sync::Mutex;

/// A pretrained named-entity recognizer.
///
/// Given text, returns spans tagged with coarse categories. The
/// extractor has no fallback for this engine: a failure here is a
/// pipeline failure.
pub trait EntityRecognizer {
    /// Runs recognition over `text` and returns the tagged spans.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, EnrichError>;
}

/// An optical character recognition engine.
///
/// Recognition receives an already-preprocessed single-channel bitmap
/// and an engine-specific script/language code; the pipeline configures
/// it for a single uniform block of text. Script detection runs on the
/// original, unpreprocessed image.
pub trait OcrEngine {
    /// Extracts text from `image` using the given script/language code.
    fn recognize(&self, image: &GrayImage, lang_code: &str) -> Result<String, EnrichError>;

    /// Runs orientation/script detection and returns the engine's
    /// free-text diagnostic block (expected to contain a `Script:`
    /// line).
    fn detect_script(&self, image: &DynamicImage) -> Result<String, EnrichError>;
}

/// A pretrained sequence-to-sequence translation engine.
///
/// Language codes are engine-specific (see
/// [`Language::translation_code`](crate::domain::language::Language::translation_code));
/// callers of the pipeline never pass them directly.
pub trait TranslationEngine {
    /// Translates `text` from `source_code` to `target_code`.
    fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, EnrichError>;
}

/// An external place-search service.
///
/// The search contract is infallible from the orchestrator's point of
/// view: implementations absorb transport and service errors, log them,
/// and return an empty list.
pub trait PlaceSearch {
    /// Searches for places matching `query`, optionally biased around a
    /// `"lat,lng"` center with a radius in meters.
    fn search(&self, query: &str, location: Option<&str>, radius: Option<u32>) -> Vec<Place>;
}

/// Mutex wrapper that makes a non-thread-safe engine binding shareable.
///
/// Concurrent requests invoke the engines concurrently; a binding whose
/// underlying library is not safe for concurrent inference calls must
/// serialize access. Wrapping it in `Serialized` enforces that policy
/// while keeping the trait surface unchanged.
#[derive(Debug)]
pub struct Serialized<E> {
    inner: Mutex<E>,
}

impl<E> Serialized<E> {
    /// Wraps `engine` so that every trait call takes the mutex.
    pub fn new(engine: E) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, E> {
        // A poisoned engine mutex means a panic mid-inference; the
        // engine state is request-scoped on our side, so recover.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<E: EntityRecognizer> EntityRecognizer for Serialized<E> {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, EnrichError> {
        self.lock().recognize(text)
    }
}

impl<E: OcrEngine> OcrEngine for Serialized<E> {
    fn recognize(&self, image: &GrayImage, lang_code: &str) -> Result<String, EnrichError> {
        self.lock().recognize(image, lang_code)
    }

    fn detect_script(&self, image: &DynamicImage) -> Result<String, EnrichError> {
        self.lock().detect_script(image)
    }
}

impl<E: TranslationEngine> TranslationEngine for Serialized<E> {
    fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, EnrichError> {
        self.lock().translate(text, source_code, target_code)
    }
}

impl<E: PlaceSearch> PlaceSearch for Serialized<E> {
    fn search(&self, query: &str, location: Option<&str>, radius: Option<u32>) -> Vec<Place> {
        self.lock().search(query, location, radius)
    }
}
