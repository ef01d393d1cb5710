//! # Tourlens
//!
//! A Rust library that answers natural-language or photographed travel
//! queries by combining named-entity extraction, multilingual OCR
//! preprocessing, machine translation, and external place lookup into a
//! single enriched response.
//!
//! ## Features
//!
//! - Keyword-enhanced entity extraction over a pluggable recognizer
//! - Fixed image preprocessing pipeline (grayscale, adaptive
//!   binarization, non-local-means denoising) for signage photographs
//! - Per-language OCR with per-language failure isolation
//! - Script-based language detection with a safe English default
//! - Orchestrated text and image enrichment with graceful degradation
//!   of translation and place-search stages
//!
//! ## Modules
//!
//! * [`core`] - Error handling and the engine seam traits
//! * [`domain`] - Languages, entities, places, and response types
//! * [`extractor`] - Keyword-enhanced entity extraction
//! * [`ocr`] - Image preprocessing and multilingual text extraction
//! * [`pipeline`] - The enrichment orchestrator
//! * [`clients`] - HTTP bindings for translation and place search
//! * [`processors`] - Image processing operations
//! * [`utils`] - Image decoding helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tourlens::prelude::*;
//! use tourlens::clients::{HttpTranslator, PlacesClient};
//!
//! # fn engines() -> (Arc<dyn tourlens::core::EntityRecognizer + Send + Sync>,
//! #                  Arc<dyn tourlens::core::OcrEngine + Send + Sync>) { unimplemented!() }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (recognizer, ocr_engine) = engines();
//! let translator = Arc::new(HttpTranslator::new("http://localhost:8090/translate")?);
//! let places = Arc::new(PlacesClient::new(std::env::var("MAPS_API_KEY")?)?);
//!
//! let enricher = Enricher::new(recognizer, ocr_engine, translator, places);
//!
//! let response = enricher.enrich_text(
//!     "I want to visit the Taj Mahal in Agra",
//!     Some(Language::Hindi),
//!     true,
//! )?;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod core;
pub mod domain;
pub mod extractor;
pub mod ocr;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use tourlens::prelude::*;
/// ```
///
/// Included items focus on the most common tasks: the orchestrator,
/// the domain language and response types, and the error enum. For
/// engine bindings and lower-level components import directly from the
/// respective modules (e.g. `tourlens::clients`, `tourlens::ocr`).
pub mod prelude {
    pub use crate::core::{EnrichError, Stage};
    pub use crate::domain::{
        EntityBag, ImageEnrichment, Language, Place, SuggestionGroup, TextEnrichment, Translation,
    };
    pub use crate::pipeline::Enricher;
}
