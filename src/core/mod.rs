//! The core module of the enrichment pipeline.
//!
//! This module contains the fundamental components shared by every
//! stage:
//! - Error handling and the stage taxonomy
//! - The engine seam traits the orchestrator is built against
//!
//! It also provides re-exports of commonly used types and a logging
//! bootstrap helper.

pub mod errors;
pub mod traits;

pub use errors::{EnrichError, Stage};
pub use traits::{EntityRecognizer, OcrEngine, PlaceSearch, Serialized, TranslationEngine};

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter
/// and formatting layer. It's typically called at the start of an
/// application to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
