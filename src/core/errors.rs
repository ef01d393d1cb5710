//! Error types for the enrichment pipeline.
//!
//! This module defines the crate-level error enum and the stage
//! discriminator used to report which external engine a request-time
//! failure came from. Stage-local failures (per-language OCR, per-query
//! place search) are absorbed by their components and never surface
//! here; everything that does surface is either a client error
//! (`InvalidInput`, `ImageDecode`, `NoTextRecognized`) or a pipeline
//! failure (`EngineUnavailable`, `EngineCall`).

use thiserror::Error;

/// Identifies the external engine involved in a request-time failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The named-entity recognizer.
    Recognizer,
    /// Text recognition on a preprocessed image.
    Ocr,
    /// Orientation/script detection on an image.
    ScriptDetection,
    /// The sequence-to-sequence translation engine.
    Translation,
    /// The external place-search service.
    PlaceSearch,
    /// The external geocoding service.
    Geocode,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Recognizer => write!(f, "entity recognition"),
            Stage::Ocr => write!(f, "text recognition"),
            Stage::ScriptDetection => write!(f, "script detection"),
            Stage::Translation => write!(f, "translation"),
            Stage::PlaceSearch => write!(f, "place search"),
            Stage::Geocode => write!(f, "geocoding"),
        }
    }
}

/// Errors surfaced by the enrichment pipeline.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// A required input was missing or empty. Surfaced before any stage
    /// runs; user-visible as a client error.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// The submitted image bytes could not be decoded.
    #[error("image decode")]
    ImageDecode(#[source] image::ImageError),

    /// An engine failed to come up at construction time. A process in
    /// this state must not serve traffic.
    #[error("{engine} unavailable: {message}")]
    EngineUnavailable {
        /// Which engine failed to construct.
        engine: &'static str,
        /// The underlying reason.
        message: String,
    },

    /// A single call to an external engine failed at request time.
    #[error("{stage} failed: {context}")]
    EngineCall {
        /// The stage the failing engine belongs to.
        stage: Stage,
        /// Additional context about the call.
        context: String,
        /// The underlying engine error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// OCR ran but produced no usable text. A user-visible "nothing
    /// found" condition, distinct from an engine failure.
    #[error("no text recognized in image")]
    NoTextRecognized,
}

impl EnrichError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an `EngineUnavailable` error for a construction failure.
    pub fn unavailable(engine: &'static str, message: impl Into<String>) -> Self {
        Self::EngineUnavailable {
            engine,
            message: message.into(),
        }
    }

    /// Creates an `EngineCall` error wrapping an engine failure.
    pub fn engine_call(
        stage: Stage,
        context: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::EngineCall {
            stage,
            context: context.to_string(),
            source: Box::new(source),
        }
    }

    /// Creates an `EngineCall` error from a plain message, for bindings
    /// whose underlying error type is not available.
    pub fn engine_message(stage: Stage, context: &str, message: impl Into<String>) -> Self {
        #[derive(Debug)]
        struct Message(String);

        impl std::fmt::Display for Message {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::error::Error for Message {}

        Self::EngineCall {
            stage,
            context: context.to_string(),
            source: Box::new(Message(message.into())),
        }
    }

    /// True when this error is the caller's fault rather than a
    /// pipeline failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::ImageDecode(_) | Self::NoTextRecognized
        )
    }
}

impl From<image::ImageError> for EnrichError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageDecode(error)
    }
}
