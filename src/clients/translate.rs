//! HTTP binding for the sequence-to-sequence translation engine.
//!
//! The translation model runs behind an HTTP endpoint that accepts a
//! JSON body of `{text, source_language_code, target_language_code}`
//! and answers `{translation}`. The binding is a plain
//! [`TranslationEngine`]: it reports failures as errors and leaves the
//! echo-fallback policy to the orchestrator.

use crate::core::errors::{EnrichError, Stage};
use crate::core::traits::TranslationEngine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const TIMEOUT_SECS: u64 = 60;

/// Client for a remote translation service.
#[derive(Debug)]
pub struct HttpTranslator {
    http: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translation: String,
}

impl HttpTranslator {
    /// Creates a translator client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, EnrichError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| EnrichError::unavailable("translator", e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

impl TranslationEngine for HttpTranslator {
    fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, EnrichError> {
        let request = TranslateRequest {
            text,
            source_language_code: source_code,
            target_language_code: target_code,
        };

        let response: TranslateResponse = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json())
            .map_err(|error| EnrichError::engine_call(Stage::Translation, "http call", error))?;

        Ok(response.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_engine_codes() {
        let request = TranslateRequest {
            text: "Hello",
            source_language_code: "eng_Latn",
            target_language_code: "hin_Deva",
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains("\"source_language_code\":\"eng_Latn\""));
        assert!(json.contains("\"target_language_code\":\"hin_Deva\""));
    }

    #[test]
    fn response_body_parses() {
        let parsed: TranslateResponse =
            serde_json::from_str(r#"{"translation": "नमस्ते"}"#).expect("parse");
        assert_eq!(parsed.translation, "नमस्ते");
    }

    #[test]
    fn unreachable_endpoint_is_a_translation_stage_error() {
        let translator = HttpTranslator::new("http://127.0.0.1:9/translate")
            .expect("client should build");
        let err = translator
            .translate("Hello", "eng_Latn", "hin_Deva")
            .expect_err("should fail");
        assert!(matches!(
            err,
            EnrichError::EngineCall {
                stage: Stage::Translation,
                ..
            }
        ));
    }
}
