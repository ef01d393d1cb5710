//! Image preprocessing and multilingual text extraction.
//!
//! [`OcrProcessor`] owns the injected recognition engine and applies
//! the fixed preprocessing pipeline exactly once per image, however
//! many languages are requested. Per-language recognition failures are
//! isolated: the failing language gets an empty string and the rest
//! continue. Script-based language detection runs on the original,
//! unpreprocessed image and can never fail; any engine error resolves
//! to the English default.

use crate::core::errors::EnrichError;
use crate::core::traits::OcrEngine;
use crate::domain::language::Language;
use crate::domain::response::ExtractedTextMap;
use crate::processors::{adaptive_binarize, nl_means_denoise, BinarizeParams, DenoiseParams};
use crate::utils::dynamic_to_gray;
use image::{DynamicImage, GrayImage};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed parameters of the preprocessing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreprocessConfig {
    /// Adaptive binarization parameters.
    pub binarize: BinarizeParams,
    /// Non-local-means denoising parameters.
    pub denoise: DenoiseParams,
}

/// Multilingual OCR front-end over an injected engine.
pub struct OcrProcessor {
    engine: Arc<dyn OcrEngine + Send + Sync>,
    config: PreprocessConfig,
}

impl OcrProcessor {
    /// Creates a processor with the default preprocessing parameters.
    pub fn new(engine: Arc<dyn OcrEngine + Send + Sync>) -> Self {
        Self::with_config(engine, PreprocessConfig::default())
    }

    /// Creates a processor with explicit preprocessing parameters.
    pub fn with_config(engine: Arc<dyn OcrEngine + Send + Sync>, config: PreprocessConfig) -> Self {
        Self { engine, config }
    }

    /// Normalizes a photograph for recognition.
    ///
    /// Grayscale, Gaussian-weighted adaptive binarization, then
    /// non-local-means denoising, in that order.
    pub fn preprocess(&self, image: &DynamicImage) -> GrayImage {
        let gray = dynamic_to_gray(image);
        let binary = adaptive_binarize(&gray, self.config.binarize);
        nl_means_denoise(&binary, self.config.denoise)
    }

    /// Extracts text per requested language.
    ///
    /// The image is preprocessed once; each language then runs through
    /// the engine with its script code. A failing language is recorded
    /// as an empty string and the others continue; the returned map
    /// always carries exactly the requested languages as keys.
    pub fn extract_text(&self, image: &DynamicImage, languages: &[Language]) -> ExtractedTextMap {
        let processed = self.preprocess(image);

        let mut results = ExtractedTextMap::new();
        for &language in languages {
            let text = match self.engine.recognize(&processed, language.ocr_code()) {
                Ok(text) => text.trim().to_string(),
                Err(error) => {
                    warn!(language = %language, %error, "recognition failed for language");
                    String::new()
                }
            };
            results.insert(language, text);
        }
        results
    }

    /// Detects the language implied by the dominant script.
    ///
    /// Runs the engine's orientation/script detection on the original
    /// image and maps the reported script through the fixed table.
    /// Detection failures are swallowed and resolve to English.
    pub fn detect_language(&self, image: &DynamicImage) -> Language {
        match self.engine.detect_script(image) {
            Ok(diagnostics) => match parse_script(&diagnostics) {
                Some(script) => {
                    let language = Language::from_script(&script);
                    debug!(script = %script, language = %language, "script detection");
                    language
                }
                None => {
                    warn!("script detection output carried no script line");
                    Language::English
                }
            },
            Err(error) => {
                warn!(%error, "script detection failed, defaulting to english");
                Language::English
            }
        }
    }
}

impl std::fmt::Debug for OcrProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrProcessor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parses the `Script:` field out of a detection diagnostic block.
fn parse_script(diagnostics: &str) -> Option<String> {
    diagnostics.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim().eq_ignore_ascii_case("script") {
            let script = value.trim();
            (!script.is_empty()).then(|| script.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Stage;
    use image::{Luma, Rgb, RgbImage};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Engine double with canned per-code outputs and a failure set.
    #[derive(Default)]
    struct ScriptedEngine {
        texts: HashMap<&'static str, &'static str>,
        failing_codes: Vec<&'static str>,
        osd: Option<&'static str>,
        osd_fails: bool,
        seen_codes: Mutex<Vec<String>>,
    }

    impl OcrEngine for ScriptedEngine {
        fn recognize(&self, _image: &GrayImage, lang_code: &str) -> Result<String, EnrichError> {
            self.seen_codes.lock().unwrap().push(lang_code.to_string());
            if self.failing_codes.contains(&lang_code) {
                return Err(EnrichError::engine_message(
                    Stage::Ocr,
                    "recognition",
                    format!("engine rejected code {lang_code}"),
                ));
            }
            Ok(self.texts.get(lang_code).copied().unwrap_or("").to_string())
        }

        fn detect_script(&self, _image: &DynamicImage) -> Result<String, EnrichError> {
            if self.osd_fails {
                return Err(EnrichError::engine_message(
                    Stage::ScriptDetection,
                    "osd",
                    "too few characters",
                ));
            }
            Ok(self.osd.unwrap_or("").to_string())
        }
    }

    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(24, 24, Rgb([200, 200, 200])))
    }

    #[test]
    fn preprocess_outputs_binary_bitmap() {
        let processor = OcrProcessor::new(Arc::new(ScriptedEngine::default()));
        let processed = processor.preprocess(&test_image());
        assert_eq!(processed.dimensions(), (24, 24));
        assert!(processed.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn extract_text_keys_match_requested_languages() {
        let mut texts = HashMap::new();
        texts.insert("eng", "  India Gate  ");
        let engine = ScriptedEngine {
            texts,
            failing_codes: vec!["hin"],
            ..Default::default()
        };
        let processor = OcrProcessor::new(Arc::new(engine));

        let map = processor.extract_text(&test_image(), &[Language::English, Language::Hindi]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Language::English).map(String::as_str), Some("India Gate"));
        // The failing language is present with an empty value.
        assert_eq!(map.get(&Language::Hindi).map(String::as_str), Some(""));
    }

    #[test]
    fn languages_map_to_engine_codes() {
        let engine = Arc::new(ScriptedEngine::default());
        let processor = OcrProcessor::new(engine.clone());

        processor.extract_text(&test_image(), &[Language::Tamil, Language::English]);
        let seen = engine.seen_codes.lock().unwrap();
        assert_eq!(*seen, vec!["tam".to_string(), "eng".to_string()]);
    }

    #[test]
    fn detect_language_parses_script_line() {
        let engine = ScriptedEngine {
            osd: Some("Orientation in degrees: 0\nScript: Devanagari\nScript confidence: 1.57"),
            ..Default::default()
        };
        let processor = OcrProcessor::new(Arc::new(engine));
        assert_eq!(processor.detect_language(&test_image()), Language::Hindi);
    }

    #[test]
    fn detect_language_swallows_engine_failure() {
        let engine = ScriptedEngine {
            osd_fails: true,
            ..Default::default()
        };
        let processor = OcrProcessor::new(Arc::new(engine));
        assert_eq!(processor.detect_language(&test_image()), Language::English);
    }

    #[test]
    fn detect_language_defaults_without_script_line() {
        let engine = ScriptedEngine {
            osd: Some("Orientation in degrees: 180"),
            ..Default::default()
        };
        let processor = OcrProcessor::new(Arc::new(engine));
        assert_eq!(processor.detect_language(&test_image()), Language::English);
    }

    #[test]
    fn parse_script_handles_whitespace_and_case() {
        assert_eq!(parse_script("script:  Tamil \n"), Some("Tamil".to_string()));
        assert_eq!(parse_script("Script:"), None);
        assert_eq!(parse_script("no diagnostics"), None);
    }

    #[test]
    fn preprocess_runs_once_for_many_languages() {
        // Indirect check: a uniform bright image binarizes to all-255,
        // and both languages see the same processed bitmap (the double
        // returns per-code text, so equality of outputs is enough).
        let mut texts = HashMap::new();
        texts.insert("eng", "same");
        texts.insert("hin", "same");
        let processor = OcrProcessor::new(Arc::new(ScriptedEngine {
            texts,
            ..Default::default()
        }));
        let map = processor.extract_text(&test_image(), &[Language::English, Language::Hindi]);
        assert_eq!(map.get(&Language::English), map.get(&Language::Hindi));
    }

    #[test]
    fn preprocess_separates_text_from_background() {
        let mut img = RgbImage::from_pixel(32, 32, Rgb([230, 230, 230]));
        for x in 8..24 {
            img.put_pixel(x, 16, Rgb([10, 10, 10]));
        }
        let processor = OcrProcessor::new(Arc::new(ScriptedEngine::default()));
        let processed = processor.preprocess(&DynamicImage::ImageRgb8(img));
        assert_eq!(processed.get_pixel(16, 16), &Luma([0u8]));
        assert_eq!(processed.get_pixel(2, 2), &Luma([255u8]));
    }
}
