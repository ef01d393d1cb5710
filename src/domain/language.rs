//! Language identifiers and fixed engine-code lookup tables.
//!
//! Every public operation in the pipeline speaks in domain language
//! names; the engine-specific codes (OCR script codes, translation
//! model codes) are mapped through the fixed tables in this module and
//! never leak into the public surface. Unknown names resolve with a
//! warn-and-default policy rather than an error.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A language supported by the pipeline.
///
/// The set is the union of what the OCR engine and the translation
/// engine support; a language missing from one of the two tables falls
/// back to that engine's default code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Tamil,
    Telugu,
    Bengali,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Urdu,
}

impl Language {
    /// Returns the domain name for this language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Marathi => "marathi",
            Language::Tamil => "tamil",
            Language::Telugu => "telugu",
            Language::Bengali => "bengali",
            Language::Gujarati => "gujarati",
            Language::Kannada => "kannada",
            Language::Malayalam => "malayalam",
            Language::Punjabi => "punjabi",
            Language::Urdu => "urdu",
        }
    }

    /// Parses a domain language name, case-insensitively.
    pub fn parse(name: &str) -> Option<Language> {
        match name.trim().to_lowercase().as_str() {
            "english" => Some(Language::English),
            "hindi" => Some(Language::Hindi),
            "marathi" => Some(Language::Marathi),
            "tamil" => Some(Language::Tamil),
            "telugu" => Some(Language::Telugu),
            "bengali" => Some(Language::Bengali),
            "gujarati" => Some(Language::Gujarati),
            "kannada" => Some(Language::Kannada),
            "malayalam" => Some(Language::Malayalam),
            "punjabi" => Some(Language::Punjabi),
            "urdu" => Some(Language::Urdu),
            _ => None,
        }
    }

    /// Parses a domain language name, defaulting to English for
    /// unrecognized input.
    pub fn parse_or_default(name: &str) -> Language {
        Language::parse(name).unwrap_or_else(|| {
            warn!(name, "unrecognized language name, defaulting to english");
            Language::English
        })
    }

    /// Returns the OCR engine's script/language code.
    pub fn ocr_code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Hindi => "hin",
            Language::Marathi => "mar",
            Language::Tamil => "tam",
            Language::Telugu => "tel",
            Language::Bengali => "ben",
            Language::Gujarati => "guj",
            Language::Kannada => "kan",
            Language::Malayalam => "mal",
            Language::Punjabi => "pan",
            Language::Urdu => "urd",
        }
    }

    /// Returns the translation engine's language code.
    pub fn translation_code(&self) -> &'static str {
        match self {
            Language::English => "eng_Latn",
            Language::Hindi => "hin_Deva",
            Language::Marathi => "mar_Deva",
            Language::Tamil => "tam_Taml",
            Language::Telugu => "tel_Telu",
            Language::Bengali => "ben_Beng",
            Language::Gujarati => "guj_Gujr",
            Language::Kannada => "kan_Knda",
            Language::Malayalam => "mal_Mlym",
            Language::Punjabi => "pan_Guru",
            Language::Urdu => "urd_Arab",
        }
    }

    /// Maps a detected script name to a language.
    ///
    /// The table covers the scripts the detection engine reports for the
    /// supported languages; unmapped scripts resolve to English.
    pub fn from_script(script: &str) -> Language {
        match script.trim() {
            "Devanagari" => Language::Hindi,
            "Latin" => Language::English,
            "Tamil" => Language::Tamil,
            "Telugu" => Language::Telugu,
            "Bengali" => Language::Bengali,
            other => {
                if !other.is_empty() {
                    warn!(script = other, "unmapped script, defaulting to english");
                }
                Language::English
            }
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
