//! Stopword-delimited noun-phrase chunking.
//!
//! The recognizer seam only reports tagged spans, so the keyword
//! enhancement pass needs its own way to recover the phrase around a
//! lexicon hit. A chunk is a maximal run of tokens with no stopword and
//! no sentence punctuation inside it; token surface forms are kept
//! verbatim. This approximates a parser's noun chunks closely enough
//! for venue phrases like "Red Fort museum" or "good restaurants".

use crate::extractor::lexicon::is_stopword;

/// Splits `text` into noun-phrase chunks.
///
/// Runs are broken by stopwords and by `.,;:!?()` punctuation; tokens
/// keep their original form, joined with single spaces. Empty input
/// yields no chunks.
pub fn noun_phrases(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for raw in text.split_whitespace() {
        // Trailing/leading punctuation both delimits the run and is
        // stripped from the token itself.
        let had_punctuation = raw.contains(is_phrase_punctuation);
        let token = raw.trim_matches(is_phrase_punctuation);

        if token.is_empty() || is_stopword(token) {
            flush(&mut current, &mut phrases);
            continue;
        }

        current.push(token);
        if had_punctuation {
            flush(&mut current, &mut phrases);
        }
    }

    flush(&mut current, &mut phrases);
    phrases
}

fn is_phrase_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '(' | ')' | '"')
}

fn flush(current: &mut Vec<&str>, phrases: &mut Vec<String>) {
    if !current.is_empty() {
        phrases.push(current.join(" "));
        current.clear();
    }
}
