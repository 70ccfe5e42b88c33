//! Text tokenization for duplication scoring.
//!
//! Text is split on Unicode word boundaries (UAX #29). Han text therefore
//! segments one ideograph per token, while alphabetic scripts keep whole
//! words. Stop words are removed before punctuation is stripped, so a stop
//! word glued to punctuation survives as its bare form.

use ahash::AHashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::config::TokenizerConfig;

/// Configurable word tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: AHashSet<String>,
    strip_punctuation: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

impl Tokenizer {
    /// Build a tokenizer from configuration.
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            stop_words: config.stop_words.iter().cloned().collect(),
            strip_punctuation: config.strip_punctuation,
        }
    }

    /// Split `text` into scoring tokens.
    ///
    /// Blank text yields an empty sequence; every returned token is non-empty.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .filter(|segment| !self.stop_words.contains(*segment))
            .filter_map(|segment| {
                let token = if self.strip_punctuation {
                    strip_punctuation(segment)
                } else {
                    segment.to_string()
                };
                (!token.is_empty()).then_some(token)
            })
            .collect()
    }
}

/// Keep letters, digits (any script, CJK included) and underscores.
fn strip_punctuation(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Tokenize with the default configuration.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}
