//! Text tokenizer for boost matching
//!
//! Splits text into word runs, then lower-cases and stems each run so that
//! inflected forms ("Löfvens", "löfven") land on the same token.

use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

lazy_static! {
    // ASCII word characters, hyphen, and the whole U+00C0..U+017F block.
    // The block also holds the signs × (U+00D7) and ÷ (U+00F7), which count as words.
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z0-9_\-\u{00C0}-\u{017F}]+").unwrap();
}

/// Snowball stemming language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemLanguage {
    #[default]
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    English,
    German,
}

impl StemLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            StemLanguage::Swedish => Algorithm::Swedish,
            StemLanguage::Norwegian => Algorithm::Norwegian,
            StemLanguage::Danish => Algorithm::Danish,
            StemLanguage::Finnish => Algorithm::Finnish,
            StemLanguage::English => Algorithm::English,
            StemLanguage::German => Algorithm::German,
        }
    }
}

/// Stemming tokenizer
pub struct Tokenizer {
    stemmer: Stemmer,
    language: StemLanguage,
}

impl Tokenizer {
    pub fn new(language: StemLanguage) -> Self {
        Self {
            stemmer: Stemmer::create(language.algorithm()),
            language,
        }
    }

    pub fn swedish() -> Self {
        Self::new(StemLanguage::Swedish)
    }

    pub fn language(&self) -> StemLanguage {
        self.language
    }

    /// Tokenize text into ordered stems.
    ///
    /// Order and duplicates are preserved; n-gram matching depends on both.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .map(|word| self.stem(word.as_str()))
            .collect()
    }

    /// Stem a single word.
    ///
    /// The word is lower-cased before stemming as well as after: Snowball
    /// suffix rules only fire on lower-case input.
    pub fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        self.stemmer.stem(&lowered).to_lowercase()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::swedish()
    }
}

/// Distinct tokens, used as the store lookup key set
pub fn unique_tokens(tokens: &[String]) -> BTreeSet<String> {
    tokens.iter().cloned().collect()
}
