use regex::Regex;

use super::stopwords::StopwordSet;
use crate::error::{AnalysisError, Result};

/// Lower-cases text and pulls out words with a configurable pattern.
///
/// Two views of the same stream are exposed: every word (what the style
/// metrics count) and content words (stopwords and short words removed, what
/// the frequency lists and overlap use).
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_re: Regex,
    stopwords: StopwordSet,
    min_word_length: usize,
}

impl Tokenizer {
    pub fn new(word_pattern: &str, stopwords: StopwordSet, min_word_length: usize) -> Result<Self> {
        let word_re = Regex::new(word_pattern)
            .map_err(|e| AnalysisError::Config(format!("invalid word_pattern '{}': {}", word_pattern, e)))?;
        Ok(Self {
            word_re,
            stopwords,
            min_word_length,
        })
    }

    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn is_content_word(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_length && !self.stopwords.contains(word)
    }

    pub fn content_words(&self, text: &str) -> Vec<String> {
        self.words(text)
            .into_iter()
            .filter(|w| self.is_content_word(w))
            .collect()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}
