use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::metrics::{round_to, SENTIMENT_PLACES};
use crate::error::{AnalysisError, Result};
use crate::types::report::SentimentScore;

const BUILTIN_LEXICON: &str = include_str!("../../data/sentiment_lexicon.json");

const NEGATIONS: &[&str] = &["not", "never", "no", "nor", "neither"];

/// Anything that turns a block of text into a polarity/subjectivity pair.
///
/// The call is pure and synchronous. An `Err` aborts the run; it is never retried.
pub trait SentimentModel {
    fn name(&self) -> &str;

    fn score(&self, text: &str) -> std::result::Result<SentimentScore, String>;
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl LexiconEntry {
    fn is_intensifier(&self) -> bool {
        (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

/// Word-level sentiment lexicon, keyed by lower-case word.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LEXICON)
            .map_err(|e| AnalysisError::Config(format!("built-in sentiment lexicon is invalid: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Config(format!("Failed to read sentiment lexicon {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents).map_err(|e| {
            AnalysisError::Config(format!("Failed to parse sentiment lexicon {}: {}", path.display(), e))
        })
    }

    fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let entries: HashMap<String, LexiconEntry> = serde_json::from_str(raw)?;
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(word, entry)| (word.to_lowercase(), entry))
                .collect(),
        })
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Averages the lexicon scores of every matched word.
///
/// An intensifier directly before a scored word scales that word and is not
/// scored itself. A negation directly before a scored word (or before its
/// intensifier) flips and halves its polarity. Text with no matches is neutral
/// and objective.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Lexicon::builtin()?))
    }
}

impl SentimentModel for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn score(&self, text: &str) -> std::result::Result<SentimentScore, String> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut assessed = 0usize;

        let mut negated = false;
        let mut intensity: Option<f64> = None;

        for (i, word) in words.iter().enumerate() {
            if NEGATIONS.contains(word) {
                negated = true;
                intensity = None;
                continue;
            }
            let Some(entry) = self.lexicon.get(word) else {
                negated = false;
                intensity = None;
                continue;
            };

            let next_is_scored = words.get(i + 1).is_some_and(|next| self.lexicon.get(next).is_some());
            if entry.is_intensifier() && next_is_scored {
                intensity = Some(intensity.unwrap_or(1.0) * entry.intensity);
                continue;
            }

            let scale = intensity.take().unwrap_or(1.0);
            let mut polarity = entry.polarity * scale;
            let subjectivity = (entry.subjectivity * scale).clamp(0.0, 1.0);
            if negated {
                polarity *= -0.5;
                negated = false;
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity;
            assessed += 1;
        }

        if assessed == 0 {
            return Ok(SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let n = assessed as f64;
        Ok(SentimentScore {
            polarity: round_to((polarity_sum / n).clamp(-1.0, 1.0), SENTIMENT_PLACES),
            subjectivity: round_to((subjectivity_sum / n).clamp(0.0, 1.0), SENTIMENT_PLACES),
        })
    }
}

/// Rejects scores outside `[-1, 1]` x `[0, 1]`, including NaN.
pub fn check_bounds(score: SentimentScore) -> std::result::Result<SentimentScore, String> {
    if !(-1.0..=1.0).contains(&score.polarity) {
        return Err(format!("polarity {} outside [-1, 1]", score.polarity));
    }
    if !(0.0..=1.0).contains(&score.subjectivity) {
        return Err(format!("subjectivity {} outside [0, 1]", score.subjectivity));
    }
    Ok(score)
}
