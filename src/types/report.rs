use serde::{Deserialize, Serialize};

use super::text::Gospel;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StyleMetrics {
    pub total_words: usize,
    pub unique_words: usize,
    pub vocabulary_size: usize,
    pub verse_count: usize,
    pub lexical_diversity: f64,
    pub avg_words_per_verse: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GospelReport {
    pub name: String,
    pub style_metrics: StyleMetrics,
    pub sentiment: SentimentScore,
    pub top_words: Vec<WordCount>,
    pub word_cloud: Vec<WordCount>,
}

// Field order here is the key order in the exported document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Gospels {
    #[serde(rename = "Matthew")]
    pub matthew: GospelReport,
    #[serde(rename = "Mark")]
    pub mark: GospelReport,
    #[serde(rename = "Luke")]
    pub luke: GospelReport,
}

impl Gospels {
    pub fn get(&self, gospel: Gospel) -> &GospelReport {
        match gospel {
            Gospel::Matthew => &self.matthew,
            Gospel::Mark => &self.mark,
            Gospel::Luke => &self.luke,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OverlapEntry {
    pub word: String,
    pub matthew: usize,
    pub mark: usize,
    pub luke: usize,
    pub total: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Metadata {
    pub generated_at: String,
    pub source: String,
    pub total_overlapping_words: usize,
    pub analysis_type: String,
    pub sentiment_tool: String,
}

/// The single persisted artifact of a run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub metadata: Metadata,
    pub gospels: Gospels,
    pub overlapping_words: Vec<OverlapEntry>,
}
