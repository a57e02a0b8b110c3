pub mod frequency;
pub mod metrics;
pub mod overlap;
pub mod sentiment;
pub mod stopwords;
pub mod tokenizer;

// Re-export the stage types the pipeline composes
pub use frequency::FrequencyTable;
pub use metrics::{round_to, style_metrics};
pub use overlap::overlapping_words;
pub use sentiment::{Lexicon, LexiconScorer, SentimentModel};
pub use stopwords::StopwordSet;
pub use tokenizer::Tokenizer;
