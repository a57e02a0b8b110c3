use super::frequency::FrequencyTable;
use crate::types::report::StyleMetrics;

pub const DIVERSITY_PLACES: usize = 4;
pub const AVERAGE_PLACES: usize = 2;
pub const SENTIMENT_PLACES: usize = 4;

/// Rounds to `places` decimals using the exact binary value of `value`, with
/// exact ties going to the even digit. `2.675` is stored just below the tie and
/// therefore rounds to `2.67`.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places, value).parse::<f64>().unwrap_or(value)
}

/// Style metrics over the full word stream of a text (stopwords included).
///
/// `unique_words` and `vocabulary_size` are both the distinct word count.
pub fn style_metrics(all_words: &FrequencyTable, verse_count: usize) -> StyleMetrics {
    let total_words = all_words.total();
    let unique_words = all_words.vocabulary_size();

    let lexical_diversity = if total_words > 0 {
        round_to(unique_words as f64 / total_words as f64, DIVERSITY_PLACES)
    } else {
        0.0
    };
    let avg_words_per_verse = if verse_count > 0 {
        round_to(total_words as f64 / verse_count as f64, AVERAGE_PLACES)
    } else {
        0.0
    };

    StyleMetrics {
        total_words,
        unique_words,
        vocabulary_size: unique_words,
        verse_count,
        lexical_diversity,
        avg_words_per_verse,
    }
}
