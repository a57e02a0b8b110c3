use regex::Regex;

use crate::analysis::metrics::style_metrics;
use crate::analysis::overlap::overlapping_words;
use crate::analysis::sentiment::{check_bounds, Lexicon, LexiconScorer, SentimentModel};
use crate::analysis::{FrequencyTable, StopwordSet, Tokenizer};
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::parsing::{load_source, parse_verses, Markers};
use crate::types::report::{AnalysisResult, GospelReport, Gospels, Metadata};
use crate::types::text::{Gospel, Text};

pub const ANALYSIS_TYPE: &str = "whole_gospel_level";

/// Per-text output plus the content-word table kept for the overlap step.
#[derive(Debug, Clone)]
pub struct TextAnalysis {
    pub gospel: Gospel,
    pub report: GospelReport,
    pub all_words: FrequencyTable,
    pub content_words: FrequencyTable,
}

/// The load, segment, tokenize, aggregate, score chain, with every pattern and
/// word list resolved up front from a [`Config`].
pub struct Pipeline {
    config: Config,
    locator_re: Regex,
    tokenizer: Tokenizer,
    sentiment: Box<dyn SentimentModel>,
}

impl Pipeline {
    pub fn from_config(config: &Config) -> Result<Self> {
        let locator_re = Regex::new(&config.locator_pattern).map_err(|e| {
            AnalysisError::Config(format!("invalid locator_pattern '{}': {}", config.locator_pattern, e))
        })?;

        let stopwords = StopwordSet::load(config.stopwords_file.as_deref(), &config.extra_stopwords)?;
        let tokenizer = Tokenizer::new(&config.word_pattern, stopwords, config.min_word_length)?;

        let lexicon = match &config.sentiment_lexicon {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::builtin()?,
        };
        tracing::debug!(
            "pipeline ready: {} stopwords, {} lexicon entries",
            tokenizer.stopwords().len(),
            lexicon.len()
        );

        Ok(Self {
            config: config.clone(),
            locator_re,
            tokenizer,
            sentiment: Box::new(LexiconScorer::new(lexicon)),
        })
    }

    /// Swaps in a different sentiment model; nothing else changes.
    pub fn with_sentiment_model(mut self, model: Box<dyn SentimentModel>) -> Self {
        self.sentiment = model;
        self
    }

    pub fn load_text(&self, gospel: Gospel) -> Result<Text> {
        let path = self.config.source_path(gospel);
        let markers = Markers {
            start: &self.config.start_marker,
            end: &self.config.end_marker,
        };
        let body = load_source(gospel, &path, markers)?;
        let verses = parse_verses(gospel, &path, &body, &self.locator_re)?;
        Ok(Text {
            gospel,
            source_path: path,
            verses,
        })
    }

    pub fn analyze_text(&self, text: &Text) -> Result<TextAnalysis> {
        let gospel = text.gospel;
        let body = text.body();

        let words = self.tokenizer.words(&body);
        let all_words = FrequencyTable::from_words(&words);
        let content_words = FrequencyTable::from_words(words.iter().filter(|w| self.tokenizer.is_content_word(w)));

        let metrics = style_metrics(&all_words, text.verses.len());
        tracing::debug!(
            "{}: {} words, {} distinct, {} content words from {}",
            gospel,
            metrics.total_words,
            metrics.vocabulary_size,
            content_words.total(),
            text.source_path.display()
        );

        let sentiment = self
            .sentiment
            .score(&body)
            .and_then(check_bounds)
            .map_err(|message| AnalysisError::SentimentModel { gospel, message })?;

        Ok(TextAnalysis {
            gospel,
            report: GospelReport {
                name: gospel.name().to_string(),
                style_metrics: metrics,
                sentiment,
                top_words: content_words.most_common(self.config.top_words),
                word_cloud: content_words.most_common(self.config.word_cloud),
            },
            all_words,
            content_words,
        })
    }

    pub fn analyze_gospel(&self, gospel: Gospel) -> Result<TextAnalysis> {
        tracing::info!("Analyzing {}...", gospel);
        let text = self.load_text(gospel)?;
        self.analyze_text(&text)
    }

    /// Analyses all three gospels and merges them. The first failure aborts
    /// the run.
    pub fn run(&self) -> Result<AnalysisResult> {
        let matthew = self.analyze_gospel(Gospel::Matthew)?;
        let mark = self.analyze_gospel(Gospel::Mark)?;
        let luke = self.analyze_gospel(Gospel::Luke)?;
        Ok(self.merge(matthew, mark, luke))
    }

    pub fn merge(&self, matthew: TextAnalysis, mark: TextAnalysis, luke: TextAnalysis) -> AnalysisResult {
        let overlap = overlapping_words(&matthew.content_words, &mark.content_words, &luke.content_words);
        tracing::info!("{} words shared by all three gospels", overlap.len());

        AnalysisResult {
            metadata: Metadata {
                generated_at: self.generated_at(),
                source: self.config.source_label.clone(),
                total_overlapping_words: overlap.len(),
                analysis_type: ANALYSIS_TYPE.to_string(),
                sentiment_tool: self.sentiment.name().to_string(),
            },
            gospels: Gospels {
                matthew: matthew.report,
                mark: mark.report,
                luke: luke.report,
            },
            overlapping_words: overlap,
        }
    }

    fn generated_at(&self) -> String {
        match &self.config.generated_at {
            Some(pinned) => pinned.clone(),
            None => chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }
    }
}

/// Builds a pipeline from `config` and runs it over the configured sources.
pub fn run_analysis(config: &Config) -> Result<AnalysisResult> {
    Pipeline::from_config(config)?.run()
}

/// `Matthew=path, Mark=path, Luke=path`, for the startup log line.
pub fn describe_sources(config: &Config) -> String {
    Gospel::ALL
        .iter()
        .map(|&g| format!("{}={}", g, config.source_path(g).display()))
        .collect::<Vec<_>>()
        .join(", ")
}
