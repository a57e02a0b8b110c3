use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};
use crate::types::text::Gospel;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Sources {
    pub matthew: String,
    pub mark: String,
    pub luke: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            matthew: "pg8828.txt".to_string(),
            mark: "pg8829.txt".to_string(),
            luke: "pg8830.txt".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub sources: Sources,
    pub start_marker: String,
    pub end_marker: String,
    /// Two or three zero-padded groups at line start: `CCC:VVV` or `BBB:CCC:VVV`.
    pub locator_pattern: String,
    /// Applied to lower-cased text; every match is one word.
    pub word_pattern: String,
    pub min_word_length: usize,
    pub stopwords_file: Option<PathBuf>,
    pub extra_stopwords: Vec<String>,
    pub top_words: usize,
    pub word_cloud: usize,
    pub source_label: String,
    pub sentiment_lexicon: Option<PathBuf>,
    /// Pins `metadata.generated_at` so repeated runs are byte-identical.
    pub generated_at: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output: PathBuf::from("data/analysis_results.json"),
            sources: Sources::default(),
            start_marker: "*** START OF".to_string(),
            end_marker: "*** END OF".to_string(),
            locator_pattern: r"(?m)^(\d{3}):(\d{3})(?::(\d{3}))?".to_string(),
            word_pattern: r"\b[a-z]+\b".to_string(),
            min_word_length: 3,
            stopwords_file: None,
            extra_stopwords: Vec::new(),
            top_words: 20,
            word_cloud: 50,
            source_label: "Weymouth New Testament in Modern Speech (1913)".to_string(),
            sentiment_lexicon: None,
            generated_at: None,
        }
    }
}

impl Config {
    pub fn source_file(&self, gospel: Gospel) -> &str {
        match gospel {
            Gospel::Matthew => &self.sources.matthew,
            Gospel::Mark => &self.sources.mark,
            Gospel::Luke => &self.sources.luke,
        }
    }

    pub fn source_path(&self, gospel: Gospel) -> PathBuf {
        self.data_dir.join(self.source_file(gospel))
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    match fs::read_to_string(file_path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(loaded_config) => {
                if loaded_config.top_words == 0 || loaded_config.word_cloud == 0 {
                    Err(AnalysisError::Config(format!(
                        "top_words and word_cloud in {} must be at least 1",
                        file_path.display()
                    )))
                } else {
                    Ok(loaded_config)
                }
            }
            Err(e) => Err(AnalysisError::Config(format!(
                "Failed to parse {}: {}",
                file_path.display(),
                e
            ))),
        },
        Err(e) => Err(AnalysisError::Config(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path.display(),
            e
        ))),
    }
}

/// An explicitly requested file must load; the implicit `config.toml` is optional.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_from_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_config_from_file(default_path)
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}
