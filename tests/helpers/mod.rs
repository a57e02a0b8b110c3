#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use synoptic_reading::Config;
use tempfile::TempDir;

pub const PINNED_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

pub const MATTHEW: &[&str] = &[
    "The book of the genealogy of Jesus Christ, the son of David.",
    "Blessed are the poor in spirit: for theirs is the Kingdom.",
    "Jesus went up into the mountain, and the disciples came.",
];

pub const MARK: &[&str] = &[
    "The beginning of the Good News of Jesus Christ.",
    "Jesus came into Galilee preaching the Good News of the Kingdom.",
];

pub const LUKE: &[&str] = &[
    "Many have undertaken to draw up an account.",
    "Jesus the Christ went up to the temple, and the disciples followed Jesus.",
];

/// A source file framed the way public-domain e-texts are: licence header,
/// start marker, a title block, numbered verses, end marker, licence footer.
/// Verses are numbered `001:001`, `001:002`, ... and wrapped after the first
/// few words to mimic hard line breaks.
pub fn gutenberg_text(title: &str, verses: &[&str]) -> String {
    let mut out = String::new();
    out.push('\u{feff}');
    out.push_str(&format!("The Project Gutenberg eBook of {title}\n\nThis eBook is for the use of anyone anywhere.\n\n"));
    out.push_str(&format!("*** START OF THE PROJECT GUTENBERG EBOOK {} ***\n\n", title.to_uppercase()));
    out.push_str(&format!("{title}\n\n"));
    for (i, verse) in verses.iter().enumerate() {
        let words: Vec<&str> = verse.split_whitespace().collect();
        let (head, tail) = words.split_at(words.len().min(4));
        out.push_str(&format!("001:{:03} {}\n", i + 1, head.join(" ")));
        if !tail.is_empty() {
            out.push_str(&format!("{}\n", tail.join(" ")));
        }
    }
    out.push_str(&format!("\n*** END OF THE PROJECT GUTENBERG EBOOK {} ***\n\n", title.to_uppercase()));
    out.push_str("Updated editions will replace the previous one, the old editions will be renamed.\n");
    out
}

/// Writes the three default source files into a fresh temp dir and returns a
/// config pointing at them with a pinned timestamp.
pub fn setup_sources(matthew: &str, mark: &str, luke: &str) -> (TempDir, Config) {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        data_dir: tmp.path().to_path_buf(),
        output: tmp.path().join("data").join("analysis_results.json"),
        generated_at: Some(PINNED_TIMESTAMP.to_string()),
        ..Config::default()
    };
    write_source(tmp.path(), &config.sources.matthew, matthew);
    write_source(tmp.path(), &config.sources.mark, mark);
    write_source(tmp.path(), &config.sources.luke, luke);
    (tmp, config)
}

pub fn setup_default_sources() -> (TempDir, Config) {
    setup_sources(
        &gutenberg_text("Matthew", MATTHEW),
        &gutenberg_text("Mark", MARK),
        &gutenberg_text("Luke", LUKE),
    )
}

pub fn write_source(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// The binary, run from inside `tmp` so relative defaults resolve there.
#[allow(deprecated)]
pub fn cli_in(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("synoptic_reading").unwrap();
    cmd.current_dir(tmp.path());
    cmd.env_remove("RUST_LOG");
    cmd
}
