use std::path::Path;

use regex::{Captures, Regex};

use crate::error::{AnalysisError, Result};
use crate::types::text::{Gospel, Locator, Verse};

/// Splits a cleaned body into verses keyed by their locators.
///
/// Text after one locator and before the next belongs to the first, with runs of
/// whitespace collapsed to single spaces. Anything before the first locator is
/// leftover header and is dropped.
pub fn parse_verses(gospel: Gospel, path: &Path, body: &str, locator_re: &Regex) -> Result<Vec<Verse>> {
    let malformed = |reason: String| AnalysisError::MalformedSource {
        gospel,
        path: path.to_path_buf(),
        reason,
    };

    let matches: Vec<Captures<'_>> = locator_re.captures_iter(body).collect();
    if matches.is_empty() {
        return Err(malformed("no verse locators found".to_string()));
    }

    let first_start = matches[0].get(0).map_or(0, |m| m.start());
    let header_lines = body[..first_start].lines().filter(|l| !l.trim().is_empty()).count();
    if header_lines > 0 {
        tracing::warn!("{}: discarded {} header line(s) before the first verse", gospel, header_lines);
    }

    let mut verses: Vec<Verse> = Vec::with_capacity(matches.len());
    for (index, caps) in matches.iter().enumerate() {
        let whole = caps.get(0).ok_or_else(|| malformed("empty locator match".to_string()))?;
        let locator = locator_from_captures(gospel, caps).map_err(&malformed)?;

        if let Some(previous) = verses.last() {
            if locator <= previous.locator {
                return Err(malformed(format!(
                    "locator {} follows {} (locators must increase)",
                    locator, previous.locator
                )));
            }
        }

        let text_end = matches
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |m| m.start());
        let text = body[whole.end()..text_end].split_whitespace().collect::<Vec<_>>().join(" ");

        verses.push(Verse { locator, text });
    }

    tracing::debug!("{}: segmented {} verses", gospel, verses.len());
    Ok(verses)
}

fn locator_from_captures(gospel: Gospel, caps: &Captures<'_>) -> std::result::Result<Locator, String> {
    let group = |i: usize| -> std::result::Result<Option<u32>, String> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse::<u32>()
                .map(Some)
                .map_err(|e| format!("bad locator group '{}': {}", m.as_str(), e)),
            None => Ok(None),
        }
    };

    match (group(1)?, group(2)?, group(3)?) {
        (Some(book), Some(chapter), Some(verse)) => Ok(Locator { book, chapter, verse }),
        (Some(chapter), Some(verse), None) => Ok(Locator {
            book: gospel.book_number(),
            chapter,
            verse,
        }),
        _ => Err(format!(
            "locator pattern must capture chapter and verse groups, got '{}'",
            caps.get(0).map_or("", |m| m.as_str())
        )),
    }
}
