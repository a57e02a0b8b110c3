use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AnalysisError, Result};
use crate::types::text::Gospel;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Literal strings bracketing the body of a public-domain source file.
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// Reads a source file and returns its body with the boilerplate framing removed.
pub fn load_source(gospel: Gospel, path: &Path, markers: Markers<'_>) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalysisError::MissingSource {
            gospel,
            path: path.to_path_buf(),
        },
        _ => AnalysisError::ReadSource {
            gospel,
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let raw = String::from_utf8(bytes).map_err(|e| AnalysisError::MalformedSource {
        gospel,
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8: {}", e),
    })?;

    let (body, found) = strip_boilerplate(&raw, markers);
    if !found.start {
        tracing::warn!("{}: start marker {:?} not found, using whole file", gospel, markers.start);
    }
    if !found.end {
        tracing::warn!("{}: end marker {:?} not found, reading to end of file", gospel, markers.end);
    }
    tracing::debug!("{}: loaded {} bytes of body text from {}", gospel, body.len(), path.display());
    Ok(body.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkersFound {
    pub start: bool,
    pub end: bool,
}

/// Drops everything up to and including the line holding the start marker, and
/// everything from the end marker on. Absent markers leave that side untouched.
pub fn strip_boilerplate<'a>(raw: &'a str, markers: Markers<'_>) -> (&'a str, MarkersFound) {
    let mut text = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);

    let start_found = match text.find(markers.start) {
        Some(idx) => {
            let after_marker = &text[idx + markers.start.len()..];
            text = match after_marker.find('\n') {
                Some(newline) => &after_marker[newline + 1..],
                None => "",
            };
            true
        }
        None => false,
    };

    // Searched after the start cut so offsets refer to the text actually kept.
    let end_found = match text.find(markers.end) {
        Some(idx) => {
            text = &text[..idx];
            true
        }
        None => false,
    };

    (
        text,
        MarkersFound {
            start: start_found,
            end: end_found,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKERS: Markers<'static> = Markers {
        start: "*** START OF",
        end: "*** END OF",
    };

    #[test]
    fn keeps_only_text_between_markers() {
        let raw = "Title: Matthew\n*** START OF THE PROJECT GUTENBERG EBOOK ***\n001:001 Verse one.\n*** END OF THE PROJECT GUTENBERG EBOOK ***\nLicense text\n";
        let (body, found) = strip_boilerplate(raw, MARKERS);
        assert_eq!(body, "001:001 Verse one.\n");
        assert_eq!(found, MarkersFound { start: true, end: true });
    }

    #[test]
    fn strips_byte_order_mark() {
        let raw = "\u{feff}001:001 In the beginning.";
        let (body, found) = strip_boilerplate(raw, MARKERS);
        assert_eq!(body, "001:001 In the beginning.");
        assert!(!found.start && !found.end);
    }

    #[test]
    fn missing_footer_keeps_the_tail() {
        let raw = "header\n*** START OF X ***\n001:001 a\n001:002 b\n";
        let (body, found) = strip_boilerplate(raw, MARKERS);
        assert_eq!(body, "001:001 a\n001:002 b\n");
        assert!(found.start);
        assert!(!found.end);
    }

    #[test]
    fn end_marker_before_start_marker_is_ignored() {
        let raw = "*** END OF stray\n*** START OF X ***\n001:001 kept\n";
        let (body, found) = strip_boilerplate(raw, MARKERS);
        assert_eq!(body, "001:001 kept\n");
        assert!(!found.end);
    }

    #[test]
    fn footer_is_cut_regardless_of_header_length() {
        let header = "The Project Gutenberg eBook of Matthew\n".repeat(20);
        let raw = format!(
            "\u{feff}{header}*** START OF THE PROJECT GUTENBERG EBOOK ***\n001:001 Verse one.\n001:002 Verse two.\n*** END OF THE PROJECT GUTENBERG EBOOK ***\nProject Gutenberg license and trademark terms.\n"
        );
        let (body, found) = strip_boilerplate(&raw, MARKERS);
        assert_eq!(body, "001:001 Verse one.\n001:002 Verse two.\n");
        assert_eq!(found, MarkersFound { start: true, end: true });
        assert!(!body.contains("license"));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(Gospel::Luke, dir.path(), MARKERS).unwrap_err();
        assert!(matches!(err, AnalysisError::ReadSource { gospel: Gospel::Luke, .. }));
    }

    #[test]
    fn missing_file_is_reported_as_missing_source() {
        let err = load_source(Gospel::Mark, Path::new("/nonexistent/pg8829.txt"), MARKERS).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingSource { gospel: Gospel::Mark, .. }));
    }
}
