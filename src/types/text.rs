use std::fmt;
use std::path::PathBuf;

/// The three synoptic gospels, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gospel {
    Matthew,
    Mark,
    Luke,
}

impl Gospel {
    pub const ALL: [Gospel; 3] = [Gospel::Matthew, Gospel::Mark, Gospel::Luke];

    pub fn name(self) -> &'static str {
        match self {
            Gospel::Matthew => "Matthew",
            Gospel::Mark => "Mark",
            Gospel::Luke => "Luke",
        }
    }

    /// Position of the book in the protestant canon, used when a source file
    /// only carries `chapter:verse` locators.
    pub fn book_number(self) -> u32 {
        match self {
            Gospel::Matthew => 40,
            Gospel::Mark => 41,
            Gospel::Luke => 42,
        }
    }
}

impl fmt::Display for Gospel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locator {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}:{:03}:{:03}", self.book, self.chapter, self.verse)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verse {
    pub locator: Locator,
    pub text: String,
}

/// One loaded gospel. Lives only until its statistics have been aggregated.
#[derive(Debug, Clone)]
pub struct Text {
    pub gospel: Gospel,
    pub source_path: PathBuf,
    pub verses: Vec<Verse>,
}

impl Text {
    /// Verse bodies joined with single spaces; what the word counter and
    /// sentiment model both see.
    pub fn body(&self) -> String {
        let mut body = String::new();
        for verse in &self.verses {
            if verse.text.is_empty() {
                continue;
            }
            if !body.is_empty() {
                body.push(' ');
            }
            body.push_str(&verse.text);
        }
        body
    }
}
