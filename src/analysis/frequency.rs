use std::collections::HashMap;

use crate::types::report::WordCount;

/// Word occurrence counts for one text.
///
/// Words get an id in first-seen order; that order is the tie-break when
/// counts are equal in a top-N list.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    str_to_id: HashMap<String, u32>,
    id_to_str: Vec<String>, // Index is the u32 ID
    counts: Vec<usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.record(word.as_ref());
        }
        table
    }

    pub fn record(&mut self, word: &str) {
        let id = match self.str_to_id.get(word) {
            Some(id) => *id,
            None => {
                let id = self.id_to_str.len() as u32;
                self.str_to_id.insert(word.to_string(), id);
                self.id_to_str.push(word.to_string());
                self.counts.push(0);
                id
            }
        };
        self.counts[id as usize] += 1;
        self.total += 1;
    }

    /// Occurrences of `word`, zero when unseen.
    pub fn count(&self, word: &str) -> usize {
        self.str_to_id
            .get(word)
            .map_or(0, |id| self.counts[*id as usize])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.str_to_id.contains_key(word)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn vocabulary_size(&self) -> usize {
        self.id_to_str.len()
    }

    /// Words in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.id_to_str.iter().map(String::as_str)
    }

    /// The `n` most frequent words, descending by count, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ids: Vec<usize> = (0..self.id_to_str.len()).collect();
        // Stable sort keeps first-seen order among equal counts.
        ids.sort_by(|&a, &b| self.counts[b].cmp(&self.counts[a]));
        ids.into_iter()
            .take(n)
            .map(|id| WordCount {
                word: self.id_to_str[id].clone(),
                count: self.counts[id],
            })
            .collect()
    }
}
