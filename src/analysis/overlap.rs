use std::cmp::Ordering;

use super::frequency::FrequencyTable;
use crate::types::report::OverlapEntry;

/// Words present in all three tables with their per-text counts, most frequent
/// first and alphabetical among equal totals.
pub fn overlapping_words(matthew: &FrequencyTable, mark: &FrequencyTable, luke: &FrequencyTable) -> Vec<OverlapEntry> {
    let mut entries: Vec<OverlapEntry> = matthew
        .words()
        .filter(|word| mark.contains(word) && luke.contains(word))
        .map(|word| {
            let (a, b, c) = (matthew.count(word), mark.count(word), luke.count(word));
            OverlapEntry {
                word: word.to_string(),
                matthew: a,
                mark: b,
                luke: c,
                total: a + b + c,
            }
        })
        .collect();

    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &OverlapEntry, b: &OverlapEntry) -> Ordering {
    b.total.cmp(&a.total).then_with(|| a.word.cmp(&b.word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn only_words_in_all_three_are_reported() {
        let matthew = FrequencyTable::from_words(["jesus", "kingdom", "heaven", "heaven", "sea"]);
        let mark = FrequencyTable::from_words(["jesus", "sea", "boat", "heaven"]);
        let luke = FrequencyTable::from_words(["heaven", "jesus", "jesus", "temple"]);

        let overlap = overlapping_words(&matthew, &mark, &luke);
        let words: Vec<&str> = overlap.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["heaven", "jesus"]);

        let heaven = &overlap[0];
        assert_eq!((heaven.matthew, heaven.mark, heaven.luke, heaven.total), (2, 1, 1, 4));
        let jesus = &overlap[1];
        assert_eq!((jesus.matthew, jesus.mark, jesus.luke, jesus.total), (1, 1, 2, 4));
    }

    #[test]
    fn equal_totals_sort_alphabetically() {
        let words = ["zeal", "alms", "mercy"];
        let t = FrequencyTable::from_words(words);
        let overlap = overlapping_words(&t, &t, &t);
        let order: Vec<&str> = overlap.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["alms", "mercy", "zeal"]);
    }

    #[test]
    fn size_matches_set_intersection() {
        let matthew = FrequencyTable::from_words(["a", "b", "c", "d"]);
        let mark = FrequencyTable::from_words(["b", "c", "d", "e"]);
        let luke = FrequencyTable::from_words(["c", "d", "e", "f"]);

        let expected: HashSet<&str> = matthew
            .words()
            .filter(|w| mark.contains(w))
            .filter(|w| luke.contains(w))
            .collect();
        assert_eq!(overlapping_words(&matthew, &mark, &luke).len(), expected.len());
    }

    #[test]
    fn empty_table_gives_empty_overlap() {
        let t = FrequencyTable::from_words(["word"]);
        assert!(overlapping_words(&t, &FrequencyTable::new(), &t).is_empty());
    }
}
