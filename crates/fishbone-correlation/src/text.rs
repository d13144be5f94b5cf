//! Text normalization, tokenizing and order-preserving frequency counting

use std::collections::HashMap;

/// Indonesian function words ignored when mining case examples
pub const STOP_WORDS: [&str; 9] = [
    "yang", "dan", "di", "ke", "dari", "untuk", "pada", "saat", "dengan",
];

/// Tokens of this many characters or fewer are ignored
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Normalize a solution string into its grouping key (trimmed, lower-cased)
pub fn normalize_solution(solution: &str) -> String {
    solution.trim().to_lowercase()
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '!' | '?')
}

/// Split a case example into candidate keywords
///
/// Lower-cases the text, splits on runs of whitespace and `,.;:!?`, then drops
/// short tokens and stop words.
pub fn keywords(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
}

/// A counted key with the first-seen display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    /// Normalized key
    pub key: String,
    /// First-seen original form
    pub representative: String,
    /// Occurrences
    pub count: usize,
}

/// Frequency table that remembers first-encounter order
///
/// Ranking is a stable sort by descending count, so ties keep the order in
/// which keys were first recorded.
#[derive(Debug, Default)]
pub struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<CountEntry>,
}

impl OrderedCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence; the representative is only stored the first time
    pub fn record(&mut self, key: String, representative: &str) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(CountEntry {
                    key,
                    representative: representative.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending count, ties in encounter order
    pub fn into_ranked(mut self) -> Vec<CountEntry> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_solution() {
        assert_eq!(normalize_solution("  Audit LOTO Bulanan "), "audit loto bulanan");
        assert_eq!(normalize_solution("   "), "");
    }

    #[test]
    fn test_keywords_split_on_punctuation_runs() {
        let words: Vec<String> =
            keywords("Operator tidak menyadari mesin, masih berjalan... saat pembersihan!").collect();
        assert_eq!(
            words,
            vec!["operator", "tidak", "menyadari", "mesin", "masih", "berjalan", "pembersihan"]
        );
    }

    #[test]
    fn test_keywords_split_on_tabs_and_newlines() {
        let words: Vec<String> = keywords("pekerja\tjatuh\nmaterial\r\n  rak").collect();
        assert_eq!(words, vec!["pekerja", "jatuh", "material"]);
    }

    #[test]
    fn test_keywords_drop_short_tokens_and_stop_words() {
        let words: Vec<String> = keywords("Yang jatuh dari rak ke lantai dengan keras").collect();
        assert_eq!(words, vec!["jatuh", "lantai", "keras"]);
    }

    #[test]
    fn test_keywords_count_characters_not_bytes() {
        // "été" is 3 characters but more than 3 bytes
        let words: Vec<String> = keywords("été pekerja").collect();
        assert_eq!(words, vec!["pekerja"]);
    }

    #[test]
    fn test_counter_keeps_first_representative() {
        let mut counter = OrderedCounter::new();
        counter.record("audit".to_string(), "Audit");
        counter.record("training".to_string(), "Training");
        counter.record("audit".to_string(), "AUDIT");

        let ranked = counter.into_ranked();
        assert_eq!(ranked[0].representative, "Audit");
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[1].key, "training");
    }

    #[test]
    fn test_counter_ties_keep_encounter_order() {
        let mut counter = OrderedCounter::new();
        for key in ["b", "a", "c", "a", "b"] {
            counter.record(key.to_string(), key);
        }
        let order: Vec<String> = counter.into_ranked().into_iter().map(|e| e.key).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
