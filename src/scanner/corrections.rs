// WHY: Centralized word-level corrections applied at word boundaries
// Exact whole-word matches only; no fuzzy or substring matching

use std::collections::HashMap;

/// Fixed correction table in precedence order (later entries win on duplicate keys)
pub const DEFAULT_CORRECTIONS: &[(&str, &str)] = &[
    ("i", "I"),
    // contractions
    ("they're", "they are"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("i've", "I have"),
    ("i'll", "I will"),
    ("i'd", "I would"),
    ("i'm", "I am"),
    ("im", "I am"),
    ("she's", "she is"),
    ("he's", "he is"),
    ("it's", "it is"),
    ("there's", "there is"),
    ("we're", "we are"),
    ("you've", "you have"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    // common misspellings
    ("accomodate", "accommodate"),
    ("wich", "which"),
    ("recieve", "receive"),
    ("untill", "until"),
    ("occured", "occurred"),
    ("seperate", "separate"),
    ("goverment", "government"),
    ("definately", "definitely"),
    ("pharoah", "pharaoh"),
    ("publically", "publicly"),
    // phrase substitution
    ("the-goat", "Mr. Jimenez"),
];

/// Ordered word correction table with O(1) lookup
///
/// Entries are indexed in table order, so when two entries share a match word
/// the later one wins. This is the same precedence as scanning the whole table
/// without stopping at the first hit.
#[derive(Debug, Clone)]
pub struct CorrectionTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl CorrectionTable {
    /// Build a table from ordered (match, replacement) pairs; match side is lower-cased
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();

        let mut index = HashMap::with_capacity(entries.len());
        for (position, (key, _)) in entries.iter().enumerate() {
            index.insert(key.clone(), position);
        }

        Self { entries, index }
    }

    /// Number of entries, counting shadowed duplicates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replacement for an already lower-cased word, if any
    pub fn lookup(&self, lowered: &str) -> Option<&str> {
        self.index
            .get(lowered)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Correct a completed word token
    ///
    /// An initial ASCII capital on the input is carried over to the first
    /// character of the result, whether or not a replacement happened.
    pub fn correct(&self, word: &str) -> String {
        let has_capital_first = word
            .as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_uppercase());

        let lowered = word.to_ascii_lowercase();
        let mut corrected = match self.lookup(&lowered) {
            Some(replacement) => replacement.to_string(),
            None => lowered,
        };

        if has_capital_first {
            capitalize_first(&mut corrected);
        }

        corrected
    }
}

impl Default for CorrectionTable {
    fn default() -> Self {
        Self::new(DEFAULT_CORRECTIONS.iter().copied())
    }
}

fn capitalize_first(word: &mut String) {
    if let Some(first) = word.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
}
