//! Axis lexicon and phrase table for signature detection.
//!
//! The [`Lexicon`] maps single words and word roots to axis profiles. The
//! [`PhraseTable`] maps multi-word phrases (in normalized `a_b_c` key form)
//! to coordinates for the phrase layer when no store concept covers them.
//!
//! Both are immutable after construction and shared between layers through
//! `Arc`.

mod default_words;

use std::collections::HashMap;

use ljpw_core::{normalize_key, Coordinate};
use tracing::warn;

/// Suffixes removed, in order, when a word is not in the lexicon as written.
const SUFFIXES: &[&str] = &["ing", "es", "ed", "ly", "s"];

/// Shortest stem kept after suffix removal.
const MIN_STEM_LEN: usize = 3;

/// Word and root lexicon mapping text to axis profiles.
///
/// `Lexicon::default()` holds the built-in vocabulary; `new()` is empty.
///
/// # Example
///
/// ```
/// use ljpw_core::Coordinate;
/// use ljpw_engine::signature::Lexicon;
///
/// let mut lexicon = Lexicon::new();
/// lexicon.insert_word("shine", Coordinate::clamped(0.5, 0.4, 0.85, 0.5));
///
/// assert!(lexicon.lookup("Shines").is_some()); // suffix stripped
/// assert!(lexicon.lookup("shining").is_some()); // "shin" + "e"
/// assert!(lexicon.lookup("shadow").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, Coordinate>,
    /// Sorted by descending length so the longest contained root wins.
    roots: Vec<(String, Coordinate)>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Add or replace a whole-word entry (stored lowercase).
    pub fn insert_word(&mut self, word: &str, coordinate: Coordinate) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        self.words.insert(word, coordinate);
    }

    /// Add or replace a root used for substring matching.
    pub fn insert_root(&mut self, root: &str, coordinate: Coordinate) {
        let root = root.trim().to_lowercase();
        if root.is_empty() {
            return;
        }
        match self.roots.iter_mut().find(|(r, _)| *r == root) {
            Some(entry) => entry.1 = coordinate,
            None => {
                self.roots.push((root, coordinate));
                // Stable: equal lengths keep insertion order.
                self.roots
                    .sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
            }
        }
    }

    /// Exact whole-word lookup.
    pub fn word(&self, word: &str) -> Option<Coordinate> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Whole-word lookup with light suffix stripping.
    ///
    /// Tries the word as written, then each of `ing`, `es`, `ed`, `ly`, `s`
    /// removed. For `ing` and `ed` the stem is also tried with a trailing
    /// `e` restored ("shining" → "shine").
    pub fn lookup(&self, word: &str) -> Option<Coordinate> {
        let word = word.to_lowercase();
        if let Some(c) = self.words.get(&word) {
            return Some(*c);
        }

        for suffix in SUFFIXES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < MIN_STEM_LEN {
                continue;
            }
            if let Some(c) = self.words.get(stem) {
                return Some(*c);
            }
            if matches!(*suffix, "ing" | "ed") {
                if let Some(c) = self.words.get(&format!("{}e", stem)) {
                    return Some(*c);
                }
            }
        }
        None
    }

    /// Longest root of at least `min_len` characters contained in `token`.
    pub fn root_in(&self, token: &str, min_len: usize) -> Option<(&str, Coordinate)> {
        let token = token.to_lowercase();
        self.roots
            .iter()
            .filter(|(root, _)| root.chars().count() >= min_len)
            .find(|(root, _)| token.contains(root.as_str()))
            .map(|(root, c)| (root.as_str(), *c))
    }

    /// Check whether a whole word is present (no suffix stripping).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of whole-word entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.roots.is_empty()
    }

    /// Number of roots.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }
}

/// Multi-word phrases in normalized key form.
///
/// `PhraseTable::default()` holds the built-in phrases; `new()` is empty.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: HashMap<String, Coordinate>,
    longest: usize,
}

impl PhraseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            longest: 0,
        }
    }

    /// Build a table from raw entries.
    ///
    /// Entries whose key normalizes to nothing or whose values are not a
    /// valid coordinate are skipped with a warning.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, [f64; 4])>,
    {
        let mut table = Self::new();
        for (phrase, values) in entries {
            match Coordinate::from_array(values) {
                Ok(coordinate) => {
                    if !table.insert(phrase, coordinate) {
                        warn!(phrase, "skipping phrase-table entry with empty key");
                    }
                }
                Err(e) => warn!(phrase, error = %e, "skipping phrase-table entry"),
            }
        }
        table
    }

    /// Add or replace a phrase. Returns `false` if the phrase is blank.
    pub fn insert(&mut self, phrase: &str, coordinate: Coordinate) -> bool {
        let key = normalize_key(phrase);
        if key.is_empty() {
            return false;
        }
        self.longest = self.longest.max(key.split('_').count());
        self.entries.insert(key, coordinate);
        true
    }

    /// Lookup by normalized key (`kingdom_of_god`).
    pub fn get(&self, key: &str) -> Option<Coordinate> {
        self.entries.get(key).copied()
    }

    /// Token length of the longest phrase.
    pub fn longest_tokens(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
