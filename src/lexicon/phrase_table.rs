//! Key-unique mapping from phrase strings to signed weights.

use std::collections::HashMap;

/// A mapping of phrase → signed weight.
///
/// Backs both the scoring lexicon (phrase → sentiment weight) and the
/// influencer table (phrase → multiplier); the two are separate instances
/// queried independently during scoring. Keys are one or more
/// whitespace-joined lower-case words, possibly emoticon tokens such as
/// `:-)` or `<3`. Later inserts overwrite earlier values for the same key.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: HashMap<String, f64>,
}

impl PhraseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert one phrase. The key is trimmed and lowercased so lookups from
    /// normalized token text always line up.
    pub fn insert(&mut self, phrase: &str, weight: f64) {
        self.entries.insert(phrase.trim().to_lowercase(), weight);
    }

    /// Merge a batch of entries. Existing keys are overwritten.
    pub fn merge<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (phrase, weight) in entries {
            self.insert(phrase.as_ref(), weight);
        }
    }

    /// Look up a phrase. Returns `None` for unregistered phrases.
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.entries.get(phrase).copied()
    }

    /// Whether the phrase is registered.
    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    /// Number of registered phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over `(phrase, weight)` pairs in arbitrary order.
    ///
    /// Insertion order is irrelevant for scoring, which matches positionally
    /// over the input rather than over dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for PhraseTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.merge(iter);
        table
    }
}
