//! Text normalization: lowercasing and token extraction.

use regex::Regex;

/// Token scanner pattern. Emoticon alternatives come first so sequences like
/// `:-)` or `<3` survive as standalone tokens instead of being split into
/// punctuation; apostrophes and hyphens stay inside word tokens (`j'adore`,
/// `open-source`). Everything else is dropped.
const TOKEN_PATTERN: &str = r"<3|[:;=]['-]?[()dp\[\]/\\|]|[\w'-]+";

/// Deterministic normalizer turning raw text into lower-case tokens.
///
/// Lowercasing uses Unicode case folding so accented letters normalize
/// consistently ("Êtes" → "êtes") and French text tokenizes the same way on
/// every platform.
#[derive(Debug, Clone)]
pub struct Normalizer {
    token_re: Regex,
}

impl Normalizer {
    /// Create a normalizer with the default token scanner.
    pub fn new() -> Self {
        Self {
            token_re: Regex::new(TOKEN_PATTERN).expect("token pattern compiles"),
        }
    }

    /// Normalize raw text into an ordered sequence of lower-case tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
