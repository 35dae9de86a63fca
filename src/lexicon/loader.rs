//! Dictionary loading: bundled defaults and external JSON documents.
//!
//! A dictionary document is a flat JSON object mapping phrase strings to
//! numeric weights (scoring lexicon) or multipliers (influencer table).
//! Every load parses its source completely before merging, so a failed load
//! never leaves a partially-applied dictionary behind.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::analyzer::Analyzer;
use crate::types::{SentiError, SentiResult};

/// Bundled English word weights.
const EN_WORDS: &str = include_str!("../../data/en_words.json");
/// Bundled French word weights.
const FR_WORDS: &str = include_str!("../../data/fr_words.json");
/// Bundled slang and emoticon weights.
const SLANG: &str = include_str!("../../data/slang.json");
/// Bundled influencer multipliers (intensifiers and negators).
const INFLUENCERS: &str = include_str!("../../data/influencers.json");

/// Parse a phrase → number document.
fn parse_document(source: &str, origin: &Path) -> SentiResult<HashMap<String, f64>> {
    serde_json::from_str(source).map_err(|source| SentiError::DictionaryParse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse a phrase → number document from disk.
fn read_document(path: &Path) -> SentiResult<HashMap<String, f64>> {
    let source = fs::read_to_string(path).map_err(|source| SentiError::DictionaryIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&source, path)
}

impl Analyzer {
    /// Load the bundled default dataset: English words, French words, and
    /// slang into the scoring lexicon, and the influencer phrases into the
    /// influencer table.
    ///
    /// The three word sources are pairwise key-disjoint, so the resulting
    /// lexicon size is the sum of their sizes.
    pub fn load_defaults(&mut self) -> SentiResult<()> {
        let sources = [
            ("data/en_words.json", EN_WORDS),
            ("data/fr_words.json", FR_WORDS),
            ("data/slang.json", SLANG),
        ];

        for (name, source) in sources {
            let entries = parse_document(source, Path::new(name))?;
            debug!("merging {} word score(s) from {}", entries.len(), name);
            self.word_scores.merge(entries);
        }

        let entries = parse_document(INFLUENCERS, Path::new("data/influencers.json"))?;
        debug!("merging {} influencer(s)", entries.len());
        self.influencers.merge(entries);

        Ok(())
    }

    /// Load a phrase → weight document from disk and merge it into the
    /// scoring lexicon. Returns the number of entries merged.
    ///
    /// The document is parsed completely before merging; on error the lexicon
    /// is left untouched.
    pub fn load_words_from_json<P: AsRef<Path>>(&mut self, path: P) -> SentiResult<usize> {
        let path = path.as_ref();
        let entries = read_document(path)?;
        let count = entries.len();
        debug!("merging {} word score(s) from {}", count, path.display());
        self.word_scores.merge(entries);
        Ok(count)
    }

    /// Load a phrase → multiplier document from disk and merge it into the
    /// influencer table. Returns the number of entries merged.
    ///
    /// The document is parsed completely before merging; on error the table
    /// is left untouched.
    pub fn load_influencers_from_json<P: AsRef<Path>>(&mut self, path: P) -> SentiResult<usize> {
        let path = path.as_ref();
        let entries = read_document(path)?;
        let count = entries.len();
        debug!("merging {} influencer(s) from {}", count, path.display());
        self.influencers.merge(entries);
        Ok(count)
    }
}
