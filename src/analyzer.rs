//! The analyzer: configuration, dictionaries, and explicit update operations.

use std::collections::HashMap;

use crate::engine::normalizer::Normalizer;
use crate::lexicon::{NeutralPatterns, PhraseTable};
use crate::types::SentiResult;

/// Default classification threshold: any nonzero score is polar.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

/// Default n-gram window: unigram matching only.
pub const DEFAULT_NGRAMS: usize = 1;

/// Lexicon-based bilingual sentiment analyzer.
///
/// Built once with a configuration, optionally bulk-loaded from dictionary
/// sources, then queried repeatedly. Scoring calls never mutate state; the
/// dictionaries change only through the explicit load and update operations,
/// so the expected usage pattern is single-writer-then-many-readers.
///
/// # Examples
///
/// ```
/// use sentimental::Analyzer;
///
/// let mut analyzer = Analyzer::builder().threshold(0.1).build()?;
/// analyzer.load_defaults()?;
///
/// assert!(analyzer.classify("I love rust <3"));
/// # Ok::<(), sentimental::SentiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub(crate) word_scores: PhraseTable,
    pub(crate) influencers: PhraseTable,
    pub(crate) neutral_patterns: NeutralPatterns,
    pub(crate) threshold: f64,
    pub(crate) ngrams: usize,
    pub(crate) normalizer: Normalizer,
}

impl Analyzer {
    /// Create an analyzer with empty dictionaries and default configuration.
    pub fn new() -> Self {
        Self {
            word_scores: PhraseTable::new(),
            influencers: PhraseTable::new(),
            neutral_patterns: NeutralPatterns::new(),
            threshold: DEFAULT_THRESHOLD,
            ngrams: DEFAULT_NGRAMS,
            normalizer: Normalizer::new(),
        }
    }

    /// Start building an analyzer with explicit configuration.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    /// The active scoring lexicon (phrase → weight).
    pub fn word_scores(&self) -> &PhraseTable {
        &self.word_scores
    }

    /// The active influencer table (phrase → multiplier).
    pub fn influencers(&self) -> &PhraseTable {
        &self.influencers
    }

    /// The registered neutral-override patterns.
    pub fn neutral_patterns(&self) -> &NeutralPatterns {
        &self.neutral_patterns
    }

    /// The classification threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The maximum n-gram window size.
    pub fn ngrams(&self) -> usize {
        self.ngrams
    }

    // -----------------------------------------------------------------------
    // Explicit update operations (between scoring calls)
    // -----------------------------------------------------------------------

    /// Replace the classification threshold.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Replace the n-gram window size. Clamped to at least one token.
    pub fn set_ngrams(&mut self, ngrams: usize) {
        self.ngrams = ngrams.max(1);
    }

    /// Compile and register a neutral-override pattern, failing fast on a
    /// malformed expression.
    pub fn add_neutral_pattern(&mut self, pattern: &str) -> SentiResult<()> {
        self.neutral_patterns.add(pattern)
    }

    /// Compile and register a batch of neutral-override patterns. Nothing is
    /// registered if any pattern fails to compile.
    pub fn load_neutral_patterns<'a, I>(&mut self, patterns: I) -> SentiResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.neutral_patterns.add_all(patterns)
    }

    /// Merge an explicit phrase → weight mapping into the scoring lexicon.
    pub fn load_words<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        self.word_scores.merge(entries);
    }

    /// Merge an explicit phrase → multiplier mapping into the influencer
    /// table.
    pub fn load_influencers<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        self.influencers.merge(entries);
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Analyzer`] construction options.
///
/// `build` compiles any neutral patterns supplied as strings and therefore
/// fails fast on a malformed expression.
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    threshold: Option<f64>,
    ngrams: Option<usize>,
    word_scores: HashMap<String, f64>,
    influencers: HashMap<String, f64>,
    neutral_patterns: Vec<String>,
}

impl AnalyzerBuilder {
    /// Create a builder with all options unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score magnitude separating neutral from positive/negative.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Maximum number of consecutive tokens considered as a single phrase.
    /// Clamped to at least one token.
    pub fn ngrams(mut self, ngrams: usize) -> Self {
        self.ngrams = Some(ngrams.max(1));
        self
    }

    /// Initial phrase → weight entries for the scoring lexicon.
    pub fn word_scores<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (phrase, weight) in entries {
            self.word_scores.insert(phrase.as_ref().to_string(), weight);
        }
        self
    }

    /// Initial phrase → multiplier entries for the influencer table.
    pub fn influencers<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (phrase, multiplier) in entries {
            self.influencers
                .insert(phrase.as_ref().to_string(), multiplier);
        }
        self
    }

    /// Register a neutral-override pattern, compiled during `build`.
    pub fn neutral_pattern(mut self, pattern: &str) -> Self {
        self.neutral_patterns.push(pattern.to_string());
        self
    }

    /// Build the analyzer, compiling neutral patterns.
    pub fn build(self) -> SentiResult<Analyzer> {
        let mut analyzer = Analyzer::new();

        if let Some(threshold) = self.threshold {
            analyzer.threshold = threshold;
        }
        if let Some(ngrams) = self.ngrams {
            analyzer.ngrams = ngrams;
        }
        analyzer.load_words(self.word_scores);
        analyzer.load_influencers(self.influencers);
        for pattern in &self.neutral_patterns {
            analyzer.add_neutral_pattern(pattern)?;
        }

        Ok(analyzer)
    }
}
