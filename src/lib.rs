//! Bilingual (English/French) lexicon-based sentiment scoring.
//!
//! `sentimental` assigns a numeric score and a categorical label
//! (positive/neutral/negative) to a short text using a weighted phrase
//! lexicon and a table of influencer terms (intensifiers and negators) that
//! modulate the weight of the immediately following phrase. It is a
//! rule-based scorer, not a trained classifier.
//!
//! Scoring runs four ordered stages over each input:
//!
//! 1. normalization — lowercasing and token extraction, with emoticons like
//!    `:-)` and `<3` preserved as standalone tokens;
//! 2. phrase enumeration — every contiguous n-gram up to the configured
//!    window size becomes a lexicon lookup candidate;
//! 3. influence modulation — influencer phrases multiply the weight of the
//!    next phrase, composing when repeated;
//! 4. aggregation — modulated weights sum into a score, classified against a
//!    threshold unless a neutral-override pattern matches the raw input.
//!
//! # Quick start
//!
//! ```
//! use sentimental::{Analyzer, Sentiment};
//!
//! let mut analyzer = Analyzer::builder().threshold(0.1).build()?;
//! analyzer.load_defaults()?;
//!
//! assert_eq!(analyzer.sentiment("I love rust <3"), Sentiment::Positive);
//! assert_eq!(analyzer.sentiment("I hate mondays"), Sentiment::Negative);
//! assert!(analyzer.score("I really love rust") > analyzer.score("I love rust"));
//! # Ok::<(), sentimental::SentiError>(())
//! ```
//!
//! Dictionaries merge rather than replace: the bundled defaults, external
//! JSON documents, and explicit mappings can be layered onto one analyzer.
//! Scoring calls never mutate state.

pub mod analyzer;
pub mod engine;
pub mod lexicon;
pub mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, DEFAULT_NGRAMS, DEFAULT_THRESHOLD};
pub use engine::Normalizer;
pub use lexicon::{NeutralPatterns, PhraseTable};
pub use types::{SentiError, SentiResult, Sentiment};
