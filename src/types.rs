//! Core result and label types shared across the crate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type SentiResult<T> = Result<T, SentiError>;

/// Errors surfaced by construction and load operations.
///
/// Scoring itself is infallible: unknown phrases contribute zero weight and
/// neutral patterns are compiled before the first scoring call.
#[derive(Debug, Error)]
pub enum SentiError {
    /// A neutral-override pattern failed to compile at registration time.
    #[error("invalid neutral pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern string as supplied by the caller.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },

    /// A dictionary file could not be read.
    #[error("failed to read dictionary `{}`: {}", path.display(), source)]
    DictionaryIo {
        /// Path of the dictionary file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A dictionary file was read but is not a valid phrase→number document.
    #[error("malformed dictionary `{}`: {}", path.display(), source)]
    DictionaryParse {
        /// Path of the dictionary file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Categorical sentiment label produced by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Score above the configured threshold.
    Positive,
    /// Score within `[-threshold, threshold]` (boundary inclusive).
    Neutral,
    /// Score below the negated threshold.
    Negative,
}

impl Sentiment {
    /// Lowercase string form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
