//! Neutral-override patterns tested against raw input text.

use regex::Regex;

use crate::types::{SentiError, SentiResult};

/// An ordered list of compiled patterns that force a neutral result.
///
/// Patterns are matched against the raw (unnormalized) input; any match
/// short-circuits scoring to zero, so ordering among patterns never changes
/// the outcome. Malformed patterns are rejected at registration time and
/// never surface during scoring.
#[derive(Debug, Clone)]
pub struct NeutralPatterns {
    patterns: Vec<Regex>,
}

impl NeutralPatterns {
    /// Create an empty pattern list.
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compile and append a pattern, failing fast on a malformed expression.
    pub fn add(&mut self, pattern: &str) -> SentiResult<()> {
        let compiled = compile(pattern)?;
        self.patterns.push(compiled);
        Ok(())
    }

    /// Compile and append a batch of patterns. Nothing is registered if any
    /// pattern fails to compile.
    pub fn add_all<'a, I>(&mut self, patterns: I) -> SentiResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let compiled = patterns
            .into_iter()
            .map(compile)
            .collect::<SentiResult<Vec<_>>>()?;
        self.patterns.extend(compiled);
        Ok(())
    }

    /// Append an already-compiled pattern.
    pub fn push(&mut self, pattern: Regex) {
        self.patterns.push(pattern);
    }

    /// Whether any registered pattern matches the raw text.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The compiled patterns, for diagnostics.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

impl Default for NeutralPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile one pattern into a regex, mapping the failure to a registration
/// error carrying the offending pattern.
fn compile(pattern: &str) -> SentiResult<Regex> {
    Regex::new(pattern).map_err(|source| SentiError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
