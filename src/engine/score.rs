//! Scoring, classification, and the influence fold.

use log::trace;

use crate::analyzer::Analyzer;
use crate::engine::ngram;
use crate::types::Sentiment;

impl Analyzer {
    /// Score a text: the sum of influence-modulated lexicon weights over the
    /// candidate phrase stream.
    ///
    /// If any registered neutral pattern matches the raw input the result is
    /// zero unconditionally. Unknown phrases contribute zero weight; with no
    /// dictionaries loaded every score is zero.
    pub fn score(&self, text: &str) -> f64 {
        if self.neutral_patterns.matches(text) {
            trace!("neutral pattern matched, forcing score 0");
            return 0.0;
        }

        let tokens = self.normalizer.tokenize(text);
        let mut total = 0.0;
        let mut influence = 1.0;

        // Influencers multiply the running influence and carry no weight of
        // their own; any other phrase is scored under the accumulated
        // influence and resets it, so influence never leaks past the
        // immediately following phrase.
        for phrase in ngram::phrases(&tokens, self.ngrams) {
            if let Some(multiplier) = self.influencers.get(&phrase) {
                influence *= multiplier;
            } else {
                total += self.word_scores.get(&phrase).unwrap_or(0.0) * influence;
                influence = 1.0;
            }
        }

        trace!("scored {} token(s): {}", tokens.len(), total);
        total
    }

    /// Classify a text against the configured threshold.
    ///
    /// Positive if the score exceeds the threshold, negative if it falls
    /// below the negated threshold, neutral otherwise (boundary inclusive).
    pub fn sentiment(&self, text: &str) -> Sentiment {
        let score = self.score(text);
        if score > self.threshold {
            Sentiment::Positive
        } else if score < -self.threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Whether the text classifies as positive.
    pub fn classify(&self, text: &str) -> bool {
        self.sentiment(text) == Sentiment::Positive
    }
}
