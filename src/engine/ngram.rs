//! Candidate phrase enumeration over a token sequence.

/// Enumerate every candidate phrase of the token sequence: all contiguous
/// n-grams of sizes `1..=window`, in size-major order (every unigram in
/// positional order, then every bigram, and so on).
///
/// Overlapping sub-grams are enumerated too, so a registered bigram embedded
/// in a registered trigram scores alongside it. A registered phrase longer
/// than `window` can never appear; the window is a hard ceiling configured by
/// the caller. A `window` of zero is treated as one.
pub fn phrases(tokens: &[String], window: usize) -> Vec<String> {
    let window = window.max(1);
    let mut out = Vec::new();

    for size in 1..=window {
        if size > tokens.len() {
            break;
        }
        for gram in tokens.windows(size) {
            out.push(gram.join(" "));
        }
    }

    out
}
