//! The scoring engine: normalization, phrase enumeration, and the influence
//! fold. Stages run in a fixed order — raw text → tokens → candidate phrases
//! → modulated weights → score → label.

pub mod ngram;
pub mod normalizer;
pub mod score;

pub use normalizer::Normalizer;
