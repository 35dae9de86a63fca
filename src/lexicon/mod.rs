//! Lexicon structures backing the scorer: phrase tables, neutral-override
//! patterns, and the dictionary loader.

pub mod loader;
pub mod neutral;
pub mod phrase_table;

pub use neutral::NeutralPatterns;
pub use phrase_table::PhraseTable;
