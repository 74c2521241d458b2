//! Language-aware text processing helpers
//!
//! Rule-based sentence segmentation and the lemma/stopword lexicon used by
//! the production pipelines.

pub mod lexicon;
pub mod segment;

pub use lexicon::Lexicon;
pub use segment::split_sentences;
