//! Core domain types
//!
//! This module defines the types flowing through the summarization pipeline:
//! - `Embedding`: dense vector representation of a sentence
//! - `Sentence`: a document span with its ordinal and embedding
//! - `Token`, `PosTag`, `Entity`, `Keyword`: analysis outputs

use serde::Deserialize;

/// Dense embedding vector for semantic similarity comparison.
///
/// Vectors are kept exactly as produced by the pipeline, without length
/// normalization: downstream similarity thresholds are tuned for raw dot
/// products, and normalizing would change which sentence pairs clear them.
#[derive(Debug, Clone)]
pub struct Embedding(pub Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	/// Dot product with another embedding. Symmetric by construction.
	pub fn similarity(&self, other: &Self) -> f32 {
		self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
	}
}

/// A sentence extracted from a document.
///
/// The ordinal is the sentence's index within the document and serves as
/// the node identifier in the similarity graph and as the ranking tie-break.
#[derive(Debug, Clone)]
pub struct Sentence {
	pub ordinal: usize,
	pub text: String,
}

impl Sentence {
	pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
		Self {
			ordinal,
			text: text.into(),
		}
	}
}

/// Coarse part-of-speech tags, following the universal tagset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
	Adj,
	Adp,
	Adv,
	Aux,
	Cconj,
	Det,
	Intj,
	Noun,
	Num,
	Part,
	Pron,
	Propn,
	Punct,
	Sconj,
	Sym,
	Verb,
	X,
}

impl PosTag {
	/// Nouns and proper nouns carry the keyword signal.
	pub fn is_nominal(&self) -> bool {
		matches!(self, PosTag::Noun | PosTag::Propn)
	}

	/// Parses a universal-tagset label; unknown labels map to `X`.
	pub fn parse(label: &str) -> PosTag {
		match label {
			"ADJ" => PosTag::Adj,
			"ADP" => PosTag::Adp,
			"ADV" => PosTag::Adv,
			"AUX" => PosTag::Aux,
			"CCONJ" => PosTag::Cconj,
			"DET" => PosTag::Det,
			"INTJ" => PosTag::Intj,
			"NOUN" => PosTag::Noun,
			"NUM" => PosTag::Num,
			"PART" => PosTag::Part,
			"PRON" => PosTag::Pron,
			"PROPN" => PosTag::Propn,
			"PUNCT" => PosTag::Punct,
			"SCONJ" => PosTag::Sconj,
			"SYM" => PosTag::Sym,
			"VERB" => PosTag::Verb,
			_ => PosTag::X,
		}
	}
}

/// A token with its part-of-speech tag and lemma.
#[derive(Debug, Clone)]
pub struct Token {
	pub text: String,
	pub lemma: String,
	pub pos: PosTag,
}

/// A named entity span with its label (e.g. "PER", "ORG", "LOC").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entity {
	pub text: String,
	pub label: String,
}

/// A keyword with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
	pub lemma: String,
	pub count: usize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn similarity_is_dot_product() {
		let a = Embedding::new(vec![1.0, 2.0, 0.0]);
		let b = Embedding::new(vec![0.5, 1.0, 3.0]);
		assert!((a.similarity(&b) - 2.5).abs() < 1e-6);
	}

	#[test]
	fn similarity_is_symmetric() {
		let a = Embedding::new(vec![0.3, -1.2, 0.8]);
		let b = Embedding::new(vec![2.0, 0.1, -0.4]);
		assert_eq!(a.similarity(&b), b.similarity(&a));
	}

	#[test]
	fn embeddings_are_not_normalized() {
		let a = Embedding::new(vec![3.0, 4.0]);
		// Magnitude is preserved: dot with itself is 25, not 1.
		assert!((a.similarity(&a) - 25.0).abs() < 1e-6);
	}
}
