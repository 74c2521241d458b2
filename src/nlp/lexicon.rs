//! Lemma lexicon and stopword sets
//!
//! Lemmatization uses a per-language exception table loaded from JSON with
//! a regular-inflection fallback. Stopword sets come from the `stop-words`
//! crate's ISO lists.

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

use crate::lang::Language;

pub struct Lexicon {
	language: Language,
	lemmas: FxHashMap<String, String>,
	stopwords: FxHashSet<String>,
}

impl Lexicon {
	/// Loads the exception table from `lemmas.json` (a flat form → lemma map).
	pub fn load(path: &Path, language: Language) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("read lemma table {}", path.display()))?;
		let lemmas: FxHashMap<String, String> =
			serde_json::from_str(&content).context("parse lemma table")?;

		Ok(Self::from_table(language, lemmas))
	}

	/// Builds a lexicon from an in-memory exception table.
	pub fn from_table(language: Language, lemmas: FxHashMap<String, String>) -> Self {
		let stopwords = stop_words::get(stopword_language(language))
			.into_iter()
			.collect();

		Self {
			language,
			lemmas,
			stopwords,
		}
	}

	/// Lexicon with an empty exception table (fallback rules only).
	pub fn bare(language: Language) -> Self {
		Self::from_table(language, FxHashMap::default())
	}

	/// Lemma for a surface form. Exception table first, then regular
	/// plural stripping, otherwise the lowercased form itself.
	pub fn lemma(&self, word: &str) -> String {
		let lower = word.to_lowercase();

		if let Some(lemma) = self.lemmas.get(&lower) {
			return lemma.clone();
		}

		strip_plural(&lower, self.language)
	}

	pub fn is_stopword(&self, word: &str) -> bool {
		self.stopwords.contains(&word.to_lowercase())
	}
}

fn stopword_language(language: Language) -> stop_words::LANGUAGE {
	match language {
		Language::English => stop_words::LANGUAGE::English,
		Language::Spanish => stop_words::LANGUAGE::Spanish,
		Language::French => stop_words::LANGUAGE::French,
		Language::German => stop_words::LANGUAGE::German,
		Language::Portuguese => stop_words::LANGUAGE::Portuguese,
	}
}

fn strip_plural(word: &str, language: Language) -> String {
	let n = word.chars().count();
	if n <= 3 {
		return word.to_string();
	}

	match language {
		Language::English => {
			if let Some(stem) = word.strip_suffix("ies") {
				return format!("{}y", stem);
			}
			if word.ends_with("sses") || word.ends_with("shes") || word.ends_with("ches") {
				return word[..word.len() - 2].to_string();
			}
			if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
				return word[..word.len() - 1].to_string();
			}
		}
		Language::Spanish | Language::Portuguese => {
			if let Some(stem) = word.strip_suffix("es") {
				if stem.chars().count() >= 3 {
					return stem.to_string();
				}
			}
			if let Some(stem) = word.strip_suffix('s') {
				return stem.to_string();
			}
		}
		Language::French => {
			if let Some(stem) = word.strip_suffix("aux") {
				return format!("{}al", stem);
			}
			if let Some(stem) = word.strip_suffix('s') {
				return stem.to_string();
			}
			if let Some(stem) = word.strip_suffix('x') {
				return stem.to_string();
			}
		}
		Language::German => {
			if let Some(stem) = word.strip_suffix("en") {
				if stem.chars().count() >= 3 {
					return stem.to_string();
				}
			}
			if let Some(stem) = word.strip_suffix('e') {
				if stem.chars().count() >= 4 {
					return stem.to_string();
				}
			}
		}
	}

	word.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exception_table_wins() {
		let mut table = FxHashMap::default();
		table.insert("wrote".to_string(), "write".to_string());
		let lexicon = Lexicon::from_table(Language::English, table);

		assert_eq!(lexicon.lemma("Wrote"), "write");
	}

	#[test]
	fn regular_plural_stripping() {
		let lexicon = Lexicon::bare(Language::English);
		assert_eq!(lexicon.lemma("cats"), "cat");
		assert_eq!(lexicon.lemma("studies"), "study");
		assert_eq!(lexicon.lemma("classes"), "class");
		assert_eq!(lexicon.lemma("glass"), "glass");
	}

	#[test]
	fn short_words_untouched() {
		let lexicon = Lexicon::bare(Language::English);
		assert_eq!(lexicon.lemma("gas"), "gas");
		assert_eq!(lexicon.lemma("is"), "is");
	}

	#[test]
	fn french_plural_forms() {
		let lexicon = Lexicon::bare(Language::French);
		assert_eq!(lexicon.lemma("journaux"), "journal");
		assert_eq!(lexicon.lemma("livres"), "livre");
	}

	#[test]
	fn stopwords_are_language_specific() {
		let en = Lexicon::bare(Language::English);
		let es = Lexicon::bare(Language::Spanish);

		assert!(en.is_stopword("the"));
		assert!(!en.is_stopword("photosynthesis"));
		assert!(es.is_stopword("los"));
	}
}
