//! Keyword and named-entity extraction
//!
//! Both operations follow the same detect-then-dispatch shape as the
//! summarizer and reuse the registry pipelines.

use rustc_hash::FxHashMap;

use crate::error::GistError;
use crate::lang;
use crate::models::PipelineRegistry;
use crate::nlp::Lexicon;
use crate::types::{Entity, Keyword};

/// The most frequent nominal lemmas in `text`.
///
/// Nouns and proper nouns are lowercased to their lemma, stopwords dropped,
/// and the top `count` lemmas returned by descending frequency with an
/// alphabetical tie-break.
pub fn keywords(
	registry: &PipelineRegistry,
	text: &str,
	count: usize,
) -> Result<Vec<Keyword>, GistError> {
	if text.trim().is_empty() {
		return Err(GistError::EmptyInput);
	}

	let language = lang::detect(text)?;
	let pipeline = registry.get(language);
	let lexicon = Lexicon::bare(language);

	let mut frequencies: FxHashMap<String, usize> = FxHashMap::default();
	for token in pipeline.tokenize(text)? {
		if !token.pos.is_nominal() {
			continue;
		}
		let lemma = token.lemma.to_lowercase();
		if lemma.is_empty() || lexicon.is_stopword(&lemma) {
			continue;
		}
		*frequencies.entry(lemma).or_insert(0) += 1;
	}

	let mut ranked: Vec<Keyword> = frequencies
		.into_iter()
		.map(|(lemma, count)| Keyword { lemma, count })
		.collect();
	ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.lemma.cmp(&b.lemma)));
	ranked.truncate(count);

	Ok(ranked)
}

/// Unique named entities in `text`, sorted by entity text.
pub fn entities(registry: &PipelineRegistry, text: &str) -> Result<Vec<Entity>, GistError> {
	if text.trim().is_empty() {
		return Err(GistError::EmptyInput);
	}

	let language = lang::detect(text)?;
	let pipeline = registry.get(language);

	let mut found = pipeline.entities(text)?;
	found.sort();
	found.dedup();

	Ok(found)
}
