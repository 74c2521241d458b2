// Deterministic mock pipelines for exercising the public API without
// model files. Embeddings are hashed bag-of-words vectors, so sentences
// sharing a content word get a dot product of at least 1.0 (above the
// similarity threshold) and disjoint sentences score 0.

use anyhow::Result;

use gist::lang::Language;
use gist::models::{LanguagePipeline, PipelineRegistry};
use gist::nlp;
use gist::types::{Embedding, Entity, PosTag, Token};

const DIM: usize = 4096;

pub struct MockPipeline {
	language: Language,
	names: Vec<(String, String)>,
}

impl MockPipeline {
	pub fn new(language: Language) -> Self {
		Self {
			language,
			names: Vec::new(),
		}
	}

	/// Registers entity surface forms this pipeline should "recognize".
	pub fn with_names(mut self, names: &[(&str, &str)]) -> Self {
		self.names = names
			.iter()
			.map(|(text, label)| (text.to_string(), label.to_string()))
			.collect();
		self
	}
}

impl LanguagePipeline for MockPipeline {
	fn segment(&self, text: &str) -> Vec<String> {
		nlp::split_sentences(text, self.language)
	}

	fn embed(&self, sentence: &str) -> Result<Embedding> {
		let mut vector = vec![0.0f32; DIM];
		for word in content_words(sentence) {
			vector[fnv1a(&word) as usize % DIM] += 1.0;
		}
		Ok(Embedding::new(vector))
	}

	fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
		Ok(content_words(text)
			.map(|word| Token {
				text: word.clone(),
				lemma: word,
				pos: PosTag::Noun,
			})
			.collect())
	}

	fn entities(&self, text: &str) -> Result<Vec<Entity>> {
		Ok(self
			.names
			.iter()
			.filter(|(name, _)| text.contains(name.as_str()))
			.map(|(name, label)| Entity {
				text: name.clone(),
				label: label.clone(),
			})
			.collect())
	}
}

/// Registry with a mock pipeline for every supported language.
pub fn mock_registry() -> PipelineRegistry {
	registry_with_names(&[])
}

pub fn registry_with_names(names: &[(&str, &str)]) -> PipelineRegistry {
	let pipelines: Vec<Box<dyn LanguagePipeline>> = Language::ALL
		.iter()
		.map(|&language| {
			Box::new(MockPipeline::new(language).with_names(names)) as Box<dyn LanguagePipeline>
		})
		.collect();

	PipelineRegistry::new(pipelines.try_into().unwrap_or_else(|_| unreachable!()))
}

fn content_words(text: &str) -> impl Iterator<Item = String> + '_ {
	text.split_whitespace().filter_map(|raw| {
		let word: String = raw
			.chars()
			.filter(|c| c.is_alphanumeric())
			.collect::<String>()
			.to_lowercase();
		(!word.is_empty()).then_some(word)
	})
}

fn fnv1a(word: &str) -> u64 {
	let mut hash: u64 = 0xcbf29ce484222325;
	for byte in word.bytes() {
		hash ^= byte as u64;
		hash = hash.wrapping_mul(0x100000001b3);
	}
	hash
}
