//! Linguistic pipelines and the language registry
//!
//! A `LanguagePipeline` bundles every per-language capability the core
//! needs: sentence segmentation, tokenization with POS tags and lemmas,
//! named-entity recognition, and sentence embedding. `PipelineRegistry`
//! is the total, read-only mapping from `Language` to a pipeline,
//! constructed once at startup and shared by reference across requests.

pub mod embedder;
pub mod pipeline;
pub mod tagger;

use anyhow::Result;

use crate::error::GistError;
use crate::lang::Language;
use crate::types::{Embedding, Entity, Token};

pub use pipeline::OnnxPipeline;

/// Per-language linguistic capabilities.
///
/// Implementations must be safe for concurrent read access: methods take
/// `&self`, and any interior session state is synchronized internally.
pub trait LanguagePipeline: Send + Sync {
	/// Splits text into sentences in document order.
	fn segment(&self, text: &str) -> Vec<String>;

	/// Dense embedding vector for one sentence.
	fn embed(&self, sentence: &str) -> Result<Embedding>;

	/// Tokens with part-of-speech tags and lemmas.
	fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

	/// Named entities found in the text.
	fn entities(&self, text: &str) -> Result<Vec<Entity>>;
}

/// Total mapping from supported languages to their pipelines.
///
/// Built once at startup; read-only afterwards. Passed by reference into
/// every summarization call so tests can substitute mock pipelines.
pub struct PipelineRegistry {
	pipelines: [Box<dyn LanguagePipeline>; 5],
}

impl PipelineRegistry {
	/// Builds a registry from explicit pipelines, one per language in
	/// `Language::ALL` order.
	pub fn new(pipelines: [Box<dyn LanguagePipeline>; 5]) -> Self {
		Self { pipelines }
	}

	/// Loads the production ONNX pipelines for all supported languages.
	///
	/// Model loads are expensive and happen here, before any request is
	/// served. Any failure is fatal at startup.
	pub fn load() -> Result<Self, GistError> {
		let mut loaded: Vec<Box<dyn LanguagePipeline>> = Vec::with_capacity(Language::ALL.len());

		for language in Language::ALL {
			let pipeline = OnnxPipeline::load(language).map_err(|reason| GistError::ModelLoad {
				language,
				reason,
			})?;
			loaded.push(Box::new(pipeline));
		}

		let pipelines: [Box<dyn LanguagePipeline>; 5] = loaded
			.try_into()
			.unwrap_or_else(|_| unreachable!("Language::ALL is five languages"));

		Ok(Self::new(pipelines))
	}

	/// The pipeline for a language. Total: every supported language has one.
	pub fn get(&self, language: Language) -> &dyn LanguagePipeline {
		self.pipelines[language.index()].as_ref()
	}
}
