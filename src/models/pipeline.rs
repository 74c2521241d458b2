//! Production language pipeline backed by ONNX models
//!
//! Each language directory holds a sentence embedder, POS and NER token
//! classifiers, a shared tokenizer, and a lemma table. All files are loaded
//! eagerly; a missing file fails the whole startup.

use anyhow::{Context, Result};
use tokenizers::Tokenizer;

use crate::config;
use crate::lang::Language;
use crate::models::embedder::SentenceEmbedder;
use crate::models::tagger::{TaggedWord, TokenTagger};
use crate::models::LanguagePipeline;
use crate::nlp::{self, Lexicon};
use crate::types::{Embedding, Entity, PosTag, Token};

pub struct OnnxPipeline {
	language: Language,
	tokenizer: Tokenizer,
	embedder: SentenceEmbedder,
	pos: TokenTagger,
	ner: TokenTagger,
	lexicon: Lexicon,
}

impl OnnxPipeline {
	pub fn load(language: Language) -> Result<Self> {
		let dir = config::language_dir(language.code()).with_context(|| {
			format!(
				"models directory not found; set GIST_MODELS_DIR or place models next to the executable ({})",
				language.code()
			)
		})?;
		if !dir.is_dir() {
			anyhow::bail!("no model directory for {}: {}", language, dir.display());
		}

		let tokenizer = Tokenizer::from_file(dir.join(config::TOKENIZER))
			.map_err(|e| anyhow::anyhow!("load tokenizer: {}", e))?;
		let embedder =
			SentenceEmbedder::load(&dir.join(config::EMBED_MODEL), &dir.join(config::TOKENIZER))?;
		let pos = TokenTagger::load(&dir.join(config::POS_MODEL), &dir.join(config::POS_LABELS))?;
		let ner = TokenTagger::load(&dir.join(config::NER_MODEL), &dir.join(config::NER_LABELS))?;
		let lexicon = Lexicon::load(&dir.join(config::LEMMA_TABLE), language)?;

		Ok(Self {
			language,
			tokenizer,
			embedder,
			pos,
			ner,
			lexicon,
		})
	}
}

impl LanguagePipeline for OnnxPipeline {
	fn segment(&self, text: &str) -> Vec<String> {
		nlp::split_sentences(text, self.language)
	}

	fn embed(&self, sentence: &str) -> Result<Embedding> {
		self.embedder.embed(sentence)
	}

	fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
		let tagged = self.pos.tag(&self.tokenizer, text)?;

		Ok(tagged
			.into_iter()
			.map(|word| Token {
				lemma: self.lexicon.lemma(&word.text),
				pos: PosTag::parse(&word.label),
				text: word.text,
			})
			.collect())
	}

	fn entities(&self, text: &str) -> Result<Vec<Entity>> {
		let tagged = self.ner.tag(&self.tokenizer, text)?;
		Ok(merge_bio_spans(text, &tagged))
	}
}

/// Collapses BIO-tagged words into entity spans.
///
/// `B-LBL` opens a span; `I-LBL` extends the current span when the label
/// matches, otherwise it opens a new one (tolerates taggers that emit a
/// dangling I- tag).
fn merge_bio_spans(text: &str, tagged: &[TaggedWord]) -> Vec<Entity> {
	let mut entities = Vec::new();
	let mut open: Option<(usize, usize, String)> = None;

	for word in tagged {
		let (prefix, label) = match word.label.split_once('-') {
			Some((p, l)) if p == "B" || p == "I" => (p, l),
			_ => {
				// "O" or malformed: close any open span.
				if let Some((start, end, label)) = open.take() {
					entities.push(Entity {
						text: text[start..end].to_string(),
						label,
					});
				}
				continue;
			}
		};

		match (&mut open, prefix) {
			(Some((_, end, current)), "I") if current == label => {
				*end = word.end;
			}
			_ => {
				if let Some((start, end, label)) = open.take() {
					entities.push(Entity {
						text: text[start..end].to_string(),
						label,
					});
				}
				open = Some((word.start, word.end, label.to_string()));
			}
		}
	}

	if let Some((start, end, label)) = open {
		entities.push(Entity {
			text: text[start..end].to_string(),
			label,
		});
	}

	entities
}
