// Token tagger - word-level labels via ONNX token classification
//
// One tagger instance per concern (POS, NER): a session plus its label
// vocabulary. Sub-token predictions are collapsed to word level by taking
// the first sub-token's label for each word.

use anyhow::{Context, Result};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;
use tokenizers::Tokenizer;

/// A word with its predicted label and its byte span in the input text.
#[derive(Debug, Clone)]
pub struct TaggedWord {
	pub text: String,
	pub label: String,
	pub start: usize,
	pub end: usize,
}

pub struct TokenTagger {
	session: Mutex<Session>,
	labels: Vec<String>,
}

impl TokenTagger {
	pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self> {
		if !model_path.exists() {
			anyhow::bail!("tagger model not found: {}", model_path.display());
		}

		let session = Session::builder()?
			.with_optimization_level(GraphOptimizationLevel::Level3)?
			.commit_from_file(model_path)
			.context("load tagger model")?;

		let content = std::fs::read_to_string(labels_path)
			.with_context(|| format!("read label map {}", labels_path.display()))?;
		let labels: Vec<String> = serde_json::from_str(&content).context("parse label map")?;

		if labels.is_empty() {
			anyhow::bail!("label map is empty: {}", labels_path.display());
		}

		Ok(Self {
			session: Mutex::new(session),
			labels,
		})
	}

	/// Tags each word of `text` with the label of its first sub-token.
	pub fn tag(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<TaggedWord>> {
		let encoding = tokenizer
			.encode(text, true)
			.map_err(|e| anyhow::anyhow!("tokenize: {}", e))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let attention_mask: Vec<i64> = encoding
			.get_attention_mask()
			.iter()
			.map(|&x| x as i64)
			.collect();

		let seq_len = input_ids.len();
		if seq_len == 0 {
			return Ok(Vec::new());
		}

		let input_ids_val = Value::from_array(Array2::from_shape_vec((1, seq_len), input_ids)?)?;
		let attention_mask_val =
			Value::from_array(Array2::from_shape_vec((1, seq_len), attention_mask)?)?;

		let mut session = self
			.session
			.lock()
			.map_err(|e| anyhow::anyhow!("session lock: {}", e))?;

		let outputs = session.run(ort::inputs![
			"input_ids" => input_ids_val,
			"attention_mask" => attention_mask_val,
		])?;

		let logits = outputs.get("logits").context("no logits output")?;
		let (shape, data) = logits.try_extract_tensor::<f32>()?;
		let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

		let [_, out_seq, num_labels] = dims.as_slice() else {
			anyhow::bail!("unexpected logits shape: {:?}", dims);
		};
		let (out_seq, num_labels) = (*out_seq, *num_labels);

		let word_ids = encoding.get_word_ids();
		let offsets = encoding.get_offsets();

		let mut words: Vec<TaggedWord> = Vec::new();
		let mut last_word: Option<u32> = None;

		for position in 0..out_seq.min(word_ids.len()) {
			let Some(word_id) = word_ids[position] else {
				continue; // special token
			};
			// Only the first sub-token of a word decides its label.
			if last_word == Some(word_id) {
				if let Some(current) = words.last_mut() {
					current.end = current.end.max(offsets[position].1);
					current.text = text[current.start..current.end].to_string();
				}
				continue;
			}
			last_word = Some(word_id);

			let row = &data[position * num_labels..(position + 1) * num_labels];
			let best = argmax(row);
			let (start, end) = offsets[position];

			words.push(TaggedWord {
				text: text[start..end].to_string(),
				label: self.labels[best.min(self.labels.len() - 1)].clone(),
				start,
				end,
			});
		}

		Ok(words)
	}
}

fn argmax(row: &[f32]) -> usize {
	let mut best = 0;
	for (i, &v) in row.iter().enumerate() {
		if v > row[best] {
			best = i;
		}
	}
	best
}
