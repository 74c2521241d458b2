// Sentence embedder - dense vectors via ONNX Runtime
//
// Runs a per-language sentence-transformer model. Output is the mean-pooled
// last hidden state, returned raw: similarity thresholds downstream are
// tuned for unnormalized dot products.

use anyhow::{Context, Result};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;
use tokenizers::Tokenizer;

use crate::types::Embedding;

pub struct SentenceEmbedder {
	session: Mutex<Session>,
	tokenizer: Tokenizer,
}

impl SentenceEmbedder {
	pub fn load(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
		if !model_path.exists() {
			anyhow::bail!("embedding model not found: {}", model_path.display());
		}
		if !tokenizer_path.exists() {
			anyhow::bail!("tokenizer not found: {}", tokenizer_path.display());
		}

		let session = Session::builder()?
			.with_optimization_level(GraphOptimizationLevel::Level3)?
			.commit_from_file(model_path)
			.context("load embedding model")?;

		let tokenizer = Tokenizer::from_file(tokenizer_path)
			.map_err(|e| anyhow::anyhow!("load tokenizer: {}", e))?;

		Ok(Self {
			session: Mutex::new(session),
			tokenizer,
		})
	}

	/// Embeds a single sentence.
	pub fn embed(&self, text: &str) -> Result<Embedding> {
		let encoding = self
			.tokenizer
			.encode(text, true)
			.map_err(|e| anyhow::anyhow!("tokenize: {}", e))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let attention_mask: Vec<i64> = encoding
			.get_attention_mask()
			.iter()
			.map(|&x| x as i64)
			.collect();

		let seq_len = input_ids.len();
		let input_ids_arr = Array2::from_shape_vec((1, seq_len), input_ids)?;
		let attention_mask_arr = Array2::from_shape_vec((1, seq_len), attention_mask.clone())?;

		let input_ids_val = Value::from_array(input_ids_arr)?;
		let attention_mask_val = Value::from_array(attention_mask_arr)?;

		let mut session = self
			.session
			.lock()
			.map_err(|e| anyhow::anyhow!("session lock: {}", e))?;

		let outputs = session.run(ort::inputs![
			"input_ids" => input_ids_val,
			"attention_mask" => attention_mask_val,
		])?;

		let output = outputs
			.get("last_hidden_state")
			.or_else(|| outputs.get("sentence_embedding"))
			.context("model output not found")?;

		let (shape, data) = output.try_extract_tensor::<f32>()?;
		let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

		let vector = match dims.as_slice() {
			// [1, seq_len, hidden] - mean pool over attended positions
			[1, seq, hidden] => mean_pool_flat(data, *seq, *hidden, &attention_mask),
			// [1, hidden] - already pooled
			[1, _] => data.to_vec(),
			_ => anyhow::bail!("unexpected embedding output shape: {:?}", dims),
		};

		Ok(Embedding::new(vector))
	}
}

/// Mean pooling with attention mask over flat data.
fn mean_pool_flat(data: &[f32], seq_len: usize, hidden_size: usize, attention_mask: &[i64]) -> Vec<f32> {
	let mut sum = vec![0.0f32; hidden_size];
	let mut count = 0.0f32;

	for i in 0..seq_len {
		if attention_mask.get(i).copied().unwrap_or(0) == 1 {
			let offset = i * hidden_size;
			for j in 0..hidden_size {
				sum[j] += data[offset + j];
			}
			count += 1.0;
		}
	}

	if count > 0.0 {
		sum.iter_mut().for_each(|x| *x /= count);
	}

	sum
}
