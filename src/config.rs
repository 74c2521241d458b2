//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Model Files (per-language directory layout) ===
pub const EMBED_MODEL: &str = "embedding.onnx";
pub const POS_MODEL: &str = "pos.onnx";
pub const NER_MODEL: &str = "ner.onnx";
pub const TOKENIZER: &str = "tokenizer.json";
pub const POS_LABELS: &str = "pos_labels.json";
pub const NER_LABELS: &str = "ner_labels.json";
pub const LEMMA_TABLE: &str = "lemmas.json";

// === Summarization Parameters ===
pub const SIMILARITY_THRESHOLD: f32 = 0.5;
pub const DAMPING: f64 = 0.85;
pub const MAX_ITERATIONS: usize = 100;
pub const CONVERGENCE: f64 = 1e-6;
pub const DEFAULT_SENTENCES: usize = 3;

// === Resource Bounds ===
/// Hard cap on sentence count before the O(n²) similarity stage.
pub const MAX_SENTENCES: usize = 5_000;
/// Per-request budget covering similarity and centrality stages.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

// === Analysis Defaults ===
pub const DEFAULT_KEYWORDS: usize = 10;

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

/// Get models directory (CLI override, GIST_MODELS_DIR env var, or next to
/// the executable).
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var("GIST_MODELS_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				return Some(models);
			}
		}
	}

	None
}

/// Directory holding one language's model files, e.g. `models/en/`.
pub fn language_dir(code: &str) -> Option<PathBuf> {
	models_dir().map(|d| d.join(code))
}
