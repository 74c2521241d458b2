//! Typed failure taxonomy for the summarization core
//!
//! Every failure is surfaced to the caller as a value; nothing is retried
//! or downgraded to an empty summary inside the library. The binary decides
//! user-facing messaging.

use crate::lang::Language;

#[derive(Debug, thiserror::Error)]
pub enum GistError {
	/// The language classifier could not produce a guess.
	#[error("could not detect the language of the input text")]
	DetectionFailed,

	/// A language was detected but no pipeline is registered for it.
	#[error("unsupported language: {0}")]
	UnsupportedLanguage(String),

	/// Segmentation produced zero sentences (empty or whitespace input).
	#[error("input text contains no sentences")]
	EmptyInput,

	/// A pipeline failed to load at startup. Fatal; never raised per-request.
	#[error("failed to load {language} pipeline: {reason}")]
	ModelLoad {
		language: Language,
		reason: anyhow::Error,
	},

	/// Input exceeded a configured size or time bound.
	#[error("resource limit exceeded: {0}")]
	ResourceExhausted(String),

	/// A collaborator (tokenizer, inference session) failed mid-request.
	#[error("pipeline error: {0}")]
	Pipeline(#[from] anyhow::Error),
}
