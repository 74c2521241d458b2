// Startup behavior of the production registry. Model loads happen once,
// before any request is served, and a missing model directory must be a
// fatal typed error rather than a per-request failure. This runs in its
// own test binary because the model-dir override is process-wide.

use std::path::PathBuf;

use gist::config;
use gist::error::GistError;
use gist::lang::Language;
use gist::models::PipelineRegistry;

#[test]
fn missing_model_dir_is_a_fatal_load_error() {
	config::set_model_dir(PathBuf::from("/nonexistent/gist-models"));

	match PipelineRegistry::load() {
		Err(GistError::ModelLoad { language, .. }) => {
			// Languages load in registry order; the first one fails first.
			assert_eq!(language, Language::English);
		}
		Ok(_) => panic!("registry loaded without any model files on disk"),
		Err(other) => panic!("expected ModelLoad, got {:?}", other),
	}
}
