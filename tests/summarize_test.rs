// End-to-end tests for the summarization core using mock pipelines.
// The registry is injected through its public constructor, so none of
// these tests need model files on disk.

mod common;

use common::{mock_registry, registry_with_names};
use gist::analysis;
use gist::error::GistError;
use gist::summarize::Summarizer;

const STUDY_TEXT: &str = "Photosynthesis converts light into chemical energy. \
	Plants use chlorophyll to capture sunlight. \
	The process releases oxygen. \
	Glucose stores that energy.";

#[test]
fn summary_sentences_are_verbatim_from_input() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	let summary = summarizer.summarize(STUDY_TEXT, 2).unwrap();
	assert!(!summary.is_empty());

	let originals = [
		"Photosynthesis converts light into chemical energy.",
		"Plants use chlorophyll to capture sunlight.",
		"The process releases oxygen.",
		"Glucose stores that energy.",
	];

	// The summary must be a space-join of original sentences, unmodified.
	let selected: Vec<&str> = originals
		.iter()
		.copied()
		.filter(|s| summary.contains(s))
		.collect();
	assert_eq!(selected.len(), 2);
}

#[test]
fn summary_has_exactly_min_n_sentence_count_sentences() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	// Sentence terminators survive selection, so counting periods counts
	// sentences.
	let two = summarizer.summarize(STUDY_TEXT, 2).unwrap();
	assert_eq!(two.matches('.').count(), 2);

	let all = summarizer.summarize(STUDY_TEXT, 10).unwrap();
	assert_eq!(all.matches('.').count(), 4);
}

#[test]
fn oversized_n_returns_all_sentences_in_rank_order() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	// The first sentence shares no vocabulary with the other two, so it
	// ranks last; the two cat sentences tie and keep document order.
	let text = "The stock market fell sharply today. \
		Cats are small domestic mammals. \
		Cats purr when happy.";
	let summary = summarizer.summarize(text, 10).unwrap();

	assert_eq!(
		summary,
		"Cats are small domestic mammals. Cats purr when happy. \
		 The stock market fell sharply today."
	);
}

#[test]
fn summarize_is_idempotent() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	let first = summarizer.summarize(STUDY_TEXT, 2).unwrap();
	let second = summarizer.summarize(STUDY_TEXT, 2).unwrap();
	assert_eq!(first, second);
}

#[test]
fn semantic_cluster_outranks_unrelated_sentence() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	let text = "Cats are mammals. Cats purr. The stock market fell today.";
	let summary = summarizer.summarize(text, 1).unwrap();

	assert!(
		summary == "Cats are mammals." || summary == "Cats purr.",
		"expected a cat sentence, got: {}",
		summary
	);
}

#[test]
fn empty_input_is_rejected() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	assert!(matches!(
		summarizer.summarize("", 3),
		Err(GistError::EmptyInput)
	));
	assert!(matches!(
		summarizer.summarize("   \n\t  ", 3),
		Err(GistError::EmptyInput)
	));
}

#[test]
fn unsupported_language_is_rejected() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	let text = "猫は哺乳類です。猫はよく眠ります。今日は天気がいいです。";
	match summarizer.summarize(text, 2) {
		Err(GistError::UnsupportedLanguage(code)) => assert_eq!(code, "jpn"),
		other => panic!("expected UnsupportedLanguage, got {:?}", other),
	}
}

#[test]
fn zero_requested_sentences_yields_empty_summary() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	let summary = summarizer.summarize(STUDY_TEXT, 0).unwrap();
	assert!(summary.is_empty());
}

#[test]
fn sentence_cap_is_enforced() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry).with_max_sentences(2);

	match summarizer.summarize(STUDY_TEXT, 2) {
		Err(GistError::ResourceExhausted(message)) => {
			assert!(message.contains("limit"));
		}
		other => panic!("expected ResourceExhausted, got {:?}", other),
	}
}

#[test]
fn spanish_text_is_dispatched_and_summarized() {
	let registry = mock_registry();
	let summarizer = Summarizer::new(&registry);

	let text = "Los niños pequeños aprenden español en la escuela primaria. \
		La enseñanza comienza cada mañana. \
		Los niños estudian matemáticas también.";
	let summary = summarizer.summarize(text, 1).unwrap();
	assert!(!summary.is_empty());
}

#[test]
fn keywords_rank_by_frequency() {
	let registry = mock_registry();

	let text = "Cats purr. Cats sleep. Cats hunt mice. Mice hide.";
	let keywords = analysis::keywords(&registry, text, 2).unwrap();

	assert_eq!(keywords.len(), 2);
	assert_eq!(keywords[0].lemma, "cats");
	assert_eq!(keywords[0].count, 3);
	assert_eq!(keywords[1].lemma, "mice");
	assert_eq!(keywords[1].count, 2);
}

#[test]
fn keywords_reject_empty_input() {
	let registry = mock_registry();
	assert!(matches!(
		analysis::keywords(&registry, "  ", 5),
		Err(GistError::EmptyInput)
	));
}

#[test]
fn entities_are_unique_and_sorted() {
	let registry = registry_with_names(&[
		("Marie Curie", "PER"),
		("Paris", "LOC"),
		("Warsaw", "LOC"),
	]);

	let text = "Marie Curie was born in Warsaw. Marie Curie later moved to Paris.";
	let entities = analysis::entities(&registry, text).unwrap();

	let pairs: Vec<(&str, &str)> = entities
		.iter()
		.map(|e| (e.text.as_str(), e.label.as_str()))
		.collect();
	assert_eq!(
		pairs,
		vec![("Marie Curie", "PER"), ("Paris", "LOC"), ("Warsaw", "LOC")]
	);
}
