//! Extractive summarization pipeline
//!
//! Four stages run in sequence per request: language detection, pipeline
//! dispatch, similarity graph construction, and centrality ranking with
//! sentence selection. Each stage is a pure transformation of its inputs;
//! the only shared resource is the read-only pipeline registry.

pub mod graph;
pub mod pagerank;

use std::time::{Duration, Instant};

use crate::config;
use crate::error::GistError;
use crate::lang;
use crate::logger::{log, Level};
use crate::models::PipelineRegistry;
use crate::types::{Embedding, Sentence};

pub use graph::SimilarityGraph;
pub use pagerank::{PageRank, Scores};

/// Per-request time budget covering the O(n²) similarity stage and the
/// centrality iteration, the two stages that scale with input size.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Option<Instant>,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            end: Some(Instant::now() + budget),
        }
    }

    /// No time bound; used by unit tests and trusted callers.
    pub fn unbounded() -> Self {
        Self { end: None }
    }

    /// Already elapsed; every check fails.
    #[cfg(test)]
    pub fn expired() -> Self {
        Self {
            end: Some(Instant::now() - Duration::from_secs(1)),
        }
    }

    pub fn check(&self, stage: &str) -> Result<(), GistError> {
        match self.end {
            Some(end) if Instant::now() > end => Err(GistError::ResourceExhausted(format!(
                "{} exceeded the request time budget",
                stage
            ))),
            _ => Ok(()),
        }
    }
}

/// The summarization entry point.
///
/// Holds a reference to the shared registry plus per-call resource bounds.
/// Construct once and reuse; each `summarize` call is independent.
pub struct Summarizer<'a> {
    registry: &'a PipelineRegistry,
    budget: Duration,
    max_sentences: usize,
}

impl<'a> Summarizer<'a> {
    pub fn new(registry: &'a PipelineRegistry) -> Self {
        Self {
            registry,
            budget: config::DEFAULT_DEADLINE,
            max_sentences: config::MAX_SENTENCES,
        }
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Produces an extractive summary of `text` with at most
    /// `sentence_count` sentences.
    ///
    /// Selected sentences are joined by a single space in descending score
    /// order (rank order, not document order), matching the established
    /// output format. Ties break toward the earlier sentence.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> Result<String, GistError> {
        if text.trim().is_empty() {
            return Err(GistError::EmptyInput);
        }

        let language = lang::detect(text)?;
        let pipeline = self.registry.get(language);

        let sentences: Vec<Sentence> = pipeline
            .segment(text)
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| Sentence::new(ordinal, text))
            .collect();

        if sentences.is_empty() {
            return Err(GistError::EmptyInput);
        }
        if sentences.len() > self.max_sentences {
            return Err(GistError::ResourceExhausted(format!(
                "document has {} sentences, limit is {}",
                sentences.len(),
                self.max_sentences
            )));
        }

        log(
            Level::Debug,
            &format!("{}: {} sentences", language, sentences.len()),
        );

        let deadline = Deadline::after(self.budget);

        let embeddings: Vec<Embedding> = sentences
            .iter()
            .map(|sentence| pipeline.embed(&sentence.text))
            .collect::<anyhow::Result<_>>()?;

        let graph =
            SimilarityGraph::build(&embeddings, config::SIMILARITY_THRESHOLD, &deadline)?;
        let scores = PageRank::new().run(&graph, &deadline)?;

        log(
            Level::Debug,
            &format!(
                "graph: {} edges, centrality converged after {} iterations",
                graph.num_edges() / 2,
                scores.iterations
            ),
        );

        let ranked = rank_ordinals(&scores.values);
        let take = sentence_count.min(sentences.len());

        let summary = ranked
            .into_iter()
            .take(take)
            .map(|ordinal| sentences[ordinal].text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(summary)
    }
}

/// Ordinals sorted by descending score. The sort is stable, so equal scores
/// keep ascending-ordinal order.
fn rank_ordinals(scores: &[f64]) -> Vec<usize> {
    let mut ordinals: Vec<usize> = (0..scores.len()).collect();
    ordinals.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ordinals
}
