//! Weighted PageRank over the sentence similarity graph
//!
//! Power iteration with damping and dangling-mass redistribution. The
//! convergence criterion is fixed (L1 delta below a threshold, capped
//! iteration count), which makes scores reproducible for identical input.

use super::Deadline;
use crate::config;
use crate::error::GistError;
use crate::summarize::graph::SimilarityGraph;

#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (probability of following an edge).
    pub damping: f64,
    /// Iteration cap; reached only on pathological inputs.
    pub max_iterations: usize,
    /// L1 convergence threshold over successive score vectors.
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: config::DAMPING,
            max_iterations: config::MAX_ITERATIONS,
            threshold: config::CONVERGENCE,
        }
    }
}

/// Scores produced by a PageRank run.
#[derive(Debug, Clone)]
pub struct Scores {
    /// One score per node, indexed by ordinal, normalized to sum to 1.
    pub values: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Runs power iteration on `graph`.
    ///
    /// Isolated nodes are dangling: their mass is redistributed uniformly
    /// each iteration, which leaves them at the teleport baseline. Every
    /// ordinal therefore receives a score.
    pub fn run(&self, graph: &SimilarityGraph, deadline: &Deadline) -> Result<Scores, GistError> {
        let n = graph.num_nodes();
        if n == 0 {
            return Ok(Scores {
                values: vec![],
                iterations: 0,
                converged: true,
            });
        }

        let initial = 1.0 / n as f64;
        let mut scores = vec![initial; n];
        let mut next = vec![0.0; n];

        let dangling = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            deadline.check("centrality")?;
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, &score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        next[neighbor as usize] += self.damping * score * weight / total_weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        // Guard against drift; scores should already sum to ~1.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        Ok(Scores {
            values: scores,
            iterations,
            converged: delta <= self.threshold,
        })
    }
}
