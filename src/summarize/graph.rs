//! Sentence similarity graph
//!
//! Nodes are sentence ordinals; an undirected weighted edge connects two
//! sentences whose embedding dot product exceeds the threshold. Building
//! the graph is the O(n²) heart of the pipeline, so rows are computed in
//! parallel and checked against the request deadline.

use rayon::prelude::*;

use super::Deadline;
use crate::error::GistError;
use crate::types::Embedding;

/// An undirected weighted graph over sentence ordinals.
///
/// Adjacency rows are sorted by target ordinal for deterministic iteration.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    num_nodes: usize,
    adjacency: Vec<Vec<(u32, f64)>>,
}

impl SimilarityGraph {
    /// Builds the graph from sentence embeddings.
    ///
    /// Every ordered pair is scored with a raw dot product; an edge exists
    /// iff the score exceeds `threshold`. Since the dot product is symmetric
    /// both directions produce identical weights, so per-row construction is
    /// idempotent with respect to edge duplication.
    pub fn build(
        embeddings: &[Embedding],
        threshold: f32,
        deadline: &Deadline,
    ) -> Result<Self, GistError> {
        let n = embeddings.len();

        let adjacency: Vec<Vec<(u32, f64)>> = (0..n)
            .into_par_iter()
            .map(|i| {
                deadline.check("similarity graph")?;

                let mut row = Vec::new();
                for j in 0..n {
                    if i == j {
                        continue; // no self-edges
                    }
                    let similarity = embeddings[i].similarity(&embeddings[j]);
                    if similarity > threshold {
                        row.push((j as u32, similarity as f64));
                    }
                }
                Ok(row)
            })
            .collect::<Result<_, GistError>>()?;

        Ok(Self {
            num_nodes: n,
            adjacency,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Total number of directed edge entries (each undirected edge counts twice).
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum()
    }

    /// Iterate over neighbors of a node with edge weights.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.adjacency[node as usize].iter().copied()
    }

    /// Sum of edge weights leaving a node.
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.adjacency[node as usize].iter().map(|(_, w)| w).sum()
    }

    /// Weight of the edge between two nodes, if present.
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        self.adjacency[from as usize]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, w)| *w)
    }

    /// Nodes with no edges at all.
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.adjacency[n as usize].is_empty())
            .collect()
    }
}
