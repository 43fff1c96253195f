//! PageRank computation
//!
//! This module provides the perplexity-terminated power iteration engine
//! and its result type.

pub mod engine;
pub mod perplexity;

pub use engine::PerplexityPageRank;

use crate::graph::CsrGraph;
use crate::types::PageId;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each node (indexed by internal node index)
    pub scores: Vec<f64>,
    /// Perplexity after each iteration, in iteration order
    pub trace: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether the perplexity test signalled convergence
    pub converged: bool,
}

impl RankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, trace: Vec<f64>, iterations: usize, converged: bool) -> Self {
        Self {
            scores,
            trace,
            iterations,
            converged,
        }
    }

    /// Get top N nodes by score (internal indices)
    ///
    /// Ties are broken by ascending node index.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the top K pages by score, most significant first
    ///
    /// Ties are broken by ascending page id so output is reproducible.
    /// `k` is clamped to the node count.
    pub fn top_pages(&self, graph: &CsrGraph, k: usize) -> Vec<(PageId, f64)> {
        let mut ranked: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (graph.page_id(i as u32), s))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k.min(self.scores.len()));
        ranked
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
