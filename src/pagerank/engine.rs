//! Perplexity-terminated PageRank power iteration
//!
//! Implements the damped power method with sink-mass redistribution. Each
//! round is a synchronous (Jacobi) update: every new rank is computed from
//! the previous round's full vector, then the whole vector is swapped in at
//! once, so within-round ordering cannot affect the result.

use rayon::prelude::*;
use tracing::{debug, info};

use super::perplexity::{has_converged, perplexity};
use super::RankResult;
use crate::graph::CsrGraph;

/// Below this node count the per-node update runs sequentially; the rayon
/// fork-join overhead only pays off on larger graphs.
const PARALLEL_THRESHOLD: usize = 4096;

/// PageRank engine with perplexity-based termination
///
/// Initialization (uniform `1/N` ranks, sink-set scan, fresh trace) happens
/// inside [`run`](Self::run), so iterating an uninitialized state is
/// impossible by construction.
#[derive(Debug, Clone)]
pub struct PerplexityPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Optional hard bound on iterations
    ///
    /// The reference algorithm stops only via the perplexity test; this cap
    /// is a defensive extension and is off by default.
    pub max_iterations: Option<usize>,
}

impl Default for PerplexityPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: None,
        }
    }
}

impl PerplexityPageRank {
    /// Create a new engine with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Bound the number of iterations
    pub fn with_iteration_cap(mut self, cap: usize) -> Self {
        self.max_iterations = Some(cap);
        self
    }

    /// Run PageRank on a graph until the perplexity trace converges
    ///
    /// Per round, with damping `d` over `N` nodes:
    ///
    /// ```text
    /// new_rank(n) = (1 - d + d·sink_mass) / N + d · Σ rank(in) / out_degree(in)
    /// ```
    ///
    /// summed over the in-neighbors of `n`. `sink_mass` is the previous
    /// round's total rank held by sink nodes, redistributed uniformly. The
    /// update preserves total rank mass at 1.0.
    pub fn run(&self, graph: &CsrGraph) -> RankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult::new(vec![], vec![], 0, true);
        }

        let n_f64 = n as f64;
        let mut scores = vec![1.0 / n_f64; n];
        let mut new_scores = vec![0.0; n];

        // Sinks are fixed for the run; the topology never changes.
        let sinks = graph.sink_nodes();

        let mut trace: Vec<f64> = Vec::new();
        let mut iterations = 0;

        while !has_converged(&trace) {
            if self.max_iterations.is_some_and(|cap| iterations >= cap) {
                break;
            }
            iterations += 1;

            let sink_mass: f64 = sinks.iter().map(|&s| scores[s as usize]).sum();
            let base = (1.0 - self.damping + self.damping * sink_mass) / n_f64;

            self.update_round(graph, &scores, &mut new_scores, base);

            // Swap only after every slot is written: no node ever reads a
            // partially-updated vector.
            std::mem::swap(&mut scores, &mut new_scores);

            // Sequential reduction keeps the trace bit-for-bit reproducible.
            let p = perplexity(&scores);
            trace.push(p);
            debug!(iteration = iterations, perplexity = p, "iteration complete");
        }

        let converged = has_converged(&trace);
        info!(iterations, converged, "pagerank finished");
        RankResult::new(scores, trace, iterations, converged)
    }

    /// Compute one round of new scores from the previous round's vector
    ///
    /// Each slot depends only on `scores`, so per-node computation is the one
    /// safe parallelization point; the buffer swap in `run` is the barrier.
    fn update_round(&self, graph: &CsrGraph, scores: &[f64], new_scores: &mut [f64], base: f64) {
        let damping = self.damping;
        let per_node = |node: usize, slot: &mut f64| {
            let mut score = base;
            for source in graph.in_neighbors(node as u32) {
                // In-neighbors have at least one out-edge (to this node).
                score += damping * scores[source as usize] / graph.degree(source) as f64;
            }
            *slot = score;
        };

        if graph.num_nodes < PARALLEL_THRESHOLD {
            for (node, slot) in new_scores.iter_mut().enumerate() {
                per_node(node, slot);
            }
        } else {
            new_scores
                .par_iter_mut()
                .enumerate()
                .for_each(|(node, slot)| per_node(node, slot));
        }
    }
}
