//! rapid-pagerank — batch PageRank over link files
//!
//! Computes PageRank scores for a directed page graph loaded from a
//! line-oriented adjacency file, using power iteration with damping and
//! sink-mass redistribution. Termination is decided by a perplexity-based
//! test over the per-iteration trace rather than the usual L1-delta
//! threshold, reproducing the reference tool's observable iteration counts.
//!
//! # Pipeline
//!
//! ```text
//! link file ──> GraphBuilder ──> CsrGraph ──> PerplexityPageRank ──> RankResult
//!                                                                      │
//!                                              perplexity trace <──────┤
//!                                              score file       <──────┤
//!                                              top-K pages      <──────┘
//! ```
//!
//! # Example
//!
//! ```
//! use rapid_pagerank::graph::{CsrGraph, GraphBuilder};
//! use rapid_pagerank::pagerank::PerplexityPageRank;
//! use rapid_pagerank::types::LinkRecord;
//!
//! // 1 -> 2 -> 3 -> 1
//! let records = vec![
//!     LinkRecord::new(2, vec![1]),
//!     LinkRecord::new(3, vec![2]),
//!     LinkRecord::new(1, vec![3]),
//! ];
//! let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));
//! let result = PerplexityPageRank::new().run(&graph);
//!
//! assert!(result.converged);
//! let top = result.top_pages(&graph, 3);
//! assert_eq!(top.len(), 3);
//! ```

pub mod error;
pub mod graph;
pub mod io;
pub mod pagerank;
pub mod types;

pub use error::{RankError, Result};
pub use graph::{CsrGraph, GraphBuilder};
pub use pagerank::{PerplexityPageRank, RankResult};
pub use types::{LinkRecord, PageId};
