//! Directed graph construction and representation
//!
//! This module provides efficient graph building and storage
//! for the page link graph.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::CsrGraph;
