//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) page-id interning and edge dedup during construction.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::{LinkRecord, PageId};

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The external page id for this node
    pub id: PageId,
    /// In-neighbors in first-seen order, deduplicated
    in_links: Vec<u32>,
    /// Out-neighbors (used for dedup and out-degree)
    out_links: FxHashSet<u32>,
}

impl BuilderNode {
    fn new(id: PageId) -> Self {
        Self {
            id,
            in_links: Vec::new(),
            out_links: FxHashSet::default(),
        }
    }

    /// In-neighbors of this node (internal indices)
    pub fn in_links(&self) -> &[u32] {
        &self.in_links
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.out_links.len()
    }
}

/// A mutable graph builder optimized for incremental construction
///
/// Nodes are created in first-appearance order, which fixes the internal
/// index assignment and makes repeated runs over the same input bit-for-bit
/// reproducible. Edges are deduplicated: registering (u, v) twice leaves a
/// single entry in v's in-neighbor list and u's out-neighbor set.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps external page id -> internal node index
    id_to_index: FxHashMap<PageId, u32>,
    /// Node storage, indexed by internal node index
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            id_to_index: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given page id, returning its index
    pub fn get_or_create_node(&mut self, id: PageId) -> u32 {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.nodes.len() as u32;
        self.id_to_index.insert(id, idx);
        self.nodes.push(BuilderNode::new(id));
        idx
    }

    /// Register a directed edge from `from` to `to`
    ///
    /// Symmetric bookkeeping: `to` gains `from` as an in-neighbor and `from`
    /// gains `to` as an out-neighbor, each at most once.
    pub fn add_edge(&mut self, from: u32, to: u32) {
        if self.nodes[from as usize].out_links.insert(to) {
            self.nodes[to as usize].in_links.push(from);
        }
    }

    /// Merge one link record into the graph
    ///
    /// Every id in the record (the page itself and each in-linking id) gets a
    /// node; each listed id contributes an edge pointing at the page.
    pub fn add_record(&mut self, record: &LinkRecord) {
        let page = self.get_or_create_node(record.page);
        for &source in &record.in_links {
            let source = self.get_or_create_node(source);
            self.add_edge(source, page);
        }
    }

    /// Build a graph from a batch of link records
    pub fn from_records(records: &[LinkRecord]) -> Self {
        let mut builder = Self::with_capacity(records.len());
        for record in records {
            builder.add_record(record);
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.in_links.len()).sum()
    }

    /// Get a node by internal index
    pub fn get_node(&self, idx: u32) -> Option<&BuilderNode> {
        self.nodes.get(idx as usize)
    }

    /// Get the internal index for a page id
    pub fn get_node_index(&self, id: PageId) -> Option<u32> {
        self.id_to_index.get(&id).copied()
    }

    /// Iterate over all nodes in index order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
