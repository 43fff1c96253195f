//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores in-neighbors contiguously, which is exactly the access pattern
//! the pull-based PageRank update needs during power iteration. The topology
//! is frozen at build time; only rank values change during iteration.

use crate::types::PageId;

use super::builder::GraphBuilder;

/// A directed graph in Compressed Sparse Row format, keyed by in-links
///
/// Node `i`'s in-neighbors live at `col_idx[row_ptr[i]..row_ptr[i+1]]`.
/// Out-degrees are kept as a parallel vector so each in-neighbor's
/// contribution `rank / out_degree` is an O(1) lookup.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's in-edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (in-neighbor nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Out-degree for each node
    pub out_degree: Vec<u32>,
    /// External page id for each node
    pub page_ids: Vec<PageId>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut out_degree = Vec::with_capacity(num_nodes);
        let mut page_ids = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            page_ids.push(node.id);
            out_degree.push(node.out_degree() as u32);

            // Sort in-neighbors for deterministic iteration
            let mut in_links = node.in_links().to_vec();
            in_links.sort_unstable();
            col_idx.extend_from_slice(&in_links);

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            out_degree,
            page_ids,
        }
    }

    /// Iterate over the in-neighbors of a node
    pub fn in_neighbors(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        self.col_idx[start..end].iter().copied()
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Get the external page id for a node
    pub fn page_id(&self, node: u32) -> PageId {
        self.page_ids[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find sink nodes (nodes with no outgoing edges)
    ///
    /// Computed once after load; the topology never changes afterwards.
    pub fn sink_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }

    /// Get node index by page id (linear search - use sparingly)
    pub fn get_node_by_id(&self, id: PageId) -> Option<u32> {
        self.page_ids.iter().position(|&p| p == id).map(|i| i as u32)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
            page_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinkRecord;

    fn build_test_graph() -> CsrGraph {
        // 1 <- 2, 1 <- 3, 2 <- 3
        let records = vec![
            LinkRecord::new(1, vec![2, 3]),
            LinkRecord::new(2, vec![3]),
        ];
        CsrGraph::from_builder(&GraphBuilder::from_records(&records))
    }

    #[test]
    fn test_csr_conversion() {
        let csr = build_test_graph();

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 3);
        assert_eq!(csr.page_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_in_neighbor_iteration() {
        let csr = build_test_graph();

        // Node for page 1 (index 0) has in-neighbors 2 and 3 (indices 1, 2).
        let neighbors: Vec<_> = csr.in_neighbors(0).collect();
        assert_eq!(neighbors, vec![1, 2]);

        // Page 3 (index 2) has no in-links.
        assert_eq!(csr.in_neighbors(2).count(), 0);
    }

    #[test]
    fn test_out_degrees() {
        let csr = build_test_graph();

        assert_eq!(csr.degree(0), 0); // page 1 links nowhere
        assert_eq!(csr.degree(1), 1); // page 2 -> 1
        assert_eq!(csr.degree(2), 2); // page 3 -> 1, 2
    }

    #[test]
    fn test_sink_nodes() {
        let csr = build_test_graph();

        // Only page 1 (index 0) has no out-links.
        assert_eq!(csr.sink_nodes(), vec![0]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::default();

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.sink_nodes().is_empty());
    }

    #[test]
    fn test_isolated_node_is_sink() {
        // A single line with no in-links yields one node with no edges.
        let records = vec![LinkRecord::new(9, vec![])];
        let csr = CsrGraph::from_builder(&GraphBuilder::from_records(&records));

        assert_eq!(csr.num_nodes, 1);
        assert_eq!(csr.sink_nodes(), vec![0]);
        assert_eq!(csr.in_neighbors(0).count(), 0);
    }

    #[test]
    fn test_get_node_by_id() {
        let csr = build_test_graph();

        assert_eq!(csr.get_node_by_id(1), Some(0));
        assert_eq!(csr.get_node_by_id(3), Some(2));
        assert_eq!(csr.get_node_by_id(99), None);
    }
}
