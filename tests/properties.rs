//! Property tests for structural and mass-conservation invariants.

use proptest::collection::vec;
use proptest::prelude::*;

use rapid_pagerank::graph::{CsrGraph, GraphBuilder};
use rapid_pagerank::pagerank::PerplexityPageRank;
use rapid_pagerank::types::{LinkRecord, PageId};

fn arb_records() -> impl Strategy<Value = Vec<LinkRecord>> {
    vec(
        (0..40i64, vec(0..40i64, 0..6)).prop_map(|(page, in_links)| LinkRecord::new(page, in_links)),
        1..25,
    )
}

fn distinct_ids(records: &[LinkRecord]) -> std::collections::BTreeSet<PageId> {
    records
        .iter()
        .flat_map(|r| std::iter::once(r.page).chain(r.in_links.iter().copied()))
        .collect()
}

proptest! {
    #[test]
    fn node_count_equals_distinct_ids(records in arb_records()) {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));
        prop_assert_eq!(graph.num_nodes, distinct_ids(&records).len());
    }

    #[test]
    fn every_round_preserves_rank_mass(records in arb_records(), rounds in 1usize..6) {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));
        let result = PerplexityPageRank::new().with_iteration_cap(rounds).run(&graph);

        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "mass drifted to {}", sum);
    }

    #[test]
    fn sinks_are_exactly_zero_out_degree_nodes(records in arb_records()) {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));
        let sinks = graph.sink_nodes();

        for node in 0..graph.num_nodes as u32 {
            let is_sink = sinks.contains(&node);
            prop_assert_eq!(is_sink, graph.degree(node) == 0);
        }
    }

    #[test]
    fn top_k_clamps_and_descends(records in arb_records(), k in 0usize..100) {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));
        let result = PerplexityPageRank::new().with_iteration_cap(8).run(&graph);

        let top = result.top_pages(&graph, k);
        prop_assert_eq!(top.len(), k.min(graph.num_nodes));
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
            if pair[0].1 == pair[1].1 {
                prop_assert!(pair[0].0 < pair[1].0, "equal scores must order by id");
            }
        }
    }

    #[test]
    fn edges_are_deduplicated(records in arb_records()) {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_records(&records));

        for node in 0..graph.num_nodes as u32 {
            let neighbors: Vec<u32> = graph.in_neighbors(node).collect();
            let mut deduped = neighbors.clone();
            deduped.dedup();
            prop_assert_eq!(neighbors, deduped, "in-neighbors of {} repeat", node);
        }
    }
}
