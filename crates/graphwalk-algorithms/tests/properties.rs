//! Engine-wide properties over generated graphs: determinism, input
//! immutability, monotonic visited growth, terminal coverage, flow bounds.

use graphwalk_algorithms::{capacity, get_algorithm, ALGORITHMS};
use graphwalk_model::{AlgorithmContext, GraphEdge, GraphNode};
use proptest::prelude::*;

fn node(index: usize) -> GraphNode {
    GraphNode {
        id: format!("n{index}"),
        label: format!("N{index}"),
        x: index as f64 * 10.0,
        y: 0.0,
    }
}

/// Graphs for BFS/DFS: mixed directed/undirected unweighted edges, loops
/// allowed (always undirected, matching the editor invariant).
fn traversal_ctx() -> impl Strategy<Value = AlgorithmContext> {
    (
        2usize..6,
        proptest::collection::vec((0usize..6, 0usize..6, any::<bool>()), 0..10),
    )
        .prop_map(|(count, raw_edges)| {
            let nodes: Vec<GraphNode> = (0..count).map(node).collect();
            let edges = raw_edges
                .into_iter()
                .enumerate()
                .map(|(index, (source, target, directed))| {
                    let source = source % count;
                    let target = target % count;
                    GraphEdge {
                        id: format!("e{index}"),
                        source: format!("n{source}"),
                        target: format!("n{target}"),
                        is_directed: directed && source != target,
                        weight: None,
                    }
                })
                .collect();
            AlgorithmContext {
                nodes,
                edges,
                source_node_id: Some("n0".to_string()),
                sink_node_id: Some(format!("n{}", count - 1)),
            }
        })
}

/// Graphs eligible for Dijkstra and Prim: undirected, non-loop,
/// non-negative integer weights.
fn weighted_ctx() -> impl Strategy<Value = AlgorithmContext> {
    (
        2usize..6,
        proptest::collection::vec((0usize..6, 0usize..6, 0i64..10), 0..10),
    )
        .prop_map(|(count, raw_edges)| {
            let nodes: Vec<GraphNode> = (0..count).map(node).collect();
            let edges = raw_edges
                .into_iter()
                .enumerate()
                .filter_map(|(index, (source, target, weight))| {
                    let source = source % count;
                    let target = target % count;
                    if source == target {
                        return None;
                    }
                    Some(GraphEdge {
                        id: format!("e{index}"),
                        source: format!("n{source}"),
                        target: format!("n{target}"),
                        is_directed: false,
                        weight: Some(weight as f64),
                    })
                })
                .collect();
            AlgorithmContext {
                nodes,
                edges,
                source_node_id: Some("n0".to_string()),
                sink_node_id: Some(format!("n{}", count - 1)),
            }
        })
}

/// Flow networks: directed, non-loop, positive integer capacities.
fn network_ctx() -> impl Strategy<Value = AlgorithmContext> {
    (
        2usize..6,
        proptest::collection::vec((0usize..6, 0usize..6, 1i64..10), 0..10),
    )
        .prop_map(|(count, raw_edges)| {
            let nodes: Vec<GraphNode> = (0..count).map(node).collect();
            let edges = raw_edges
                .into_iter()
                .enumerate()
                .filter_map(|(index, (source, target, cap))| {
                    let source = source % count;
                    let target = target % count;
                    if source == target {
                        return None;
                    }
                    Some(GraphEdge {
                        id: format!("e{index}"),
                        source: format!("n{source}"),
                        target: format!("n{target}"),
                        is_directed: true,
                        weight: Some(cap as f64),
                    })
                })
                .collect();
            AlgorithmContext {
                nodes,
                edges,
                source_node_id: Some("n0".to_string()),
                sink_node_id: Some(format!("n{}", count - 1)),
            }
        })
}

proptest! {
    #[test]
    fn traversal_runs_are_deterministic(ctx in traversal_ctx()) {
        for id in ["BFS", "DFS"] {
            let algorithm = get_algorithm(id).unwrap();
            prop_assert_eq!(algorithm.run(&ctx), algorithm.run(&ctx));
        }
    }

    #[test]
    fn weighted_runs_are_deterministic(ctx in weighted_ctx()) {
        for id in ["DIJKSTRA", "MST_PRIM"] {
            let algorithm = get_algorithm(id).unwrap();
            prop_assert!(algorithm.supports(&ctx).is_ok());
            prop_assert_eq!(algorithm.run(&ctx), algorithm.run(&ctx));
        }
    }

    #[test]
    fn network_runs_are_deterministic(ctx in network_ctx()) {
        let algorithm = get_algorithm("MAX_FLOW_FF").unwrap();
        prop_assert!(algorithm.supports(&ctx).is_ok());
        prop_assert_eq!(algorithm.run(&ctx), algorithm.run(&ctx));
    }

    #[test]
    fn runs_never_mutate_the_context(ctx in weighted_ctx()) {
        let before = ctx.clone();
        for algorithm in ALGORITHMS {
            if algorithm.supports(&ctx).is_ok() {
                let _ = algorithm.run(&ctx);
            }
        }
        prop_assert_eq!(ctx, before);
    }

    #[test]
    fn visited_growth_is_monotonic(ctx in weighted_ctx()) {
        for id in ["BFS", "DFS", "DIJKSTRA", "MST_PRIM"] {
            let algorithm = get_algorithm(id).unwrap();
            let mut previous = 0;
            for step in algorithm.run(&ctx) {
                prop_assert!(step.visited_node_ids.len() >= previous);
                prop_assert!(step.visited_node_ids.len() <= ctx.nodes.len());
                previous = step.visited_node_ids.len();
            }
        }
    }

    #[test]
    fn terminal_step_has_empty_frontier(ctx in weighted_ctx()) {
        for algorithm in ALGORITHMS {
            if algorithm.supports(&ctx).is_err() {
                continue;
            }
            let steps = algorithm.run(&ctx);
            let last = steps.last().unwrap();
            prop_assert!(last.frontier_node_ids.is_empty());
            prop_assert!(last.message.is_some());
        }
    }

    #[test]
    fn flow_stays_within_bounds(ctx in network_ctx()) {
        let algorithm = get_algorithm("MAX_FLOW_FF").unwrap();
        for step in algorithm.run(&ctx) {
            for (edge_id, value) in &step.flow_by_edge {
                let edge = ctx.edges.iter().find(|e| e.id == *edge_id).unwrap();
                prop_assert!(*value >= 0);
                prop_assert!(*value <= capacity(edge));
            }
        }
    }
}
