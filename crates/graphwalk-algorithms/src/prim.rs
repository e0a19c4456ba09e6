//! Prim minimum-spanning-tree step generator.

use std::collections::HashSet;

use graphwalk_model::{AlgorithmContext, EdgeId, GraphEdge, NodeId, OverlayState};

use crate::narrate::{self, fmt_number};
use crate::registry::Algorithm;
use crate::support::{self, Unsupported};

/// Prim's MST by frontier rescan.
///
/// No precomputed adjacency: each iteration rescans the whole edge list for
/// the cheapest edge crossing the tree boundary. O(E) per step is fine at
/// editor scale and keeps every candidate set visible to the overlay.
pub struct Prim;

impl Algorithm for Prim {
    fn id(&self) -> &'static str {
        "MST_PRIM"
    }

    fn label(&self) -> &'static str {
        "Prim Minimum Spanning Tree"
    }

    fn supports(&self, ctx: &AlgorithmContext) -> Result<(), Unsupported> {
        support::require_source(ctx)?;
        support::reject_directed(&ctx.edges)?;
        support::reject_loops(&ctx.edges)?;
        support::require_weights(&ctx.edges)
    }

    fn run(&self, ctx: &AlgorithmContext) -> Vec<OverlayState> {
        let Some(source) = ctx.source_node_id.as_ref().filter(|id| !id.is_empty()) else {
            return narrate::aborted_run();
        };

        let mut in_tree: HashSet<NodeId> = HashSet::new();
        let mut tree_order: Vec<NodeId> = Vec::new();
        let mut tree_edges: Vec<EdgeId> = Vec::new();
        let mut total_weight = 0.0;

        in_tree.insert(source.clone());
        tree_order.push(source.clone());

        let mut steps = vec![OverlayState {
            message: Some(format!(
                "Prim started: tree seeded with {}.",
                ctx.label_of(source)
            )),
            active_node_ids: vec![source.clone()],
            visited_node_ids: tree_order.clone(),
            ..OverlayState::default()
        }];

        while in_tree.len() < ctx.nodes.len() {
            let mut candidates: Vec<&GraphEdge> = ctx
                .edges
                .iter()
                .filter(|e| {
                    !e.is_loop()
                        && e.weight.is_some_and(|w| w.is_finite())
                        && (in_tree.contains(&e.source) != in_tree.contains(&e.target))
                })
                .collect();
            candidates.sort_by(|a, b| {
                a.weight
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.weight.unwrap_or(f64::INFINITY))
                    .then_with(|| a.id.cmp(&b.id))
            });

            let mut frontier_nodes: Vec<NodeId> = Vec::new();
            for candidate in &candidates {
                let outside = if in_tree.contains(&candidate.source) {
                    &candidate.target
                } else {
                    &candidate.source
                };
                if !frontier_nodes.contains(outside) {
                    frontier_nodes.push(outside.clone());
                }
            }

            steps.push(OverlayState {
                message: Some(format!(
                    "{} candidate edge(s) cross the tree boundary.",
                    candidates.len()
                )),
                visited_node_ids: tree_order.clone(),
                frontier_node_ids: frontier_nodes.clone(),
                active_edge_ids: tree_edges.clone(),
                frontier_edge_ids: candidates.iter().map(|e| e.id.clone()).collect(),
                ..OverlayState::default()
            });

            let Some(&chosen) = candidates.first() else {
                break;
            };
            let weight = chosen.weight.unwrap_or(0.0);
            let new_node = if in_tree.contains(&chosen.source) {
                chosen.target.clone()
            } else {
                chosen.source.clone()
            };

            steps.push(OverlayState {
                message: Some(format!(
                    "Cheapest crossing edge is {} (weight {}), bringing in {}.",
                    chosen.id,
                    fmt_number(weight),
                    ctx.label_of(&new_node)
                )),
                active_node_ids: vec![new_node.clone()],
                visited_node_ids: tree_order.clone(),
                frontier_node_ids: frontier_nodes,
                active_edge_ids: tree_edges.clone(),
                frontier_edge_ids: vec![chosen.id.clone()],
                ..OverlayState::default()
            });

            in_tree.insert(new_node.clone());
            tree_order.push(new_node.clone());
            tree_edges.push(chosen.id.clone());
            total_weight += weight;

            steps.push(OverlayState {
                message: Some(format!(
                    "Added {} to the tree. Total weight so far: {}.",
                    ctx.label_of(&new_node),
                    fmt_number(total_weight)
                )),
                active_node_ids: vec![new_node],
                visited_node_ids: tree_order.clone(),
                active_edge_ids: tree_edges.clone(),
                ..OverlayState::default()
            });
        }

        let terminal_message = if in_tree.len() == ctx.nodes.len() {
            format!(
                "MST complete: {} edge(s), total weight {}.",
                tree_edges.len(),
                fmt_number(total_weight)
            )
        } else {
            // Deliberate user-visible outcome, not a failure.
            format!(
                "Graph is disconnected: tree covers {}/{} nodes, partial weight {}.",
                in_tree.len(),
                ctx.nodes.len(),
                fmt_number(total_weight)
            )
        };
        steps.push(OverlayState {
            message: Some(terminal_message),
            visited_node_ids: tree_order,
            active_edge_ids: tree_edges,
            ..OverlayState::default()
        });

        tracing::debug!(steps = steps.len(), "Prim run complete");
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgraph::{ctx_with, node, weighted_edge};

    fn triangle() -> AlgorithmContext {
        ctx_with(
            vec![node("a"), node("b"), node("c")],
            vec![
                weighted_edge("e1", "a", "b", false, 1.0),
                weighted_edge("e2", "b", "c", false, 2.0),
                weighted_edge("e3", "a", "c", false, 3.0),
            ],
            Some("a"),
            None,
        )
    }

    #[test]
    fn supports_rejects_directed_loops_and_unweighted() {
        let mut ctx = triangle();
        ctx.edges[0].is_directed = true;
        assert_eq!(
            Prim.supports(&ctx),
            Err(Unsupported::DirectedEdge("e1".to_string()))
        );

        let mut ctx = triangle();
        ctx.edges[2].weight = None;
        assert_eq!(
            Prim.supports(&ctx),
            Err(Unsupported::MissingWeight("e3".to_string()))
        );
    }

    #[test]
    fn triangle_takes_the_two_cheap_edges() {
        let ctx = triangle();
        let steps = Prim.run(&ctx);
        let last = steps.last().unwrap();
        assert_eq!(
            last.message.as_deref().unwrap(),
            "MST complete: 2 edge(s), total weight 3."
        );
        assert_eq!(last.active_edge_ids, vec!["e1", "e2"]);
        assert_eq!(last.visited_node_ids, vec!["a", "b", "c"]);
        assert!(last.frontier_node_ids.is_empty());
    }

    #[test]
    fn equal_weights_tie_break_by_edge_id() {
        let ctx = ctx_with(
            vec![node("a"), node("b"), node("c")],
            vec![
                weighted_edge("e2", "a", "b", false, 1.0),
                weighted_edge("e1", "a", "c", false, 1.0),
            ],
            Some("a"),
            None,
        );
        let steps = Prim.run(&ctx);
        // e1 commits before e2 despite appearing second in the edge array.
        let added: Vec<&str> = steps
            .iter()
            .filter_map(|s| s.message.as_deref())
            .filter(|m| m.starts_with("Cheapest"))
            .collect();
        assert_eq!(
            added,
            vec![
                "Cheapest crossing edge is e1 (weight 1), bringing in c.",
                "Cheapest crossing edge is e2 (weight 1), bringing in b."
            ]
        );
    }

    #[test]
    fn disconnected_graph_reports_partial_coverage() {
        let ctx = ctx_with(
            vec![node("a"), node("b"), node("z")],
            vec![weighted_edge("e1", "a", "b", false, 1.0)],
            Some("a"),
            None,
        );
        let steps = Prim.run(&ctx);
        let last = steps.last().unwrap();
        assert_eq!(
            last.message.as_deref().unwrap(),
            "Graph is disconnected: tree covers 2/3 nodes, partial weight 1."
        );
        assert_eq!(last.active_edge_ids, vec!["e1"]);
    }

    #[test]
    fn single_node_graph_is_a_complete_tree() {
        let ctx = ctx_with(vec![node("a")], vec![], Some("a"), None);
        let steps = Prim.run(&ctx);
        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps.last().unwrap().message.as_deref().unwrap(),
            "MST complete: 0 edge(s), total weight 0."
        );
    }

    #[test]
    fn candidates_step_lists_boundary_edges_sorted() {
        let ctx = triangle();
        let steps = Prim.run(&ctx);
        // First candidates step: both of a's edges cross the boundary,
        // cheapest first.
        let first_candidates = steps
            .iter()
            .find(|s| {
                s.message
                    .as_deref()
                    .is_some_and(|m| m.contains("candidate edge(s)"))
            })
            .unwrap();
        assert_eq!(first_candidates.frontier_edge_ids, vec!["e1", "e3"]);
        assert_eq!(first_candidates.frontier_node_ids, vec!["b", "c"]);
    }
}
