//! Breadth-first search step generator.

use std::collections::{HashSet, VecDeque};

use graphwalk_model::{AlgorithmContext, OverlayState};

use crate::adjacency::traversal_neighbors;
use crate::narrate;
use crate::registry::Algorithm;
use crate::support::{self, Unsupported};

/// Breadth-first traversal from the selected source.
///
/// Queue-based (FIFO). Nodes are marked visited when enqueued, so each node
/// is enqueued at most once. Neighbor order is the edge array's order.
pub struct Bfs;

impl Algorithm for Bfs {
    fn id(&self) -> &'static str {
        "BFS"
    }

    fn label(&self) -> &'static str {
        "Breadth-First Search"
    }

    fn supports(&self, ctx: &AlgorithmContext) -> Result<(), Unsupported> {
        support::require_source(ctx).map(|_| ())
    }

    fn run(&self, ctx: &AlgorithmContext) -> Vec<OverlayState> {
        let Some(source) = ctx.source_node_id.as_ref().filter(|id| !id.is_empty()) else {
            return narrate::aborted_run();
        };

        let mut steps = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut visit_order = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        visited.insert(source.clone());
        visit_order.push(source.clone());
        queue.push_back(source.clone());

        steps.push(OverlayState {
            message: Some(format!("BFS started from {}.", ctx.label_of(source))),
            active_node_ids: vec![source.clone()],
            visited_node_ids: visit_order.clone(),
            frontier_node_ids: queue.iter().cloned().collect(),
            ..OverlayState::default()
        });

        while let Some(current) = queue.pop_front() {
            steps.push(OverlayState {
                message: Some(format!("Processing {}.", ctx.label_of(&current))),
                active_node_ids: vec![current.clone()],
                visited_node_ids: visit_order.clone(),
                frontier_node_ids: queue.iter().cloned().collect(),
                ..OverlayState::default()
            });

            for (edge_id, neighbor) in traversal_neighbors(&ctx.edges, &current) {
                steps.push(OverlayState {
                    message: Some(format!(
                        "Checking edge from {} to {}.",
                        ctx.label_of(&current),
                        ctx.label_of(neighbor)
                    )),
                    active_node_ids: vec![current.clone()],
                    visited_node_ids: visit_order.clone(),
                    frontier_node_ids: queue.iter().cloned().collect(),
                    active_edge_ids: vec![edge_id.clone()],
                    ..OverlayState::default()
                });

                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    visit_order.push(neighbor.clone());
                    queue.push_back(neighbor.clone());

                    steps.push(OverlayState {
                        message: Some(format!(
                            "Discovered {}; enqueued.",
                            ctx.label_of(neighbor)
                        )),
                        active_node_ids: vec![neighbor.clone()],
                        visited_node_ids: visit_order.clone(),
                        frontier_node_ids: queue.iter().cloned().collect(),
                        active_edge_ids: vec![edge_id.clone()],
                        ..OverlayState::default()
                    });
                }
            }
        }

        steps.push(OverlayState {
            message: Some(format!(
                "BFS complete. Visit order: {}.",
                narrate::join_labels(ctx, &visit_order)
            )),
            visited_node_ids: visit_order,
            ..OverlayState::default()
        });

        tracing::debug!(steps = steps.len(), "BFS run complete");
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgraph::{ctx_with, edge, node};

    fn line_graph() -> AlgorithmContext {
        // a - b - c, plus isolated d
        ctx_with(
            vec![node("a"), node("b"), node("c"), node("d")],
            vec![edge("e1", "a", "b", false), edge("e2", "b", "c", false)],
            Some("a"),
            None,
        )
    }

    #[test]
    fn supports_requires_source() {
        let mut ctx = line_graph();
        assert!(Bfs.supports(&ctx).is_ok());

        ctx.source_node_id = None;
        assert_eq!(Bfs.supports(&ctx), Err(Unsupported::MissingSource));

        ctx.source_node_id = Some("ghost".to_string());
        assert_eq!(
            Bfs.supports(&ctx),
            Err(Unsupported::UnknownSource("ghost".to_string()))
        );
    }

    #[test]
    fn visits_reachable_nodes_once() {
        let ctx = line_graph();
        let steps = Bfs.run(&ctx);

        let last = steps.last().unwrap();
        assert_eq!(last.visited_node_ids, vec!["a", "b", "c"]);
        assert!(last.frontier_node_ids.is_empty());
        assert!(last
            .message
            .as_deref()
            .unwrap()
            .starts_with("BFS complete."));
    }

    #[test]
    fn fifo_order_on_branching_graph() {
        // a connects to b and c (in edge order), b connects to d.
        let ctx = ctx_with(
            vec![node("a"), node("b"), node("c"), node("d")],
            vec![
                edge("e1", "a", "b", false),
                edge("e2", "a", "c", false),
                edge("e3", "b", "d", false),
            ],
            Some("a"),
            None,
        );
        let steps = Bfs.run(&ctx);
        let last = steps.last().unwrap();
        // Breadth order: both of a's neighbors before b's neighbor.
        assert_eq!(last.visited_node_ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn directed_edges_only_traversed_forward() {
        let ctx = ctx_with(
            vec![node("a"), node("b"), node("c")],
            vec![edge("e1", "a", "b", true), edge("e2", "c", "a", true)],
            Some("a"),
            None,
        );
        let steps = Bfs.run(&ctx);
        let last = steps.last().unwrap();
        assert_eq!(last.visited_node_ids, vec!["a", "b"]);
    }

    #[test]
    fn visited_growth_is_monotonic() {
        let ctx = line_graph();
        let steps = Bfs.run(&ctx);
        let mut previous = 0;
        for step in &steps {
            assert!(step.visited_node_ids.len() >= previous);
            assert!(step.visited_node_ids.len() <= ctx.nodes.len());
            previous = step.visited_node_ids.len();
        }
    }

    #[test]
    fn step_array_serializes_for_the_frontend() {
        let ctx = line_graph();
        let steps = Bfs.run(&ctx);
        let json = serde_json::to_value(&steps).unwrap();

        let first = &json[0];
        assert_eq!(first["message"], "BFS started from a.");
        assert_eq!(first["active_node_ids"][0], "a");
        assert_eq!(first["frontier_node_ids"][0], "a");
        // Traversals carry no flow; the map is omitted from the wire format.
        assert!(first.get("flow_by_edge").is_none());

        let last = &json[json.as_array().unwrap().len() - 1];
        assert_eq!(last["visited_node_ids"], serde_json::json!(["a", "b", "c"]));
    }

    #[test]
    fn missing_endpoint_degrades_to_error_step() {
        let mut ctx = line_graph();
        ctx.source_node_id = Some(String::new());
        let steps = Bfs.run(&ctx);
        assert_eq!(steps.len(), 1);
        assert!(steps[0].message.as_deref().unwrap().contains("Internal error"));
    }
}
