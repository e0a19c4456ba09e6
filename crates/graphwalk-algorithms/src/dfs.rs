//! Depth-first search step generator.

use std::collections::HashSet;

use graphwalk_model::{AlgorithmContext, OverlayState};

use crate::adjacency::traversal_neighbors;
use crate::narrate;
use crate::registry::Algorithm;
use crate::support::{self, Unsupported};

/// Depth-first traversal from the selected source.
///
/// Same structure as BFS with a LIFO stack instead of a queue. Neighbors are
/// pushed in edge-array order and popped last-in-first-out; the iterative
/// stack discipline (rather than recursion) is deliberate, so the last
/// neighbor pushed is the first one explored.
pub struct Dfs;

impl Algorithm for Dfs {
    fn id(&self) -> &'static str {
        "DFS"
    }

    fn label(&self) -> &'static str {
        "Depth-First Search"
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
        let mut stack: Vec<String> = Vec::new();

        visited.insert(source.clone());
        visit_order.push(source.clone());
        stack.push(source.clone());

        steps.push(OverlayState {
            message: Some(format!("DFS started from {}.", ctx.label_of(source))),
            active_node_ids: vec![source.clone()],
            visited_node_ids: visit_order.clone(),
            frontier_node_ids: stack.clone(),
            ..OverlayState::default()
        });

        while let Some(current) = stack.pop() {
            steps.push(OverlayState {
                message: Some(format!("Processing {}.", ctx.label_of(&current))),
                active_node_ids: vec![current.clone()],
                visited_node_ids: visit_order.clone(),
                frontier_node_ids: stack.clone(),
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
                    frontier_node_ids: stack.clone(),
                    active_edge_ids: vec![edge_id.clone()],
                    ..OverlayState::default()
                });

                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    visit_order.push(neighbor.clone());
                    stack.push(neighbor.clone());

                    steps.push(OverlayState {
                        message: Some(format!(
                            "Discovered {}; pushed onto the stack.",
                            ctx.label_of(neighbor)
                        )),
                        active_node_ids: vec![neighbor.clone()],
                        visited_node_ids: visit_order.clone(),
                        frontier_node_ids: stack.clone(),
                        active_edge_ids: vec![edge_id.clone()],
                        ..OverlayState::default()
                    });
                }
            }
        }

        steps.push(OverlayState {
            message: Some(format!(
                "DFS complete. Visit order: {}.",
                narrate::join_labels(ctx, &visit_order)
            )),
            visited_node_ids: visit_order,
            ..OverlayState::default()
        });

        tracing::debug!(steps = steps.len(), "DFS run complete");
        steps
    }
}
