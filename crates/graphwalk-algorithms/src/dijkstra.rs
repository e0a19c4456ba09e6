//! Dijkstra shortest-path step generator.

use std::collections::HashMap;

use graphwalk_model::{AlgorithmContext, EdgeId, NodeId, OverlayState};

use crate::adjacency::weighted_adjacency;
use crate::narrate::{self, fmt_number};
use crate::registry::Algorithm;
use crate::support::{self, Unsupported};

/// Single-pair shortest path on an undirected, non-negatively weighted graph.
///
/// Classic relaxation without a priority queue: each outer iteration linearly
/// scans the unvisited set for the minimum-distance node. The unvisited set
/// is kept in node-array order and the scan takes the first minimum it sees,
/// so selection ties resolve by insertion order rather than by an accident
/// of map iteration.
pub struct Dijkstra;

impl Algorithm for Dijkstra {
    fn id(&self) -> &'static str {
        "DIJKSTRA"
    }

    fn label(&self) -> &'static str {
        "Dijkstra Shortest Path"
    }

    fn supports(&self, ctx: &AlgorithmContext) -> Result<(), Unsupported> {
        support::require_endpoints(ctx)?;
        support::reject_directed(&ctx.edges)?;
        support::reject_loops(&ctx.edges)?;
        support::require_weights(&ctx.edges)?;
        support::reject_negative_weights(&ctx.edges)
    }

    fn run(&self, ctx: &AlgorithmContext) -> Vec<OverlayState> {
        let (Some(source), Some(sink)) = (
            ctx.source_node_id.as_ref().filter(|id| !id.is_empty()),
            ctx.sink_node_id.as_ref().filter(|id| !id.is_empty()),
        ) else {
            return narrate::aborted_run();
        };

        let adjacency = weighted_adjacency(&ctx.edges);
        let mut dist: HashMap<NodeId, f64> = ctx
            .nodes
            .iter()
            .map(|n| (n.id.clone(), f64::INFINITY))
            .collect();
        dist.insert(source.clone(), 0.0);

        let mut unvisited: Vec<NodeId> = ctx.nodes.iter().map(|n| n.id.clone()).collect();
        let mut visit_order: Vec<NodeId> = Vec::new();
        let mut parent_node: HashMap<NodeId, NodeId> = HashMap::new();
        let mut parent_edge: HashMap<NodeId, EdgeId> = HashMap::new();

        let mut steps = vec![OverlayState {
            message: Some(format!(
                "Dijkstra started: distance to {} is 0; every other node starts at infinity.",
                ctx.label_of(source)
            )),
            active_node_ids: vec![source.clone()],
            frontier_node_ids: vec![source.clone()],
            ..OverlayState::default()
        }];

        loop {
            // First-seen minimum wins on ties.
            let mut best: Option<(usize, f64)> = None;
            for (index, id) in unvisited.iter().enumerate() {
                let d = dist.get(id).copied().unwrap_or(f64::INFINITY);
                if d.is_finite() && best.map_or(true, |(_, b)| d < b) {
                    best = Some((index, d));
                }
            }

            let Some((position, current_dist)) = best else {
                steps.push(OverlayState {
                    message: Some(format!(
                        "{} is unreachable from {}.",
                        ctx.label_of(sink),
                        ctx.label_of(source)
                    )),
                    visited_node_ids: visit_order.clone(),
                    active_edge_ids: sorted_tree_edges(&parent_edge),
                    ..OverlayState::default()
                });
                break;
            };

            let current = unvisited.remove(position);
            visit_order.push(current.clone());

            steps.push(OverlayState {
                message: Some(format!(
                    "Visiting {} (distance {}).",
                    ctx.label_of(&current),
                    fmt_number(current_dist)
                )),
                active_node_ids: vec![current.clone()],
                visited_node_ids: visit_order.clone(),
                frontier_node_ids: finite_frontier(&unvisited, &dist),
                active_edge_ids: sorted_tree_edges(&parent_edge),
                ..OverlayState::default()
            });

            if current == *sink {
                steps.push(reached_frame(
                    ctx,
                    source,
                    sink,
                    current_dist,
                    &visit_order,
                    &parent_node,
                    &parent_edge,
                ));
                break;
            }

            if let Some(arcs) = adjacency.get(&current) {
                for arc in arcs {
                    if !unvisited.contains(&arc.to) {
                        continue;
                    }
                    let best_known = dist.get(&arc.to).copied().unwrap_or(f64::INFINITY);
                    let candidate = current_dist + arc.weight;

                    steps.push(OverlayState {
                        message: Some(format!(
                            "Relaxing edge {}: {} + {} = {} (best known for {}: {}).",
                            arc.edge_id,
                            fmt_number(current_dist),
                            fmt_number(arc.weight),
                            fmt_number(candidate),
                            ctx.label_of(&arc.to),
                            fmt_number(best_known)
                        )),
                        active_node_ids: vec![current.clone()],
                        visited_node_ids: visit_order.clone(),
                        frontier_node_ids: finite_frontier(&unvisited, &dist),
                        active_edge_ids: sorted_tree_edges(&parent_edge),
                        frontier_edge_ids: vec![arc.edge_id.clone()],
                        ..OverlayState::default()
                    });

                    if candidate < best_known {
                        dist.insert(arc.to.clone(), candidate);
                        parent_node.insert(arc.to.clone(), current.clone());
                        parent_edge.insert(arc.to.clone(), arc.edge_id.clone());

                        steps.push(OverlayState {
                            message: Some(format!(
                                "Updated {}: best known distance is now {}.",
                                ctx.label_of(&arc.to),
                                fmt_number(candidate)
                            )),
                            active_node_ids: vec![arc.to.clone()],
                            visited_node_ids: visit_order.clone(),
                            frontier_node_ids: finite_frontier(&unvisited, &dist),
                            active_edge_ids: sorted_tree_edges(&parent_edge),
                            frontier_edge_ids: vec![arc.edge_id.clone()],
                            ..OverlayState::default()
                        });
                    }
                }
            }
        }

        tracing::debug!(steps = steps.len(), "Dijkstra run complete");
        steps
    }
}

/// Terminal frame once the sink is settled.
///
/// With an intact parent chain the frame highlights the full path and its
/// edges. A broken chain (an internal inconsistency) degrades to highlighting
/// just the sink; the reported distance stays correct either way.
fn reached_frame(
    ctx: &AlgorithmContext,
    source: &NodeId,
    sink: &NodeId,
    distance: f64,
    visit_order: &[NodeId],
    parent_node: &HashMap<NodeId, NodeId>,
    parent_edge: &HashMap<NodeId, EdgeId>,
) -> OverlayState {
    match reconstruct_path(parent_node, source, sink) {
        Some(path) => {
            let mut path_edges: Vec<EdgeId> = path
                .iter()
                .skip(1)
                .filter_map(|id| parent_edge.get(id).cloned())
                .collect();
            path_edges.sort();
            OverlayState {
                message: Some(format!(
                    "Reached {}: shortest distance {}. Path: {}.",
                    ctx.label_of(sink),
                    fmt_number(distance),
                    narrate::join_path(ctx, &path)
                )),
                active_node_ids: path,
                visited_node_ids: visit_order.to_vec(),
                active_edge_ids: path_edges,
                ..OverlayState::default()
            }
        }
        None => OverlayState {
            message: Some(format!(
                "Reached {}: shortest distance {}.",
                ctx.label_of(sink),
                fmt_number(distance)
            )),
            active_node_ids: vec![sink.clone()],
            visited_node_ids: visit_order.to_vec(),
            ..OverlayState::default()
        },
    }
}

/// Shortest-path tree edges, sorted lexically for deterministic display.
fn sorted_tree_edges(parent_edge: &HashMap<NodeId, EdgeId>) -> Vec<EdgeId> {
    let mut edges: Vec<EdgeId> = parent_edge.values().cloned().collect();
    edges.sort();
    edges
}

/// Unvisited nodes already discovered (finite distance), in unvisited order.
fn finite_frontier(unvisited: &[NodeId], dist: &HashMap<NodeId, f64>) -> Vec<NodeId> {
    unvisited
        .iter()
        .filter(|id| dist.get(*id).copied().unwrap_or(f64::INFINITY).is_finite())
        .cloned()
        .collect()
}

/// Walk parent pointers from sink back to source. `None` on a broken chain.
fn reconstruct_path(
    parent: &HashMap<NodeId, NodeId>,
    source: &NodeId,
    sink: &NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![sink.clone()];
    let mut current = sink;
    while current != source {
        current = parent.get(current)?;
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}
