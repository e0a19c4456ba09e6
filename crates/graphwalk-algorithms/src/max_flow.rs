//! Ford-Fulkerson max-flow step generator.

use std::collections::{BTreeMap, HashMap, HashSet};

use graphwalk_model::{AlgorithmContext, EdgeId, NodeId, OverlayState};

use crate::adjacency::{ArcKind, FlowIndex, ResidualArc};
use crate::narrate;
use crate::registry::Algorithm;
use crate::support::{self, Unsupported};

/// Ford-Fulkerson on an integer-capacity directed network, one augmenting
/// path per outer iteration.
///
/// The augmenting-path search is an explicit iterative DFS over the residual
/// graph (node stack plus a per-frame arc cursor). Integer capacities bound
/// the number of augmentations, so stack exhaustion without reaching the sink
/// is the algorithm's only termination condition. Every emitted step carries
/// the complete per-edge flow snapshot.
pub struct MaxFlow;

impl Algorithm for MaxFlow {
    fn id(&self) -> &'static str {
        "MAX_FLOW_FF"
    }

    fn label(&self) -> &'static str {
        "Ford-Fulkerson Maximum Flow"
    }

    fn supports(&self, ctx: &AlgorithmContext) -> Result<(), Unsupported> {
        support::require_endpoints(ctx)?;
        support::reject_undirected(&ctx.edges)?;
        support::reject_loops(&ctx.edges)?;
        support::require_weights(&ctx.edges)?;
        support::require_positive_integer_capacities(&ctx.edges)
    }

    fn run(&self, ctx: &AlgorithmContext) -> Vec<OverlayState> {
        let (Some(source), Some(sink)) = (
            ctx.source_node_id.as_ref().filter(|id| !id.is_empty()),
            ctx.sink_node_id.as_ref().filter(|id| !id.is_empty()),
        ) else {
            return narrate::aborted_run();
        };

        let index = FlowIndex::build(&ctx.edges);
        let mut flow: HashMap<EdgeId, i64> = ctx
            .edges
            .iter()
            .filter(|e| e.is_directed && !e.is_loop())
            .map(|e| (e.id.clone(), 0))
            .collect();

        let mut steps = Vec::new();

        loop {
            // One DFS over the residual graph per outer iteration.
            let mut stack: Vec<NodeId> = vec![source.clone()];
            let mut arc_lists: Vec<Vec<ResidualArc>> =
                vec![index.residual_arcs(&ctx.edges, &flow, source)];
            let mut cursors: Vec<usize> = vec![0];
            let mut visited: HashSet<NodeId> = HashSet::new();
            let mut visit_order: Vec<NodeId> = vec![source.clone()];
            visited.insert(source.clone());
            let mut parent: HashMap<NodeId, (NodeId, ResidualArc)> = HashMap::new();

            steps.push(OverlayState {
                message: Some(format!(
                    "Searching for an augmenting path from {} to {}.",
                    ctx.label_of(source),
                    ctx.label_of(sink)
                )),
                active_node_ids: vec![source.clone()],
                visited_node_ids: visit_order.clone(),
                frontier_node_ids: stack.clone(),
                flow_by_edge: snapshot(&flow),
                ..OverlayState::default()
            });

            let mut reached_sink = false;
            while let Some(current) = stack.last().cloned() {
                let depth = stack.len() - 1;
                if cursors[depth] >= arc_lists[depth].len() {
                    stack.pop();
                    arc_lists.pop();
                    cursors.pop();
                    continue;
                }
                let arc = arc_lists[depth][cursors[depth]].clone();
                cursors[depth] += 1;
                let edge = &ctx.edges[arc.edge_index];

                steps.push(OverlayState {
                    message: Some(format!(
                        "Examining edge {} ({}), residual capacity {}.",
                        edge.id,
                        arc.kind.as_str(),
                        arc.residual
                    )),
                    active_node_ids: vec![current.clone()],
                    visited_node_ids: visit_order.clone(),
                    frontier_node_ids: stack.clone(),
                    frontier_edge_ids: vec![edge.id.clone()],
                    flow_by_edge: snapshot(&flow),
                    ..OverlayState::default()
                });

                if visited.contains(&arc.to) {
                    continue;
                }
                visited.insert(arc.to.clone());
                visit_order.push(arc.to.clone());
                parent.insert(arc.to.clone(), (current.clone(), arc.clone()));
                stack.push(arc.to.clone());
                arc_lists.push(index.residual_arcs(&ctx.edges, &flow, &arc.to));
                cursors.push(0);

                steps.push(OverlayState {
                    message: Some(format!("Advancing to {}.", ctx.label_of(&arc.to))),
                    active_node_ids: vec![arc.to.clone()],
                    visited_node_ids: visit_order.clone(),
                    frontier_node_ids: stack.clone(),
                    flow_by_edge: snapshot(&flow),
                    ..OverlayState::default()
                });

                if arc.to == *sink {
                    reached_sink = true;
                    break;
                }
            }

            if !reached_sink {
                let total: i64 = ctx
                    .edges
                    .iter()
                    .filter(|e| e.is_directed && !e.is_loop() && e.source == *source)
                    .map(|e| flow.get(&e.id).copied().unwrap_or(0))
                    .sum();
                steps.push(OverlayState {
                    message: Some(format!(
                        "No augmenting path remains. Maximum flow: {}.",
                        total
                    )),
                    visited_node_ids: visit_order.clone(),
                    flow_by_edge: snapshot(&flow),
                    ..OverlayState::default()
                });
                break;
            }

            // Arc path from source to sink, via parent pointers.
            let mut path: Vec<ResidualArc> = Vec::new();
            let mut path_nodes: Vec<NodeId> = vec![sink.clone()];
            let mut cursor = sink.clone();
            while cursor != *source {
                let Some((previous, arc)) = parent.get(&cursor) else {
                    break;
                };
                path.push(arc.clone());
                path_nodes.push(previous.clone());
                cursor = previous.clone();
            }
            path.reverse();
            path_nodes.reverse();

            let Some(bottleneck) = path.iter().map(|a| a.residual).min() else {
                break;
            };

            steps.push(OverlayState {
                message: Some(format!(
                    "Augmenting path found: {}. Bottleneck: {}.",
                    narrate::join_path(ctx, &path_nodes),
                    bottleneck
                )),
                active_node_ids: path_nodes.clone(),
                visited_node_ids: visit_order.clone(),
                active_edge_ids: path
                    .iter()
                    .map(|a| ctx.edges[a.edge_index].id.clone())
                    .collect(),
                flow_by_edge: snapshot(&flow),
                ..OverlayState::default()
            });

            for arc in &path {
                let edge = &ctx.edges[arc.edge_index];
                let entry = flow.entry(edge.id.clone()).or_insert(0);
                let verb = match arc.kind {
                    ArcKind::Forward => {
                        *entry += bottleneck;
                        "increased"
                    }
                    ArcKind::Backward => {
                        *entry -= bottleneck;
                        "decreased"
                    }
                };
                let updated = *entry;
                steps.push(OverlayState {
                    message: Some(format!(
                        "Edge {}: flow {} by {} to {}.",
                        edge.id, verb, bottleneck, updated
                    )),
                    active_node_ids: path_nodes.clone(),
                    visited_node_ids: visit_order.clone(),
                    active_edge_ids: vec![edge.id.clone()],
                    flow_by_edge: snapshot(&flow),
                    ..OverlayState::default()
                });
            }
        }

        tracing::debug!(steps = steps.len(), "max-flow run complete");
        steps
    }
}

/// Complete flow snapshot for one overlay frame.
fn snapshot(flow: &HashMap<EdgeId, i64>) -> BTreeMap<EdgeId, i64> {
    flow.iter().map(|(id, value)| (id.clone(), *value)).collect()
}
