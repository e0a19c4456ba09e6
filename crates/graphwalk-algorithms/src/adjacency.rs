//! Per-algorithm adjacency views over the flat edge list.
//!
//! Each algorithm builds its own view because direction and filtering rules
//! differ. Ordering is an observable contract: step sequences must be
//! reproducible, so every view pins its iteration order explicitly instead of
//! relying on hash-map iteration.

use std::collections::HashMap;

use graphwalk_model::{EdgeId, GraphEdge, NodeId};

/// BFS/DFS neighbor enumeration for node `v`.
///
/// Iterates the edge array literally in its given order (no sorting; the
/// editor's edge order is the traversal order), skipping loops. A directed
/// edge yields its target only when `v` is the source; an undirected edge
/// yields the opposite endpoint for either match. Weights are ignored.
pub fn traversal_neighbors<'a>(
    edges: &'a [GraphEdge],
    v: &NodeId,
) -> Vec<(&'a EdgeId, &'a NodeId)> {
    let mut out = Vec::new();
    for edge in edges {
        if edge.is_loop() {
            continue;
        }
        if edge.is_directed {
            if edge.source == *v {
                out.push((&edge.id, &edge.target));
            }
        } else if edge.source == *v {
            out.push((&edge.id, &edge.target));
        } else if edge.target == *v {
            out.push((&edge.id, &edge.source));
        }
    }
    out
}

/// One weighted neighbor entry in Dijkstra's adjacency view.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedArc {
    pub to: NodeId,
    pub edge_id: EdgeId,
    pub weight: f64,
}

/// Dijkstra's adjacency: undirected, non-loop, finite-weight edges only.
///
/// Each node maps to its arcs sorted by weight ascending, then by edge id
/// ascending (lexical) as the tie-break.
pub fn weighted_adjacency(edges: &[GraphEdge]) -> HashMap<NodeId, Vec<WeightedArc>> {
    let mut adjacency: HashMap<NodeId, Vec<WeightedArc>> = HashMap::new();
    for edge in edges {
        if edge.is_loop() || edge.is_directed {
            continue;
        }
        let Some(weight) = edge.weight.filter(|w| w.is_finite()) else {
            continue;
        };
        adjacency.entry(edge.source.clone()).or_default().push(WeightedArc {
            to: edge.target.clone(),
            edge_id: edge.id.clone(),
            weight,
        });
        adjacency.entry(edge.target.clone()).or_default().push(WeightedArc {
            to: edge.source.clone(),
            edge_id: edge.id.clone(),
            weight,
        });
    }
    for arcs in adjacency.values_mut() {
        arcs.sort_by(|a, b| {
            a.weight
                .total_cmp(&b.weight)
                .then_with(|| a.edge_id.cmp(&b.edge_id))
        });
    }
    adjacency
}

/// Integer capacity of a flow edge. Preconditions guarantee a positive
/// integer weight; missing weight degrades to zero capacity.
pub fn capacity(edge: &GraphEdge) -> i64 {
    edge.weight.map_or(0, |w| w as i64)
}

/// Direction of a residual arc relative to its underlying edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArcKind {
    /// Remaining forward capacity: `capacity - flow > 0`
    Forward,
    /// Cancellable existing flow: `flow > 0`
    Backward,
}

impl ArcKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArcKind::Forward => "forward",
            ArcKind::Backward => "backward",
        }
    }
}

/// A residual-graph arc, referencing its underlying edge by index.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualArc {
    pub edge_index: usize,
    pub kind: ArcKind,
    pub to: NodeId,
    pub residual: i64,
}

/// Ford–Fulkerson adjacency: outgoing-by-source and incoming-by-target
/// indexes over the directed edge set, each sorted by edge id.
#[derive(Debug)]
pub struct FlowIndex {
    outgoing: HashMap<NodeId, Vec<usize>>,
    incoming: HashMap<NodeId, Vec<usize>>,
}

impl FlowIndex {
    /// Build both indexes from the directed, non-loop edges.
    pub fn build(edges: &[GraphEdge]) -> Self {
        let mut outgoing: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (index, edge) in edges.iter().enumerate() {
            if edge.is_loop() || !edge.is_directed {
                continue;
            }
            outgoing.entry(edge.source.clone()).or_default().push(index);
            incoming.entry(edge.target.clone()).or_default().push(index);
        }
        for indexes in outgoing.values_mut().chain(incoming.values_mut()) {
            indexes.sort_by(|&a, &b| edges[a].id.cmp(&edges[b].id));
        }
        Self { outgoing, incoming }
    }

    /// Live residual arcs out of `v` under the current flow assignment.
    ///
    /// A forward arc exists while `capacity - flow > 0`; a backward arc while
    /// `flow > 0`. Candidates are sorted by `(edge id, kind)` with forward
    /// before backward on id ties.
    pub fn residual_arcs(
        &self,
        edges: &[GraphEdge],
        flow: &HashMap<EdgeId, i64>,
        v: &NodeId,
    ) -> Vec<ResidualArc> {
        let mut arcs = Vec::new();
        if let Some(indexes) = self.outgoing.get(v) {
            for &index in indexes {
                let edge = &edges[index];
                let current = flow.get(&edge.id).copied().unwrap_or(0);
                let residual = capacity(edge) - current;
                if residual > 0 {
                    arcs.push(ResidualArc {
                        edge_index: index,
                        kind: ArcKind::Forward,
                        to: edge.target.clone(),
                        residual,
                    });
                }
            }
        }
        if let Some(indexes) = self.incoming.get(v) {
            for &index in indexes {
                let edge = &edges[index];
                let current = flow.get(&edge.id).copied().unwrap_or(0);
                if current > 0 {
                    arcs.push(ResidualArc {
                        edge_index: index,
                        kind: ArcKind::Backward,
                        to: edge.source.clone(),
                        residual: current,
                    });
                }
            }
        }
        arcs.sort_by(|a, b| {
            edges[a.edge_index]
                .id
                .cmp(&edges[b.edge_index].id)
                .then(a.kind.cmp(&b.kind))
        });
        arcs
    }
}
