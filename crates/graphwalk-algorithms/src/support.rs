//! Precondition checking shared by all algorithms.
//!
//! Every algorithm exposes `supports(ctx)` so the UI can explain *why* a run
//! button is disabled without running anything. The `Display` string of
//! [`Unsupported`] is that user-facing explanation.
//!
//! Check order is part of the contract: endpoint checks come before per-edge
//! checks, and per-edge checks scan one rejection category at a time, so the
//! first category that fails anywhere in the edge list is the one surfaced.

use graphwalk_model::{AlgorithmContext, EdgeId, GraphEdge, NodeId};
use thiserror::Error;

/// Why an algorithm refuses to run on the current graph/selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsupported {
    /// No source node selected
    #[error("select a source node first")]
    MissingSource,

    /// No sink node selected
    #[error("select a sink node first")]
    MissingSink,

    /// Selected source is not in the node set
    #[error("source node '{0}' is not in the graph")]
    UnknownSource(NodeId),

    /// Selected sink is not in the node set
    #[error("sink node '{0}' is not in the graph")]
    UnknownSink(NodeId),

    /// Source and sink must differ
    #[error("source and sink must be different nodes")]
    SourceIsSink,

    /// Algorithm needs a fully undirected graph
    #[error("edge '{0}' is directed; this algorithm requires an undirected graph")]
    DirectedEdge(EdgeId),

    /// Algorithm needs a fully directed graph
    #[error("edge '{0}' is undirected; max-flow requires a directed network")]
    UndirectedEdge(EdgeId),

    /// Loops are never eligible for weighted algorithms
    #[error("edge '{0}' is a loop")]
    LoopEdge(EdgeId),

    /// Every edge must carry a weight
    #[error("edge '{0}' has no weight")]
    MissingWeight(EdgeId),

    /// Weights must be non-negative
    #[error("edge '{0}' has a negative weight")]
    NegativeWeight(EdgeId),

    /// Capacities must be strictly positive
    #[error("edge '{0}' must have a positive capacity")]
    NonPositiveCapacity(EdgeId),

    /// Capacities must be integers
    #[error("edge '{0}' must have an integer capacity")]
    NonIntegerCapacity(EdgeId),
}

/// Source selected and present in the node set.
pub(crate) fn require_source(ctx: &AlgorithmContext) -> Result<&NodeId, Unsupported> {
    let source = ctx
        .source_node_id
        .as_ref()
        .filter(|id| !id.is_empty())
        .ok_or(Unsupported::MissingSource)?;
    if ctx.node(source).is_none() {
        return Err(Unsupported::UnknownSource(source.clone()));
    }
    Ok(source)
}

/// Source and sink selected, distinct, and both present in the node set.
pub(crate) fn require_endpoints(
    ctx: &AlgorithmContext,
) -> Result<(&NodeId, &NodeId), Unsupported> {
    let source = ctx
        .source_node_id
        .as_ref()
        .filter(|id| !id.is_empty())
        .ok_or(Unsupported::MissingSource)?;
    let sink = ctx
        .sink_node_id
        .as_ref()
        .filter(|id| !id.is_empty())
        .ok_or(Unsupported::MissingSink)?;
    if source == sink {
        return Err(Unsupported::SourceIsSink);
    }
    if ctx.node(source).is_none() {
        return Err(Unsupported::UnknownSource(source.clone()));
    }
    if ctx.node(sink).is_none() {
        return Err(Unsupported::UnknownSink(sink.clone()));
    }
    Ok((source, sink))
}

pub(crate) fn reject_directed(edges: &[GraphEdge]) -> Result<(), Unsupported> {
    match edges.iter().find(|e| e.is_directed) {
        Some(e) => Err(Unsupported::DirectedEdge(e.id.clone())),
        None => Ok(()),
    }
}

pub(crate) fn reject_undirected(edges: &[GraphEdge]) -> Result<(), Unsupported> {
    match edges.iter().find(|e| !e.is_directed) {
        Some(e) => Err(Unsupported::UndirectedEdge(e.id.clone())),
        None => Ok(()),
    }
}

pub(crate) fn reject_loops(edges: &[GraphEdge]) -> Result<(), Unsupported> {
    match edges.iter().find(|e| e.is_loop()) {
        Some(e) => Err(Unsupported::LoopEdge(e.id.clone())),
        None => Ok(()),
    }
}

pub(crate) fn require_weights(edges: &[GraphEdge]) -> Result<(), Unsupported> {
    match edges.iter().find(|e| e.weight.is_none()) {
        Some(e) => Err(Unsupported::MissingWeight(e.id.clone())),
        None => Ok(()),
    }
}

pub(crate) fn reject_negative_weights(edges: &[GraphEdge]) -> Result<(), Unsupported> {
    match edges.iter().find(|e| e.weight.is_some_and(|w| w < 0.0)) {
        Some(e) => Err(Unsupported::NegativeWeight(e.id.clone())),
        None => Ok(()),
    }
}

pub(crate) fn require_positive_integer_capacities(
    edges: &[GraphEdge],
) -> Result<(), Unsupported> {
    for edge in edges {
        if let Some(w) = edge.weight {
            if w <= 0.0 {
                return Err(Unsupported::NonPositiveCapacity(edge.id.clone()));
            }
            if w.fract() != 0.0 {
                return Err(Unsupported::NonIntegerCapacity(edge.id.clone()));
            }
        }
    }
    Ok(())
}
