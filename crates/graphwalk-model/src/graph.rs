//! Graph primitives as produced by the editor.

use serde::{Deserialize, Serialize};

use crate::{EdgeId, NodeId};

/// A node placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    /// Display label shown next to the node and used in step narration.
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// An edge between two nodes.
///
/// `weight: None` means the edge is unweighted. A present weight is a finite
/// real number; individual algorithms impose stricter preconditions
/// (non-negative, or positive integer) before running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub is_directed: bool,
    pub weight: Option<f64>,
}

impl GraphEdge {
    /// A loop connects a node to itself. Loops are always undirected
    /// (invariant enforced by the editor) and are skipped by every algorithm.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// The endpoint opposite `node`, if `node` is an endpoint of this edge.
    pub fn opposite(&self, node: &NodeId) -> Option<&NodeId> {
        if self.source == *node {
            Some(&self.target)
        } else if self.target == *node {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// Everything an algorithm gets to see: the graph plus the user's endpoint
/// selection. Algorithms borrow this immutably and never modify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmContext {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Start node. Required by all five algorithms.
    pub source_node_id: Option<NodeId>,
    /// Destination node. Required by Dijkstra and Ford–Fulkerson only.
    pub sink_node_id: Option<NodeId>,
}

impl AlgorithmContext {
    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Display label for a node id, falling back to the raw id when the node
    /// is not present (defensive; narration must never panic).
    pub fn label_of<'a>(&'a self, id: &'a NodeId) -> &'a str {
        self.node(id).map(|n| n.label.as_str()).unwrap_or(id)
    }
}
