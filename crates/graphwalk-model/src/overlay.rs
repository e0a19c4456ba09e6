//! Overlay states: the visualization frames emitted by every algorithm.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EdgeId, NodeId};

/// One discrete visualization frame.
///
/// An algorithm run produces an ordered `Vec<OverlayState>`; the playback
/// layer paints exactly one of them at a time. Each frame is a complete
/// snapshot, not a delta: the renderer never has to look at earlier frames.
///
/// Highlight categories:
/// - `active_*`: what this step is about (the node being processed, the edge
///   being examined or committed).
/// - `visited_node_ids`: permanently settled nodes, in settlement order.
/// - `frontier_*`: pending work (queue/stack contents, candidate edges).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    /// Human-readable narration of this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub active_node_ids: Vec<NodeId>,
    #[serde(default)]
    pub visited_node_ids: Vec<NodeId>,
    #[serde(default)]
    pub frontier_node_ids: Vec<NodeId>,
    #[serde(default)]
    pub active_edge_ids: Vec<EdgeId>,
    #[serde(default)]
    pub frontier_edge_ids: Vec<EdgeId>,
    /// Max-flow only: current flow per edge, complete on every step.
    /// Empty (and omitted from JSON) for all other algorithms.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flow_by_edge: BTreeMap<EdgeId, i64>,
}

impl OverlayState {
    /// A frame carrying only a narration message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}
