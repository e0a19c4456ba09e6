//! GraphWalk Data Model
//!
//! Passive data definitions shared by the algorithm engine and the playback
//! layer: graph nodes and edges as the editor produces them, the
//! [`AlgorithmContext`] handed to every algorithm, and the [`OverlayState`]
//! visualization frame every algorithm emits.
//!
//! The engine only ever borrows this data immutably. Ownership stays with the
//! (external) graph editor; a `run` call must leave `nodes` and `edges`
//! untouched.

mod graph;
mod overlay;

pub use graph::{AlgorithmContext, GraphEdge, GraphNode};
pub use overlay::OverlayState;

/// Opaque node identifier, assigned by the editor. Unique within a graph.
pub type NodeId = String;

/// Opaque edge identifier, assigned by the editor. Unique within a graph.
pub type EdgeId = String;
