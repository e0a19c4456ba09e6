//! GraphWalk Algorithm Engine
//!
//! Deterministic step generation for the five visualizer algorithms: BFS,
//! DFS, Dijkstra, Prim's MST, and Ford-Fulkerson max-flow.
//!
//! # Contract
//!
//! Each algorithm exposes two pure functions through the [`Algorithm`] trait:
//!
//! - `supports(ctx)`: eligibility check, returning a user-facing
//!   [`Unsupported`] reason on rejection. Safe to call on every render.
//! - `run(ctx)`: the step generator. Given the same context it produces the
//!   same ordered `Vec<OverlayState>`, never mutates its input, and always
//!   terminates in a final summary frame. Divergent outcomes (unreachable
//!   sink, disconnected spanning tree, no augmenting path) are terminal
//!   messages, not errors; nothing panics across this boundary.
//!
//! Ordering is part of the contract: adjacency views pin their iteration
//! order (edge-array order for BFS/DFS, weight-then-id for Dijkstra and Prim,
//! id-then-kind for residual arcs) so step sequences are reproducible.
//!
//! # Usage
//!
//! ```
//! use graphwalk_algorithms::get_algorithm;
//! use graphwalk_model::{AlgorithmContext, GraphNode};
//!
//! let ctx = AlgorithmContext {
//!     nodes: vec![GraphNode {
//!         id: "a".into(),
//!         label: "A".into(),
//!         x: 0.0,
//!         y: 0.0,
//!     }],
//!     edges: vec![],
//!     source_node_id: Some("a".into()),
//!     sink_node_id: None,
//! };
//!
//! let bfs = get_algorithm("BFS").unwrap();
//! assert!(bfs.supports(&ctx).is_ok());
//! let steps = bfs.run(&ctx);
//! assert!(!steps.is_empty());
//! ```

mod adjacency;
mod bfs;
mod dfs;
mod dijkstra;
mod max_flow;
mod narrate;
mod prim;
mod registry;
mod support;

pub use adjacency::{
    capacity, traversal_neighbors, weighted_adjacency, ArcKind, FlowIndex, ResidualArc,
    WeightedArc,
};
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use max_flow::MaxFlow;
pub use prim::Prim;
pub use registry::{get_algorithm, Algorithm, ALGORITHMS};
pub use support::Unsupported;
