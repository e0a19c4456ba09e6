//! Fixed algorithm registry.

use graphwalk_model::{AlgorithmContext, OverlayState};

use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::max_flow::MaxFlow;
use crate::prim::Prim;
use crate::support::Unsupported;

/// A step-generating algorithm.
///
/// `supports` is pure and cheap; the UI may call it on every render to gate
/// the run button. `run` must only be invoked after `supports` passed, is
/// deterministic for a given context, and never mutates its input.
pub trait Algorithm: Sync {
    /// Stable identifier used by the UI and in saved sessions.
    fn id(&self) -> &'static str;

    /// Human-readable name for menus.
    fn label(&self) -> &'static str;

    /// Eligibility check; the error's `Display` string is shown to the user.
    fn supports(&self, ctx: &AlgorithmContext) -> Result<(), Unsupported>;

    /// Produce the complete step sequence in one synchronous call.
    fn run(&self, ctx: &AlgorithmContext) -> Vec<OverlayState>;
}

/// The five algorithms, in menu order. A fixed table, not a plugin system.
pub static ALGORITHMS: [&dyn Algorithm; 5] = [&Bfs, &Dfs, &Dijkstra, &Prim, &MaxFlow];

/// Resolve an algorithm by its stable id.
pub fn get_algorithm(id: &str) -> Option<&'static dyn Algorithm> {
    ALGORITHMS.iter().copied().find(|a| a.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_ids_resolve() {
        for id in ["BFS", "DFS", "DIJKSTRA", "MST_PRIM", "MAX_FLOW_FF"] {
            let algorithm = get_algorithm(id).unwrap_or_else(|| panic!("missing {id}"));
            assert_eq!(algorithm.id(), id);
            assert!(!algorithm.label().is_empty());
        }
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert!(get_algorithm("BELLMAN_FORD").is_none());
        assert!(get_algorithm("").is_none());
        assert!(get_algorithm("bfs").is_none()); // ids are case-sensitive
    }

    #[test]
    fn registry_order_is_menu_order() {
        let ids: Vec<&str> = ALGORITHMS.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["BFS", "DFS", "DIJKSTRA", "MST_PRIM", "MAX_FLOW_FF"]);
    }

    #[test]
    fn every_algorithm_degrades_to_a_single_error_step() {
        // run without a prior supports pass and with no endpoints selected.
        let ctx = AlgorithmContext {
            nodes: vec![],
            edges: vec![],
            source_node_id: None,
            sink_node_id: None,
        };
        for algorithm in ALGORITHMS {
            let steps = algorithm.run(&ctx);
            assert_eq!(steps.len(), 1, "{} did not abort", algorithm.id());
            assert_eq!(
                steps[0].message.as_deref().unwrap(),
                "Internal error: endpoint selection is missing; algorithm aborted.",
                "{} emitted the wrong diagnostic",
                algorithm.id()
            );
        }
    }
}
