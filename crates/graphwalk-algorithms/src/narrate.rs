//! Small helpers shared by the step generators' narration.

use graphwalk_model::{AlgorithmContext, NodeId, OverlayState};

/// Defensive degradation for a broken endpoint selection at `run` time.
///
/// `run` is only ever invoked after `supports` passed, so an absent endpoint
/// here is an internal contract violation. The engine must never panic
/// mid-visualization; it returns a single diagnostic frame instead.
pub(crate) fn aborted_run() -> Vec<OverlayState> {
    vec![OverlayState::with_message(
        "Internal error: endpoint selection is missing; algorithm aborted.",
    )]
}

/// Comma-separated display labels for a list of node ids.
pub(crate) fn join_labels(ctx: &AlgorithmContext, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| ctx.label_of(id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Arrow-separated display labels for a path.
pub(crate) fn join_path(ctx: &AlgorithmContext, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| ctx.label_of(id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render a weight or distance for narration. Integral values print without
/// a decimal point; unreachable distances print as "infinity".
pub(crate) fn fmt_number(value: f64) -> String {
    if value.is_infinite() {
        "infinity".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
