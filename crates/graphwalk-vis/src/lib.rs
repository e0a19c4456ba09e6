//! GraphWalk Playback
//!
//! Cursor over the step array an algorithm run produces.
//!
//! The engine materializes the whole `Vec<OverlayState>` up front; this crate
//! owns the only notion of time. A UI timer calls [`Playback::step_forward`]
//! on each tick, and the renderer paints [`Playback::current_step`]. The
//! driver never calls back into the engine: switching algorithms means a
//! fresh run followed by [`Playback::load`].

mod playback;

pub use playback::{Playback, PlaybackSpeed, PlaybackState, PlaybackStatus};
