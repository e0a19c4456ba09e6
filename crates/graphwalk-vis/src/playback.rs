//! Playback controls for algorithm step timelines.

use graphwalk_model::OverlayState;
use serde::{Deserialize, Serialize};

/// Playback speed for timer-driven advancement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    /// 0.5x speed
    Slow,
    /// Normal speed (1x)
    Normal,
    /// 2x speed
    Fast,
    /// 4x speed
    VeryFast,
    /// Advance as fast as the UI can paint
    Maximum,
}

impl PlaybackSpeed {
    /// Speed multiplier relative to the base tick interval.
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Slow => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Fast => 2.0,
            PlaybackSpeed::VeryFast => 4.0,
            PlaybackSpeed::Maximum => f64::INFINITY,
        }
    }

    /// Milliseconds between steps at this speed.
    pub fn ms_per_step(&self, base_ms: u64) -> u64 {
        match self {
            PlaybackSpeed::Maximum => 0,
            speed => (base_ms as f64 / speed.multiplier()) as u64,
        }
    }
}

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// At the beginning, not running
    Stopped,
    /// Advancing on timer ticks
    Playing,
    /// Holding at the current step
    Paused,
    /// Ran past the last step
    Finished,
}

/// Cursor over an algorithm run's step array.
///
/// Owns the steps immutably; all navigation moves `step_index`. The steps
/// themselves are complete snapshots, so seeking anywhere is O(1) with no
/// state to rebuild.
pub struct Playback {
    steps: Vec<OverlayState>,
    step_index: usize,
    state: PlaybackState,
    speed: PlaybackSpeed,
    loop_enabled: bool,
}

impl Playback {
    /// Create a playback cursor over a freshly generated step array.
    pub fn new(steps: Vec<OverlayState>) -> Self {
        Self {
            steps,
            step_index: 0,
            state: PlaybackState::Stopped,
            speed: PlaybackSpeed::Normal,
            loop_enabled: false,
        }
    }

    /// Replace the timeline and rewind. Used when the user switches
    /// algorithms or re-runs: any in-flight playback is cancelled.
    pub fn load(&mut self, steps: Vec<OverlayState>) {
        tracing::debug!(steps = steps.len(), "timeline reloaded");
        self.steps = steps;
        self.step_index = 0;
        self.state = PlaybackState::Stopped;
    }

    /// Current cursor position.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Total number of steps in the timeline.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current playback speed.
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// The step the renderer should paint right now (none past the end).
    pub fn current_step(&self) -> Option<&OverlayState> {
        self.steps.get(self.step_index)
    }

    /// Seek to a step, clamped to the timeline bounds.
    pub fn seek(&mut self, step: usize) {
        self.step_index = step.min(self.steps.len());
        if self.step_index == self.steps.len() && !self.loop_enabled {
            self.state = PlaybackState::Finished;
        }
    }

    /// Start (or restart) timer-driven playback.
    pub fn play(&mut self) {
        if self.step_index >= self.steps.len() {
            self.step_index = 0;
        }
        self.state = PlaybackState::Playing;
        tracing::debug!(step = self.step_index, "playback started");
    }

    /// Hold at the current step.
    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Rewind to the beginning and stop.
    pub fn stop(&mut self) {
        self.step_index = 0;
        self.state = PlaybackState::Stopped;
    }

    /// Set playback speed.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// Enable or disable wrap-around at the end of the timeline.
    pub fn set_loop(&mut self, enabled: bool) {
        self.loop_enabled = enabled;
    }

    /// Advance one step (the timer tick). Returns the step just consumed.
    pub fn step_forward(&mut self) -> Option<&OverlayState> {
        if self.step_index >= self.steps.len() {
            return None;
        }
        let index = self.step_index;
        self.step_index += 1;
        if self.step_index >= self.steps.len() {
            if self.loop_enabled {
                self.step_index = 0;
            } else {
                self.state = PlaybackState::Finished;
            }
        }
        Some(&self.steps[index])
    }

    /// Move one step back and hold there.
    pub fn step_backward(&mut self) {
        if self.step_index > 0 {
            self.step_index -= 1;
            self.state = PlaybackState::Paused;
        }
    }

    /// Progress through the timeline (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.step_index as f64 / self.steps.len() as f64
        }
    }
}

/// Playback status snapshot for sending to a frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub step_index: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: PlaybackSpeed,
    pub progress: f64,
    pub loop_enabled: bool,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            step_index: playback.step_index,
            total_steps: playback.total_steps(),
            state: playback.state,
            speed: playback.speed,
            progress: playback.progress(),
            loop_enabled: playback.loop_enabled,
        }
    }
}
