//! Frame timing driver
//!
//! Cooperative, single-threaded sequencing of the per-frame work: compute a
//! clamped delta-time from the host's timestamps, advance the simulation,
//! then produce the visual state. The host scheduler (requestAnimationFrame,
//! winit, a plain loop) calls `frame` once per display refresh.

use crate::consts::MAX_FRAME_DT;

/// Runnable/stoppable frame sequencer
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    running: bool,
    last_time: f64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin running from the given timestamp (seconds). Idempotent while
    /// already running; otherwise resets the delta-time baseline so the
    /// first frame after a restart doesn't see the stopped gap.
    pub fn start(&mut self, now: f64) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_time = now;
    }

    /// Halt; subsequent `frame` calls are no-ops until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One frame: clamp the elapsed time, run `update` with it, then `draw`.
    /// Returns the delta-time that was fed to `update`, or `None` while
    /// stopped.
    pub fn frame<U, D>(&mut self, now: f64, update: U, draw: D) -> Option<f32>
    where
        U: FnOnce(f32),
        D: FnOnce(),
    {
        if !self.running {
            return None;
        }
        let dt = ((now - self.last_time) as f32).min(MAX_FRAME_DT);
        self.last_time = now;

        update(dt);
        draw();

        Some(dt)
    }
}
