//! Difficulty curve evaluation
//!
//! Maps elapsed session time to a target spawn interval via piecewise-linear
//! interpolation over control points. The curve is continuous at control
//! points and holds the last value forever.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One (elapsed time, spawn interval) control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Elapsed session time in seconds
    pub time: f32,
    /// Target spawn interval at that time
    pub spawn_interval: f32,
}

/// An ordered difficulty curve, strictly increasing in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyCurve {
    points: Vec<ControlPoint>,
}

impl DifficultyCurve {
    /// Build a curve from control points.
    ///
    /// Misconfiguration (empty or non-increasing points) is a bug in the
    /// caller, caught in debug builds rather than smoothed over.
    pub fn new(points: Vec<ControlPoint>) -> Self {
        debug_assert!(
            !points.is_empty(),
            "difficulty curve needs at least one control point"
        );
        debug_assert!(
            points.windows(2).all(|w| w[0].time < w[1].time),
            "difficulty control points must be strictly increasing in time"
        );
        Self { points }
    }

    /// The default ramp: one spawn every 2s at the start, down to one every
    /// 0.7s in the final stretch.
    pub fn standard() -> Self {
        Self::new(vec![
            ControlPoint {
                time: 0.0,
                spawn_interval: 2.0,
            },
            ControlPoint {
                time: 30.0,
                spawn_interval: 1.5,
            },
            ControlPoint {
                time: 60.0,
                spawn_interval: 1.2,
            },
            ControlPoint {
                time: 90.0,
                spawn_interval: 0.9,
            },
            ControlPoint {
                time: 110.0,
                spawn_interval: 0.7,
            },
        ])
    }

    /// Target spawn interval for the given elapsed time, clamped to the
    /// spawner's legal range.
    pub fn spawn_interval_at(&self, elapsed: f32) -> f32 {
        self.interpolate(elapsed)
            .clamp(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX)
    }

    fn interpolate(&self, elapsed: f32) -> f32 {
        if elapsed <= self.points[0].time {
            return self.points[0].spawn_interval;
        }
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if elapsed < b.time {
                let t = (elapsed - a.time) / (b.time - a.time);
                return a.spawn_interval + (b.spawn_interval - a.spawn_interval) * t;
            }
        }
        self.points[self.points.len() - 1].spawn_interval
    }
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::standard()
    }
}
