//! Playfield layout
//!
//! Static platforms and the ground line. The layout is fixed configuration,
//! read-only during simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A static one-way platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Playfield bounds plus the platform set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    pub platforms: Vec<Platform>,
}

impl Level {
    /// The default three-platform layout
    pub fn standard() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,
            platforms: vec![
                Platform {
                    x: 500.0,
                    y: 500.0,
                    width: 200.0,
                    height: 20.0,
                },
                Platform {
                    x: 150.0,
                    y: 420.0,
                    width: 150.0,
                    height: 20.0,
                },
                Platform {
                    x: 900.0,
                    y: 420.0,
                    width: 150.0,
                    height: 20.0,
                },
            ],
        }
    }

    /// Top of the ground strip
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::standard()
    }
}
