//! Fruit Dash - a fruit-catching arcade platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, particles, session flow)
//! - `driver`: Frame timing (clamped delta-time, update/draw sequencing)
//! - `input`: Keyboard state capability
//! - `api`: Leaderboard service client
//! - `highscores`: Local top-10 leaderboard logic

pub mod api;
pub mod driver;
pub mod highscores;
pub mod input;
pub mod sim;

pub use api::{ApiClient, ScoreEntry};
pub use driver::FrameDriver;
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 1200.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Maximum delta-time fed to the simulation per frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player physics
    pub const GRAVITY: f32 = 1000.0;
    pub const MOVE_ACCELERATION: f32 = 1500.0;
    pub const MAX_SPEED: f32 = 400.0;
    pub const JUMP_FORCE: f32 = -750.0;
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Below this speed the player's horizontal velocity snaps to zero
    pub const STOP_THRESHOLD: f32 = 10.0;
    /// Deceleration is this fraction of the move acceleration
    pub const DECEL_FACTOR: f32 = 0.8;
    /// Invincibility window after taking damage (seconds)
    pub const INVINCIBILITY_DURATION: f32 = 1.0;
    /// Squash scalar applied when jumping (< 1 = compressed)
    pub const JUMP_SQUASH: f32 = 0.7;
    /// Stretch scalar applied on landing (> 1 = stretched)
    pub const LAND_STRETCH: f32 = 1.3;
    /// Exponential relaxation rate of the squash scalar toward 1
    pub const SQUASH_RELAX_RATE: f32 = 5.0;

    /// Item physics
    pub const ITEM_GRAVITY: f32 = 500.0;
    pub const ITEM_BOUNCE: f32 = 0.6;
    pub const ITEM_SIZE: f32 = 24.0;
    /// Horizontal damping applied on a platform bounce
    pub const ITEM_PLATFORM_FRICTION: f32 = 0.9;
    /// Horizontal damping applied on a ground bounce
    pub const ITEM_GROUND_FRICTION: f32 = 0.95;
    /// Reflected bounces slower than this get kicked back up
    pub const MIN_BOUNCE_SPEED: f32 = 100.0;
    /// Upward speed forced when a bounce would stall
    pub const BOUNCE_ESCAPE_SPEED: f32 = -150.0;
    /// Items drifting slower than this horizontally get their speed reset
    pub const MIN_HORIZONTAL_SPEED: f32 = 50.0;
    pub const HORIZONTAL_RESET_SPEED: f32 = 80.0;

    /// Spawning
    pub const SPAWN_INTERVAL_INITIAL: f32 = 2.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;
    /// Distance of each emission point from its playfield edge
    pub const SPAWN_MARGIN_X: f32 = 80.0;
    /// Emission height near the top of the playfield
    pub const SPAWN_HEIGHT: f32 = 110.0;
    /// Launch velocity; the horizontal component is signed toward the center
    pub const SPAWN_SPEED_X: f32 = 150.0;
    pub const SPAWN_SPEED_Y: f32 = -200.0;
    /// Probability that a spawned item is a fruit (rest are spikes)
    pub const FRUIT_PROBABILITY: f32 = 0.7;

    /// Session
    pub const GAME_DURATION: f32 = 120.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Fruit scores
    pub const SCORE_APPLE: u32 = 200;
    pub const SCORE_BANANA: u32 = 100;
    pub const SCORE_ORANGE: u32 = 150;

    /// Particles
    pub const PARTICLE_GRAVITY: f32 = 500.0;
    /// Score popups float upward at this rate
    pub const POPUP_RISE_SPEED: f32 = 40.0;
    /// Screen shake triggered by spike damage
    pub const DAMAGE_SHAKE_INTENSITY: f32 = 12.0;
    pub const DAMAGE_SHAKE_DURATION: f32 = 0.4;

    /// Feedback colors (RGB)
    pub const COLOR_APPLE: [u8; 3] = [0xFF, 0xD7, 0x00];
    pub const COLOR_BANANA: [u8; 3] = [0xFF, 0xE1, 0x35];
    pub const COLOR_ORANGE: [u8; 3] = [0xFF, 0x8C, 0x42];
    pub const COLOR_SPIKE: [u8; 3] = [0x2C, 0x2C, 0x2C];
    pub const COLOR_DAMAGE: [u8; 3] = [0xFF, 0x00, 0x00];
    pub const COLOR_JUMP: [u8; 3] = [0xFF, 0xFF, 0xFF];
}
