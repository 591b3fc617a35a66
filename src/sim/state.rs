//! Session state and the aggregate game state
//!
//! `GameSession` is the explicit score/lives/clock context the orchestrator
//! owns; components receive it by reference instead of reaching into a global
//! store. `GameState` bundles everything one tick touches, including the
//! seeded RNG, so a session is reproducible from its seed and input sequence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::DifficultyCurve;
use super::items::{ItemKind, ItemSpawner};
use super::level::Level;
use super::particles::ParticleSystem;
use super::player::Player;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the title screen
    Title,
    /// Active gameplay
    Playing,
    /// Run ended (out of lives or out of time)
    GameOver,
}

/// Score, lives, and the session clock
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub lives: u8,
    pub time_remaining: f32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Title,
            score: 0,
            high_score: 0,
            lives: STARTING_LIVES,
            time_remaining: GAME_DURATION,
        }
    }

    /// Begin a fresh run.
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_remaining = GAME_DURATION;
    }

    /// Back to the title screen, run state cleared.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Title;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_remaining = GAME_DURATION;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Deduct one life; the last one ends the run.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.end();
        }
    }

    /// Run the session clock down; hitting zero ends the run.
    pub fn decrease_time(&mut self, dt: f32) {
        self.time_remaining = (self.time_remaining - dt).max(0.0);
        if self.time_remaining <= 0.0 && self.phase == GamePhase::Playing {
            self.end();
        }
    }

    fn end(&mut self) {
        self.phase = GamePhase::GameOver;
        self.high_score = self.high_score.max(self.score);
        self.lives = 0;
        self.time_remaining = 0.0;
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> f32 {
        GAME_DURATION - self.time_remaining
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Effects a tick surfaces to outer layers (audio, UI)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player left the ground; position is the lower-center takeoff point
    Jumped { pos: Vec2 },
    /// A fruit was collected
    Collected { kind: ItemKind, points: u32, pos: Vec2 },
    /// A spike connected (the invincibility window was open)
    Damaged { pos: Vec2 },
    /// The run just ended, by time-out or final life
    GameOver,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub session: GameSession,
    pub level: Level,
    pub difficulty: DifficultyCurve,
    pub player: Player,
    pub spawner: ItemSpawner,
    pub particles: ParticleSystem,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Standard level and difficulty ramp with the given seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Level::standard(), DifficultyCurve::standard())
    }

    pub fn with_config(seed: u64, level: Level, difficulty: DifficultyCurve) -> Self {
        debug_assert!(!level.platforms.is_empty(), "level needs at least one platform");
        Self {
            seed,
            session: GameSession::new(),
            level,
            difficulty,
            player: Player::new(),
            spawner: ItemSpawner::new(),
            particles: ParticleSystem::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Read-only view for the presentation layer. Drawing happens outside
    /// the core; this is everything a renderer needs for one frame.
    pub fn snapshot(&mut self) -> RenderSnapshot {
        let shake = self.particles.shake_offset(&mut self.rng);
        RenderSnapshot {
            player: PlayerView {
                pos: self.player.body.pos,
                size: self.player.body.size,
                squash_stretch: self.player.squash_stretch,
                invincible: self.player.is_invincible(),
                grounded: self.player.grounded,
            },
            items: self
                .spawner
                .items()
                .map(|item| ItemView {
                    pos: item.body.pos,
                    size: item.body.size,
                    kind: item.kind,
                })
                .collect(),
            particles: self
                .particles
                .particles()
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                    color: p.color,
                    alpha: p.alpha(),
                })
                .collect(),
            popups: self
                .particles
                .popups()
                .iter()
                .map(|p| PopupView {
                    pos: p.pos,
                    value: p.value,
                    color: p.color,
                    alpha: p.alpha(),
                })
                .collect(),
            shake,
            score: self.session.score,
            lives: self.session.lives,
            time_remaining: self.session.time_remaining,
            phase: self.session.phase,
        }
    }
}

/// Player pose for rendering
#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub squash_stretch: f32,
    pub invincible: bool,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ItemView {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Copy)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub color: [u8; 3],
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PopupView {
    pub pos: Vec2,
    pub value: u32,
    pub color: [u8; 3],
    pub alpha: f32,
}

/// One frame's worth of drawable state
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub items: Vec<ItemView>,
    pub particles: Vec<ParticleView>,
    pub popups: Vec<PopupView>,
    /// Camera offset from an active screen shake
    pub shake: Vec2,
    pub score: u32,
    pub lives: u8,
    pub time_remaining: f32,
    pub phase: GamePhase,
}
