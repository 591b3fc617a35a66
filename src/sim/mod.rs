//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clamped variable timestep driven from outside
//! - Seeded RNG only, threaded explicitly
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod items;
pub mod kinematics;
pub mod level;
pub mod particles;
pub mod player;
pub mod state;
pub mod tick;

pub use difficulty::{ControlPoint, DifficultyCurve};
pub use items::{Item, ItemKind, ItemSpawner};
pub use kinematics::Body;
pub use level::{Level, Platform};
pub use particles::{Particle, ParticleSystem, ScorePopup};
pub use player::Player;
pub use state::{
    GameEvent, GamePhase, GameSession, GameState, ItemView, ParticleView, PlayerView, PopupView,
    RenderSnapshot,
};
pub use tick::{TickInput, tick};
