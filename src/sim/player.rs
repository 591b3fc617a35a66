//! Player controller
//!
//! One controllable rectangle: accelerates toward the input axis, jumps from
//! platforms or the ground, can drop through platforms, and debounces spike
//! damage behind an invincibility window. The squash-stretch scalar is purely
//! visual and relaxes toward 1 every tick.

use glam::Vec2;

use super::kinematics::{self, Body};
use super::level::Level;
use super::tick::TickInput;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub grounded: bool,
    invincible_timer: f32,
    pub squash_stretch: f32,
    drop_through: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Body::new(
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                Vec2::splat(PLAYER_SIZE),
            ),
            grounded: false,
            invincible_timer: 0.0,
            squash_stretch: 1.0,
            drop_through: false,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    /// Advance one tick. Returns the lower-center takeoff position when a
    /// jump started, for the orchestrator to wire into the particle engine.
    pub fn update(&mut self, input: &TickInput, dt: f32, level: &Level) -> Option<Vec2> {
        if self.invincible_timer > 0.0 {
            self.invincible_timer -= dt;
        }

        // Horizontal: accelerate toward the axis, or decelerate toward zero
        // without overshooting the sign
        let axis = input.axis as f32;
        if axis != 0.0 {
            self.body.vel.x += axis * MOVE_ACCELERATION * dt;
        } else if self.body.vel.x.abs() > STOP_THRESHOLD {
            let decel = -self.body.vel.x.signum() * MOVE_ACCELERATION * DECEL_FACTOR * dt;
            let next = self.body.vel.x + decel;
            self.body.vel.x = if next.signum() != self.body.vel.x.signum() {
                0.0
            } else {
                next
            };
        } else {
            self.body.vel.x = 0.0;
        }
        self.body.vel.x = self.body.vel.x.clamp(-MAX_SPEED, MAX_SPEED);

        self.body.vel.y += GRAVITY * dt;

        let mut jumped_from = None;
        if input.jump_held && self.grounded {
            self.body.vel.y = JUMP_FORCE;
            self.grounded = false;
            self.squash_stretch = JUMP_SQUASH;
            jumped_from = Some(Vec2::new(
                self.body.pos.x + self.body.size.x / 2.0,
                self.body.pos.y + self.body.size.y,
            ));
        }

        // Variable jump height: releasing the jump key while ascending cuts
        // the climb short
        if !input.jump_held && self.body.vel.y < 0.0 {
            self.body.vel.y *= 0.5;
        }

        self.drop_through = input.drop_held;

        self.body.pos += self.body.vel * dt;

        self.grounded = false;
        if !self.drop_through && kinematics::land_on_platforms(&mut self.body, dt, level) {
            self.grounded = true;
            self.squash_stretch = LAND_STRETCH;
        }
        if kinematics::land_on_ground(&mut self.body, level) {
            self.grounded = true;
            self.squash_stretch = LAND_STRETCH;
        }

        kinematics::wrap_horizontal(&mut self.body, level.width);

        self.squash_stretch += (1.0 - self.squash_stretch) * SQUASH_RELAX_RATE * dt;

        jumped_from
    }

    /// The single authority on damage debouncing. Returns true when the hit
    /// lands (arming the invincibility window), false while invincible.
    pub fn take_damage(&mut self) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.invincible_timer = INVINCIBILITY_DURATION;
        true
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn grounded_player(level: &Level) -> Player {
        let mut player = Player::new();
        // Settle on the ground
        for _ in 0..120 {
            player.update(&idle(), DT, level);
        }
        assert!(player.grounded);
        player
    }

    #[test]
    fn test_take_damage_debounces() {
        let mut player = Player::new();
        assert!(player.take_damage());
        assert!(!player.take_damage());

        // Window expires after 1s of updates
        let level = Level::standard();
        for _ in 0..70 {
            player.update(&idle(), DT, &level);
        }
        assert!(!player.is_invincible());
        assert!(player.take_damage());
    }

    #[test]
    fn test_jump_requires_ground() {
        let level = Level::standard();
        let jump = TickInput {
            jump_held: true,
            ..Default::default()
        };

        let mut airborne = Player::new();
        assert!(airborne.update(&jump, DT, &level).is_none());

        let mut player = grounded_player(&level);
        let takeoff = player.update(&jump, DT, &level);
        assert!(takeoff.is_some());
        assert_eq!(player.body.vel.y, JUMP_FORCE);
        assert!(!player.grounded);
        assert!(player.squash_stretch < 1.0);
    }

    #[test]
    fn test_variable_jump_halves_once_per_tick() {
        let level = Level::standard();
        let mut player = grounded_player(&level);
        let jump = TickInput {
            jump_held: true,
            ..Default::default()
        };
        player.update(&jump, DT, &level);
        assert_eq!(player.body.vel.y, JUMP_FORCE);

        // Release while ascending: halved (after the tick's gravity)
        let vy_before = player.body.vel.y;
        player.update(&idle(), DT, &level);
        let expected = (vy_before + GRAVITY * DT) * 0.5;
        assert!((player.body.vel.y - expected).abs() < 1e-3);

        // Run the ascent out; once falling, no further halving
        for _ in 0..300 {
            player.update(&idle(), DT, &level);
            if player.grounded {
                break;
            }
        }
        assert!(player.grounded);
    }

    #[test]
    fn test_horizontal_accel_and_clamp() {
        let level = Level::standard();
        let mut player = grounded_player(&level);
        let right = TickInput {
            axis: 1,
            ..Default::default()
        };
        for _ in 0..120 {
            player.update(&right, DT, &level);
        }
        assert_eq!(player.body.vel.x, MAX_SPEED);
    }

    #[test]
    fn test_deceleration_never_overshoots() {
        let level = Level::standard();
        let mut player = grounded_player(&level);
        let right = TickInput {
            axis: 1,
            ..Default::default()
        };
        for _ in 0..30 {
            player.update(&right, DT, &level);
        }
        assert!(player.body.vel.x > 0.0);

        for _ in 0..120 {
            player.update(&idle(), DT, &level);
            assert!(player.body.vel.x >= 0.0, "decel overshot below zero");
        }
        assert_eq!(player.body.vel.x, 0.0);
    }

    #[test]
    fn test_drop_through_skips_platform_not_ground() {
        let level = Level::standard();
        // Stand on the center platform at y=500
        let mut player = Player::new();
        player.body.pos = Vec2::new(550.0, 500.0 - PLAYER_SIZE - 1.0);
        player.body.vel = Vec2::new(0.0, 50.0);
        player.update(&idle(), DT, &level);
        assert!(player.grounded);
        assert_eq!(player.body.pos.y, 500.0 - PLAYER_SIZE);

        // Hold down: falls through the platform...
        let drop = TickInput {
            drop_held: true,
            ..Default::default()
        };
        for _ in 0..10 {
            player.update(&drop, DT, &level);
        }
        assert!(player.body.pos.y > 500.0 - PLAYER_SIZE);

        // ...but the ground still catches
        for _ in 0..300 {
            player.update(&drop, DT, &level);
        }
        assert!(player.grounded);
        assert_eq!(player.body.bottom(), level.ground_y());
    }

    #[test]
    fn test_landing_stretch_relaxes_toward_one() {
        let level = Level::standard();
        let player = grounded_player(&level);
        // After two seconds on the ground the landing stretch has decayed
        assert!((player.squash_stretch - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_screen_wrap() {
        let level = Level::standard();
        let mut player = grounded_player(&level);
        player.body.pos.x = level.width - 1.0;
        player.body.vel.x = MAX_SPEED;
        let right = TickInput {
            axis: 1,
            ..Default::default()
        };
        for _ in 0..5 {
            player.update(&right, DT, &level);
        }
        assert!(player.body.pos.x < level.width / 2.0, "should wrap to the left edge");
    }
}
