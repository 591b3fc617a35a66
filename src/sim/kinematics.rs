//! Shared kinematics and collision rules
//!
//! Gravity/velocity/position integration plus one-way platform resolution,
//! used by both the player and spawned items. Platforms only catch bodies
//! whose previous bottom edge was at or above the platform top, so entities
//! pass through freely from below.

use glam::Vec2;

use super::level::{Level, Platform};
use crate::consts::*;

/// An axis-aligned moving rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Integrate gravity into velocity, then velocity into position.
pub fn integrate(body: &mut Body, gravity: f32, dt: f32) {
    body.vel.y += gravity * dt;
    body.pos += body.vel * dt;
}

/// Did the body's bottom edge cross this platform's top surface this tick?
///
/// Uses the pre-integration bottom edge (reconstructed from the current
/// velocity) so a fast body can't tunnel through a thin platform.
fn crossed_top(body: &Body, prev_bottom: f32, platform: &Platform) -> bool {
    prev_bottom <= platform.y
        && body.bottom() > platform.y
        && body.pos.y < platform.y + platform.height
        && body.pos.x + body.size.x > platform.x
        && body.pos.x < platform.x + platform.width
}

/// Snap-and-stop platform resolution for the player.
///
/// Only the first platform that matches the crossing predicate is resolved.
/// Returns true if the body landed.
pub fn land_on_platforms(body: &mut Body, dt: f32, level: &Level) -> bool {
    if body.vel.y < 0.0 {
        return false;
    }
    let prev_bottom = body.pos.y - body.vel.y * dt + body.size.y;
    for platform in &level.platforms {
        if crossed_top(body, prev_bottom, platform) {
            body.pos.y = platform.y - body.size.y;
            body.vel.y = 0.0;
            return true;
        }
    }
    false
}

/// Snap-and-bounce platform resolution for items.
///
/// Reflects the vertical velocity by the bounce coefficient and damps the
/// horizontal velocity. Bounces too slow to clear the platform get kicked
/// back up so items never rest on a surface. First match wins, as for the
/// player. Returns true if the body bounced.
pub fn bounce_on_platforms(body: &mut Body, dt: f32, level: &Level) -> bool {
    if body.vel.y < 0.0 {
        return false;
    }
    let prev_bottom = body.pos.y - body.vel.y * dt + body.size.y;
    for platform in &level.platforms {
        if crossed_top(body, prev_bottom, platform) {
            body.pos.y = platform.y - body.size.y;
            body.vel.y = -body.vel.y * ITEM_BOUNCE;
            body.vel.x *= ITEM_PLATFORM_FRICTION;
            if body.vel.y.abs() < MIN_BOUNCE_SPEED {
                body.vel.y = BOUNCE_ESCAPE_SPEED;
            }
            return true;
        }
    }
    false
}

/// Snap-and-stop resolution against the ground line. Returns true on landing.
pub fn land_on_ground(body: &mut Body, level: &Level) -> bool {
    let ground_y = level.ground_y();
    if body.bottom() > ground_y {
        body.pos.y = ground_y - body.size.y;
        body.vel.y = 0.0;
        return true;
    }
    false
}

/// Snap-and-bounce resolution against the ground line. Returns true on bounce.
pub fn bounce_on_ground(body: &mut Body, level: &Level) -> bool {
    let ground_y = level.ground_y();
    if body.bottom() > ground_y {
        body.pos.y = ground_y - body.size.y;
        body.vel.y = -body.vel.y * ITEM_BOUNCE;
        body.vel.x *= ITEM_GROUND_FRICTION;
        if body.vel.y.abs() < MIN_BOUNCE_SPEED {
            body.vel.y = BOUNCE_ESCAPE_SPEED;
        }
        return true;
    }
    false
}

/// Keep items drifting horizontally; a stalled vx is reset in the direction
/// of travel (zero counts as rightward).
pub fn enforce_min_horizontal(body: &mut Body) {
    if body.vel.x.abs() < MIN_HORIZONTAL_SPEED {
        body.vel.x = if body.vel.x >= 0.0 {
            HORIZONTAL_RESET_SPEED
        } else {
            -HORIZONTAL_RESET_SPEED
        };
    }
}

/// Horizontal screen wrap for the player: exiting one edge re-enters at the
/// opposite edge.
pub fn wrap_horizontal(body: &mut Body, width: f32) {
    if body.pos.x > width {
        body.pos.x = -body.size.x;
    } else if body.pos.x + body.size.x < 0.0 {
        body.pos.x = width;
    }
}

/// Has the body fully left the playfield (left, right, or below)?
pub fn out_of_bounds(body: &Body, level: &Level) -> bool {
    body.pos.x + body.size.x < 0.0 || body.pos.x > level.width || body.pos.y > level.height
}
