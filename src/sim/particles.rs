//! Transient visual feedback
//!
//! Three independent pools: impact particles, floating score popups, and the
//! screen-shake state. Pools spawn by appending and cull by filtering out
//! entries whose remaining life hit zero; no pool touches another.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// A short-lived impact particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub color: [u8; 3],
    pub size: f32,
}

impl Particle {
    /// Linear fade with remaining life
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// A floating "+N" score popup
#[derive(Debug, Clone, Copy)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub value: u32,
    pub color: [u8; 3],
    pub life: f32,
    pub max_life: f32,
}

impl ScorePopup {
    /// Popups hold full opacity for the first half of their life
    pub fn alpha(&self) -> f32 {
        (self.life * 2.0).min(1.0)
    }
}

/// Particle, popup, and shake pools
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    popups: Vec<ScorePopup>,
    shake_intensity: f32,
    shake_duration: f32,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Radial burst for a collected fruit: evenly distributed directions
    /// with an upward kick.
    pub fn spawn_collect_effect(&mut self, pos: Vec2, color: [u8; 3], rng: &mut Pcg32) {
        for i in 0..12 {
            let angle = (i as f32 / 12.0) * std::f32::consts::TAU;
            let speed = 100.0 + rng.random::<f32>() * 100.0;
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed - 100.0),
                life: 0.5,
                max_life: 0.5,
                color,
                size: 3.0 + rng.random::<f32>() * 2.0,
            });
        }
    }

    /// Scatter burst for spike damage: fully random directions, red.
    pub fn spawn_damage_effect(&mut self, pos: Vec2, rng: &mut Pcg32) {
        for _ in 0..20 {
            let angle = rng.random::<f32>() * std::f32::consts::TAU;
            let speed = 150.0 + rng.random::<f32>() * 150.0;
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed - 50.0),
                life: 0.6,
                max_life: 0.6,
                color: COLOR_DAMAGE,
                size: 4.0 + rng.random::<f32>() * 3.0,
            });
        }
    }

    /// Dust puff under the player's feet on takeoff.
    pub fn spawn_jump_effect(&mut self, pos: Vec2, rng: &mut Pcg32) {
        for _ in 0..8 {
            let angle = std::f32::consts::FRAC_PI_4
                + (rng.random::<f32>() - 0.5) * std::f32::consts::FRAC_PI_2;
            let speed = 100.0 + rng.random::<f32>() * 50.0;
            let sign = if rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos() * speed * sign, angle.sin() * speed),
                life: 0.4,
                max_life: 0.4,
                color: COLOR_JUMP,
                size: 3.0 + rng.random::<f32>() * 2.0,
            });
        }
    }

    pub fn spawn_score_popup(&mut self, pos: Vec2, value: u32, color: [u8; 3]) {
        self.popups.push(ScorePopup {
            pos,
            value,
            color,
            life: 1.0,
            max_life: 1.0,
        });
    }

    pub fn trigger_shake(&mut self, intensity: f32, duration: f32) {
        self.shake_intensity = intensity;
        self.shake_duration = duration;
    }

    /// Advance all three pools by dt.
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.vel.y += PARTICLE_GRAVITY * dt;
            particle.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);

        for popup in &mut self.popups {
            popup.pos.y -= POPUP_RISE_SPEED * dt;
            popup.life -= dt;
        }
        self.popups.retain(|p| p.life > 0.0);

        if self.shake_duration > 0.0 {
            self.shake_duration -= dt;
            if self.shake_duration <= 0.0 {
                self.shake_intensity = 0.0;
            }
        }
    }

    /// Random camera offset while a shake is active, zero otherwise.
    pub fn shake_offset(&self, rng: &mut Pcg32) -> Vec2 {
        if self.shake_duration <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (rng.random::<f32>() - 0.5) * self.shake_intensity,
            (rng.random::<f32>() - 0.5) * self.shake_intensity,
        )
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn popups(&self) -> &[ScorePopup] {
        &self.popups
    }

    /// Clear impact particles. Popups and shake deliberately survive a reset
    /// so late feedback finishes playing out on the title screen.
    pub fn reset(&mut self) {
        self.particles.clear();
    }
}
