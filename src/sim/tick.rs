//! Per-frame simulation orchestration
//!
//! One tick advances the session clock, feeds the difficulty curve into the
//! spawner, steps the spawner, player, and particles, then resolves
//! player-item contact and dispatches its side effects. Ordering is fixed
//! and deterministic for a given dt and RNG state.

use glam::Vec2;

use super::items::ItemKind;
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal axis in {-1, 0, 1}
    pub axis: i8,
    pub jump_held: bool,
    pub drop_held: bool,
}

/// Advance the game state by one clamped timestep.
///
/// Returns the effects this tick produced, for outer layers (audio, UI) to
/// react to. The phase is read once at entry; a transition into game over
/// mid-tick still lets the rest of the tick run, and is surfaced as a single
/// `GameEvent::GameOver`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let entry_phase = state.session.phase;

    match entry_phase {
        GamePhase::Playing => {
            state.session.decrease_time(dt);

            let interval = state.difficulty.spawn_interval_at(state.session.elapsed());
            state.spawner.set_spawn_interval(interval);

            state.spawner.update(dt, &state.level, &mut state.rng);

            if let Some(pos) = state.player.update(input, dt, &state.level) {
                state.particles.spawn_jump_effect(pos, &mut state.rng);
                events.push(GameEvent::Jumped { pos });
            }

            state.particles.update(dt);

            resolve_item_contacts(state, &mut events);
        }
        GamePhase::Title => {
            // Idle on the title screen: clear leftovers from the last run
            state.spawner.reset();
            state.particles.reset();
        }
        GamePhase::GameOver => {}
    }

    if entry_phase == GamePhase::Playing && state.session.phase == GamePhase::GameOver {
        log::info!(
            "run over: score {} (high {})",
            state.session.score,
            state.session.high_score
        );
        events.push(GameEvent::GameOver);
    }

    events
}

/// AABB contact between the player and every active item. Fruit scores and
/// bursts; spikes are removed on contact whether or not the hit lands.
fn resolve_item_contacts(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_body = state.player.body;
    let contacts: Vec<(u32, ItemKind, Vec2, f32)> = state
        .spawner
        .items()
        .filter(|item| item.body.overlaps(&player_body))
        .map(|item| (item.id, item.kind, item.body.center(), item.body.pos.y))
        .collect();

    for (id, kind, center, top_y) in contacts {
        if kind.is_fruit() {
            let points = kind.score();
            state.session.add_score(points);
            state
                .particles
                .spawn_collect_effect(center, kind.color(), &mut state.rng);
            state.particles.spawn_score_popup(
                Vec2::new(center.x, top_y),
                points,
                kind.color(),
            );
            state.spawner.remove(id);
            events.push(GameEvent::Collected {
                kind,
                points,
                pos: center,
            });
        } else {
            if state.player.take_damage() {
                state.session.lose_life();
                let hit_pos = state.player.body.center();
                state
                    .particles
                    .spawn_damage_effect(hit_pos, &mut state.rng);
                state.particles.trigger_shake(
                    crate::consts::DAMAGE_SHAKE_INTENSITY,
                    crate::consts::DAMAGE_SHAKE_DURATION,
                );
                events.push(GameEvent::Damaged { pos: hit_pos });
            }
            state.spawner.remove(id);
        }
    }
}
