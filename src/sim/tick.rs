//! Fixed cadence simulation tick
//!
//! One tick: controls -> kinematics -> bonuses -> trail crossing.

use std::time::Duration;

use glam::DVec2;

use super::bonus::update_bonuses;
use super::collision::resolve_crossings;
use super::state::GameState;
use super::worm::{Controls, MoveOutcome};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held buttons per player
    pub controls: [Controls; 2],
    /// Collapse both trails to their heads before moving
    pub reset_trails: bool,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    TrailsReset,
    Wrapped { player: usize, pos: DVec2 },
    BonusSpawned { pos: DVec2 },
    BonusExpired { pos: DVec2 },
    BonusCollected { player: usize, pos: DVec2 },
    TrailCut { player: usize, index: usize },
    /// A crossing hit an immune worm
    CrossingIgnored { player: usize, index: usize },
}

/// Advance the game state by one tick at session time `now`.
///
/// `now` is the single timestamp used for every age and immunity check in
/// this tick.
pub fn tick(state: &mut GameState, input: &TickInput, now: Duration) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.now = now;
    state.time_ticks += 1;

    if input.reset_trails {
        state.reset_trails();
        log::info!("Trails reset");
        events.push(GameEvent::TrailsReset);
    }

    for (player, worm) in state.worms.iter_mut().enumerate() {
        worm.controls = input.controls[player];
        worm.apply_controls(&state.rules);
        if worm.step(&state.field, &state.rules) == MoveOutcome::Wrapped {
            log::debug!("Player {} wrapped to {:?}", player + 1, worm.pos);
            events.push(GameEvent::Wrapped { player, pos: worm.pos });
        }
    }

    update_bonuses(
        &mut state.bonuses,
        &mut state.worms,
        &state.field,
        &state.rules,
        &mut state.rng,
        now,
        &mut events,
    );

    if state.rules.collisions {
        resolve_crossings(&mut state.worms, now, &mut events);
    }

    log::trace!(
        "tick {}: scores {:.0} / {:.0}, {} bonuses",
        state.time_ticks,
        state.worms[0].score,
        state.worms[1].score,
        state.bonuses.len()
    );

    events
}
