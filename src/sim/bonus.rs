//! Timed bonus pickups
//!
//! Bonuses appear at random integral field positions, live for a fixed
//! lifetime and grant immunity to the first worm whose head lands on them.

use std::time::Duration;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Field, Rules};
use super::tick::GameEvent;
use super::worm::Worm;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub pos: DVec2,
    /// Session time the bonus appeared
    pub created: Duration,
}

impl Bonus {
    pub fn new(pos: DVec2, created: Duration) -> Self {
        Self { pos, created }
    }

    /// Place a bonus uniformly on the integer grid `[1, width] x [1, height]`
    pub fn random<R: Rng>(field: &Field, rng: &mut R, now: Duration) -> Self {
        let x = rng.random_range(1..=field.width.max(1));
        let y = rng.random_range(1..=field.height.max(1));
        Self::new(DVec2::new(x as f64, y as f64), now)
    }

    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.created)
    }

    pub fn is_expired(&self, now: Duration, lifetime: Duration) -> bool {
        self.age(now) >= lifetime
    }

    /// Head within `tolerance` of the bonus on both axes
    pub fn is_reached_by(&self, head: DVec2, tolerance: f64) -> bool {
        let d = head - self.pos;
        d.x.abs() <= tolerance && d.y.abs() <= tolerance
    }
}

/// Expire, collect and spawn bonuses for one tick.
///
/// Expired bonuses are dropped first. A live bonus reached by a worm head is
/// consumed and grants that worm immunity; player one is checked before
/// player two. Finally one new bonus may spawn.
pub fn update_bonuses<R: Rng>(
    bonuses: &mut Vec<Bonus>,
    worms: &mut [Worm; 2],
    field: &Field,
    rules: &Rules,
    rng: &mut R,
    now: Duration,
    events: &mut Vec<GameEvent>,
) {
    let lifetime = rules.bonus_lifetime();
    let immunity = rules.immunity();

    bonuses.retain(|bonus| {
        if bonus.is_expired(now, lifetime) {
            log::debug!("Bonus at {:?} expired", bonus.pos);
            events.push(GameEvent::BonusExpired { pos: bonus.pos });
            return false;
        }
        let taker = worms
            .iter()
            .position(|w| bonus.is_reached_by(w.pos, rules.pickup_tolerance));
        match taker {
            Some(player) => {
                worms[player].grant_immunity(now, immunity);
                log::info!("Player {} picked up a bonus, immune for {:?}", player + 1, immunity);
                events.push(GameEvent::BonusCollected { player, pos: bonus.pos });
                false
            }
            None => true,
        }
    });

    if rng.random_range(0..=rules.spawn_range) < rules.spawn_hits {
        let bonus = Bonus::random(field, rng, now);
        log::debug!("Bonus spawned at {:?}", bonus.pos);
        events.push(GameEvent::BonusSpawned { pos: bonus.pos });
        bonuses.push(bonus);
    }
}
