//! Game state and core simulation types

use std::time::Duration;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bonus::Bonus;
use super::worm::{Color, Worm};
use crate::consts::*;

/// The playing field. Coordinates wrap at its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: u32,
    pub height: u32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Wrap a point that left the field to the opposite edge.
    ///
    /// Each axis wraps on its own. Returns the wrapped point and whether any
    /// axis wrapped.
    pub fn wrap(&self, p: DVec2) -> (DVec2, bool) {
        let w = self.width as f64;
        let h = self.height as f64;
        let mut out = p;

        if p.x > w {
            out.x = 0.0;
        } else if p.x < 0.0 {
            out.x = w;
        }
        if p.y > h {
            out.y = 0.0;
        } else if p.y < 0.0 {
            out.y = h;
        }

        (out, out != p)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width as f64).contains(&p.x) && (0.0..=self.height as f64).contains(&p.y)
    }
}

/// Gameplay tuning. Per-tick quantities are in field units / degrees per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub max_speed: f64,
    pub acceleration: f64,
    pub deceleration: f64,
    pub turn_rate_deg: f64,
    pub trail_sample_distance: f64,
    pub bonus_lifetime_secs: f64,
    pub immunity_secs: f64,
    pub pickup_tolerance: f64,
    /// Spawn when a uniform draw from `0..=spawn_range` is below `spawn_hits`
    pub spawn_hits: u32,
    pub spawn_range: u32,
    /// Trail cutting on crossings; when off, trails pass through each other
    pub collisions: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            turn_rate_deg: TURN_RATE_DEG,
            trail_sample_distance: TRAIL_SAMPLE_DISTANCE,
            bonus_lifetime_secs: BONUS_LIFETIME_SECS,
            immunity_secs: IMMUNITY_SECS,
            pickup_tolerance: PICKUP_TOLERANCE,
            spawn_hits: BONUS_SPAWN_HITS,
            spawn_range: BONUS_SPAWN_RANGE,
            collisions: true,
        }
    }
}

impl Rules {
    pub fn bonus_lifetime(&self) -> Duration {
        secs_to_duration(self.bonus_lifetime_secs)
    }

    pub fn immunity(&self) -> Duration {
        secs_to_duration(self.immunity_secs)
    }
}

/// Negative and NaN become zero; values too large for a `Duration` saturate
fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Where and how a worm enters the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub pos: (f64, f64),
    pub color: Color,
}

/// Player slots
pub const PLAYER_ONE: usize = 0;
pub const PLAYER_TWO: usize = 1;

/// Complete game state (deterministic given seed, inputs and tick times)
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub rules: Rules,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub worms: [Worm; 2],
    /// Active bonuses, oldest first
    pub bonuses: Vec<Bonus>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Session time of the latest tick
    pub now: Duration,
}

impl GameState {
    /// Create a session at time zero. Both worms start immune.
    pub fn new(field: Field, rules: Rules, spawns: [Spawn; 2], seed: u64) -> Self {
        let immunity = rules.immunity();
        let worms = spawns.map(|s| {
            Worm::new(
                DVec2::new(s.pos.0, s.pos.1),
                s.color,
                Duration::ZERO,
                immunity,
            )
        });

        Self {
            field,
            rules,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            worms,
            bonuses: Vec::new(),
            time_ticks: 0,
            now: Duration::ZERO,
        }
    }

    /// Collapse both trails to their heads
    pub fn reset_trails(&mut self) {
        for worm in &mut self.worms {
            worm.reset_trail();
        }
    }
}

pub fn default_spawns() -> [Spawn; 2] {
    [
        Spawn {
            pos: (100.0, 100.0),
            color: Color::RED,
        },
        Spawn {
            pos: (100.0, 110.0),
            color: Color::BLUE,
        },
    ]
}
