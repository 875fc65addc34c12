//! Worm Wars - a two-player trail arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, trails, bonuses, trail cutting)
//! - `game`: Fixed-cadence loop tying input, simulation and rendering together
//! - `renderer`: Render collaborator contract plus a headless logger
//! - `platform`: Input collaborator contract and frame pacing
//! - `settings`: Data-driven configuration

pub mod demo;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Default field dimensions
    pub const FIELD_WIDTH: u32 = 1000;
    pub const FIELD_HEIGHT: u32 = 600;

    /// Speed ceiling (units per tick)
    pub const MAX_SPEED: f64 = 20.0;
    /// Speed gained per tick while accelerate is held
    pub const ACCELERATION: f64 = 0.2;
    /// Speed lost per tick while decelerate is held
    pub const DECELERATION: f64 = 0.1;
    /// Heading change per tick while a turn key is held (degrees)
    pub const TURN_RATE_DEG: f64 = 5.0;

    /// A new trail point is recorded once the head is farther than this from the last one
    pub const TRAIL_SAMPLE_DISTANCE: f64 = 20.0;

    /// Bonus lifetime (seconds)
    pub const BONUS_LIFETIME_SECS: f64 = 10.0;
    /// Immunity window granted by a bonus (seconds)
    pub const IMMUNITY_SECS: f64 = 15.0;
    /// Pickup tolerance per axis
    pub const PICKUP_TOLERANCE: f64 = 2.0;
    /// Spawn when a draw from `0..=BONUS_SPAWN_RANGE` is below `BONUS_SPAWN_HITS`
    pub const BONUS_SPAWN_HITS: u32 = 3;
    pub const BONUS_SPAWN_RANGE: u32 = 200;

    /// Nominal tick period (ms); also the minimum sleep between ticks
    pub const TICK_PERIOD_MS: u64 = 40;
}

/// Unit vector for a heading given in degrees
#[inline]
pub fn heading_to_unit(heading_deg: f64) -> DVec2 {
    let a = heading_deg.to_radians();
    DVec2::new(a.cos(), a.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (b - a).length()
}
