//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Session time is passed in, never read from a clock
//! - Seeded RNG only
//! - Stable player order (player one before player two)
//! - No rendering or platform dependencies

pub mod bonus;
pub mod collision;
pub mod segment;
pub mod state;
pub mod tick;
pub mod worm;

pub use bonus::{Bonus, update_bonuses};
pub use collision::{Crossings, detect_crossings, find_crossing, resolve_crossings};
pub use segment::{Segment, polyline_length, segments};
pub use state::{Field, GameState, PLAYER_ONE, PLAYER_TWO, Rules, Spawn, default_spawns};
pub use tick::{GameEvent, TickInput, tick};
pub use worm::{Color, Controls, MoveOutcome, Worm};
