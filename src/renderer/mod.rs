//! Render collaborator contract
//!
//! The loop hands a borrowed `Frame` to a `Renderer` once per tick. Backends
//! either read the frame directly or paint the display list from `shapes`.

pub mod log_renderer;
pub mod shapes;

pub use log_renderer::LogRenderer;
pub use shapes::{Shape, display_list};

use std::time::Duration;

use glam::DVec2;

use crate::sim::{Bonus, Color, Field, GameState, Worm};

/// Everything a backend needs to draw one worm
#[derive(Debug, Clone, Copy)]
pub struct WormView<'a> {
    /// Own color, or the immune color while immune
    pub color: Color,
    pub own_color: Color,
    pub trail: &'a [DVec2],
    pub pos: DVec2,
    /// Head position one tick ahead (heading indicator)
    pub look_ahead: DVec2,
    pub score: f64,
    pub immune: bool,
}

impl<'a> WormView<'a> {
    pub fn new(worm: &'a Worm, now: Duration, immune_color: Color) -> Self {
        let immune = worm.is_immune(now);
        Self {
            color: if immune { immune_color } else { worm.color },
            own_color: worm.color,
            trail: worm.trail(),
            pos: worm.pos,
            look_ahead: worm.next_pos(),
            score: worm.score,
            immune,
        }
    }
}

/// One rendered frame worth of state
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub field: Field,
    pub worms: [WormView<'a>; 2],
    pub bonuses: &'a [Bonus],
    /// Duration of the previous tick in milliseconds
    pub last_tick_ms: u64,
    pub tick: u64,
    pub now: Duration,
}

impl<'a> Frame<'a> {
    pub fn new(state: &'a GameState, immune_color: Color, last_tick_ms: u64) -> Self {
        let [a, b] = &state.worms;
        Self {
            field: state.field,
            worms: [
                WormView::new(a, state.now, immune_color),
                WormView::new(b, state.now, immune_color),
            ],
            bonuses: &state.bonuses,
            last_tick_ms,
            tick: state.time_ticks,
            now: state.now,
        }
    }

    /// Player indices, leader first. Ties list player two first.
    pub fn standings(&self) -> [usize; 2] {
        if self.worms[0].score > self.worms[1].score {
            [0, 1]
        } else {
            [1, 0]
        }
    }
}

/// Draws frames
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> anyhow::Result<()>;
}
