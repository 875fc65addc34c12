//! Headless renderer that reports the scoreboard through `log`

use super::{Frame, Renderer, display_list};

/// Logs a scoreboard line every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    /// Frames seen so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn scoreboard(frame: &Frame<'_>) -> String {
        let players: Vec<String> = frame
            .standings()
            .iter()
            .map(|&p| {
                let w = &frame.worms[p];
                format!(
                    "P{} {:.0}{} ({} pts)",
                    p + 1,
                    w.score,
                    if w.immune { " [immune]" } else { "" },
                    w.trail.len()
                )
            })
            .collect();

        format!(
            "t={:.1}s tick {} | {} | bonuses {} | last tick {} ms",
            frame.now.as_secs_f64(),
            frame.tick,
            players.join(" | "),
            frame.bonuses.len(),
            frame.last_tick_ms
        )
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(25)
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        if self.frames % self.every == 0 {
            log::info!("{}", Self::scoreboard(frame));
        }
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("frame {}: {} shapes", self.frames, display_list(frame).len());
        }
        self.frames += 1;
        Ok(())
    }
}
