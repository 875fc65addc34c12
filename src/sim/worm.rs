//! The worm: a player-steered head dragging a sampled trail
//!
//! Kinematics are per tick: speed is in field units per tick and the heading
//! is in degrees (unbounded, wraps through trig).

use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::segment::{Segment, polyline_length};
use super::state::{Field, Rules};
use crate::{distance, heading_to_unit};

/// RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const RED: Color = Color(255, 0, 0);
    pub const BLUE: Color = Color(0, 0, 255);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BONUS: Color = Color(0, 100, 100);
}

/// Held-button state for one worm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub decelerate: bool,
}

/// What a single `step` did to the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Head moved, trail unchanged
    Moved,
    /// Head moved far enough to record a new trail point
    Sampled,
    /// Head crossed a field edge; trail restarted at the new position
    Wrapped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worm {
    pub color: Color,
    /// Live head position
    pub pos: DVec2,
    /// Degrees
    pub heading: f64,
    pub speed: f64,
    /// Accumulated path length
    pub score: f64,
    /// Session time until which the worm cannot be cut
    pub immunity_until: Duration,
    pub controls: Controls,
    /// Recorded positions, oldest first (never empty)
    trail: Vec<DVec2>,
}

impl Worm {
    /// Create a stationary worm facing east.
    ///
    /// The worm starts immune for `immunity` from `now`.
    pub fn new(pos: DVec2, color: Color, now: Duration, immunity: Duration) -> Self {
        Self {
            color,
            pos,
            heading: 0.0,
            speed: 0.0,
            score: 0.0,
            immunity_until: now.saturating_add(immunity),
            controls: Controls::default(),
            trail: vec![pos],
        }
    }

    /// Replace the recorded trail and move the head to its last point.
    /// An empty trail is ignored. Test helper for staging trail layouts.
    #[doc(hidden)]
    pub fn with_trail(mut self, trail: Vec<DVec2>) -> Self {
        if let Some(&head) = trail.last() {
            self.pos = head;
            self.trail = trail;
        }
        self
    }

    /// Recorded trail points, oldest first
    pub fn trail(&self) -> &[DVec2] {
        &self.trail
    }

    /// Most recent recorded point
    pub fn tail_end(&self) -> DVec2 {
        self.trail.last().copied().unwrap_or(self.pos)
    }

    /// Segment between the two most recently recorded points
    pub fn latest_segment(&self) -> Option<Segment> {
        match self.trail.as_slice() {
            [.., a, b] => Some(Segment::new(*a, *b)),
            _ => None,
        }
    }

    /// Position after one tick at the current heading and speed
    pub fn next_pos(&self) -> DVec2 {
        self.pos + heading_to_unit(self.heading) * self.speed
    }

    /// Path length: recorded trail plus the stretch from the last point to the head
    pub fn length(&self) -> f64 {
        polyline_length(&self.trail) + distance(self.tail_end(), self.pos)
    }

    pub fn is_immune(&self, now: Duration) -> bool {
        now < self.immunity_until
    }

    pub fn grant_immunity(&mut self, now: Duration, window: Duration) {
        self.immunity_until = now.saturating_add(window);
    }

    /// Apply held controls: speed first, then turning (turning needs speed > 0)
    pub fn apply_controls(&mut self, rules: &Rules) {
        let c = self.controls;
        if c.accelerate {
            self.speed = (self.speed + rules.acceleration).min(rules.max_speed);
        }
        if c.decelerate {
            self.speed = (self.speed - rules.deceleration).max(0.0);
        }
        if c.turn_right && self.speed > 0.0 {
            self.heading += rules.turn_rate_deg;
        }
        if c.turn_left && self.speed > 0.0 {
            self.heading -= rules.turn_rate_deg;
        }
    }

    /// Advance the head one tick, wrap at the field edges, sample the trail
    /// and add the current path length to the score.
    pub fn step(&mut self, field: &Field, rules: &Rules) -> MoveOutcome {
        let (pos, wrapped) = field.wrap(self.next_pos());
        self.pos = pos;

        let outcome = if wrapped {
            self.trail = vec![pos];
            MoveOutcome::Wrapped
        } else if distance(pos, self.tail_end()) > rules.trail_sample_distance {
            self.trail.push(pos);
            MoveOutcome::Sampled
        } else {
            MoveOutcome::Moved
        };

        self.score += self.length();
        outcome
    }

    /// Collapse the trail to the live head position
    pub fn reset_trail(&mut self) {
        self.trail = vec![self.pos];
    }

    /// Drop every trail point before `index`. Returns whether anything was
    /// dropped; out-of-range indices are ignored.
    pub fn cut_trail(&mut self, index: usize) -> bool {
        if index > 0 && index < self.trail.len() {
            self.trail.drain(..index);
            true
        } else {
            false
        }
    }
}
