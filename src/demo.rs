//! Autopilot input source
//!
//! Plays both worms without a keyboard: each pilot throttles up to a cruise
//! duration, then wanders by holding turn keys for random stretches. Events
//! are produced through the regular key bindings, so the loop cannot tell a
//! pilot from a person.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{Binding, Button, InputEvent, InputSource, Key, KeyMap};

/// Ticks spent holding accelerate at the start
const THROTTLE_TICKS: u32 = 40;
/// Chance per tick to change the turn key being held
const TURN_CHANGE_ODDS: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Steer {
    Straight,
    Left,
    Right,
}

#[derive(Debug, Clone)]
struct Pilot {
    player: usize,
    throttle_left: u32,
    steer: Steer,
}

impl Pilot {
    fn key(&self, keymap: &KeyMap, button: Button) -> Option<Key> {
        keymap.key_for(Binding::Player {
            player: self.player,
            button,
        })
    }

    fn steer_key(&self, keymap: &KeyMap, steer: Steer) -> Option<Key> {
        match steer {
            Steer::Straight => None,
            Steer::Left => self.key(keymap, Button::TurnLeft),
            Steer::Right => self.key(keymap, Button::TurnRight),
        }
    }

    fn drive(&mut self, keymap: &KeyMap, rng: &mut Pcg32, tick: u64, out: &mut Vec<InputEvent>) {
        if tick == 0 {
            out.extend(self.key(keymap, Button::Accelerate).map(InputEvent::KeyDown));
        }
        if self.throttle_left > 0 {
            self.throttle_left -= 1;
            if self.throttle_left == 0 {
                out.extend(self.key(keymap, Button::Accelerate).map(InputEvent::KeyUp));
            }
        }

        if rng.random_bool(TURN_CHANGE_ODDS) {
            let next = match rng.random_range(0..3) {
                0 => Steer::Left,
                1 => Steer::Right,
                _ => Steer::Straight,
            };
            if next != self.steer {
                out.extend(self.steer_key(keymap, self.steer).map(InputEvent::KeyUp));
                out.extend(self.steer_key(keymap, next).map(InputEvent::KeyDown));
                self.steer = next;
            }
        }
    }
}

/// Synthetic input for both players
#[derive(Debug, Clone)]
pub struct DemoInput {
    keymap: KeyMap,
    rng: Pcg32,
    pilots: [Pilot; 2],
    tick: u64,
    /// Quit once this many polls have been answered
    max_ticks: Option<u64>,
}

impl DemoInput {
    pub fn new(seed: u64, max_ticks: Option<u64>) -> Self {
        let pilot = |player| Pilot {
            player,
            throttle_left: THROTTLE_TICKS,
            steer: Steer::Straight,
        };
        Self {
            keymap: KeyMap::default(),
            rng: Pcg32::seed_from_u64(seed),
            pilots: [pilot(0), pilot(1)],
            tick: 0,
            max_ticks,
        }
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>> {
        if self.max_ticks.is_some_and(|max| self.tick >= max) {
            return Ok(vec![InputEvent::Quit]);
        }

        let mut events = Vec::new();
        for pilot in &mut self.pilots {
            pilot.drive(&self.keymap, &mut self.rng, self.tick, &mut events);
        }
        self.tick += 1;
        Ok(events)
    }
}
