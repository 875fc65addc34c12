//! Input collaborator contract
//!
//! The device layer delivers discrete key events; `ControlState` folds them
//! into the held-button booleans each worm reads during a tick.

use serde::{Deserialize, Serialize};

use crate::sim::{Controls, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
}

/// Raw events from the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Per-worm buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    TurnLeft,
    TurnRight,
    Accelerate,
    Decelerate,
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binding {
    Player { player: usize, button: Button },
    ResetTrails,
}

/// Key bindings: player one on the arrows, player two on W/A/S/D, reset on space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<(Key, Binding)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use Button::*;
        let p = |player, button| Binding::Player { player, button };
        Self {
            bindings: vec![
                (Key::Up, p(0, Accelerate)),
                (Key::Down, p(0, Decelerate)),
                (Key::Right, p(0, TurnRight)),
                (Key::Left, p(0, TurnLeft)),
                (Key::W, p(1, Accelerate)),
                (Key::S, p(1, Decelerate)),
                (Key::D, p(1, TurnRight)),
                (Key::A, p(1, TurnLeft)),
                (Key::Space, Binding::ResetTrails),
            ],
        }
    }
}

impl KeyMap {
    pub fn binding(&self, key: Key) -> Option<Binding> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, b)| *b)
    }

    /// Reverse lookup, used by synthetic input sources
    pub fn key_for(&self, binding: Binding) -> Option<Key> {
        self.bindings
            .iter()
            .find(|(_, b)| *b == binding)
            .map(|(k, _)| *k)
    }
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A source of input events, drained once per tick
pub trait InputSource {
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>>;
}

/// Held buttons for both worms plus the pending one-shot reset
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    keymap: KeyMap,
    controls: [Controls; 2],
    reset_pending: bool,
}

impl ControlState {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            controls: [Controls::default(); 2],
            reset_pending: false,
        }
    }

    pub fn controls(&self) -> &[Controls; 2] {
        &self.controls
    }

    /// Fold one event into the held state
    pub fn apply(&mut self, event: InputEvent) -> Flow {
        let (key, down) = match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::KeyDown(key) => (key, true),
            InputEvent::KeyUp(key) => (key, false),
        };

        match self.keymap.binding(key) {
            Some(Binding::Player { player, button }) if player < 2 => {
                let c = &mut self.controls[player];
                match button {
                    Button::TurnLeft => c.turn_left = down,
                    Button::TurnRight => c.turn_right = down,
                    Button::Accelerate => c.accelerate = down,
                    Button::Decelerate => c.decelerate = down,
                }
            }
            Some(Binding::ResetTrails) if down => self.reset_pending = true,
            _ => {}
        }
        Flow::Continue
    }

    /// Snapshot for the next tick; clears the one-shot reset
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            controls: self.controls,
            reset_trails: std::mem::take(&mut self.reset_pending),
        }
    }
}
