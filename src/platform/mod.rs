//! Platform abstraction layer
//!
//! Handles the device side of the game:
//! - Input events and key bindings
//! - Session time and tick pacing

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, Pacer, SystemClock};
pub use input::{Binding, Button, ControlState, Flow, InputEvent, InputSource, Key, KeyMap};
