//! Input handling: event types, the mode-selection state machine, and the
//! processor that converts raw platform events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Input-mode selection state machine.
pub mod mode;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::InputEvent;
pub use mode::{DeviceCapabilities, InputMode};
pub use processor::{InputProcessor, WallCommand};
