//! Input handling: event types and the processor that turns raw window
//! events into controller inputs.

/// Platform-agnostic input events.
pub mod event;
/// Cursor, button and modifier tracking.
pub mod processor;

pub use event::{InputEvent, MouseButton, ScrollAxis};
pub use processor::{InputProcessor, NavInput};
