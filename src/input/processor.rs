//! Converts raw platform events into controller inputs.
//!
//! Window systems report button changes without a position and cursor
//! motion without button state. The `InputProcessor` owns that transient
//! state (cursor position, held buttons, ctrl modifier) so every
//! [`NavInput`] it emits is self-contained.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, ScrollAxis};

/// A pointer or wheel input in the form the
/// [`InteractionController`](crate::camera::InteractionController)
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavInput {
    /// A button went down at `pos`.
    Press {
        /// Cursor position in physical pixels.
        pos: Vec2,
        /// Which button.
        button: MouseButton,
    },
    /// The cursor moved to `pos`.
    Move {
        /// Cursor position in physical pixels.
        pos: Vec2,
        /// Whether the pan (left) button is held.
        held: bool,
    },
    /// A button went up at `pos`.
    Release {
        /// Cursor position in physical pixels.
        pos: Vec2,
        /// Which button.
        button: MouseButton,
    },
    /// Wheel motion along one axis.
    Wheel {
        /// Signed wheel units (120 per notch).
        delta: f32,
        /// Axis of the motion.
        axis: ScrollAxis,
        /// Whether ctrl was held (fine adjustment).
        ctrl: bool,
    },
}

/// Tracks cursor, button and modifier state between raw events.
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    cursor: Vec2,
    left_held: bool,
    ctrl_held: bool,
}

impl InputProcessor {
    /// Create a processor with no buttons or modifiers held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the left button is held.
    #[must_use]
    pub fn left_held(&self) -> bool {
        self.left_held
    }

    /// Whether ctrl is held.
    #[must_use]
    pub fn ctrl_held(&self) -> bool {
        self.ctrl_held
    }

    /// Forget held buttons, e.g. when the window loses focus mid-drag and
    /// the real release will never arrive. Returns the synthetic release
    /// of the pan button if one was held.
    pub fn release_buttons(&mut self) -> Option<NavInput> {
        if !std::mem::take(&mut self.left_held) {
            return None;
        }
        Some(NavInput::Release {
            pos: self.cursor,
            button: MouseButton::Left,
        })
    }

    /// Process a raw input event and return the controller input it maps
    /// to, if any.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavInput> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                Some(NavInput::Move {
                    pos: self.cursor,
                    held: self.left_held,
                })
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.left_held = pressed;
                }
                let pos = self.cursor;
                Some(if pressed {
                    NavInput::Press { pos, button }
                } else {
                    NavInput::Release { pos, button }
                })
            }
            InputEvent::Scroll { dx, dy } => self.wheel(dx, dy),
            InputEvent::ModifiersChanged { ctrl } => {
                self.ctrl_held = ctrl;
                None
            }
            InputEvent::FocusLost => {
                self.ctrl_held = false;
                self.release_buttons()
            }
        }
    }

    /// Vertical motion wins when a gesture reports both axes.
    fn wheel(&self, dx: f32, dy: f32) -> Option<NavInput> {
        let (delta, axis) = if dy != 0.0 {
            (dy, ScrollAxis::Vertical)
        } else if dx != 0.0 {
            (dx, ScrollAxis::Horizontal)
        } else {
            return None;
        };
        Some(NavInput::Wheel {
            delta,
            axis,
            ctrl: self.ctrl_held,
        })
    }
}
