/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// tracks cursor, button and modifier state and turns them into
/// [`NavInput`](super::NavInput) values for the controller.
///
/// # Example
///
/// ```ignore
/// let nav = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel motion in wheel units (120 per notch, positive = away
    /// from the user).
    Scroll {
        /// Horizontal wheel motion.
        dx: f32,
        /// Vertical wheel motion.
        dy: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the control (command on macOS) key is held.
        ctrl: bool,
    },
    /// The window lost keyboard/pointer focus. Buttons held at that point
    /// may never report their release.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back/forward or any extra button.
    Other,
}

/// Orientation of a wheel gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Ordinary wheel rotation.
    Vertical,
    /// Tilt-wheel or sideways trackpad motion.
    Horizontal,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}
