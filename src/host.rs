//! Seams to the windowing host and the renderer.
//!
//! The controller never touches a window, timer or GPU. A host implements
//! [`RenderHost`] to carry out [`HostEffect`]s, and a drawing backend
//! implements [`Renderer`].

use std::time::Duration;

use crate::camera::{Camera2d, CursorShape, HostEffect};
use crate::error::GlideError;

/// Services a windowing toolkit provides to a viewport.
pub trait RenderHost {
    /// Start calling the viewport's `tick` roughly every `interval`.
    fn start_ticking(&mut self, interval: Duration);

    /// Stop the periodic tick.
    fn stop_ticking(&mut self);

    /// Schedule a repaint. Repeated requests before the paint may be
    /// coalesced.
    fn request_redraw(&mut self);

    /// Change the pointer cursor shown over the viewport.
    fn set_cursor(&mut self, cursor: CursorShape);

    /// Make the rendering context current on this thread.
    fn make_current(&mut self) {}

    /// Release the rendering context made current by
    /// [`make_current`](Self::make_current).
    fn done_current(&mut self) {}
}

/// Draws the scene through the camera.
pub trait Renderer {
    /// Create resources once the rendering context exists.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Render`] if GPU resources cannot be created.
    fn init(&mut self, camera: &Camera2d) -> Result<(), GlideError>;

    /// Adapt size-dependent resources.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Render`] if the frame cannot be produced.
    fn draw(&mut self, camera: &Camera2d) -> Result<(), GlideError>;

    /// Release resources. Called once, with the context current.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Render`] if teardown fails.
    fn destroy(&mut self) -> Result<(), GlideError>;
}

/// Scoped [`RenderHost::make_current`]: the context is released when the
/// guard drops, including on early return.
pub struct CurrentContext<'a, H: RenderHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: RenderHost + ?Sized> CurrentContext<'a, H> {
    /// Make the host's context current until the guard is dropped.
    pub fn acquire(host: &'a mut H) -> Self {
        host.make_current();
        Self { host }
    }
}

impl<H: RenderHost + ?Sized> Drop for CurrentContext<'_, H> {
    fn drop(&mut self) {
        self.host.done_current();
    }
}

/// Carry out controller effects on the host, in order.
pub fn apply_effects<H: RenderHost + ?Sized>(
    host: &mut H,
    effects: &[HostEffect],
    tick_interval: Duration,
) {
    for effect in effects {
        match *effect {
            HostEffect::StartTicking => host.start_ticking(tick_interval),
            HostEffect::StopTicking => host.stop_ticking(),
            HostEffect::Redraw => host.request_redraw(),
            HostEffect::SetCursor(cursor) => host.set_cursor(cursor),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::recording::{HostCall, RecordingHost};
    use super::*;

    #[test]
    fn effects_map_to_host_calls_in_order() {
        let mut host = RecordingHost::default();
        let interval = Duration::from_millis(16);
        apply_effects(
            &mut host,
            &[
                HostEffect::SetCursor(CursorShape::OpenHand),
                HostEffect::StartTicking,
                HostEffect::Redraw,
                HostEffect::StopTicking,
            ],
            interval,
        );
        assert_eq!(
            host.calls,
            vec![
                HostCall::SetCursor(CursorShape::OpenHand),
                HostCall::StartTicking(interval),
                HostCall::RequestRedraw,
                HostCall::StopTicking,
            ]
        );
        assert!(!host.ticking);
    }

    #[test]
    fn current_context_is_released_on_drop() {
        let mut host = RecordingHost::default();
        {
            let _guard = CurrentContext::acquire(&mut host);
        }
        assert_eq!(
            host.calls,
            vec![HostCall::MakeCurrent, HostCall::DoneCurrent]
        );
    }
}
