//! Standalone navigable window backed by winit and wgpu.
//!
//! The window hosts a [`Viewport`] drawing a world-space grid. Drag with
//! the left button to pan (the view keeps gliding after release), turn
//! the wheel to zoom, hold ctrl (command on macOS) for finer zoom steps.
//!
//! ```no_run
//! # use glidecam::Viewer;
//! Viewer::builder()
//!     .with_title("Grid")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Duration};

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorIcon, Window, WindowId},
};

use crate::{
    camera::CursorShape,
    error::GlideError,
    gpu::render_context::RenderContext,
    host::RenderHost,
    options::Options,
    renderer::GridRenderer,
    InputEvent, MouseButton, Viewport,
};

/// Wheel units reported per line of `LineDelta` scrolling.
const WHEEL_UNITS_PER_LINE: f32 = 120.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Glidecam", default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Glidecam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window with a navigable grid.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), GlideError> {
        let event_loop =
            EventLoop::new().map_err(|e| GlideError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let now = Instant::now();
        let fps_interval =
            Duration::from_millis(self.options.display.fps_log_interval_ms);
        let mut app = ViewerApp {
            host: None,
            viewport: None,
            options: self.options,
            title: self.title,
            epoch: now,
            next_tick: None,
            fps_interval,
            next_fps_sample: now + fps_interval,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GlideError::Viewer(e.to_string()))
    }
}

// ── Host ─────────────────────────────────────────────────────────────────

/// [`RenderHost`] over a winit window. The periodic tick is realised by the
/// event loop waking at `ControlFlow::WaitUntil` deadlines.
struct WinitHost {
    window: Arc<Window>,
    tick_interval: Option<Duration>,
}

impl RenderHost for WinitHost {
    fn start_ticking(&mut self, interval: Duration) {
        self.tick_interval = Some(interval);
    }

    fn stop_ticking(&mut self) {
        self.tick_interval = None;
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        let icon = match cursor {
            CursorShape::OpenHand => CursorIcon::Grab,
            CursorShape::ClosedHand => CursorIcon::Grabbing,
        };
        self.window.set_cursor(icon);
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    host: Option<WinitHost>,
    viewport: Option<Viewport<GridRenderer>>,
    options: Options,
    title: String,
    /// Origin of the seconds timeline handed to the controller.
    epoch: Instant,
    next_tick: Option<Instant>,
    fps_interval: Duration,
    next_fps_sample: Instant,
}

impl ViewerApp {
    fn seconds(&self, at: Instant) -> f64 {
        at.saturating_duration_since(self.epoch).as_secs_f64()
    }

    /// Create the window, GPU context and viewport.
    fn create_viewport(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(WinitHost, Viewport<GridRenderer>), GlideError> {
        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768));
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| GlideError::Viewer(e.to_string()))?;
        let window = Arc::new(window);

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));
        let context =
            pollster::block_on(RenderContext::new(window.clone(), size))?;
        let renderer = GridRenderer::new(context, &self.options.display);
        let mut viewport = Viewport::new(&self.options, renderer, size)?;

        let mut host = WinitHost {
            window,
            tick_interval: None,
        };
        viewport.init(&mut host)?;
        Ok((host, viewport))
    }

    fn forward(&mut self, event: InputEvent) {
        let time = self.seconds(Instant::now());
        if let (Some(host), Some(viewport)) =
            (&mut self.host, &mut self.viewport)
        {
            let _ = viewport.handle_input(host, event, time);
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if let (Some(host), Some(viewport)) =
            (&mut self.host, &mut self.viewport)
        {
            if let Err(e) = viewport.close(host) {
                log::error!("failed to release renderer: {e}");
            }
        }
        event_loop.exit();
    }
}

/// Convert winit scroll deltas to wheel units (120 per notch).
fn wheel_units(delta: MouseScrollDelta) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            (x * WHEEL_UNITS_PER_LINE, y * WHEEL_UNITS_PER_LINE)
        }
        MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewport.is_some() {
            return;
        }

        match self.create_viewport(event_loop) {
            Ok((host, viewport)) => {
                self.host = Some(host);
                self.viewport = Some(viewport);
            }
            Err(e) => {
                log::error!("Failed to initialize viewer: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.close(event_loop);
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let (Some(host), Some(viewport)) =
                    (&mut self.host, &mut self.viewport)
                {
                    if let Err(e) =
                        viewport.resize(host, size.width, size.height)
                    {
                        // Minimized windows report a zero height
                        log::warn!("resize ignored: {e}");
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(viewport) = &mut self.viewport {
                    if let Err(e) = viewport.paint() {
                        log::error!("render error: {e}");
                    }
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = wheel_units(delta);
                self.forward(InputEvent::Scroll { dx, dy });
            }

            WindowEvent::Focused(false) => {
                self.forward(InputEvent::FocusLost);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                let ctrl = if cfg!(target_os = "macos") {
                    state.super_key()
                } else {
                    state.control_key()
                };
                self.forward(InputEvent::ModifiersChanged { ctrl });
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let time = self.seconds(now);
        let (Some(host), Some(viewport)) = (&mut self.host, &mut self.viewport)
        else {
            return;
        };

        match host.tick_interval {
            Some(interval) => {
                let due = *self.next_tick.get_or_insert(now + interval);
                if now >= due {
                    viewport.tick(host, time);
                    self.next_tick = host.tick_interval.map(|i| now + i);
                }
            }
            None => self.next_tick = None,
        }

        let show_fps = viewport.display().show_fps;
        if show_fps && now >= self.next_fps_sample {
            let _ = viewport.sample_frames();
            self.next_fps_sample = now + self.fps_interval;
        }

        let fps_deadline = show_fps.then_some(self.next_fps_sample);
        let deadline = match (self.next_tick, fps_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        event_loop.set_control_flow(
            deadline.map_or(ControlFlow::Wait, ControlFlow::WaitUntil),
        );
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;

    use super::*;

    #[test]
    fn line_scroll_is_scaled_to_notches() {
        assert_eq!(
            wheel_units(MouseScrollDelta::LineDelta(0.0, 1.0)),
            (0.0, 120.0)
        );
        assert_eq!(
            wheel_units(MouseScrollDelta::LineDelta(-0.5, 0.0)),
            (-60.0, 0.0)
        );
    }

    #[test]
    fn pixel_scroll_passes_through() {
        assert_eq!(
            wheel_units(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                3.0, -40.0
            ))),
            (3.0, -40.0)
        );
    }
}
