//! A navigable viewport: camera, controller, renderer and frame clock
//! wired to a [`RenderHost`].
//!
//! The host owns the window and event loop and forwards lifecycle and
//! input callbacks here; the viewport routes them through the
//! [`InteractionController`] and applies the resulting effects back to the
//! host.

use crate::camera::{Camera2d, CursorShape, InteractionController, Response};
use crate::error::GlideError;
use crate::host::{apply_effects, CurrentContext, RenderHost, Renderer};
use crate::input::{InputEvent, InputProcessor, NavInput};
use crate::options::{DisplayOptions, Options};
use crate::util::frame_timing::{FrameClock, FrameSample};

/// Camera, controller and renderer for one on-screen viewport.
pub struct Viewport<R: Renderer> {
    camera: Camera2d,
    controller: InteractionController,
    input: InputProcessor,
    renderer: R,
    clock: FrameClock,
    display: DisplayOptions,
    closed: bool,
}

impl<R: Renderer> Viewport<R> {
    /// Create a viewport of `size` physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Precondition`] if the initial camera or the
    /// navigation options are unusable (e.g. a zero-height window).
    pub fn new(
        options: &Options,
        renderer: R,
        size: (u32, u32),
    ) -> Result<Self, GlideError> {
        let (width, height) = size;
        let mut camera = Camera2d::from_options(&options.camera, height as f32);
        if height > 0 {
            camera.aspect = width as f32 / height as f32;
        }
        let controller =
            InteractionController::new(&camera, options.navigation.clone())?;

        Ok(Self {
            camera,
            controller,
            input: InputProcessor::new(),
            renderer,
            clock: FrameClock::new(),
            display: options.display.clone(),
            closed: false,
        })
    }

    /// The camera being navigated.
    #[must_use]
    pub fn camera(&self) -> &Camera2d {
        &self.camera
    }

    /// Mutable camera access for programmatic moves.
    pub fn camera_mut(&mut self) -> &mut Camera2d {
        &mut self.camera
    }

    /// The interaction controller.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer access.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Display settings this viewport was created with.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Whether [`close`](Self::close) has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Rendering context is ready: create renderer resources and show the
    /// at-rest cursor.
    ///
    /// # Errors
    ///
    /// Propagates renderer initialization failures.
    pub fn init<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<(), GlideError> {
        self.renderer.init(&self.camera)?;
        host.set_cursor(CursorShape::OpenHand);
        host.request_redraw();
        Ok(())
    }

    /// Viewport resized.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::InvalidViewport`] for a zero height; camera
    /// and renderer are left as they were.
    pub fn resize<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
        width: u32,
        height: u32,
    ) -> Result<(), GlideError> {
        let response =
            self.controller.on_resize(&mut self.camera, width, height)?;
        self.renderer.resize(width, height);
        self.apply(host, &response);
        Ok(())
    }

    /// Feed a raw input event observed at `time` seconds. Returns whether
    /// the viewport consumed it.
    pub fn handle_input<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: InputEvent,
        time: f64,
    ) -> bool {
        match self.input.handle_event(event) {
            Some(nav) => self.dispatch(host, nav, time),
            None => false,
        }
    }

    /// Route one controller input. Returns whether it was consumed.
    pub fn dispatch<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
        nav: NavInput,
        time: f64,
    ) -> bool {
        if self.closed {
            return false;
        }
        let response = match nav {
            NavInput::Press { pos, button } => {
                self.controller.on_press(pos, button, time)
            }
            NavInput::Move { pos, held } => {
                self.controller.on_move(&mut self.camera, pos, time, held)
            }
            NavInput::Release { pos, button } => {
                self.controller.on_release(pos, button, time)
            }
            NavInput::Wheel { delta, axis, ctrl } => {
                self.controller.on_wheel(&mut self.camera, delta, axis, ctrl)
            }
        };
        self.apply(host, &response);
        response.consumed
    }

    /// Periodic animation callback at `now` seconds.
    pub fn tick<H: RenderHost + ?Sized>(&mut self, host: &mut H, now: f64) {
        let response = self.controller.tick(&mut self.camera, now);
        self.apply(host, &response);
    }

    /// Paint one frame.
    ///
    /// # Errors
    ///
    /// Propagates renderer draw failures.
    pub fn paint(&mut self) -> Result<(), GlideError> {
        if self.closed {
            return Ok(());
        }
        self.clock.tick();
        self.renderer.draw(&self.camera)
    }

    /// Close the current frame-rate window, logging the smoothed rate when
    /// FPS display is enabled.
    pub fn sample_frames(&mut self) -> FrameSample {
        let sample = self.clock.sample();
        if self.display.show_fps && sample.frames > 0 {
            log::info!(
                "{:.1} FPS ({} frames in {:.0?})",
                self.clock.fps(),
                sample.frames,
                sample.elapsed
            );
        }
        sample
    }

    /// Smoothed frame rate over recent samples.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Viewport closing: stop any glide and release renderer resources with
    /// the context current. Later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Propagates renderer teardown failures. The context is released
    /// either way.
    pub fn close<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<(), GlideError> {
        if self.closed {
            return Ok(());
        }
        let response = self.controller.on_close();
        self.apply(host, &response);
        self.closed = true;

        let _current = CurrentContext::acquire(host);
        self.renderer.destroy()
    }

    fn apply<H: RenderHost + ?Sized>(&self, host: &mut H, response: &Response) {
        apply_effects(host, &response.effects, self.controller.tick_interval());
    }
}
