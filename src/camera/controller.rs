//! Pointer-driven pan/zoom controller with post-release inertia.
//!
//! The controller is a plain state machine. It never talks to a window or
//! timer directly: every handler mutates the [`Camera2d`] it is given and
//! returns a [`Response`] listing the [`HostEffect`]s the host must apply
//! (redraw, start/stop the animation tick, cursor feedback).
//!
//! Screen deltas are converted to world deltas by the camera's pixel size
//! with the X component negated: dragging right moves the camera left so
//! the content follows the pointer. Velocities are kept in raw screen
//! pixels per second.

use std::time::Duration;

use glam::Vec2;

use super::core::Camera2d;
use super::inertia::InertiaDecay;
use super::state::{Effects, HostEffect, PanState, Trigger};
use crate::error::GlideError;
use crate::input::{MouseButton, ScrollAxis};
use crate::options::NavigationOptions;

/// Button that grabs the view.
const PAN_BUTTON: MouseButton = MouseButton::Left;

/// Outcome of a controller call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Whether the controller acted on the input. Unconsumed events may be
    /// offered to other handlers by the host.
    pub consumed: bool,
    /// Effects the host must apply, in order.
    pub effects: Effects,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(effects: Effects) -> Self {
        Self {
            consumed: true,
            effects,
        }
    }
}

/// Converts pointer input into camera pan/zoom and runs the glide
/// animation after a drag is released.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: PanState,
    last_pointer_pos: Vec2,
    last_event_time: f64,
    pan_velocity: Vec2,
    inertia: InertiaDecay,
    options: NavigationOptions,
}

impl InteractionController {
    /// Create a controller for `camera`.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Precondition`] if the camera cannot convert
    /// pixels to world units (non-positive or non-finite height or
    /// resolution) or if the navigation options are out of range.
    pub fn new(
        camera: &Camera2d,
        options: NavigationOptions,
    ) -> Result<Self, GlideError> {
        if !(camera.height().is_finite() && camera.height() > 0.0) {
            return Err(GlideError::Precondition(format!(
                "camera height must be positive, got {}",
                camera.height()
            )));
        }
        if !(camera.resolution.is_finite() && camera.resolution > 0.0) {
            return Err(GlideError::Precondition(format!(
                "camera resolution must be positive, got {}",
                camera.resolution
            )));
        }
        if !(options.decay_time.is_finite() && options.decay_time > 0.0) {
            return Err(GlideError::Precondition(format!(
                "decay time must be positive, got {}",
                options.decay_time
            )));
        }
        if !(options.stop_speed_sq.is_finite() && options.stop_speed_sq >= 0.0)
        {
            return Err(GlideError::Precondition(format!(
                "stop threshold must be non-negative, got {}",
                options.stop_speed_sq
            )));
        }
        if options.wheel_notch <= 0.0 {
            return Err(GlideError::Precondition(format!(
                "wheel notch must be positive, got {}",
                options.wheel_notch
            )));
        }

        Ok(Self {
            state: PanState::Idle,
            last_pointer_pos: Vec2::ZERO,
            last_event_time: 0.0,
            pan_velocity: Vec2::ZERO,
            inertia: InertiaDecay::new(Vec2::ZERO, 0.0, options.decay_time),
            options,
        })
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> PanState {
        self.state
    }

    /// Last measured or decayed pan velocity in pixels/second.
    #[must_use]
    pub fn pan_velocity(&self) -> Vec2 {
        self.pan_velocity
    }

    /// Velocity captured when the last drag was released.
    #[must_use]
    pub fn inertia_initial_velocity(&self) -> Vec2 {
        self.inertia.initial_velocity
    }

    /// Time the current (or last) decay curve started.
    #[must_use]
    pub fn inertia_start_time(&self) -> f64 {
        self.inertia.start_time
    }

    /// Last pointer position seen during a drag.
    #[must_use]
    pub fn last_pointer_pos(&self) -> Vec2 {
        self.last_pointer_pos
    }

    /// Time of the last processed event or tick.
    #[must_use]
    pub fn last_event_time(&self) -> f64 {
        self.last_event_time
    }

    /// Navigation tuning in effect.
    #[must_use]
    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    /// Suggested period for the host's animation callback.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.options.tick_interval_ms)
    }

    /// Pointer button pressed: cancel any glide and start a drag.
    pub fn on_press(
        &mut self,
        pos: Vec2,
        button: MouseButton,
        time: f64,
    ) -> Response {
        if button != PAN_BUTTON {
            return Response::ignored();
        }

        let transition = self.state.transition(Trigger::Press);
        if self.state != transition.next {
            log::debug!("glide cancelled by press at {pos}");
        }
        self.state = transition.next;
        self.last_pointer_pos = pos;
        self.last_event_time = time;
        self.pan_velocity = Vec2::ZERO;
        Response::consumed(transition.effects)
    }

    /// Pointer moved. Pans the camera only while the pan button is held.
    pub fn on_move(
        &mut self,
        camera: &mut Camera2d,
        pos: Vec2,
        time: f64,
        button_held: bool,
    ) -> Response {
        if !button_held {
            return Response::ignored();
        }

        let moved = pos - self.last_pointer_pos;
        camera.translate_xy(screen_to_world(moved, camera.pixel_size()));

        // Keep the previous velocity on a stalled or backwards clock
        let elapsed = time - self.last_event_time;
        if elapsed > 0.0 {
            self.pan_velocity = moved / elapsed as f32;
            self.last_event_time = time;
        }
        self.last_pointer_pos = pos;

        Response::consumed(vec![HostEffect::Redraw])
    }

    /// Pointer button released: hand the measured velocity to the glide.
    pub fn on_release(
        &mut self,
        pos: Vec2,
        button: MouseButton,
        time: f64,
    ) -> Response {
        if button != PAN_BUTTON {
            return Response::ignored();
        }

        // The curve starts at the last move sample, where the velocity was
        // measured, not at the release event itself.
        self.inertia = InertiaDecay::new(
            self.pan_velocity,
            self.last_event_time,
            self.options.decay_time,
        );
        let moving = self.pan_velocity != Vec2::ZERO;
        let transition = self.state.transition(Trigger::Release { moving });
        if transition.next.is_animating() {
            log::debug!(
                "glide started at {pos} (t={time:.3}) with {} px/s",
                self.pan_velocity
            );
        }
        self.state = transition.next;
        Response::consumed(transition.effects)
    }

    /// Wheel turned. Vertical motion zooms the camera multiplicatively:
    /// each notch scales the height by `1 - speed`, so notches compound.
    pub fn on_wheel(
        &self,
        camera: &mut Camera2d,
        delta: f32,
        axis: ScrollAxis,
        ctrl_held: bool,
    ) -> Response {
        if axis != ScrollAxis::Vertical {
            return Response::ignored();
        }

        let speed = if ctrl_held {
            self.options.fine_zoom_speed
        } else {
            self.options.zoom_speed
        };
        let factor = 1.0 - speed * delta / self.options.wheel_notch;
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!("ignoring wheel delta {delta}: zoom factor {factor}");
            return Response::consumed(Effects::new());
        }

        camera.set_height(camera.height() * factor);
        Response::consumed(vec![HostEffect::Redraw])
    }

    /// Advance the glide to `now`. Does nothing while idle.
    pub fn tick(&mut self, camera: &mut Camera2d, now: f64) -> Response {
        if !self.state.is_animating() {
            return Response::ignored();
        }

        let dt = now - self.last_event_time;
        if dt <= 0.0 {
            return Response::consumed(Effects::new());
        }

        self.pan_velocity = self.inertia.velocity_at(now);
        let moved = self.pan_velocity * dt as f32;
        camera.translate_xy(screen_to_world(moved, camera.pixel_size()));
        self.last_event_time = now;

        let mut effects = vec![HostEffect::Redraw];
        if self.pan_velocity.length_squared() < self.options.stop_speed_sq {
            let transition = self.state.transition(Trigger::Settled);
            log::debug!("glide settled at t={now:.3}");
            self.state = transition.next;
            effects.extend(transition.effects);
        }
        Response::consumed(effects)
    }

    /// Viewport resized: update the camera's aspect and resolution.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::InvalidViewport`] for a zero height; the
    /// camera is left untouched.
    #[allow(clippy::unused_self)]
    pub fn on_resize(
        &self,
        camera: &mut Camera2d,
        width: u32,
        height: u32,
    ) -> Result<Response, GlideError> {
        if height == 0 {
            return Err(GlideError::InvalidViewport { width, height });
        }
        camera.aspect = width as f32 / height as f32;
        camera.resolution = height as f32;
        Ok(Response::consumed(vec![HostEffect::Redraw]))
    }

    /// Viewport closing: stop any glide.
    pub fn on_close(&mut self) -> Response {
        let transition = self.state.transition(Trigger::Close);
        self.state = transition.next;
        Response::consumed(transition.effects)
    }
}

/// Scale a screen-pixel delta into world units, flipping X.
fn screen_to_world(pixels: Vec2, pixel_size: f32) -> Vec2 {
    let world = pixels * pixel_size;
    Vec2::new(-world.x, world.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::state::CursorShape;

    const EPS: f32 = 1e-3;

    /// Camera where one screen pixel is `pixel_size` world units.
    fn camera(pixel_size: f32) -> Camera2d {
        Camera2d::new(600.0 * pixel_size, 600.0)
    }

    fn controller(camera: &Camera2d) -> InteractionController {
        InteractionController::new(camera, NavigationOptions::default())
            .unwrap()
    }

    /// Drag from (0,0) to `(dx, 0)` over 10ms and release.
    fn flick(
        ctrl: &mut InteractionController,
        cam: &mut Camera2d,
        dx: f32,
    ) {
        let _ = ctrl.on_press(Vec2::ZERO, MouseButton::Left, 0.0);
        let _ = ctrl.on_move(cam, Vec2::new(dx, 0.0), 0.01, true);
        let _ = ctrl.on_release(Vec2::new(dx, 0.0), MouseButton::Left, 0.01);
    }

    #[test]
    fn press_always_resets_to_idle_with_zero_velocity() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);

        let response = ctrl.on_press(Vec2::ZERO, MouseButton::Left, 0.0);
        assert!(response.consumed);
        assert_eq!(ctrl.state(), PanState::Idle);
        assert_eq!(ctrl.pan_velocity(), Vec2::ZERO);

        flick(&mut ctrl, &mut cam, 10.0);
        assert_eq!(ctrl.state(), PanState::PanningInertially);

        let response =
            ctrl.on_press(Vec2::new(5.0, 5.0), MouseButton::Left, 1.0);
        assert_eq!(ctrl.state(), PanState::Idle);
        assert_eq!(ctrl.pan_velocity(), Vec2::ZERO);
        assert_eq!(ctrl.last_pointer_pos(), Vec2::new(5.0, 5.0));
        assert_eq!(ctrl.last_event_time(), 1.0);
        assert!(response.effects.contains(&HostEffect::StopTicking));
    }

    #[test]
    fn press_emits_exactly_one_cursor_change_and_no_camera_motion() {
        let cam = camera(1.0);
        let mut ctrl = controller(&cam);
        let before = cam.clone();

        let response =
            ctrl.on_press(Vec2::new(3.0, 4.0), MouseButton::Left, 0.0);
        let cursor_changes = response
            .effects
            .iter()
            .filter(|e| matches!(e, HostEffect::SetCursor(_)))
            .count();
        assert_eq!(cursor_changes, 1);
        assert_eq!(
            response.effects.last(),
            Some(&HostEffect::SetCursor(CursorShape::ClosedHand))
        );
        assert_eq!(cam, before);
    }

    #[test]
    fn other_buttons_are_not_consumed() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);

        let response = ctrl.on_press(Vec2::ZERO, MouseButton::Right, 1.0);
        assert!(!response.consumed);
        assert_eq!(ctrl.state(), PanState::PanningInertially);

        let response = ctrl.on_release(Vec2::ZERO, MouseButton::Middle, 1.0);
        assert!(!response.consumed);
        assert!(response.effects.is_empty());
    }

    #[test]
    fn drag_right_moves_camera_left() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);

        let _ = ctrl.on_press(Vec2::new(100.0, 100.0), MouseButton::Left, 0.0);
        let response =
            ctrl.on_move(&mut cam, Vec2::new(110.0, 100.0), 0.1, true);

        assert!(response.consumed);
        assert_eq!(response.effects, vec![HostEffect::Redraw]);
        assert!((cam.position.x + 10.0).abs() < EPS);
        assert_eq!(cam.position.y, 0.0);
        assert!((ctrl.pan_velocity().x - 100.0).abs() < EPS);
        assert_eq!(ctrl.pan_velocity().y, 0.0);
    }

    #[test]
    fn move_without_button_is_ignored() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);

        let response =
            ctrl.on_move(&mut cam, Vec2::new(50.0, 50.0), 0.1, false);
        assert!(!response.consumed);
        assert!(response.effects.is_empty());
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(ctrl.last_pointer_pos(), Vec2::ZERO);
    }

    #[test]
    fn zero_elapsed_move_keeps_previous_velocity() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);

        let _ = ctrl.on_press(Vec2::ZERO, MouseButton::Left, 0.0);
        let _ = ctrl.on_move(&mut cam, Vec2::new(10.0, 0.0), 0.1, true);
        let velocity = ctrl.pan_velocity();

        let _ = ctrl.on_move(&mut cam, Vec2::new(20.0, 0.0), 0.1, true);
        assert_eq!(ctrl.pan_velocity(), velocity);
        // The position still follows the pointer
        assert!((cam.position.x + 20.0).abs() < EPS);
        assert_eq!(ctrl.last_pointer_pos(), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn vertical_drag_scales_by_pixel_size_without_flip() {
        let mut cam = camera(2.0);
        let mut ctrl = controller(&cam);

        let _ = ctrl.on_press(Vec2::ZERO, MouseButton::Left, 0.0);
        let _ = ctrl.on_move(&mut cam, Vec2::new(0.0, -50.0), 0.5, true);
        let response =
            ctrl.on_release(Vec2::new(0.0, -50.0), MouseButton::Left, 0.5);

        assert!((cam.position.y + 100.0).abs() < EPS);
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(ctrl.state(), PanState::PanningInertially);
        let initial = ctrl.inertia_initial_velocity();
        assert_eq!(initial.x, 0.0);
        assert!((initial.y + 100.0).abs() < EPS);
        assert!(response.effects.contains(&HostEffect::StartTicking));
        assert!(response
            .effects
            .contains(&HostEffect::SetCursor(CursorShape::OpenHand)));
    }

    #[test]
    fn decay_starts_at_last_move_not_release() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);

        let _ = ctrl.on_press(Vec2::ZERO, MouseButton::Left, 0.0);
        let _ = ctrl.on_move(&mut cam, Vec2::new(30.0, 0.0), 0.1, true);
        let _ = ctrl.on_release(Vec2::new(30.0, 0.0), MouseButton::Left, 5.0);

        assert_eq!(ctrl.inertia_start_time(), 0.1);
    }

    #[test]
    fn release_without_motion_does_not_glide() {
        let cam = camera(1.0);
        let mut ctrl = controller(&cam);

        let _ = ctrl.on_press(Vec2::ZERO, MouseButton::Left, 0.0);
        let response = ctrl.on_release(Vec2::ZERO, MouseButton::Left, 0.2);

        assert_eq!(ctrl.state(), PanState::Idle);
        assert_eq!(
            response.effects,
            vec![HostEffect::SetCursor(CursorShape::OpenHand)]
        );
    }

    #[test]
    fn wheel_zoom_compounds_and_does_not_round_trip() {
        let mut cam = camera(1.0);
        cam.set_height(10.0);
        let ctrl = controller(&cam);

        let response =
            ctrl.on_wheel(&mut cam, 120.0, ScrollAxis::Vertical, false);
        assert_eq!(response.effects, vec![HostEffect::Redraw]);
        assert!((cam.height() - 8.0).abs() < 1e-5);

        let _ = ctrl.on_wheel(&mut cam, -120.0, ScrollAxis::Vertical, false);
        // 0.8 * 1.2 = 0.96, not 1.0
        assert!((cam.height() - 9.6).abs() < 1e-5);

        let _ = ctrl.on_wheel(&mut cam, 120.0, ScrollAxis::Vertical, false);
        let _ = ctrl.on_wheel(&mut cam, 120.0, ScrollAxis::Vertical, false);
        // Two notches compound geometrically: 9.6 * 0.8 * 0.8
        assert!((cam.height() - 6.144).abs() < 1e-4);
    }

    #[test]
    fn ctrl_wheel_is_fine_zoom() {
        let mut cam = camera(1.0);
        cam.set_height(10.0);
        let ctrl = controller(&cam);

        let _ = ctrl.on_wheel(&mut cam, 120.0, ScrollAxis::Vertical, true);
        assert!((cam.height() - 9.5).abs() < 1e-5);
    }

    #[test]
    fn horizontal_wheel_is_ignored() {
        let mut cam = camera(1.0);
        let ctrl = controller(&cam);
        let before = cam.height();

        let response =
            ctrl.on_wheel(&mut cam, 120.0, ScrollAxis::Horizontal, false);
        assert!(!response.consumed);
        assert_eq!(cam.height(), before);
    }

    #[test]
    fn wheel_never_inverts_height() {
        let mut cam = camera(1.0);
        let ctrl = controller(&cam);
        let before = cam.height();

        // factor = 1 - 0.2 * 5 = 0
        let response =
            ctrl.on_wheel(&mut cam, 600.0, ScrollAxis::Vertical, false);
        assert!(response.consumed);
        assert!(response.effects.is_empty());
        assert_eq!(cam.height(), before);
    }

    #[test]
    fn wheel_does_not_disturb_glide() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);

        let _ = ctrl.on_wheel(&mut cam, 120.0, ScrollAxis::Vertical, false);
        assert_eq!(ctrl.state(), PanState::PanningInertially);
    }

    #[test]
    fn glide_decays_monotonically_and_settles_once() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);

        let initial = ctrl.inertia_initial_velocity();
        assert!((initial.x - 1000.0).abs() < 0.1);

        let mut previous_speed = initial.length();
        let mut previous_x = cam.position.x;
        let mut now = 0.01;
        let mut settled_ticks = 0;
        for _ in 0..1000 {
            now += 1.0 / 60.0;
            let response = ctrl.tick(&mut cam, now);
            assert!(response.consumed);
            assert!(response.effects.contains(&HostEffect::Redraw));

            let speed = ctrl.pan_velocity().length();
            assert!(speed < previous_speed);
            // Positive screen velocity drags the camera toward -X
            assert!(cam.position.x < previous_x);
            previous_speed = speed;
            previous_x = cam.position.x;

            let below = ctrl.pan_velocity().length_squared() < 100.0;
            if below {
                settled_ticks += 1;
                assert_eq!(ctrl.state(), PanState::Idle);
                assert!(response.effects.contains(&HostEffect::StopTicking));
                break;
            }
            assert_eq!(ctrl.state(), PanState::PanningInertially);
            assert!(!response.effects.contains(&HostEffect::StopTicking));
        }
        assert_eq!(settled_ticks, 1);

        // v = 1000 * exp(-t / 0.1) drops below 10 px/s after ~0.46s
        assert!(now > 0.01 + 0.45 && now < 0.01 + 0.49);
    }

    #[test]
    fn tick_moves_camera_by_velocity_times_dt() {
        let mut cam = camera(2.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);
        let start_x = cam.position.x;

        let now = 0.01 + 0.1;
        let _ = ctrl.tick(&mut cam, now);
        let expected_speed = 1000.0 * (-1.0f32).exp();
        assert!((ctrl.pan_velocity().x - expected_speed).abs() < 0.1);
        // delta = v * dt * pixel_size, flipped on X
        let expected_dx = -expected_speed * 0.1 * 2.0;
        assert!((cam.position.x - start_x - expected_dx).abs() < 0.05);
        assert_eq!(ctrl.last_event_time(), now);
    }

    #[test]
    fn stale_tick_is_skipped() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);
        let before = cam.clone();

        let response = ctrl.tick(&mut cam, 0.01);
        assert!(response.effects.is_empty());
        assert_eq!(cam, before);
        assert_eq!(ctrl.state(), PanState::PanningInertially);
    }

    #[test]
    fn press_during_glide_halts_drift() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);
        let _ = ctrl.tick(&mut cam, 0.05);

        let _ = ctrl.on_press(Vec2::new(10.0, 0.0), MouseButton::Left, 0.06);
        assert_eq!(ctrl.state(), PanState::Idle);

        let frozen = cam.clone();
        for step in 1..10 {
            let response = ctrl.tick(&mut cam, 0.06 + f64::from(step) * 0.016);
            assert!(!response.consumed);
            assert!(response.effects.is_empty());
        }
        assert_eq!(cam, frozen);
    }

    #[test]
    fn resize_updates_aspect_and_resolution() {
        let mut cam = camera(1.0);
        let ctrl = controller(&cam);

        let response = ctrl.on_resize(&mut cam, 800, 400).unwrap();
        assert!(response.consumed);
        assert_eq!(cam.aspect, 2.0);
        assert_eq!(cam.resolution, 400.0);
        assert_eq!(ctrl.state(), PanState::Idle);
    }

    #[test]
    fn zero_height_resize_is_rejected_without_mutation() {
        let mut cam = camera(1.0);
        cam.aspect = 1.5;
        let ctrl = controller(&cam);
        let before = cam.clone();

        let err = ctrl.on_resize(&mut cam, 800, 0).unwrap_err();
        assert!(matches!(
            err,
            GlideError::InvalidViewport {
                width: 800,
                height: 0
            }
        ));
        assert_eq!(cam, before);
    }

    #[test]
    fn close_stops_glide_without_touching_camera() {
        let mut cam = camera(1.0);
        let mut ctrl = controller(&cam);
        flick(&mut ctrl, &mut cam, 10.0);
        let before = cam.clone();

        let response = ctrl.on_close();
        assert_eq!(ctrl.state(), PanState::Idle);
        assert_eq!(response.effects, vec![HostEffect::StopTicking]);
        assert_eq!(cam, before);
    }

    #[test]
    fn construction_rejects_unusable_camera() {
        let cam = Camera2d::new(10.0, 0.0);
        let err = InteractionController::new(&cam, NavigationOptions::default())
            .unwrap_err();
        assert!(matches!(err, GlideError::Precondition(_)));

        let cam = Camera2d::new(f32::NAN, 600.0);
        assert!(
            InteractionController::new(&cam, NavigationOptions::default())
                .is_err()
        );
    }

    #[test]
    fn construction_rejects_bad_tuning() {
        let cam = camera(1.0);
        let options = NavigationOptions {
            decay_time: 0.0,
            ..NavigationOptions::default()
        };
        assert!(matches!(
            InteractionController::new(&cam, options),
            Err(GlideError::Precondition(_))
        ));

        let options = NavigationOptions {
            stop_speed_sq: -1.0,
            ..NavigationOptions::default()
        };
        assert!(InteractionController::new(&cam, options).is_err());
    }

    #[test]
    fn custom_decay_and_threshold_are_honoured() {
        let mut cam = camera(1.0);
        let options = NavigationOptions {
            decay_time: 1.0,
            stop_speed_sq: 1_000_000.0,
            ..NavigationOptions::default()
        };
        let mut ctrl = InteractionController::new(&cam, options).unwrap();
        flick(&mut ctrl, &mut cam, 10.0);

        // 1000 px/s is already at the threshold, so one tick settles it
        let response = ctrl.tick(&mut cam, 0.02);
        assert!(response.effects.contains(&HostEffect::StopTicking));
        assert_eq!(ctrl.state(), PanState::Idle);
    }
}
