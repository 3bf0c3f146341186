//! Camera system for 2D viewport navigation.
//!
//! Provides an orthographic camera, the pan state machine, the inertial
//! glide curve, and the interaction controller tying them to pointer input.

/// Pointer-driven pan/zoom controller.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Exponential glide curve.
pub mod inertia;
/// Pan states, transitions and host effects.
pub mod state;

pub use controller::{InteractionController, Response};
pub use self::core::{Camera2d, CameraUniform};
pub use state::{CursorShape, Effects, HostEffect, PanState};
