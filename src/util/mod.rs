//! Shared utilities for the viewport.
//!
//! Helpers for frame timing and diagnostic frame-rate accounting.

/// Frame counting and FPS sampling.
pub mod frame_timing;
