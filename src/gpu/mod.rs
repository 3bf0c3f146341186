//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization for the demo viewer.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
