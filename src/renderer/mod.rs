//! Renderers the demo viewer can drive through
//! [`Renderer`](crate::host::Renderer).

/// World-space grid on a cleared background.
pub mod grid;

pub use grid::GridRenderer;
