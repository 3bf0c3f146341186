// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Inertial pan/zoom camera control for real-time 2D viewports.
//!
//! Glidecam turns pointer drags into camera pans that keep gliding after
//! release, and wheel turns into multiplicative zoom. It owns none of the
//! window, timer or GPU plumbing: a host forwards events and applies the
//! effects the controller asks for.
//!
//! # Key entry points
//!
//! - [`camera::InteractionController`] - the pan/zoom state machine
//! - [`camera::Camera2d`] - the orthographic camera it drives
//! - [`viewport::Viewport`] - camera + controller + renderer wiring
//! - [`host::RenderHost`] / [`host::Renderer`] - the host and drawing seams
//! - [`options::Options`] - runtime configuration (navigation, camera,
//!   display)
//!
//! # Architecture
//!
//! Everything runs on the thread that owns the rendering context. Input
//! handlers and the glide tick return [`camera::HostEffect`] lists (redraw,
//! start/stop ticking, cursor changes) instead of calling into the host,
//! so the state machine is testable without an event loop. With the
//! `viewer` feature, [`viewer::Viewer`] hosts a viewport in a winit window
//! drawn with wgpu.

pub mod camera;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gpu;
pub mod host;
pub mod input;
pub mod options;
#[cfg(feature = "viewer")]
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod viewport;

pub use camera::{Camera2d, InteractionController};
pub use error::GlideError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
pub use viewport::Viewport;
