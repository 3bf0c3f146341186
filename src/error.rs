//! Crate-level error types.

use std::fmt;

/// Errors produced by the glidecam crate.
#[derive(Debug)]
pub enum GlideError {
    /// Viewport resize with a zero height (undefined aspect ratio).
    InvalidViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// A component was constructed against unusable inputs.
    Precondition(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Renderer draw or teardown failure.
    Render(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::Precondition(msg) => {
                write!(f, "precondition failed: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GlideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlideError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
