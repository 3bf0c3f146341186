use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Background, grid and diagnostics settings.
pub struct DisplayOptions {
    /// Background clear color (RGBA).
    #[schemars(skip)]
    pub clear_color: [f32; 4],
    /// Grid line color (RGBA).
    #[schemars(skip)]
    pub grid_color: [f32; 4],
    /// Spacing between grid lines in world units.
    #[schemars(title = "Grid Spacing", range(min = 0.01, max = 1000.0))]
    pub grid_spacing: f32,
    /// Log the measured frame rate periodically.
    #[schemars(title = "Log FPS")]
    pub show_fps: bool,
    /// Frame rate sampling period in milliseconds.
    #[schemars(skip)]
    pub fps_log_interval_ms: u64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            clear_color: [1.0, 1.0, 1.0, 1.0],
            grid_color: [0.75, 0.75, 0.8, 1.0],
            grid_spacing: 1.0,
            show_fps: false,
            fps_log_interval_ms: 500,
        }
    }
}
