use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Pan inertia and wheel zoom tuning.
pub struct NavigationOptions {
    /// Time constant of the exponential pan decay, in seconds.
    #[schemars(
        title = "Glide Decay",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub decay_time: f64,
    /// Squared speed (pixels²/s²) below which a glide stops.
    #[schemars(
        title = "Stop Threshold",
        range(min = 0.0, max = 10000.0),
        extend("step" = 10.0)
    )]
    pub stop_speed_sq: f32,
    /// Fractional height change per wheel notch.
    #[schemars(
        title = "Zoom Speed",
        range(min = 0.01, max = 0.5),
        extend("step" = 0.01)
    )]
    pub zoom_speed: f32,
    /// Fractional height change per wheel notch while ctrl is held.
    #[schemars(
        title = "Fine Zoom Speed",
        range(min = 0.01, max = 0.5),
        extend("step" = 0.01)
    )]
    pub fine_zoom_speed: f32,
    /// Wheel delta units in one notch.
    #[schemars(skip)]
    pub wheel_notch: f32,
    /// Requested period of the glide animation callback, in milliseconds.
    #[schemars(skip)]
    pub tick_interval_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            decay_time: 0.1,
            stop_speed_sq: 100.0,
            zoom_speed: 0.2,
            fine_zoom_speed: 0.05,
            wheel_notch: 120.0,
            tick_interval_ms: 16,
        }
    }
}
