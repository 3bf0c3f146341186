use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and projection depth range.
pub struct CameraOptions {
    /// Initial visible height in world units.
    #[schemars(title = "Initial Height", range(min = 0.1, max = 10000.0))]
    pub height: f32,
    /// Initial view center.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            height: 10.0,
            position: [0.0; 3],
            znear: -100.0,
            zfar: 100.0,
        }
    }
}
