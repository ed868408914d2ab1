use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
/// Initial pose of one camera, as a position and look-at/up pair.
pub struct CameraPreset {
    /// World-space position.
    #[schemars(title = "Position")]
    pub position: [f32; 3],
    /// Viewing direction (need not be unit length).
    #[schemars(title = "Look At")]
    pub lookat: [f32; 3],
    /// Up direction (need not be unit length or orthogonal to `lookat`).
    #[schemars(title = "Up")]
    pub up: [f32; 3],
}

impl CameraPreset {
    const fn looking_down_negative_z(position: [f32; 3]) -> Self {
        Self {
            position,
            lookat: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Cameras", inline)]
#[serde(default)]
/// Starting poses of the two cameras.
pub struct CameraOptions {
    /// Camera 1.
    pub first: CameraPreset,
    /// Camera 2.
    pub second: CameraPreset,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            first: CameraPreset::looking_down_negative_z([0.0, 1.0, 4.0]),
            second: CameraPreset::looking_down_negative_z([0.0, 0.0, 3.0]),
        }
    }
}
