use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExtrinsicsError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Step sizes and slider ranges for editing the active camera.
pub struct InputOptions {
    /// Position change per key press, in world units.
    #[schemars(title = "Position Step", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub position_step: f32,
    /// Position change per key press while the fast modifier is held.
    #[schemars(title = "Fast Position Step", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub position_step_fast: f32,
    /// Angle change per key press, in degrees.
    #[schemars(title = "Angle Step", range(min = 0.1, max = 45.0), extend("step" = 0.1))]
    pub angle_step: f32,
    /// Horizontal angle slider range in degrees.
    #[schemars(skip)]
    pub h_angle_range: [f32; 2],
    /// Vertical angle slider range in degrees.
    #[schemars(skip)]
    pub v_angle_range: [f32; 2],
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            position_step: 0.5,
            position_step_fast: 1.0,
            angle_step: 1.0,
            h_angle_range: [0.0, 360.0],
            v_angle_range: [-90.0, 90.0],
        }
    }
}

impl InputOptions {
    /// Reject slider ranges that are reversed or have non-finite bounds.
    pub fn validate(&self) -> Result<(), ExtrinsicsError> {
        for (name, [lo, hi]) in [
            ("h_angle_range", self.h_angle_range),
            ("v_angle_range", self.v_angle_range),
        ] {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(ExtrinsicsError::OptionsParse(format!(
                    "input.{name} must be finite [min, max], got [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }
}
