use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::camera::basis::view_matrix;
use crate::camera::core::Camera;
use crate::camera::projection::Projection;
use crate::camera::relative::{
    position_offset, relative_orientation, relative_position, RelativePose,
};
use crate::camera::uniform::CameraUniform;
use crate::error::ExtrinsicsError;
use crate::options::{CameraPreset, Options};

/// Which of the two cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraSlot {
    /// Camera 1.
    #[default]
    First,
    /// Camera 2.
    Second,
}

impl CameraSlot {
    /// The other camera.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Everything the display layer needs after one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Camera the view matrix belongs to.
    pub active: CameraSlot,
    /// Active camera's view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Active camera horizontal angle in degrees, as edited (not wrapped).
    pub h_angle: f32,
    /// Active camera vertical angle in degrees.
    pub v_angle: f32,
    /// Angular deviation between the two cameras, in degrees.
    pub relative_pose: RelativePose,
    /// Position of camera 2 with respect to camera 1.
    pub second_from_first: [f32; 3],
    /// Position of camera 1 with respect to camera 2.
    pub first_from_second: [f32; 3],
    /// Distance between the two look-at vectors.
    pub lookat_distance: f32,
}

impl FrameReport {
    /// Pretty JSON rendering for logs.
    pub fn to_json(&self) -> Result<String, ExtrinsicsError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExtrinsicsError::Report(e.to_string()))
    }
}

/// The two cameras of the scene plus the shared projection.
///
/// One camera is active: its view matrix is what gets rendered and what user
/// edits apply to. Relative pose is always reported between camera 1 and 2.
#[derive(Debug, Clone)]
pub struct CameraRig {
    cameras: [Camera; 2],
    initial: [Camera; 2],
    active: CameraSlot,
    /// Projection handed to the renderer with every frame.
    pub projection: Projection,
    /// Uniform block refreshed by [`CameraRig::frame`].
    pub uniform: CameraUniform,
}

impl CameraRig {
    /// Rig with both cameras already built.
    #[must_use]
    pub fn new(first: Camera, second: Camera, projection: Projection) -> Self {
        let cameras = [first, second];
        Self {
            cameras,
            initial: cameras,
            active: CameraSlot::First,
            projection,
            uniform: CameraUniform::new(),
        }
    }

    /// Build both cameras from their configured look-at presets.
    pub fn from_options(options: &Options) -> Result<Self, ExtrinsicsError> {
        let first = camera_from_preset(&options.cameras.first)?;
        let second = camera_from_preset(&options.cameras.second)?;
        Ok(Self::new(first, second, Projection::from(&options.projection)))
    }

    /// Make `slot` the active camera.
    pub fn select(&mut self, slot: CameraSlot) {
        if self.active != slot {
            log::debug!("active camera: {slot:?}");
        }
        self.active = slot;
    }

    /// Currently active slot.
    #[must_use]
    pub fn active_slot(&self) -> CameraSlot {
        self.active
    }

    /// Currently active camera.
    #[must_use]
    pub fn active(&self) -> &Camera {
        self.camera(self.active)
    }

    /// Mutable access to the active camera, for UI edits.
    pub fn active_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.active.index()]
    }

    /// Camera in `slot`.
    #[must_use]
    pub fn camera(&self, slot: CameraSlot) -> &Camera {
        &self.cameras[slot.index()]
    }

    /// Adapt the projection to a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        log::debug!(
            "viewport {width}x{height}, aspect {}",
            self.projection.aspect
        );
    }

    /// Put the active camera back to its starting pose.
    pub fn reset_active(&mut self) {
        let i = self.active.index();
        self.cameras[i] = self.initial[i];
    }

    /// View matrix of the active camera.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        view_matrix(self.active())
    }

    /// Relative orientation of camera 2 against camera 1, in radians.
    #[must_use]
    pub fn relative_pose(&self) -> RelativePose {
        relative_orientation(
            self.camera(CameraSlot::First),
            self.camera(CameraSlot::Second),
        )
    }

    /// Run the per-frame camera math and refresh the uniform block.
    pub fn frame(&mut self) -> FrameReport {
        let view = self.view_matrix();
        let projection = self.projection.matrix();
        self.uniform.update(view, projection);

        let first = self.camera(CameraSlot::First);
        let second = self.camera(CameraSlot::Second);
        let relative = relative_orientation(first, second).to_degrees();
        let second_from_first = position_offset(first, second);
        let first_from_second = position_offset(second, first);
        let lookat_distance = relative_position(first, second);

        let active = self.active();
        log::trace!(
            "frame: {:?} h {:.1} v {:.1}, relative {relative:?}",
            self.active,
            active.h_angle,
            active.v_angle
        );

        FrameReport {
            active: self.active,
            view: self.uniform.view,
            projection: self.uniform.projection,
            h_angle: active.h_angle,
            v_angle: active.v_angle,
            relative_pose: relative,
            second_from_first: second_from_first.to_array(),
            first_from_second: first_from_second.to_array(),
            lookat_distance,
        }
    }
}

fn camera_from_preset(preset: &CameraPreset) -> Result<Camera, ExtrinsicsError> {
    Camera::from_look_at(
        Vec3::from_array(preset.position),
        Vec3::from_array(preset.lookat),
        Vec3::from_array(preset.up),
    )
}
