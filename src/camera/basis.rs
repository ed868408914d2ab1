//! Orthonormal camera frames and the view matrix built from them.

use glam::{Mat4, Vec3, Vec4};

use crate::camera::core::Camera;
use crate::error::ExtrinsicsError;

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// `normalize(cross(up, forward))`.
    pub right: Vec3,
    /// `cross(forward, right)`: the input up, re-orthogonalized.
    pub up: Vec3,
    /// Normalized look-at.
    pub forward: Vec3,
}

impl Basis {
    /// Orthonormalize a look-at/up pair.
    ///
    /// `up` only has to be non-parallel to `lookat`; it is re-orthogonalized
    /// against it.
    pub fn from_look_up(
        lookat: Vec3,
        up: Vec3,
    ) -> Result<Self, ExtrinsicsError> {
        let forward = lookat
            .try_normalize()
            .ok_or(ExtrinsicsError::DegenerateVector("basis look-at"))?;
        let right = up
            .cross(forward)
            .try_normalize()
            .ok_or(ExtrinsicsError::DegenerateVector(
                "up parallel to look-at",
            ))?;
        let up = forward.cross(right);
        Ok(Self { right, up, forward })
    }

    /// Rotation part of the view transform.
    ///
    /// Stored column-major as `[right, 0]`, `[up, 0]`, `[forward, 0]`,
    /// `[0, 0, 0, 1]`; `to_cols_array_2d()` yields those four arrays in that
    /// order, which is the layout uploaded to the shader without
    /// transposition.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            Vec4::W,
        )
    }
}

impl Camera {
    /// Orthonormal frame of the camera's current orientation.
    ///
    /// Angle-derived orientations are always orthonormalizable; should that
    /// ever fail numerically, the derivation's own frame is used instead.
    #[must_use]
    pub fn basis(&self) -> Basis {
        let o = self.orientation();
        Basis::from_look_up(o.lookat, o.up).unwrap_or_else(|e| {
            log::warn!("falling back to derived camera frame: {e}");
            Basis {
                right: o.right,
                up: o.up,
                forward: o.lookat,
            }
        })
    }
}

/// View transform of `camera`: `rotation * translation(position)`.
///
/// Applied to a column vector, a point is first offset by the camera
/// position and then expressed in the `(right, up, forward)` frame.
#[must_use]
pub fn view_matrix(camera: &Camera) -> Mat4 {
    camera.basis().rotation_matrix() * Mat4::from_translation(camera.position)
}
