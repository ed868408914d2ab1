use glam::Mat4;

use crate::options::ProjectionOptions;

/// Fixed perspective projection supplied alongside the view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from(&ProjectionOptions::default())
    }
}

impl From<&ProjectionOptions> for Projection {
    fn from(o: &ProjectionOptions) -> Self {
        Self {
            fovy: o.fovy,
            aspect: o.aspect,
            znear: o.znear,
            zfar: o.zfar,
        }
    }
}

impl Projection {
    /// Right-handed perspective with the OpenGL `[-1, 1]` depth range.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
