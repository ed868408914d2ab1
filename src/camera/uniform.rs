use glam::Mat4;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform block holding the three transforms the vertex shader consumes.
pub struct CameraUniform {
    /// World-to-camera transform.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Object-to-world transform.
    pub model: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new uniform with identity transforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Overwrite view and projection; the model transform stays as is.
    pub fn update(&mut self, view: Mat4, projection: Mat4) {
        self.view = view.to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
