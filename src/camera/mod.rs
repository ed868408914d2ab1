//! Camera extrinsics: pose, orientation frames, view matrices and the pose
//! of one camera relative to another.
//!
//! A [`Camera`] stores a position plus horizontal/vertical angles; look-at
//! and up vectors are derived from the angles whenever they are needed.

/// Orthonormal frames and view matrix construction.
pub mod basis;
/// Camera struct and angle ⇄ direction conversion.
pub mod core;
/// Fixed perspective projection.
pub mod projection;
/// Angular and positional comparison of two cameras.
pub mod relative;
/// Two-camera rig driven once per frame.
pub mod rig;
/// GPU uniform block for the per-frame transforms.
pub mod uniform;

pub use basis::{view_matrix, Basis};
pub use self::core::{orientation_from_angles, Camera, Orientation};
pub use projection::Projection;
pub use relative::{
    position_offset, relative_orientation, relative_position, RelativePose,
};
pub use rig::{CameraRig, CameraSlot, FrameReport};
pub use uniform::CameraUniform;
