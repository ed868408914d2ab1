//! Rotation math underneath the camera model.

/// Clamped inverse trig and horizontal bearings.
pub mod angle;
/// Hamilton-product rotation quaternions.
pub mod quaternion;
/// Rotating vectors about arbitrary axes.
pub mod rotation;

pub use angle::{angle_between, bearing_degrees, safe_acos, safe_asin};
pub use quaternion::Quaternion;
pub use rotation::{rotate, rotated};
