//! Axis-angle rotation of vectors via the quaternion sandwich product.

use glam::Vec3;

use super::quaternion::Quaternion;

/// Rotate `v` in place by `angle_degrees` about `axis`.
///
/// Computes `q * v * q*` with `q` built from the axis and angle. Right-handed:
/// rotating `+X` about `+Y` by 90° gives `-Z`. `axis` must be unit length.
/// The angle is periodic, any real value works.
pub fn rotate(v: &mut Vec3, axis: Vec3, angle_degrees: f32) {
    *v = rotated(*v, axis, angle_degrees);
}

/// By-value form of [`rotate`].
#[must_use]
pub fn rotated(v: Vec3, axis: Vec3, angle_degrees: f32) -> Vec3 {
    let q = Quaternion::from_axis_angle(axis, angle_degrees);
    (q.mul_vector(v) * q.conjugate()).xyz()
}
