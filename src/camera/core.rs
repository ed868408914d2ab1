use glam::Vec3;

use crate::error::ExtrinsicsError;
use crate::math::{bearing_degrees, rotated, safe_asin};

/// Forward direction at zero yaw and pitch.
const REFERENCE_FORWARD: Vec3 = Vec3::X;
/// World up; yaw is measured about this axis.
const WORLD_UP: Vec3 = Vec3::Y;

/// Camera pose stored as a position plus a yaw/pitch pair.
///
/// The angles are the only stored orientation. Direction vectors are derived
/// on demand by [`Camera::orientation`], so editing `h_angle`/`v_angle` can
/// never leave a stale look-at behind. Angles are not wrapped or clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal angle (yaw about `+Y`) in degrees. `0` faces `+X`, `90`
    /// faces `-Z`.
    pub h_angle: f32,
    /// Vertical angle (pitch) in degrees. Positive values look down.
    pub v_angle: f32,
}

/// Direction vectors derived from a camera's angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Unit viewing direction.
    pub lookat: Vec3,
    /// Unit up vector, orthogonal to `lookat`.
    pub up: Vec3,
    /// Unit pitch axis, `cross(world_up, yawed_forward)`.
    pub right: Vec3,
}

impl Camera {
    /// Build a camera from a position and a look-at/up pair.
    ///
    /// `lookat` and `up` need not be unit length. The yaw is the bearing of
    /// the look-at's horizontal projection; the pitch is `-asin(lookat.y)`.
    /// A straight-up or straight-down look-at has no bearing of its own, so
    /// the yaw is then taken from `up`, which is what points "forward" in the
    /// image when looking vertically.
    pub fn from_look_at(
        position: Vec3,
        lookat: Vec3,
        up: Vec3,
    ) -> Result<Self, ExtrinsicsError> {
        let lookat = lookat
            .try_normalize()
            .ok_or(ExtrinsicsError::DegenerateVector("camera look-at"))?;
        let up = up
            .try_normalize()
            .ok_or(ExtrinsicsError::DegenerateVector("camera up"))?;

        let h_angle = bearing_degrees(lookat).unwrap_or_else(|| {
            let yaw_dir = if lookat.y < 0.0 { up } else { -up };
            let fallback = bearing_degrees(yaw_dir).unwrap_or(0.0);
            log::warn!(
                "vertical look-at {lookat}; horizontal angle taken from up \
                 vector as {fallback}"
            );
            fallback
        });
        let v_angle = -safe_asin(lookat.y).to_degrees();

        log::debug!(
            "camera at {position} lookat {lookat}: h_angle {h_angle:.3}, \
             v_angle {v_angle:.3}"
        );

        Ok(Self {
            position,
            h_angle,
            v_angle,
        })
    }

    /// Camera at `position` with the given angles (degrees).
    #[must_use]
    pub fn from_angles(position: Vec3, h_angle: f32, v_angle: f32) -> Self {
        Self {
            position,
            h_angle,
            v_angle,
        }
    }

    /// Derive look-at and up from the current angles.
    ///
    /// Yaws `+X` about world up by `h_angle`, then pitches it about the
    /// resulting right vector by `v_angle`. The same rotation primitive
    /// serves both steps.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        orientation_from_angles(self.h_angle, self.v_angle)
    }

    /// Per-frame refresh hook for callers that drive the camera from a
    /// render loop. Equivalent to [`Camera::orientation`]: nothing is cached,
    /// so there is nothing to refresh.
    #[must_use]
    pub fn update(&self) -> Orientation {
        self.orientation()
    }

    /// Current unit viewing direction.
    #[must_use]
    pub fn lookat(&self) -> Vec3 {
        self.orientation().lookat
    }

    /// Current unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation().up
    }
}

/// Pure angle-to-vector conversion behind [`Camera::orientation`].
#[must_use]
pub fn orientation_from_angles(h_angle: f32, v_angle: f32) -> Orientation {
    let forward = rotated(REFERENCE_FORWARD, WORLD_UP, h_angle).normalize();

    // The yawed forward is horizontal and unit length, so this cross product
    // never vanishes.
    let right = WORLD_UP.cross(forward).normalize();
    let lookat = rotated(forward, right, v_angle).normalize();
    let up = lookat.cross(right).normalize();

    Orientation { lookat, up, right }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    const EPS: f32 = 1e-4;

    /// The four-way quadrant analysis the atan2 bearing replaces.
    fn quadrant_table_h_angle(lookat: Vec3) -> f32 {
        let h = Vec3::new(lookat.x, 0.0, lookat.z).normalize();
        let angle = h.z.abs().min(1.0).asin().to_degrees();
        match (h.z >= 0.0, h.x >= 0.0) {
            (true, true) => 360.0 - angle,
            (true, false) => 180.0 + angle,
            (false, true) => angle,
            (false, false) => 180.0 - angle,
        }
    }

    fn same_bearing(a: f32, b: f32) -> bool {
        let d = (a - b).rem_euclid(360.0);
        d < 1e-2 || d > 360.0 - 1e-2
    }

    #[test]
    fn negative_z_lookat_is_ninety_degrees() {
        let cam = Camera::from_look_at(
            Vec3::new(0.0, 1.0, 4.0),
            Vec3::NEG_Z,
            Vec3::Y,
        )
        .unwrap();
        assert!((cam.h_angle - 90.0).abs() < EPS, "h = {}", cam.h_angle);
        assert!(cam.v_angle.abs() < EPS, "v = {}", cam.v_angle);
        assert_eq!(cam.position, Vec3::new(0.0, 1.0, 4.0));
    }

    #[test]
    fn quadrant_table_agrees_for_negative_z() {
        assert!((quadrant_table_h_angle(Vec3::NEG_Z) - 90.0).abs() < EPS);
    }

    #[test]
    fn bearing_matches_quadrant_table() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let lookat = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-0.9..0.9),
                rng.random_range(-1.0..1.0),
            );
            if Vec3::new(lookat.x, 0.0, lookat.z).length() < 1e-3 {
                continue;
            }
            let cam = Camera::from_look_at(Vec3::ZERO, lookat, Vec3::Y).unwrap();
            let table = quadrant_table_h_angle(lookat.normalize());
            assert!(
                same_bearing(cam.h_angle, table),
                "{lookat}: {} vs table {table}",
                cam.h_angle
            );
            assert!((0.0..360.0).contains(&cam.h_angle));
        }
    }

    #[test]
    fn plus_x_lookat_is_zero_not_three_sixty() {
        let cam = Camera::from_look_at(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
        assert_eq!(cam.h_angle, 0.0);
        assert!(same_bearing(cam.h_angle, quadrant_table_h_angle(Vec3::X)));
    }

    #[test]
    fn looking_up_gives_negative_v_angle() {
        let lookat = Vec3::new(0.0, 1.0, -1.0);
        let cam = Camera::from_look_at(Vec3::ZERO, lookat, Vec3::Y).unwrap();
        assert!((cam.v_angle + 45.0).abs() < EPS);
        let derived = cam.orientation().lookat;
        assert!(derived.abs_diff_eq(lookat.normalize(), EPS), "{derived}");
    }

    #[test]
    fn initialize_then_update_round_trips() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let lookat = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-0.95..0.95),
                rng.random_range(-1.0..1.0),
            );
            let Some(lookat) = lookat.try_normalize() else {
                continue;
            };
            if Vec3::new(lookat.x, 0.0, lookat.z).length() < 1e-2 {
                continue;
            }
            // Unrolled up vector for this look-at.
            let right = Vec3::Y.cross(lookat).normalize();
            let up = lookat.cross(right).normalize();

            let cam = Camera::from_look_at(Vec3::ONE, lookat, up).unwrap();
            let o = cam.update();
            assert!(o.lookat.abs_diff_eq(lookat, 1e-3), "{lookat} -> {}", o.lookat);
            assert!(o.up.abs_diff_eq(up, 1e-3), "{up} -> {}", o.up);
        }
    }

    #[test]
    fn orientation_vectors_are_orthonormal() {
        for (h, v) in [(0.0, 0.0), (90.0, 30.0), (213.0, -89.0), (-45.0, 90.0)] {
            let o = orientation_from_angles(h, v);
            assert!((o.lookat.length() - 1.0).abs() < EPS);
            assert!((o.up.length() - 1.0).abs() < EPS);
            assert!((o.right.length() - 1.0).abs() < EPS);
            assert!(o.lookat.dot(o.up).abs() < EPS);
            assert!(o.lookat.dot(o.right).abs() < EPS);
            assert!(o.up.dot(o.right).abs() < EPS);
        }
    }

    #[test]
    fn unwrapped_angles_are_periodic() {
        let a = orientation_from_angles(30.0, 10.0);
        let b = orientation_from_angles(390.0, 10.0);
        let c = orientation_from_angles(-330.0, 10.0);
        assert!(a.lookat.abs_diff_eq(b.lookat, EPS));
        assert!(a.lookat.abs_diff_eq(c.lookat, EPS));
    }

    #[test]
    fn zero_lookat_is_rejected() {
        let err = Camera::from_look_at(Vec3::ZERO, Vec3::ZERO, Vec3::Y);
        assert!(matches!(err, Err(ExtrinsicsError::DegenerateVector(_))));
        let err = Camera::from_look_at(Vec3::ZERO, Vec3::X, Vec3::ZERO);
        assert!(matches!(err, Err(ExtrinsicsError::DegenerateVector(_))));
    }

    #[test]
    fn looking_straight_down_takes_yaw_from_up() {
        let up = Vec3::NEG_Z;
        let cam = Camera::from_look_at(Vec3::ZERO, Vec3::NEG_Y, up).unwrap();
        assert!((cam.h_angle - 90.0).abs() < EPS);
        assert!((cam.v_angle - 90.0).abs() < EPS);
        let o = cam.orientation();
        assert!(o.lookat.abs_diff_eq(Vec3::NEG_Y, EPS), "{}", o.lookat);
        assert!(o.up.abs_diff_eq(up, EPS), "{}", o.up);
    }

    #[test]
    fn looking_straight_up_takes_yaw_from_reversed_up() {
        let up = Vec3::X;
        let cam = Camera::from_look_at(Vec3::ZERO, Vec3::Y, up).unwrap();
        assert!((cam.v_angle + 90.0).abs() < EPS);
        let o = cam.orientation();
        assert!(o.lookat.abs_diff_eq(Vec3::Y, EPS), "{}", o.lookat);
        assert!(o.up.abs_diff_eq(up, EPS), "{}", o.up);
    }

    #[test]
    fn vertical_lookat_and_up_defaults_to_zero_yaw() {
        let cam = Camera::from_look_at(Vec3::ZERO, Vec3::Y, Vec3::Y).unwrap();
        assert_eq!(cam.h_angle, 0.0);
    }

    #[test]
    fn accessors_agree_with_orientation() {
        let cam = Camera::from_angles(Vec3::ZERO, 120.0, -20.0);
        assert_eq!(cam.lookat(), cam.orientation().lookat);
        assert_eq!(cam.up(), cam.orientation().up);
    }
}
