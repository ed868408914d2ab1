//! Applies key actions to the camera rig.
//!
//! The `InputProcessor` is the UI-side editor of the camera fields. It owns
//! the step sizes, the slider ranges and the keybinding map. Range clamping
//! happens here, at the widget boundary; the camera core itself accepts any
//! angle.

use glam::Vec3;

use super::keyboard::KeyAction;
use crate::camera::{CameraRig, CameraSlot};
use crate::error::ExtrinsicsError;
use crate::options::{InputOptions, KeybindingOptions, Options};

/// Converts key presses into edits of the active camera.
///
/// # Usage
///
/// ```ignore
/// let mut input = InputProcessor::new(&options);
/// input.handle_key_press("ArrowLeft", &mut rig)?;
/// let report = rig.frame();
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Step sizes and slider ranges.
    steps: InputOptions,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Whether the fast position step is toggled on.
    fast: bool,
}

impl InputProcessor {
    /// Create a processor from the input and keybinding options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            steps: options.input.clone(),
            key_bindings: options.keybindings.clone(),
            fast: false,
        }
    }

    /// Look up `key` and apply its action.
    pub fn handle_key_press(
        &mut self,
        key: &str,
        rig: &mut CameraRig,
    ) -> Result<KeyAction, ExtrinsicsError> {
        let action = self
            .key_bindings
            .lookup(key)
            .ok_or_else(|| ExtrinsicsError::UnknownKey(key.to_owned()))?;
        self.apply(action, rig);
        Ok(action)
    }

    /// Apply one action to the rig.
    pub fn apply(&mut self, action: KeyAction, rig: &mut CameraRig) {
        let step = if self.fast {
            self.steps.position_step_fast
        } else {
            self.steps.position_step
        };
        let turn = self.steps.angle_step;

        match action {
            KeyAction::SelectFirst => rig.select(CameraSlot::First),
            KeyAction::SelectSecond => rig.select(CameraSlot::Second),
            KeyAction::ToggleCamera => rig.select(rig.active_slot().other()),
            KeyAction::MoveXPos => rig.active_mut().position += Vec3::X * step,
            KeyAction::MoveXNeg => rig.active_mut().position -= Vec3::X * step,
            KeyAction::MoveYPos => rig.active_mut().position += Vec3::Y * step,
            KeyAction::MoveYNeg => rig.active_mut().position -= Vec3::Y * step,
            KeyAction::MoveZPos => rig.active_mut().position += Vec3::Z * step,
            KeyAction::MoveZNeg => rig.active_mut().position -= Vec3::Z * step,
            KeyAction::YawLeft => self.set_h_angle(rig, turn),
            KeyAction::YawRight => self.set_h_angle(rig, -turn),
            KeyAction::PitchUp => self.set_v_angle(rig, -turn),
            KeyAction::PitchDown => self.set_v_angle(rig, turn),
            KeyAction::ResetCamera => rig.reset_active(),
            KeyAction::ToggleFastStep => {
                self.fast = !self.fast;
                log::debug!("fast step: {}", self.fast);
            }
        }
    }

    fn set_h_angle(&self, rig: &mut CameraRig, delta: f32) {
        let camera = rig.active_mut();
        camera.h_angle =
            clamp_to(camera.h_angle + delta, self.steps.h_angle_range);
    }

    fn set_v_angle(&self, rig: &mut CameraRig, delta: f32) {
        let camera = rig.active_mut();
        camera.v_angle =
            clamp_to(camera.v_angle + delta, self.steps.v_angle_range);
    }
}

/// Clamp into `[a, b]` taken in either order. A NaN bound disables clamping.
fn clamp_to(value: f32, [a, b]: [f32; 2]) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo.is_nan() || hi.is_nan() {
        return value;
    }
    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (InputProcessor, CameraRig) {
        let options = Options::default();
        (
            InputProcessor::new(&options),
            CameraRig::from_options(&options).unwrap(),
        )
    }

    #[test]
    fn movement_uses_position_step() {
        let (mut input, mut rig) = setup();
        input.apply(KeyAction::MoveXPos, &mut rig);
        assert_eq!(rig.active().position, Vec3::new(0.5, 1.0, 4.0));

        input.apply(KeyAction::ToggleFastStep, &mut rig);
        input.apply(KeyAction::MoveZNeg, &mut rig);
        assert_eq!(rig.active().position, Vec3::new(0.5, 1.0, 3.0));
    }

    #[test]
    fn toggle_switches_edit_target() {
        let (mut input, mut rig) = setup();
        input.apply(KeyAction::ToggleCamera, &mut rig);
        assert_eq!(rig.active_slot(), CameraSlot::Second);
        input.apply(KeyAction::MoveYNeg, &mut rig);
        assert_eq!(
            rig.camera(CameraSlot::Second).position,
            Vec3::new(0.0, -0.5, 3.0)
        );
        assert_eq!(
            rig.camera(CameraSlot::First).position,
            Vec3::new(0.0, 1.0, 4.0)
        );
        input.apply(KeyAction::ToggleCamera, &mut rig);
        assert_eq!(rig.active_slot(), CameraSlot::First);
    }

    #[test]
    fn angle_edits_are_clamped_to_slider_range() {
        let (mut input, mut rig) = setup();
        rig.active_mut().v_angle = 89.5;
        input.apply(KeyAction::PitchDown, &mut rig);
        assert_eq!(rig.active().v_angle, 90.0);

        rig.active_mut().h_angle = 0.5;
        input.apply(KeyAction::YawRight, &mut rig);
        assert_eq!(rig.active().h_angle, 0.0);
    }

    #[test]
    fn reversed_range_set_after_load_does_not_panic() {
        let mut options = Options::default();
        options.input.h_angle_range = [360.0, 0.0];
        options.input.v_angle_range = [f32::NAN, 90.0];
        let mut input = InputProcessor::new(&options);
        let mut rig = CameraRig::from_options(&options).unwrap();

        rig.active_mut().h_angle = 359.5;
        input.apply(KeyAction::YawLeft, &mut rig);
        assert_eq!(rig.active().h_angle, 360.0);

        rig.active_mut().v_angle = 89.5;
        input.apply(KeyAction::PitchDown, &mut rig);
        assert_eq!(rig.active().v_angle, 90.5);
    }

    #[test]
    fn yaw_right_swings_view_toward_positive_x() {
        let (mut input, mut rig) = setup();
        for _ in 0..10 {
            input.apply(KeyAction::YawRight, &mut rig);
        }
        assert!((rig.active().h_angle - 80.0).abs() < 1e-4);
        let lookat = rig.active().lookat();
        assert!(lookat.x > 0.17 && lookat.z < -0.98, "{lookat}");

        for _ in 0..20 {
            input.apply(KeyAction::YawLeft, &mut rig);
        }
        assert!(rig.active().lookat().x < -0.17);
    }

    #[test]
    fn fast_step_toggles_through_its_binding() {
        let (mut input, mut rig) = setup();
        let _ = input.handle_key_press("ShiftLeft", &mut rig).unwrap();
        input.apply(KeyAction::MoveXPos, &mut rig);
        assert_eq!(rig.active().position, Vec3::new(1.0, 1.0, 4.0));

        let _ = input.handle_key_press("ShiftLeft", &mut rig).unwrap();
        input.apply(KeyAction::MoveXPos, &mut rig);
        assert_eq!(rig.active().position, Vec3::new(1.5, 1.0, 4.0));
    }

    #[test]
    fn key_press_goes_through_bindings() {
        let (mut input, mut rig) = setup();
        let action = input.handle_key_press("Digit2", &mut rig).unwrap();
        assert_eq!(action, KeyAction::SelectSecond);
        assert_eq!(rig.active_slot(), CameraSlot::Second);

        let err = input.handle_key_press("KeyZ", &mut rig);
        assert!(matches!(err, Err(ExtrinsicsError::UnknownKey(k)) if k == "KeyZ"));
    }

    #[test]
    fn reset_restores_after_edits() {
        let (mut input, mut rig) = setup();
        input.apply(KeyAction::MoveXPos, &mut rig);
        input.apply(KeyAction::PitchUp, &mut rig);
        input.apply(KeyAction::ResetCamera, &mut rig);
        assert_eq!(rig.active().position, Vec3::new(0.0, 1.0, 4.0));
        assert!(rig.active().v_angle.abs() < 1e-4);
    }
}
