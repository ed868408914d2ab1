use serde::{Deserialize, Serialize};

/// Camera edits that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_camera = "Tab"
/// yaw_left = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Make camera 1 active.
    SelectFirst,
    /// Make camera 2 active.
    SelectSecond,
    /// Switch to the other camera.
    ToggleCamera,
    /// Move the active camera along `+X`.
    MoveXPos,
    /// Move the active camera along `-X`.
    MoveXNeg,
    /// Move the active camera along `+Y`.
    MoveYPos,
    /// Move the active camera along `-Y`.
    MoveYNeg,
    /// Move the active camera along `+Z`.
    MoveZPos,
    /// Move the active camera along `-Z`.
    MoveZNeg,
    /// Increase the horizontal angle: from `-Z` the view swings toward `-X`.
    YawLeft,
    /// Decrease the horizontal angle: from `-Z` the view swings toward `+X`.
    YawRight,
    /// Decrease the vertical angle (look up).
    PitchUp,
    /// Increase the vertical angle (look down).
    PitchDown,
    /// Restore the active camera's starting pose.
    ResetCamera,
    /// Switch movement between the normal and the fast position step.
    ToggleFastStep,
}
