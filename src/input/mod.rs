//! Input handling: bindable camera actions and the processor that applies
//! them to the camera rig.

/// Bindable camera actions.
pub mod keyboard;
/// Applies actions to the active camera.
pub mod processor;

pub use keyboard::KeyAction;
pub use processor::InputProcessor;
