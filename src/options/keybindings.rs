//! Key bindings for the camera editing actions.
//!
//! Stored as `action -> key` so a TOML file reads naturally; key presses go
//! through the reverse `key -> action` index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Keyboard layout for the two-camera editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Action → key code (e.g. `toggle_camera` → `"Tab"`).
    pub bindings: HashMap<KeyAction, String>,
    #[serde(skip)]
    by_key: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = [
            (KeyAction::SelectFirst, "Digit1"),
            (KeyAction::SelectSecond, "Digit2"),
            (KeyAction::ToggleCamera, "Tab"),
            (KeyAction::MoveXPos, "KeyD"),
            (KeyAction::MoveXNeg, "KeyA"),
            (KeyAction::MoveYPos, "KeyE"),
            (KeyAction::MoveYNeg, "KeyQ"),
            (KeyAction::MoveZPos, "KeyS"),
            (KeyAction::MoveZNeg, "KeyW"),
            (KeyAction::YawLeft, "ArrowLeft"),
            (KeyAction::YawRight, "ArrowRight"),
            (KeyAction::PitchUp, "ArrowUp"),
            (KeyAction::PitchDown, "ArrowDown"),
            (KeyAction::ResetCamera, "KeyR"),
            (KeyAction::ToggleFastStep, "ShiftLeft"),
        ]
        .into_iter()
        .map(|(action, key)| (action, key.to_owned()))
        .collect();

        let mut layout = Self {
            bindings,
            by_key: HashMap::new(),
        };
        layout.reindex();
        layout
    }
}

impl KeybindingOptions {
    /// Rebuild the key → action index from `bindings`.
    ///
    /// Must be called after `bindings` is replaced wholesale (deserialize,
    /// direct edits). When two actions share a key the later one in
    /// iteration order wins and a warning is logged.
    pub fn reindex(&mut self) {
        self.by_key.clear();
        for (action, key) in &self.bindings {
            if let Some(prev) = self.by_key.insert(key.clone(), *action) {
                log::warn!("key {key} bound to both {prev:?} and {action:?}");
            }
        }
    }

    /// Action bound to `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.by_key.get(key).copied()
    }
}
