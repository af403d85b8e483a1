// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Backend-agnostic input: raw events, typed actions, and the per-frame
//! input state scenes query.
//!
//! A platform backend translates its native events into [`InputEvent`]s and
//! feeds them to an [`InputState`] once per frame. Game code never looks at
//! key codes; it asks for [`Action`]s, which [`Bindings`] maps to keys.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// An engine-internal representation of a user input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// A string representation of the physical key code.
        key_code: String,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// A string representation of the physical key code.
        key_code: String,
    },
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// The mouse button that was pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// The mouse button that was released.
        button: MouseButton,
    },
    /// The mouse cursor moved.
    MouseMoved {
        /// The new x-coordinate of the cursor.
        x: f32,
        /// The new y-coordinate of the cursor.
        y: f32,
    },
}

/// An engine-internal representation of a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// The closed set of game actions bindable to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Accept / advance (menu confirm, start the exit transition).
    Confirm,
    /// Back out / dismiss.
    Cancel,
    /// Pause the game scene.
    Pause,
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Move up.
    Up,
    /// Move down.
    Down,
    /// Primary fire.
    Fire,
}

/// Maps actions to the key codes that trigger them.
///
/// Serializable so key bindings live in the engine configuration file.
/// Several keys may drive one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    bindings: HashMap<Action, Vec<String>>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Action::Confirm, vec!["Enter".to_string(), "Space".to_string()]);
        bindings.insert(Action::Cancel, vec!["Escape".to_string()]);
        bindings.insert(Action::Pause, vec!["KeyP".to_string()]);
        bindings.insert(Action::Left, vec!["KeyA".to_string(), "ArrowLeft".to_string()]);
        bindings.insert(Action::Right, vec!["KeyD".to_string(), "ArrowRight".to_string()]);
        bindings.insert(Action::Up, vec!["KeyW".to_string(), "ArrowUp".to_string()]);
        bindings.insert(Action::Down, vec!["KeyS".to_string(), "ArrowDown".to_string()]);
        bindings.insert(Action::Fire, vec!["KeyJ".to_string()]);
        Self { bindings }
    }
}

impl Bindings {
    /// The key codes bound to `action`.
    pub fn keys_for(&self, action: Action) -> &[String] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replaces the keys bound to `action`.
    pub fn bind(&mut self, action: Action, keys: Vec<String>) {
        self.bindings.insert(action, keys);
    }
}

/// Accumulated input for one frame, with edge and level queries.
///
/// The owner calls [`begin_frame`](Self::begin_frame) once per frame, then
/// [`apply`](Self::apply) for every translated event. `*_pressed` queries
/// answer "did this happen on this frame", `*_down` answer "is it held".
#[derive(Debug, Default)]
pub struct InputState {
    bindings: Bindings,
    held: HashSet<String>,
    pressed_this_frame: HashSet<String>,
    cursor: (f32, f32),
}

impl InputState {
    /// Creates an input state with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input state with explicit bindings.
    #[must_use]
    pub fn with_bindings(bindings: Bindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Clears per-frame edges. Call once at the top of each frame, before
    /// applying that frame's events.
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame.clear();
    }

    /// Folds one event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key_code } => {
                // Key repeat delivers presses for held keys; only a fresh
                // press counts as an edge.
                if self.held.insert(key_code.clone()) {
                    self.pressed_this_frame.insert(key_code.clone());
                }
            }
            InputEvent::KeyReleased { key_code } => {
                self.held.remove(key_code);
            }
            InputEvent::MouseMoved { x, y } => {
                self.cursor = (*x, *y);
            }
            InputEvent::MouseButtonPressed { .. } | InputEvent::MouseButtonReleased { .. } => {}
        }
    }

    /// Whether any key bound to `action` was freshly pressed this frame.
    #[must_use]
    pub fn action_pressed(&self, action: Action) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| self.pressed_this_frame.contains(key))
    }

    /// Whether any key bound to `action` is currently held.
    #[must_use]
    pub fn action_down(&self, action: Action) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| self.held.contains(key))
    }

    /// The last reported cursor position.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str) -> InputEvent {
        InputEvent::KeyPressed {
            key_code: key.to_string(),
        }
    }

    fn release(key: &str) -> InputEvent {
        InputEvent::KeyReleased {
            key_code: key.to_string(),
        }
    }

    #[test]
    fn pressed_is_an_edge_down_is_a_level() {
        let mut input = InputState::new();
        input.begin_frame();
        input.apply(&press("Enter"));
        assert!(input.action_pressed(Action::Confirm));
        assert!(input.action_down(Action::Confirm));

        // Next frame: still held, no longer an edge.
        input.begin_frame();
        assert!(!input.action_pressed(Action::Confirm));
        assert!(input.action_down(Action::Confirm));

        input.apply(&release("Enter"));
        assert!(!input.action_down(Action::Confirm));
    }

    #[test]
    fn key_repeat_does_not_retrigger_the_edge() {
        let mut input = InputState::new();
        input.begin_frame();
        input.apply(&press("Space"));
        input.begin_frame();
        input.apply(&press("Space"));
        assert!(!input.action_pressed(Action::Confirm));
        assert!(input.action_down(Action::Confirm));
    }

    #[test]
    fn any_bound_key_triggers_the_action() {
        let mut input = InputState::new();
        input.begin_frame();
        input.apply(&press("Space"));
        assert!(input.action_pressed(Action::Confirm));
    }

    #[test]
    fn custom_bindings() {
        let mut bindings = Bindings::default();
        bindings.bind(Action::Fire, vec!["KeyZ".to_string()]);
        let mut input = InputState::with_bindings(bindings);
        input.begin_frame();
        input.apply(&press("KeyZ"));
        assert!(input.action_pressed(Action::Fire));
        assert!(!input.action_pressed(Action::Confirm));
    }

    #[test]
    fn cursor_tracks_last_move() {
        let mut input = InputState::new();
        input.apply(&InputEvent::MouseMoved { x: 12.0, y: 34.0 });
        assert_eq!(input.cursor(), (12.0, 34.0));
    }

    #[test]
    fn bindings_round_trip_through_json() {
        let bindings = Bindings::default();
        let json = serde_json::to_string(&bindings).unwrap();
        let back: Bindings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys_for(Action::Confirm), bindings.keys_for(Action::Confirm));
    }
}
