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

//! Scene lifecycle: the per-scene contract, the enter/exit transition
//! protocol, and the [`SceneManager`] registry.
//!
//! A scene is constructed once at startup and registered with the manager.
//! `initialize`/`finalize` may then run many times as the scene becomes
//! active and inactive. Scenes never call back into the manager; they
//! request switches by returning a [`SceneDirective`] from `update`, which
//! the manager resolves after the scene's frame is done.

mod manager;
mod transition;

pub use self::manager::SceneManager;
pub use self::transition::{ScenePhase, TransitionPair};

use crate::audio::AudioMixer;
use crate::input::InputState;
use crate::render::{ResourceLoader, Surface};

/// The engine services a scene may use during initialization and updates.
///
/// Passed explicitly instead of living in process-wide statics so tests can
/// construct isolated instances.
pub struct EngineServices<'a> {
    /// Texture and font loading.
    pub resources: &'a mut dyn ResourceLoader,
    /// Sound playback.
    pub audio: &'a mut dyn AudioMixer,
}

/// What a scene asks the engine to do after one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneDirective {
    /// Keep running this scene.
    Continue,
    /// Switch to the named scene. The manager resolves this after the
    /// frame: the current scene is finalized, the target initialized.
    Switch(String),
    /// Shut the game down.
    Quit,
}

/// A game scene driven by the [`SceneManager`].
///
/// Exactly one scene is active at a time. The active scene receives one
/// `update` followed by one `draw` per frame.
pub trait Scene {
    /// The unique registry key for this scene.
    fn name(&self) -> &str;

    /// Prepares the scene for becoming active: load resources, restart the
    /// enter transition, reset per-run state. May run many times over the
    /// scene's life, once per activation.
    fn initialize(&mut self, services: &mut EngineServices);

    /// Tears down the active state: stop sounds, drop per-run state. Runs
    /// fully before the next scene's `initialize` begins, never interleaved
    /// with it.
    fn finalize(&mut self, services: &mut EngineServices);

    /// Advances the scene by one frame.
    fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        services: &mut EngineServices,
    ) -> SceneDirective;

    /// Draws the scene's current state.
    fn draw(&self, surface: &mut dyn Surface);
}
