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

//! The scene registry and active-scene driver.

use std::collections::HashMap;

use super::{EngineServices, Scene, SceneDirective};
use crate::input::InputState;
use crate::render::Surface;

struct SceneEntry {
    scene: Box<dyn Scene>,
    initialized: bool,
}

/// Owns every registered scene and drives the single active one.
///
/// The manager is an explicitly constructed value — there is no global
/// registry — so tests and tools can run several managers side by side.
/// Misuse (duplicate names, unknown targets) is logged and ignored rather
/// than escalated: the previous state always survives a bad call.
#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<String, SceneEntry>,
    /// Registration order, for stable enumeration.
    order: Vec<String>,
    active: Option<String>,
}

impl SceneManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a scene under its own name.
    ///
    /// A duplicate name is rejected with a warning and the original
    /// registration stays in place. The first scene ever added becomes the
    /// active scene and is initialized immediately.
    pub fn add_scene(&mut self, scene: Box<dyn Scene>, services: &mut EngineServices) {
        let name = scene.name().to_string();
        if self.scenes.contains_key(&name) {
            log::warn!("Scene '{name}' is already registered; ignoring duplicate");
            return;
        }
        log::info!("Registering scene '{name}'");
        self.scenes.insert(
            name.clone(),
            SceneEntry {
                scene,
                initialized: false,
            },
        );
        self.order.push(name.clone());

        if self.active.is_none() {
            self.activate(&name, services);
        }
    }

    /// Unregisters a scene.
    ///
    /// Removing the active scene is rejected with a warning: switch away
    /// first. Unknown names are also a warned no-op.
    pub fn remove_scene(&mut self, name: &str) {
        if self.active.as_deref() == Some(name) {
            log::warn!("Scene '{name}' is active and cannot be removed");
            return;
        }
        if self.scenes.remove(name).is_none() {
            log::warn!("Cannot remove unknown scene '{name}'");
            return;
        }
        self.order.retain(|n| n != name);
        log::info!("Removed scene '{name}'");
    }

    /// Switches the active scene.
    ///
    /// An unknown target leaves the current scene active and initialized.
    /// Otherwise the outgoing scene is finalized completely before the
    /// incoming scene initializes — the two never interleave.
    pub fn set_active_scene(&mut self, name: &str, services: &mut EngineServices) {
        if !self.scenes.contains_key(name) {
            log::warn!("Cannot activate unknown scene '{name}'");
            return;
        }
        if self.active.as_deref() == Some(name) {
            log::debug!("Scene '{name}' is already active");
            return;
        }

        if let Some(current) = self.active.take() {
            if let Some(entry) = self.scenes.get_mut(&current) {
                if entry.initialized {
                    log::info!("Finalizing scene '{current}'");
                    entry.scene.finalize(services);
                    entry.initialized = false;
                }
            }
        }
        self.activate(name, services);
    }

    /// Updates the active scene and resolves its directive.
    ///
    /// A `Switch` directive is handled internally; `Continue` and `Quit`
    /// are returned to the caller. With no active scene this warns and
    /// continues.
    pub fn update_active(
        &mut self,
        dt: f32,
        input: &InputState,
        services: &mut EngineServices,
    ) -> SceneDirective {
        let Some(name) = self.active.clone() else {
            log::warn!("No active scene to update");
            return SceneDirective::Continue;
        };
        let directive = match self.scenes.get_mut(&name) {
            Some(entry) => entry.scene.update(dt, input, services),
            None => return SceneDirective::Continue,
        };
        match directive {
            SceneDirective::Switch(next) => {
                self.set_active_scene(&next, services);
                SceneDirective::Continue
            }
            other => other,
        }
    }

    /// Draws the active scene. Warns when none is active.
    pub fn draw_active(&self, surface: &mut dyn Surface) {
        match self
            .active
            .as_ref()
            .and_then(|name| self.scenes.get(name))
        {
            Some(entry) => entry.scene.draw(surface),
            None => log::warn!("No active scene to draw"),
        }
    }

    /// The name of the active scene, if any.
    #[must_use]
    pub fn active_scene_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a scene with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Registered scene names in registration order.
    #[must_use]
    pub fn scene_names(&self) -> &[String] {
        &self.order
    }

    /// The number of registered scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether no scenes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Marks `name` active and initializes it if needed. The caller has
    /// already validated the name.
    fn activate(&mut self, name: &str, services: &mut EngineServices) {
        if let Some(entry) = self.scenes.get_mut(name) {
            if !entry.initialized {
                log::info!("Initializing scene '{name}'");
                entry.scene.initialize(services);
                entry.initialized = true;
            }
            self.active = Some(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioMixer, PlayParams, SoundId};
    use crate::render::{ResourceLoader, TextureId, FontId};
    use anyhow::Result;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct NullLoader;
    impl ResourceLoader for NullLoader {
        fn load_texture(&mut self, _path: &str) -> Result<TextureId> {
            Ok(TextureId(0))
        }
        fn load_font(&mut self, _path: &str) -> Result<FontId> {
            Ok(FontId(0))
        }
    }

    struct NullMixer;
    impl AudioMixer for NullMixer {
        fn load(&mut self, _path: &str) -> Result<SoundId> {
            Ok(SoundId(0))
        }
        fn play(&mut self, _sound: SoundId, _params: PlayParams) {}
        fn stop(&mut self, _sound: SoundId) {}
        fn stop_all(&mut self) {}
    }

    /// Records its lifecycle calls and plays back a scripted directive.
    struct ProbeScene {
        name: String,
        tag: &'static str,
        log: EventLog,
        directive: SceneDirective,
    }

    impl ProbeScene {
        fn new(name: &str, tag: &'static str, log: EventLog) -> Box<Self> {
            Box::new(Self {
                name: name.to_string(),
                tag,
                log,
                directive: SceneDirective::Continue,
            })
        }

        fn switching_to(name: &str, tag: &'static str, log: EventLog, next: &str) -> Box<Self> {
            Box::new(Self {
                name: name.to_string(),
                tag,
                log,
                directive: SceneDirective::Switch(next.to_string()),
            })
        }
    }

    impl Scene for ProbeScene {
        fn name(&self) -> &str {
            &self.name
        }
        fn initialize(&mut self, _services: &mut EngineServices) {
            self.log.borrow_mut().push(format!("init:{}", self.tag));
        }
        fn finalize(&mut self, _services: &mut EngineServices) {
            self.log.borrow_mut().push(format!("fini:{}", self.tag));
        }
        fn update(
            &mut self,
            _dt: f32,
            _input: &InputState,
            _services: &mut EngineServices,
        ) -> SceneDirective {
            self.log.borrow_mut().push(format!("update:{}", self.tag));
            self.directive.clone()
        }
        fn draw(&self, _surface: &mut dyn Surface) {}
    }

    fn with_services<R>(f: impl FnOnce(&mut EngineServices) -> R) -> R {
        let mut loader = NullLoader;
        let mut mixer = NullMixer;
        let mut services = EngineServices {
            resources: &mut loader,
            audio: &mut mixer,
        };
        f(&mut services)
    }

    fn events(log: &EventLog) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn first_scene_is_auto_activated_and_initialized() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            assert_eq!(mgr.active_scene_name(), Some("title"));
        });
        assert_eq!(events(&log), vec!["init:a"]);
    }

    #[test]
    fn duplicate_name_is_rejected_and_original_survives() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "first", log.clone()), services);
            mgr.add_scene(ProbeScene::new("title", "second", log.clone()), services);
            assert_eq!(mgr.len(), 1);

            // The original registration still answers updates.
            mgr.update_active(0.016, &InputState::new(), services);
        });
        assert_eq!(events(&log), vec!["init:first", "update:first"]);
    }

    #[test]
    fn unknown_target_keeps_current_scene_active() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            mgr.set_active_scene("nope", services);
            assert_eq!(mgr.active_scene_name(), Some("title"));
        });
        // No finalize happened: the scene stayed initialized.
        assert_eq!(events(&log), vec!["init:a"]);
    }

    #[test]
    fn switch_finalizes_before_initializing() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            mgr.add_scene(ProbeScene::new("game", "b", log.clone()), services);
            mgr.set_active_scene("game", services);
            assert_eq!(mgr.active_scene_name(), Some("game"));
        });
        assert_eq!(events(&log), vec!["init:a", "fini:a", "init:b"]);
    }

    #[test]
    fn switch_directive_is_resolved_by_update() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(
                ProbeScene::switching_to("title", "a", log.clone(), "game"),
                services,
            );
            mgr.add_scene(ProbeScene::new("game", "b", log.clone()), services);

            let directive = mgr.update_active(0.016, &InputState::new(), services);
            assert_eq!(directive, SceneDirective::Continue);
            assert_eq!(mgr.active_scene_name(), Some("game"));
        });
        assert_eq!(
            events(&log),
            vec!["init:a", "update:a", "fini:a", "init:b"]
        );
    }

    #[test]
    fn reactivation_initializes_again() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            mgr.add_scene(ProbeScene::new("game", "b", log.clone()), services);
            mgr.set_active_scene("game", services);
            mgr.set_active_scene("title", services);
        });
        assert_eq!(
            events(&log),
            vec!["init:a", "fini:a", "init:b", "fini:b", "init:a"]
        );
    }

    #[test]
    fn removing_the_active_scene_is_rejected() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            mgr.remove_scene("title");
            assert!(mgr.contains("title"));
            assert_eq!(mgr.active_scene_name(), Some("title"));
        });
    }

    #[test]
    fn removing_an_inactive_scene_works() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            mgr.add_scene(ProbeScene::new("game", "b", log.clone()), services);
            mgr.remove_scene("game");
            assert!(!mgr.contains("game"));
            assert_eq!(mgr.scene_names(), &["title".to_string()]);
        });
    }

    #[test]
    fn update_without_scenes_is_a_warned_no_op() {
        with_services(|services| {
            let mut mgr = SceneManager::new();
            let directive = mgr.update_active(0.016, &InputState::new(), services);
            assert_eq!(directive, SceneDirective::Continue);
        });
    }

    #[test]
    fn names_keep_registration_order() {
        let log: EventLog = Default::default();
        with_services(|services| {
            let mut mgr = SceneManager::new();
            mgr.add_scene(ProbeScene::new("title", "a", log.clone()), services);
            mgr.add_scene(ProbeScene::new("game", "b", log.clone()), services);
            mgr.add_scene(ProbeScene::new("result", "c", log.clone()), services);
            let names: Vec<&str> = mgr.scene_names().iter().map(String::as_str).collect();
            assert_eq!(names, vec!["title", "game", "result"]);
        });
    }
}
