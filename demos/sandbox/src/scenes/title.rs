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

//! The title screen: fade in, wait for confirm, fade out into the game.

use vesper_core::animation::Fade;
use vesper_core::audio::{PlayParams, SoundId};
use vesper_core::input::{Action, InputState};
use vesper_core::math::{Rect, Rgba, Vec2};
use vesper_core::render::{GlyphStyle, Surface, TextBlock};
use vesper_core::scene::{EngineServices, Scene, SceneDirective, ScenePhase, TransitionPair};

use super::names;

pub struct TitleScene {
    viewport: Rect,
    transitions: TransitionPair,
    decide_sfx: Option<SoundId>,
}

impl TitleScene {
    const FADE_TIME: f32 = 1.0;

    pub fn new(viewport: Rect) -> Box<Self> {
        Box::new(Self {
            viewport,
            transitions: TransitionPair::new(
                Box::new(Fade::fade_in(Self::FADE_TIME, viewport)),
                Box::new(Fade::fade_out(Self::FADE_TIME, viewport)),
            ),
            decide_sfx: None,
        })
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &str {
        names::TITLE
    }

    fn initialize(&mut self, services: &mut EngineServices) {
        if self.decide_sfx.is_none() {
            match services.audio.load("assets/sounds/decide.wav") {
                Ok(id) => self.decide_sfx = Some(id),
                Err(e) => log::warn!("Title: decide sound unavailable: {e}"),
            }
        }
        self.transitions.begin();
    }

    fn finalize(&mut self, services: &mut EngineServices) {
        services.audio.stop_all();
        self.transitions.reset();
    }

    fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        services: &mut EngineServices,
    ) -> SceneDirective {
        self.transitions.advance(dt);

        if input.action_pressed(Action::Confirm) && self.transitions.request_exit() {
            if let Some(sfx) = self.decide_sfx {
                services.audio.play(sfx, PlayParams::one_shot(0.9));
            }
        }
        if self.transitions.exit_finished() {
            return SceneDirective::Switch(names::GAME.to_string());
        }
        SceneDirective::Continue
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let center = self.viewport.center();
        let mut title = TextBlock::new(
            "VESPER STRIKERS",
            center - Vec2::new(0.0, 60.0),
            Rgba::WHITE,
        );
        // Accent the initial letter.
        title.glyph_styles.push(GlyphStyle {
            index: 0,
            color: Some(Rgba::GREEN),
            offset: None,
        });
        surface.draw_text(&title);
        if self.transitions.phase() == ScenePhase::Interactive {
            surface.draw_text(&TextBlock::new(
                "PRESS ENTER",
                center + Vec2::new(0.0, 80.0),
                Rgba::WHITE.with_alpha(0.8),
            ));
        }
        // The transition cover always draws last, over the scene.
        self.transitions.draw(surface);
    }
}
