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

//! The combat scene: waves announced by the banner, a scored combat
//! window per wave, and a wipe transition out to the result screen.

use vesper_core::animation::{Animation, AnimationClock, RectWipe, WaveBanner, WipeDirection};
use vesper_core::audio::{PlayParams, SoundId};
use vesper_core::input::{Action, InputState};
use vesper_core::math::{Rect, Rgba, Vec2};
use vesper_core::render::{HAlign, Surface, TextBlock, VAlign};
use vesper_core::scene::{EngineServices, Scene, SceneDirective, ScenePhase, TransitionPair};
use vesper_core::ui::{UiStore, UiValue};

use super::names;
use crate::report::SharedReport;

/// What the scene is doing between its enter and exit transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GamePhase {
    /// The wave banner is playing.
    Announce,
    /// The combat window is open and Fire scores.
    Combat,
    /// The all-clear banner ended; the exit wipe is running.
    Leaving,
}

pub struct GameScene {
    viewport: Rect,
    transitions: TransitionPair,
    banner: WaveBanner,
    combat: AnimationClock,
    phase: GamePhase,
    wave: u32,
    total_waves: u32,
    announce_is_clear: bool,
    hud: UiStore,
    report: SharedReport,
    shot_sfx: Option<SoundId>,
    banner_sfx: Option<SoundId>,
}

impl GameScene {
    const WIPE_TIME: f32 = 1.0;
    const COMBAT_TIME: f32 = 4.0;
    const HIT_SCORE: i64 = 150;
    const WAVE_BONUS: i64 = 500;

    pub fn new(viewport: Rect, total_waves: u32, report: SharedReport) -> Box<Self> {
        Box::new(Self {
            viewport,
            transitions: TransitionPair::new(
                Box::new(RectWipe::new(WipeDirection::Open, Self::WIPE_TIME, viewport)),
                Box::new(RectWipe::new(WipeDirection::Close, Self::WIPE_TIME, viewport)),
            ),
            banner: WaveBanner::new(viewport),
            combat: AnimationClock::new(Self::COMBAT_TIME),
            phase: GamePhase::Announce,
            wave: 1,
            total_waves: total_waves.max(1),
            announce_is_clear: false,
            hud: UiStore::new(),
            report,
            shot_sfx: None,
            banner_sfx: None,
        })
    }

    /// Rearms the banner for `wave` (or the all-clear readout) and enters
    /// the announce phase.
    fn announce(&mut self, clear: bool) {
        self.announce_is_clear = clear;
        let last = self.wave == self.total_waves;
        self.banner.reset(self.wave, last, clear);
        self.banner.play();
        self.phase = GamePhase::Announce;
    }

    fn on_wave_complete(&mut self) {
        {
            let mut report = self.report.borrow_mut();
            report.score += Self::WAVE_BONUS;
            report.waves_cleared = self.wave;
        }
        if self.wave >= self.total_waves {
            self.announce(true);
        } else {
            self.wave += 1;
            self.announce(false);
        }
    }

    fn refresh_hud(&mut self) {
        let report = self.report.borrow();
        self.hud.set("score", UiValue::Int(report.score));
        self.hud.set("wave", UiValue::Int(self.wave as i64));
    }
}

impl Scene for GameScene {
    fn name(&self) -> &str {
        names::GAME
    }

    fn initialize(&mut self, services: &mut EngineServices) {
        if self.shot_sfx.is_none() {
            self.shot_sfx = services.audio.load("assets/sounds/shot.wav").ok();
        }
        if self.banner_sfx.is_none() {
            self.banner_sfx = services.audio.load("assets/sounds/wave.wav").ok();
        }
        *self.report.borrow_mut() = Default::default();
        self.wave = 1;
        self.transitions.begin();
        // The first announcement waits for the enter wipe; rearm it idle.
        self.announce_is_clear = false;
        let last = self.wave == self.total_waves;
        self.banner.reset(self.wave, last, false);
        self.phase = GamePhase::Announce;
        self.refresh_hud();
    }

    fn finalize(&mut self, services: &mut EngineServices) {
        services.audio.stop_all();
        self.transitions.reset();
        self.banner.stop();
        self.combat.stop();
    }

    fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        services: &mut EngineServices,
    ) -> SceneDirective {
        self.transitions.advance(dt);
        self.banner.update(dt);
        self.combat.advance(dt);

        match self.phase {
            GamePhase::Announce => {
                // Hold the first announcement until the enter wipe is done.
                if self.transitions.phase() == ScenePhase::Interactive
                    && !self.banner.is_playing()
                    && !self.banner.is_finished()
                {
                    self.banner.play();
                }
                if self.banner.just_revealed() {
                    if let Some(sfx) = self.banner_sfx {
                        services.audio.play(sfx, PlayParams::one_shot(0.7));
                    }
                }
                if self.banner.is_finished() {
                    if self.announce_is_clear {
                        self.phase = GamePhase::Leaving;
                        self.transitions.request_exit();
                    } else {
                        self.combat.play();
                        self.phase = GamePhase::Combat;
                    }
                }
            }
            GamePhase::Combat => {
                if input.action_pressed(Action::Fire) {
                    self.report.borrow_mut().score += Self::HIT_SCORE;
                    if let Some(sfx) = self.shot_sfx {
                        services.audio.play(sfx, PlayParams::one_shot(0.5));
                    }
                }
                if self.combat.just_finished() {
                    self.on_wave_complete();
                }
            }
            GamePhase::Leaving => {}
        }

        self.refresh_hud();

        if self.transitions.exit_finished() {
            return SceneDirective::Switch(names::RESULT.to_string());
        }
        SceneDirective::Continue
    }

    fn draw(&self, surface: &mut dyn Surface) {
        // HUD corners.
        if let Some(score) = self.hud.int_value("score") {
            surface.draw_text(
                &TextBlock::new(
                    format!("SCORE {score:>8}"),
                    self.viewport.min + Vec2::new(24.0, 24.0),
                    Rgba::WHITE,
                )
                .aligned(HAlign::Left, VAlign::Top),
            );
        }
        if let Some(wave) = self.hud.int_value("wave") {
            surface.draw_text(
                &TextBlock::new(
                    format!("WAVE {wave}/{}", self.total_waves),
                    Vec2::new(self.viewport.max.x - 24.0, self.viewport.min.y + 24.0),
                    Rgba::WHITE,
                )
                .aligned(HAlign::Right, VAlign::Top),
            );
        }

        self.banner.draw(surface);
        self.transitions.draw(surface);
    }
}
