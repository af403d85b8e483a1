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

//! The result screen: the staggered score readout, then confirm to play
//! again or cancel to quit.

use vesper_core::animation::{Animation, Fade, ResultPanel};
use vesper_core::audio::{PlayParams, SoundId};
use vesper_core::input::{Action, InputState};
use vesper_core::math::Rect;
use vesper_core::render::Surface;
use vesper_core::scene::{EngineServices, Scene, SceneDirective, ScenePhase, TransitionPair};

use super::names;
use crate::report::SharedReport;

pub struct ResultScene {
    viewport: Rect,
    transitions: TransitionPair,
    panel: ResultPanel,
    report: SharedReport,
    decide_sfx: Option<SoundId>,
}

impl ResultScene {
    const FADE_TIME: f32 = 0.75;

    pub fn new(viewport: Rect, report: SharedReport) -> Box<Self> {
        Box::new(Self {
            viewport,
            transitions: TransitionPair::new(
                Box::new(Fade::fade_in(Self::FADE_TIME, viewport)),
                Box::new(Fade::fade_out(Self::FADE_TIME, viewport)),
            ),
            panel: ResultPanel::staggered(viewport, &[]),
            report,
            decide_sfx: None,
        })
    }
}

impl Scene for ResultScene {
    fn name(&self) -> &str {
        names::RESULT
    }

    fn initialize(&mut self, services: &mut EngineServices) {
        if self.decide_sfx.is_none() {
            self.decide_sfx = services.audio.load("assets/sounds/decide.wav").ok();
        }
        // The panel lines snapshot the finished run.
        let (score, waves) = {
            let report = self.report.borrow();
            (report.score, report.waves_cleared)
        };
        self.panel = ResultPanel::staggered(
            self.viewport,
            &[
                "RESULT",
                &format!("SCORE  {score}"),
                &format!("WAVES  {waves}"),
                "ENTER: RETRY   ESC: QUIT",
            ],
        );
        self.transitions.begin();
    }

    fn finalize(&mut self, services: &mut EngineServices) {
        services.audio.stop_all();
        self.transitions.reset();
        self.panel.stop();
    }

    fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        services: &mut EngineServices,
    ) -> SceneDirective {
        self.transitions.advance(dt);
        self.panel.update(dt);

        // Roll the readout once the enter fade has revealed the screen.
        if self.transitions.phase() == ScenePhase::Interactive
            && !self.panel.is_playing()
            && !self.panel.is_finished()
        {
            self.panel.play();
        }

        // Input is honored only after the readout has settled.
        if self.panel.is_finished() {
            if input.action_pressed(Action::Cancel) {
                log::info!("Result: quit requested");
                return SceneDirective::Quit;
            }
            if input.action_pressed(Action::Confirm) && self.transitions.request_exit() {
                if let Some(sfx) = self.decide_sfx {
                    services.audio.play(sfx, PlayParams::one_shot(0.9));
                }
            }
        }
        if self.transitions.exit_finished() {
            return SceneDirective::Switch(names::TITLE.to_string());
        }
        SceneDirective::Continue
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.panel.draw(surface);
        self.transitions.draw(surface);
    }
}
