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

// Vesper sandbox: a headless wave-shooter run through the scene manager.
// A scripted input feed walks title -> game -> result and quits, printing
// scene flow and draw statistics through the logger.

mod report;
mod scenes;
mod script;

use anyhow::Result;
use vesper_core::config::EngineConfig;
use vesper_core::event::EventBus;
use vesper_core::input::{InputEvent, InputState};
use vesper_core::scene::{EngineServices, SceneDirective, SceneManager};
use vesper_core::time::{DeltaSource, FixedStep};
use vesper_infra::{LogMixer, RecordingSurface};

use crate::scenes::{GameScene, ResultScene, TitleScene};
use crate::script::demo_script;

const CONFIG_PATH: &str = "sandbox.json";
const DEFAULT_MAX_FRAMES: u64 = 3600;

fn load_config() -> EngineConfig {
    match EngineConfig::load(CONFIG_PATH) {
        Ok(config) => {
            log::info!("Loaded configuration from {CONFIG_PATH}");
            config
        }
        Err(e) => {
            log::info!("Using default configuration ({e})");
            EngineConfig::default()
        }
    }
}

fn max_frames() -> u64 {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--frames" {
            if let Some(value) = args.next() {
                match value.parse() {
                    Ok(frames) => return frames,
                    Err(_) => log::warn!("Ignoring invalid --frames value '{value}'"),
                }
            }
        }
    }
    DEFAULT_MAX_FRAMES
}

fn main() -> Result<()> {
    vesper_infra::logging::init();
    log::info!("Vesper sandbox starting...");

    let config = load_config();
    let viewport = config.window.size.as_rect();

    // Backends: a recording surface and a logging mixer stand in for the
    // GPU and audio device.
    let mut surface = RecordingSurface::new(config.window.size);
    let mut mixer = LogMixer::new();
    let mut input = InputState::with_bindings(config.bindings.clone());
    let mut step = FixedStep::SIXTY_HZ;

    // The scripted "player" publishes events through the same bus a
    // windowing backend would.
    let bus = EventBus::<InputEvent>::new();
    let mut script = demo_script();

    let shared_report = report::shared();
    let mut manager = SceneManager::new();
    {
        let mut services = EngineServices {
            resources: &mut surface,
            audio: &mut mixer,
        };
        manager.add_scene(TitleScene::new(viewport), &mut services);
        manager.add_scene(
            GameScene::new(viewport, 2, shared_report.clone()),
            &mut services,
        );
        manager.add_scene(
            ResultScene::new(viewport, shared_report.clone()),
            &mut services,
        );
    }

    let bound = max_frames();
    let mut frames: u64 = 0;
    loop {
        if frames >= bound {
            log::warn!("Frame bound {bound} reached; stopping");
            break;
        }

        script.pump(frames, &bus.sender());
        input.begin_frame();
        for event in bus.drain() {
            input.apply(&event);
        }

        let dt = step.next_delta();
        let directive = {
            let mut services = EngineServices {
                resources: &mut surface,
                audio: &mut mixer,
            };
            manager.update_active(dt, &input, &mut services)
        };

        surface.begin_frame();
        manager.draw_active(&mut surface);

        if frames % 300 == 0 {
            log::info!(
                "frame {frames}: scene={:?} draws={} score={}",
                manager.active_scene_name(),
                surface.commands().len(),
                shared_report.borrow().score
            );
        }

        frames += 1;
        if directive == SceneDirective::Quit {
            log::info!("Quit directive received");
            break;
        }
    }

    let report = shared_report.borrow();
    log::info!(
        "Run complete after {frames} frames: score={} waves_cleared={}",
        report.score,
        report.waves_cleared
    );
    Ok(())
}
