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

//! The scripted player: key events published at fixed frame numbers.

use vesper_core::input::InputEvent;

/// A frame-stamped input script. Frames are 1/60 s ticks.
pub struct InputScript {
    /// `(frame, event)` pairs, sorted by frame.
    timeline: Vec<(u64, InputEvent)>,
    cursor: usize,
}

impl InputScript {
    /// Creates a script from `(frame, event)` pairs; pairs are sorted here
    /// so callers can list them in any order.
    pub fn new(mut timeline: Vec<(u64, InputEvent)>) -> Self {
        timeline.sort_by_key(|(frame, _)| *frame);
        Self {
            timeline,
            cursor: 0,
        }
    }

    /// Publishes every event scheduled for `frame`.
    pub fn pump(&mut self, frame: u64, sender: &flume::Sender<InputEvent>) {
        while let Some((at, event)) = self.timeline.get(self.cursor) {
            if *at > frame {
                break;
            }
            if sender.send(event.clone()).is_err() {
                log::error!("Input script: event bus disconnected");
                return;
            }
            self.cursor += 1;
        }
    }
}

fn press(frame: u64, key: &str) -> [(u64, InputEvent); 2] {
    [
        (
            frame,
            InputEvent::KeyPressed {
                key_code: key.to_string(),
            },
        ),
        (
            frame + 3,
            InputEvent::KeyReleased {
                key_code: key.to_string(),
            },
        ),
    ]
}

/// The demo run: confirm through the title, fire during both combat
/// windows, then quit from the result screen.
///
/// Frame numbers leave generous margins around the transition and banner
/// timings so the script stays valid when durations are tweaked a little.
pub fn demo_script() -> InputScript {
    let mut timeline = Vec::new();
    // Title: confirm once the enter fade (1 s) is long done.
    timeline.extend(press(150, "Enter"));
    // Wave 1 combat opens after the wipe (1 s) and banner (3 s).
    for frame in [480, 510, 540, 570] {
        timeline.extend(press(frame, "KeyJ"));
    }
    // Wave 2 combat, one banner later.
    for frame in [900, 930, 960] {
        timeline.extend(press(frame, "KeyJ"));
    }
    // Result: quit once the readout has settled.
    timeline.extend(press(1700, "Escape"));
    InputScript::new(timeline)
}
