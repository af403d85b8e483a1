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

//! The wall-clock frame delta source.

use vesper_core::time::{DeltaSource, Stopwatch};

/// A [`DeltaSource`] measuring real elapsed time between frames.
///
/// A single frame's delta is capped so a debugger stop or system stall
/// cannot fast-forward every animation on the next frame.
#[derive(Debug)]
pub struct WallClock {
    watch: Stopwatch,
    max_delta: f32,
}

impl WallClock {
    /// The default cap on one frame's delta, in seconds.
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    /// Creates a clock with the default delta cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    /// Creates a clock capping each frame's delta at `max_delta` seconds.
    #[must_use]
    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            watch: Stopwatch::new(),
            max_delta: max_delta.max(0.0),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaSource for WallClock {
    fn next_delta(&mut self) -> f32 {
        let raw = self.watch.restart().as_secs_f32();
        if raw > self.max_delta {
            log::trace!("Frame delta {raw:.3}s capped to {:.3}s", self.max_delta);
            self.max_delta
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn deltas_track_real_time() {
        let mut clock = WallClock::new();
        thread::sleep(Duration::from_millis(20));
        let dt = clock.next_delta();
        assert!(dt >= 0.02);
        assert!(dt <= WallClock::DEFAULT_MAX_DELTA);
    }

    #[test]
    fn long_stalls_are_capped() {
        let mut clock = WallClock::with_max_delta(0.005);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.next_delta(), 0.005);
    }
}
