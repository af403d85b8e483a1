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

//! Frame timing: a wall-clock stopwatch and the per-frame delta-time contract.

use std::time::{Duration, Instant};

/// Measures wall-clock time from its creation (or last [`restart`](Stopwatch::restart)).
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a new stopwatch, started immediately.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Returns the elapsed time since the stopwatch was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the elapsed time in seconds as `f32`.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Resets the start point to now and returns the time elapsed up to the
    /// reset. Used by frame loops to read one frame's delta.
    #[inline]
    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.start_time;
        self.start_time = now;
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// The per-frame delta-time source consumed by the engine's update pass.
///
/// Implementations yield the length of the frame that just ended, in seconds.
/// Backends provide a wall-clock implementation; tests and headless playback
/// use [`FixedStep`].
pub trait DeltaSource {
    /// Returns the delta for the next frame, in seconds.
    fn next_delta(&mut self) -> f32;
}

/// A deterministic [`DeltaSource`] yielding a constant step.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    step: f32,
}

impl FixedStep {
    /// A 60 Hz step.
    pub const SIXTY_HZ: Self = Self { step: 1.0 / 60.0 };

    /// Creates a fixed step of `step` seconds. Negative steps are treated as zero.
    #[inline]
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
        }
    }
}

impl DeltaSource for FixedStep {
    #[inline]
    fn next_delta(&mut self) -> f32 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn stopwatch_advances() {
        let watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(10));
        assert!(watch.elapsed() >= Duration::from_millis(10));
        assert!(watch.elapsed_secs() > 0.0);
    }

    #[test]
    fn restart_returns_elapsed_and_resets() {
        let mut watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(10));
        let first = watch.restart();
        assert!(first >= Duration::from_millis(10));
        // After the restart the elapsed time starts over.
        assert!(watch.elapsed() < first);
    }

    #[test]
    fn fixed_step_is_constant() {
        let mut step = FixedStep::SIXTY_HZ;
        let a = step.next_delta();
        let b = step.next_delta();
        assert_eq!(a, b);
        assert!((a - 1.0 / 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fixed_step_rejects_negative() {
        let mut step = FixedStep::new(-0.5);
        assert_eq!(step.next_delta(), 0.0);
    }
}
