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

//! Timed animations: the shared elapsed-time state machine and the concrete
//! visual animations built on it.
//!
//! Every animation composes an [`AnimationClock`] rather than inheriting
//! behavior from a base class. The [`Animation`] trait exposes the shared
//! play/pause/stop/finish control surface through provided methods that
//! delegate to the clock, so a variant only implements `update` and `draw`.
//! Updates derive all visual parameters purely from the clock's elapsed
//! time, which makes recomputation idempotent: pausing, resuming, or
//! re-running a frame never drifts the visuals.

mod clock;
mod easing;
mod fade;
mod result_panel;
mod wave_banner;
mod wipe;

pub use self::clock::AnimationClock;
pub use self::easing::{interpolate, Ease, Span};
pub use self::fade::{Fade, FadeDirection};
pub use self::result_panel::{PanelLine, ResultPanel};
pub use self::wave_banner::{WaveBanner, WaveBannerPhase};
pub use self::wipe::{RectWipe, WipeDirection};

use crate::render::Surface;

/// A timed visual animation driven by per-frame deltas.
///
/// Implementors expose their composed [`AnimationClock`] and the trait
/// provides the whole control surface on top of it. `update` must advance
/// the clock exactly once per frame (through
/// [`AnimationClock::advance`]) before deriving visual state.
pub trait Animation {
    /// The composed clock, read-only.
    fn clock(&self) -> &AnimationClock;

    /// The composed clock, mutable.
    fn clock_mut(&mut self) -> &mut AnimationClock;

    /// Advances the animation by one frame and recomputes visual state.
    fn update(&mut self, dt: f32);

    /// Submits the animation's current visual state to the surface.
    fn draw(&self, surface: &mut dyn Surface);

    /// Starts (or restarts) playback from the beginning.
    fn play(&mut self) {
        self.clock_mut().play();
    }

    /// Resets to idle.
    fn stop(&mut self) {
        self.clock_mut().stop();
    }

    /// Suspends playback, keeping the current position.
    fn pause(&mut self) {
        self.clock_mut().pause();
    }

    /// Continues from a paused position; no-op once finished.
    fn resume(&mut self) {
        self.clock_mut().resume();
    }

    /// Force-jumps to the finished state.
    fn finish(&mut self) {
        self.clock_mut().finish();
    }

    /// Whether the animation is currently advancing.
    fn is_playing(&self) -> bool {
        self.clock().is_playing()
    }

    /// Whether the animation has reached its end.
    fn is_finished(&self) -> bool {
        self.clock().is_finished()
    }

    /// True only on the exact frame the animation finished.
    fn just_finished(&self) -> bool {
        self.clock().just_finished()
    }

    /// Completion ratio in `[0.0, 1.0]`; `1.0` for zero-length animations.
    fn progress(&self) -> f32 {
        self.clock().progress()
    }

    /// Elapsed playback time in seconds.
    fn elapsed(&self) -> f32 {
        self.clock().elapsed()
    }

    /// Total duration in seconds.
    fn duration(&self) -> f32 {
        self.clock().duration()
    }
}
