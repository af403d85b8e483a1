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

//! The elapsed-time state machine shared by every animation.

/// Tracks the play state and elapsed time of a single timed animation.
///
/// The clock moves through three states: *idle* (not playing, not finished),
/// *playing*, and *finished*. Every animation composes one `AnimationClock`
/// and derives its visual parameters purely from [`elapsed`](Self::elapsed),
/// so replaying an update at the same elapsed time always reproduces the same
/// visual state.
///
/// Invariants:
/// - `elapsed` never exceeds `duration`.
/// - [`just_finished`](Self::just_finished) is true only on the exact frame
///   the clock transitions into the finished state; the next
///   [`advance`](Self::advance) clears it.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    duration: f32,
    elapsed: f32,
    /// The elapsed value of the previous frame, for edge detection.
    previous: f32,
    playing: bool,
    finished: bool,
    just_finished: bool,
}

impl AnimationClock {
    /// Creates an idle clock with the given duration in seconds.
    ///
    /// A negative duration is treated as zero: such a clock reports a
    /// progress of `1.0` and finishes on the first advanced frame.
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            previous: 0.0,
            playing: false,
            finished: false,
            just_finished: false,
        }
    }

    /// Starts playback from the beginning. Valid from any state: a finished
    /// or paused clock restarts at zero with all finish flags cleared.
    pub fn play(&mut self) {
        self.elapsed = 0.0;
        self.previous = 0.0;
        self.finished = false;
        self.just_finished = false;
        self.playing = true;
    }

    /// Resets the clock to idle: elapsed time zero, not playing, not finished.
    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.previous = 0.0;
        self.playing = false;
        self.finished = false;
        self.just_finished = false;
    }

    /// Suspends playback. Elapsed time and finish flags are untouched.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Continues playback from the paused position. No-op once finished;
    /// a finished clock only restarts through [`play`](Self::play).
    pub fn resume(&mut self) {
        if !self.finished {
            self.playing = true;
        }
    }

    /// Force-jumps to the finished state: elapsed time is set to the full
    /// duration and the one-frame finish trigger fires on this call.
    pub fn finish(&mut self) {
        self.previous = self.elapsed;
        self.elapsed = self.duration;
        self.playing = false;
        self.finished = true;
        self.just_finished = true;
    }

    /// Advances the clock by one frame's delta, in seconds.
    ///
    /// When the clock is not playing, no time advances and the one-frame
    /// finish trigger is cleared. When the accumulated time reaches or
    /// passes the duration, it is clamped to the duration, the clock
    /// transitions to finished, and the trigger fires for exactly this frame.
    pub fn advance(&mut self, dt: f32) {
        if !self.playing {
            self.just_finished = false;
            return;
        }
        self.previous = self.elapsed;
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.playing = false;
            self.finished = true;
            self.just_finished = true;
        } else {
            self.just_finished = false;
        }
    }

    /// The completion ratio `elapsed / duration`.
    ///
    /// A zero-length clock reports `1.0` (degenerate instantaneous
    /// animation), so callers never divide by zero.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    /// One-frame edge detector: true exactly on the frame where the elapsed
    /// time crossed `boundary`, i.e. the previous frame was still before it
    /// and the current frame is at or past it.
    ///
    /// This is the same previous-vs-current comparison the finish trigger
    /// uses, generalized to arbitrary phase boundaries.
    #[inline]
    pub fn just_crossed(&self, boundary: f32) -> bool {
        self.previous < boundary && self.elapsed >= boundary
    }

    /// The configured duration in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// The elapsed playback time in seconds, clamped to the duration.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the clock is currently advancing.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the clock has reached the end of its duration.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True only on the exact frame the clock finished.
    #[inline]
    pub fn just_finished(&self) -> bool {
        self.just_finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    const STEP: f32 = 1.0 / 60.0;

    #[test]
    fn new_clock_is_idle() {
        let clock = AnimationClock::new(2.0);
        assert!(!clock.is_playing());
        assert!(!clock.is_finished());
        assert!(!clock.just_finished());
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn play_resets_and_starts() {
        let mut clock = AnimationClock::new(1.0);
        clock.play();
        clock.advance(0.5);
        clock.play();
        assert!(clock.is_playing());
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_finished());
    }

    #[test]
    fn play_restarts_a_finished_clock() {
        let mut clock = AnimationClock::new(0.5);
        clock.play();
        clock.advance(1.0);
        assert!(clock.is_finished());
        clock.play();
        assert!(clock.is_playing());
        assert!(!clock.is_finished());
        assert!(!clock.just_finished());
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn advance_without_play_does_nothing() {
        let mut clock = AnimationClock::new(1.0);
        clock.advance(0.25);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_finished());
    }

    #[test]
    fn finish_trigger_fires_exactly_once() {
        let mut clock = AnimationClock::new(1.0);
        clock.play();
        let mut trigger_frames = 0;
        for _ in 0..120 {
            clock.advance(STEP);
            if clock.just_finished() {
                trigger_frames += 1;
            }
        }
        assert_eq!(trigger_frames, 1);
        assert!(clock.is_finished());
        assert!(!clock.just_finished());
        assert_eq!(clock.elapsed(), clock.duration());
    }

    #[test]
    fn elapsed_never_exceeds_duration() {
        let mut clock = AnimationClock::new(0.1);
        clock.play();
        clock.advance(10.0);
        assert_eq!(clock.elapsed(), 0.1);
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn progress_is_monotonic_while_playing() {
        let mut clock = AnimationClock::new(1.5);
        clock.play();
        let mut last = clock.progress();
        while !clock.is_finished() {
            clock.advance(STEP);
            assert!(clock.progress() >= last);
            last = clock.progress();
        }
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn pause_freezes_elapsed_and_resume_continues() {
        let mut clock = AnimationClock::new(2.0);
        clock.play();
        clock.advance(0.5);
        clock.pause();
        let frozen = clock.elapsed();
        for _ in 0..10 {
            clock.advance(STEP);
        }
        assert_eq!(clock.elapsed(), frozen);
        assert!(!clock.is_finished());

        clock.resume();
        clock.advance(STEP);
        assert!(clock.elapsed() > frozen);
    }

    #[test]
    fn resume_after_finish_is_a_no_op() {
        let mut clock = AnimationClock::new(0.2);
        clock.play();
        clock.advance(1.0);
        clock.resume();
        assert!(!clock.is_playing());
        assert!(clock.is_finished());
    }

    #[test]
    fn stop_resets_to_idle() {
        let mut clock = AnimationClock::new(1.0);
        clock.play();
        clock.advance(2.0);
        clock.stop();
        assert!(!clock.is_playing());
        assert!(!clock.is_finished());
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn finish_jumps_to_end_and_fires_trigger() {
        let mut clock = AnimationClock::new(4.0);
        clock.play();
        clock.advance(1.0);
        clock.finish();
        assert_eq!(clock.elapsed(), 4.0);
        assert!(clock.is_finished());
        assert!(clock.just_finished());
        // The trigger is transient: the next update clears it.
        clock.advance(STEP);
        assert!(!clock.just_finished());
    }

    #[test]
    fn zero_duration_progress_is_one() {
        let clock = AnimationClock::new(0.0);
        assert_eq!(clock.progress(), 1.0);

        let negative = AnimationClock::new(-3.0);
        assert_eq!(negative.progress(), 1.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_advanced_frame() {
        let mut clock = AnimationClock::new(0.0);
        clock.play();
        clock.advance(STEP);
        assert!(clock.is_finished());
        assert!(clock.just_finished());
    }

    #[test]
    fn just_crossed_detects_boundary_once() {
        let mut clock = AnimationClock::new(1.0);
        clock.play();
        let mut crossings = 0;
        for _ in 0..90 {
            clock.advance(STEP);
            if clock.just_crossed(0.5) {
                crossings += 1;
            }
        }
        assert_eq!(crossings, 1);
    }

    #[test]
    fn just_crossed_sees_a_forced_finish_jump() {
        let mut clock = AnimationClock::new(4.0);
        clock.play();
        clock.advance(1.0);
        clock.finish();
        // The jump from 1.0 to 4.0 crosses any boundary in between.
        assert!(clock.just_crossed(3.0));
        assert!(!clock.just_crossed(0.5));
    }

    #[test]
    fn fixed_step_accumulates_to_duration() {
        let mut clock = AnimationClock::new(4.0);
        clock.play();
        let mut frames = 0;
        while !clock.is_finished() {
            clock.advance(STEP);
            frames += 1;
            assert!(frames <= 242, "clock failed to finish in ~240 frames");
        }
        assert!(approx_eq(clock.elapsed(), 4.0));
    }
}
