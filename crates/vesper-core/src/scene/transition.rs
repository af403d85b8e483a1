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

//! The per-scene enter/exit transition protocol.

use crate::animation::Animation;
use crate::render::Surface;

/// Where a scene is in its transition protocol.
///
/// Every activation walks the same three states:
/// entering (enter animation playing) → interactive (enter finished, exit
/// not started) → exiting (exit animation playing). When the exit
/// animation finishes the scene requests the switch to its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// The enter transition is still covering the scene.
    Entering,
    /// Transitions are idle; the scene reacts to input.
    Interactive,
    /// The exit transition is hiding the scene.
    Exiting,
}

/// Owns a scene's enter and exit transition animations and enforces the
/// protocol between them.
///
/// The exit transition can only start once the enter transition has
/// finished and the exit has not already started — repeated confirm
/// presses during a transition do nothing.
pub struct TransitionPair {
    enter: Box<dyn Animation>,
    exit: Box<dyn Animation>,
}

impl TransitionPair {
    /// Creates the pair. The animations are constructed once per scene;
    /// [`begin`](Self::begin) rearms them on every activation.
    pub fn new(enter: Box<dyn Animation>, exit: Box<dyn Animation>) -> Self {
        Self { enter, exit }
    }

    /// Rearms both animations and starts the enter transition. Called from
    /// the owning scene's `initialize`.
    pub fn begin(&mut self) {
        self.enter.stop();
        self.exit.stop();
        self.enter.play();
    }

    /// Resets both animations to idle. Called from the owning scene's
    /// `finalize`.
    pub fn reset(&mut self) {
        self.enter.stop();
        self.exit.stop();
    }

    /// Advances both animations by one frame.
    pub fn advance(&mut self, dt: f32) {
        self.enter.update(dt);
        self.exit.update(dt);
    }

    /// The scene's current protocol phase.
    pub fn phase(&self) -> ScenePhase {
        if self.exit.is_playing() || self.exit.is_finished() {
            ScenePhase::Exiting
        } else if self.enter.is_finished() {
            ScenePhase::Interactive
        } else {
            ScenePhase::Entering
        }
    }

    /// Whether the scene is in the interactive phase and may react to a
    /// request to leave.
    pub fn can_exit(&self) -> bool {
        self.enter.is_finished() && !self.exit.is_playing() && !self.exit.is_finished()
    }

    /// Starts the exit transition if the protocol allows it. Returns
    /// whether the transition started.
    pub fn request_exit(&mut self) -> bool {
        if self.can_exit() {
            self.exit.play();
            true
        } else {
            false
        }
    }

    /// Whether the exit transition has completed — the owning scene should
    /// now request its switch.
    pub fn exit_finished(&self) -> bool {
        self.exit.is_finished()
    }

    /// Draws whichever transition is currently visible over the scene.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.enter.is_finished() {
            self.enter.draw(surface);
        }
        if self.exit.is_playing() || self.exit.is_finished() {
            // Keep drawing a finished exit cover so the switch frame stays
            // hidden until the next scene's enter transition takes over.
            self.exit.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Fade;
    use crate::math::{Extent2D, Rect};

    const STEP: f32 = 1.0 / 60.0;

    fn viewport() -> Rect {
        Extent2D::new(1280, 720).as_rect()
    }

    fn pair() -> TransitionPair {
        TransitionPair::new(
            Box::new(Fade::fade_in(0.5, viewport())),
            Box::new(Fade::fade_out(0.5, viewport())),
        )
    }

    #[test]
    fn protocol_walks_entering_interactive_exiting() {
        let mut t = pair();
        t.begin();
        assert_eq!(t.phase(), ScenePhase::Entering);
        assert!(!t.can_exit());

        while t.phase() == ScenePhase::Entering {
            t.advance(STEP);
        }
        assert_eq!(t.phase(), ScenePhase::Interactive);
        assert!(t.can_exit());

        assert!(t.request_exit());
        assert_eq!(t.phase(), ScenePhase::Exiting);

        while !t.exit_finished() {
            t.advance(STEP);
        }
        assert_eq!(t.phase(), ScenePhase::Exiting);
    }

    #[test]
    fn exit_cannot_start_during_enter() {
        let mut t = pair();
        t.begin();
        assert!(!t.request_exit());
        assert_eq!(t.phase(), ScenePhase::Entering);
    }

    #[test]
    fn exit_request_is_idempotent() {
        let mut t = pair();
        t.begin();
        while t.phase() == ScenePhase::Entering {
            t.advance(STEP);
        }
        assert!(t.request_exit());
        t.advance(STEP);
        // A second confirm mid-exit neither restarts nor errors.
        assert!(!t.request_exit());
        let elapsed = t.exit.elapsed();
        assert!(elapsed > 0.0);
    }

    #[test]
    fn begin_rearms_after_a_full_cycle() {
        let mut t = pair();
        t.begin();
        while !t.exit_finished() {
            t.advance(STEP);
            if t.can_exit() {
                t.request_exit();
            }
        }
        // Re-activation: the protocol starts over from Entering.
        t.begin();
        assert_eq!(t.phase(), ScenePhase::Entering);
        assert!(!t.exit_finished());
    }
}
