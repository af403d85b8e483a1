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

//! Full-screen fade transitions.

use super::clock::AnimationClock;
use super::easing::{interpolate, Ease};
use super::Animation;
use crate::math::{Rect, Rgba};
use crate::render::{Quad, Surface};

/// Which way the cover's opacity moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// The cover starts opaque and dissolves, revealing the scene
    /// underneath (used as a scene's enter transition).
    In,
    /// The cover starts transparent and becomes opaque, hiding the scene
    /// (used as a scene's exit transition).
    Out,
}

/// A full-screen cover quad whose opacity eases over the whole duration.
///
/// Fade-in runs opacity 1 → 0, fade-out 0 → 1, both through an
/// ease-in-out curve. The opacity is a pure function of the clock's
/// elapsed time.
#[derive(Debug, Clone)]
pub struct Fade {
    clock: AnimationClock,
    direction: FadeDirection,
    cover: Rect,
    color: Rgba,
    alpha: f32,
}

impl Fade {
    const EASE: Ease = Ease::InOutQuad;

    /// Creates a fade covering `cover` (normally the full viewport).
    pub fn new(direction: FadeDirection, duration: f32, cover: Rect, color: Rgba) -> Self {
        let mut fade = Self {
            clock: AnimationClock::new(duration),
            direction,
            cover,
            color,
            alpha: 0.0,
        };
        fade.alpha = fade.alpha_at(0.0);
        fade
    }

    /// A black enter fade: opaque → transparent.
    pub fn fade_in(duration: f32, cover: Rect) -> Self {
        Self::new(FadeDirection::In, duration, cover, Rgba::BLACK)
    }

    /// A black exit fade: transparent → opaque.
    pub fn fade_out(duration: f32, cover: Rect) -> Self {
        Self::new(FadeDirection::Out, duration, cover, Rgba::BLACK)
    }

    /// The cover's current opacity.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    fn alpha_at(&self, progress: f32) -> f32 {
        match self.direction {
            FadeDirection::In => interpolate(1.0, 0.0, progress, Self::EASE),
            FadeDirection::Out => interpolate(0.0, 1.0, progress, Self::EASE),
        }
    }
}

impl Animation for Fade {
    fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.alpha = self.alpha_at(self.clock.progress());
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_quad(&Quad::from_rect(
            self.cover,
            self.color.with_alpha(self.alpha),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Extent2D, Vec2};

    const STEP: f32 = 1.0 / 60.0;

    fn viewport() -> Rect {
        Extent2D::new(1280, 720).as_rect()
    }

    #[test]
    fn fade_in_starts_opaque_even_before_playing() {
        let fade = Fade::fade_in(4.0, viewport());
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn fade_in_strictly_decreases_and_ends_at_zero() {
        // 4 s at 1/60 s steps, ~240 frames.
        let mut fade = Fade::fade_in(4.0, viewport());
        fade.play();

        let mut last = fade.alpha();
        while !fade.is_finished() {
            fade.update(STEP);
            assert!(
                fade.alpha() < last,
                "alpha failed to decrease at t={}",
                fade.elapsed()
            );
            if !fade.is_finished() {
                assert!(fade.alpha() > 0.0, "alpha hit zero before the final frame");
            }
            last = fade.alpha();
        }
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn fade_out_ends_fully_opaque() {
        let mut fade = Fade::fade_out(1.0, viewport());
        fade.play();
        assert_eq!(fade.alpha(), 0.0);
        while !fade.is_finished() {
            fade.update(STEP);
        }
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn update_is_idempotent_at_a_fixed_elapsed_time() {
        let mut fade = Fade::fade_in(2.0, viewport());
        fade.play();
        fade.update(0.5);
        let alpha = fade.alpha();
        // Pause: further updates advance no time and recompute the same state.
        fade.pause();
        fade.update(STEP);
        fade.update(STEP);
        assert_eq!(fade.alpha(), alpha);
    }

    #[test]
    fn draw_submits_one_cover_quad() {
        struct CountingSurface {
            quads: Vec<Quad>,
        }
        impl Surface for CountingSurface {
            fn viewport(&self) -> Extent2D {
                Extent2D::new(1280, 720)
            }
            fn draw_quad(&mut self, quad: &Quad) {
                self.quads.push(*quad);
            }
            fn draw_text(&mut self, _text: &crate::render::TextBlock) {}
        }

        let mut fade = Fade::fade_out(1.0, viewport());
        fade.play();
        fade.update(0.5);

        let mut surface = CountingSurface { quads: Vec::new() };
        fade.draw(&mut surface);
        assert_eq!(surface.quads.len(), 1);
        let quad = &surface.quads[0];
        assert_eq!(quad.corners[0], Vec2::ZERO);
        assert!(quad.color.a > 0.0 && quad.color.a < 1.0);
    }
}
