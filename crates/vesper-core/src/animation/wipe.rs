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

//! Two-layer rectangle sweep transitions toward the vertical center.

use super::clock::AnimationClock;
use super::easing::{interpolate, Ease, Span};
use super::Animation;
use crate::math::{Rect, Rgba, Vec2};
use crate::render::{Quad, Surface};

/// Which way the covering rectangles sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeDirection {
    /// The covers retract from full height toward the vertical center,
    /// revealing the scene (enter transition).
    Open,
    /// The covers extend from the vertical center back to full height,
    /// hiding the scene (exit transition).
    Close,
}

/// A two-stage sweep transition: a black cover spanning the whole duration
/// and a green cover whose sweep starts a fraction of the duration later,
/// so it visibly trails the black one.
///
/// Both rectangles hang from the top edge of the viewport; their bottom
/// edges ease independently between the viewport bottom (full height) and
/// the vertical center (half height).
#[derive(Debug, Clone)]
pub struct RectWipe {
    clock: AnimationClock,
    direction: WipeDirection,
    viewport: Rect,
    back_color: Rgba,
    front_color: Rgba,
    front_span: Span,
    back_rect: Rect,
    front_rect: Rect,
}

impl RectWipe {
    const EASE: Ease = Ease::InOutQuad;
    /// Fraction of the duration after which the trailing layer starts
    /// moving. Kept between 0.3 and 0.5 so the two stages stay readable.
    const DEFAULT_LAG: f32 = 0.4;

    /// Creates a wipe across `viewport` with the default colors and lag.
    pub fn new(direction: WipeDirection, duration: f32, viewport: Rect) -> Self {
        Self::with_lag(direction, duration, viewport, Self::DEFAULT_LAG)
    }

    /// Creates a wipe whose trailing layer starts `lag` (a fraction of the
    /// duration, clamped to `[0.0, 1.0]`) after the leading one.
    pub fn with_lag(direction: WipeDirection, duration: f32, viewport: Rect, lag: f32) -> Self {
        let duration = duration.max(0.0);
        let mut wipe = Self {
            clock: AnimationClock::new(duration),
            direction,
            viewport,
            back_color: Rgba::BLACK,
            front_color: Rgba::GREEN,
            front_span: Span::new(duration * lag.clamp(0.0, 1.0), duration),
            back_rect: viewport,
            front_rect: viewport,
        };
        wipe.recompute(0.0);
        wipe
    }

    /// The leading (black) cover's current rectangle.
    #[inline]
    pub fn back_rect(&self) -> Rect {
        self.back_rect
    }

    /// The trailing (green) cover's current rectangle.
    #[inline]
    pub fn front_rect(&self) -> Rect {
        self.front_rect
    }

    /// The bottom edge a layer has at the given eased ratio.
    fn edge_at(&self, eased: f32) -> f32 {
        let full = self.viewport.max.y;
        let half = self.viewport.center().y;
        match self.direction {
            WipeDirection::Open => interpolate(full, half, eased, Ease::Linear),
            WipeDirection::Close => interpolate(half, full, eased, Ease::Linear),
        }
    }

    fn cover_rect(&self, bottom: f32) -> Rect {
        Rect::from_min_max(self.viewport.min, Vec2::new(self.viewport.max.x, bottom))
    }

    fn recompute(&mut self, elapsed: f32) {
        let back_ratio = Self::EASE.apply(self.clock.progress());
        let front_ratio = self.front_span.eased_ratio(elapsed, Self::EASE);
        self.back_rect = self.cover_rect(self.edge_at(back_ratio));
        self.front_rect = self.cover_rect(self.edge_at(front_ratio));
    }
}

impl Animation for RectWipe {
    fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.recompute(self.clock.elapsed());
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_quad(&Quad::from_rect(self.back_rect, self.back_color));
        surface.draw_quad(&Quad::from_rect(self.front_rect, self.front_color));
    }
}
