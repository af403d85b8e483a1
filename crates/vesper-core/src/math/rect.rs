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

//! Provides the axis-aligned screen rectangle used by sprite drawing and the
//! rectangle-sweep transitions.

use super::vector::Vec2;

/// An axis-aligned rectangle in screen space, defined by its minimum and
/// maximum corner points. Screen space grows rightward in x and downward in y,
/// so `min` is the top-left corner and `max` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rect {
    /// The corner with the smallest coordinates on both axes (top-left).
    pub min: Vec2,
    /// The corner with the largest coordinates on both axes (bottom-right).
    pub max: Vec2,
}

impl Rect {
    /// Creates a new `Rect` from two corner points.
    ///
    /// The corners may be passed in any order; `min`/`max` are normalized
    /// component-wise.
    #[inline]
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a new `Rect` from a center point and a full size.
    /// The provided size is made non-negative.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = Vec2::new(size.x.abs(), size.y.abs()) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// The rectangle's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// The rectangle's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// The rectangle's center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// The four corners in drawing order: top-left, top-right, bottom-right,
    /// bottom-left. This is the vertex order the quad drawing contract expects.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Returns a copy translated by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Linearly interpolates both corners between two rectangles.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self {
            min: Vec2::lerp(start.min, end.min, t),
            max: Vec2::lerp(start.max, end.max, t),
        }
    }
}
