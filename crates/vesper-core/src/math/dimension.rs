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

//! Provides integer extents for pixel-based sizes such as the viewport.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::vector::Vec2;

/// A two-dimensional extent, typically representing width and height in pixels.
///
/// This is commonly used for the drawable viewport or window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The full extent as a screen-space rectangle anchored at the origin.
    #[inline]
    pub fn as_rect(&self) -> Rect {
        Rect::from_min_max(
            Vec2::ZERO,
            Vec2::new(self.width as f32, self.height as f32),
        )
    }

    /// The center of the extent in screen space.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}
