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

//! The abstract 2D drawing contract.
//!
//! The engine core never talks to a graphics API. Scenes and animations
//! submit [`Quad`]s and [`TextBlock`]s to a [`Surface`], and a backend crate
//! decides what a draw call means (GPU submission, a recording buffer, a
//! test double). Resource loading goes through [`ResourceLoader`] and hands
//! back opaque ids.

use anyhow::Result;

use crate::math::{Extent2D, Rect, Rgba, Vec2};

/// An opaque handle to a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// An opaque handle to a loaded font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Horizontal text alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    /// Anchor at the left edge of the text.
    Left,
    /// Anchor at the horizontal center.
    #[default]
    Center,
    /// Anchor at the right edge of the text.
    Right,
}

/// Vertical text alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    /// Anchor at the top of the line box.
    Top,
    /// Anchor at the vertical middle.
    #[default]
    Middle,
    /// Anchor at the baseline/bottom.
    Bottom,
}

/// A per-glyph style override inside a [`TextBlock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    /// Index of the glyph (in characters) the override applies to.
    pub index: usize,
    /// Replacement color, if any.
    pub color: Option<Rgba>,
    /// Additional positional offset, if any.
    pub offset: Option<Vec2>,
}

/// A filled, optionally textured quadrilateral.
///
/// Corners are listed top-left, top-right, bottom-right, bottom-left —
/// the same order [`Rect::corners`] produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// The four corner positions in screen space.
    pub corners: [Vec2; 4],
    /// The fill color, modulating the texture when one is set.
    pub color: Rgba,
    /// The texture to sample, or `None` for a solid fill.
    pub texture: Option<TextureId>,
}

impl Quad {
    /// A solid-colored quad covering `rect`.
    #[inline]
    pub fn from_rect(rect: Rect, color: Rgba) -> Self {
        Self {
            corners: rect.corners(),
            color,
            texture: None,
        }
    }

    /// Attaches a texture to the quad.
    #[inline]
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// A block of text with alignment and optional per-glyph overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// The font to render with; `None` selects the backend's default font.
    pub font: Option<FontId>,
    /// UTF-8 text content.
    pub content: String,
    /// The anchor position in screen space.
    pub position: Vec2,
    /// The base fill color for all glyphs.
    pub color: Rgba,
    /// Horizontal alignment around the anchor.
    pub h_align: HAlign,
    /// Vertical alignment around the anchor.
    pub v_align: VAlign,
    /// Per-glyph overrides, applied on top of the base style.
    pub glyph_styles: Vec<GlyphStyle>,
}

impl TextBlock {
    /// A centered text block in the given color with no overrides.
    pub fn new(content: impl Into<String>, position: Vec2, color: Rgba) -> Self {
        Self {
            font: None,
            content: content.into(),
            position,
            color,
            h_align: HAlign::Center,
            v_align: VAlign::Middle,
            glyph_styles: Vec::new(),
        }
    }

    /// Sets the font.
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the alignment pair.
    pub fn aligned(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }
}

/// The per-frame drawing contract implemented by backends.
pub trait Surface {
    /// The drawable size in pixels.
    fn viewport(&self) -> Extent2D;

    /// Submits a filled quad.
    fn draw_quad(&mut self, quad: &Quad);

    /// Submits a text block.
    fn draw_text(&mut self, text: &TextBlock);
}

/// Loads drawing resources ahead of time and hands back opaque ids.
///
/// Loading is a boundary operation and may fail (missing file, bad format),
/// so it returns `anyhow::Result` unlike the infallible draw calls.
pub trait ResourceLoader {
    /// Loads a texture from `path`.
    fn load_texture(&mut self, path: &str) -> Result<TextureId>;

    /// Loads a font from `path`.
    fn load_font(&mut self, path: &str) -> Result<FontId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_from_rect_matches_corner_order() {
        let rect = Rect::from_min_max(Vec2::ZERO, Vec2::new(2.0, 1.0));
        let quad = Quad::from_rect(rect, Rgba::RED);
        assert_eq!(quad.corners, rect.corners());
        assert!(quad.texture.is_none());

        let textured = quad.with_texture(TextureId(3));
        assert_eq!(textured.texture, Some(TextureId(3)));
    }

    #[test]
    fn text_block_builder() {
        let text = TextBlock::new("READY", Vec2::new(10.0, 20.0), Rgba::WHITE)
            .with_font(FontId(1))
            .aligned(HAlign::Left, VAlign::Top);
        assert_eq!(text.font, Some(FontId(1)));
        assert_eq!(text.h_align, HAlign::Left);
        assert_eq!(text.v_align, VAlign::Top);
        assert!(text.glyph_styles.is_empty());
    }
}
