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

//! A headless drawing backend that records draw commands.
//!
//! Useful as a test double and for running the demo without a GPU: every
//! submitted quad and text block is kept for the current frame and can be
//! inspected after drawing.

use anyhow::Result;

use vesper_core::math::Extent2D;
use vesper_core::render::{FontId, Quad, ResourceLoader, Surface, TextBlock, TextureId};

/// One recorded draw submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A quad submission.
    Quad(Quad),
    /// A text submission.
    Text(TextBlock),
}

/// A [`Surface`] and [`ResourceLoader`] that records instead of rendering.
///
/// Resource ids are handed out sequentially; loads never fail since no
/// file access happens. Call [`begin_frame`](Self::begin_frame) once per
/// frame to clear the previous frame's commands.
#[derive(Debug)]
pub struct RecordingSurface {
    viewport: Extent2D,
    commands: Vec<DrawCommand>,
    next_texture: u32,
    next_font: u32,
    frames: u64,
}

impl RecordingSurface {
    /// Creates a surface with the given drawable size.
    #[must_use]
    pub fn new(viewport: Extent2D) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
            next_texture: 0,
            next_font: 0,
            frames: 0,
        }
    }

    /// Starts a new frame, clearing the recorded commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    /// The commands recorded since the last [`begin_frame`](Self::begin_frame).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The quads recorded this frame.
    pub fn quads(&self) -> impl Iterator<Item = &Quad> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Quad(q) => Some(q),
            DrawCommand::Text(_) => None,
        })
    }

    /// The text blocks recorded this frame.
    pub fn texts(&self) -> impl Iterator<Item = &TextBlock> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            DrawCommand::Quad(_) => None,
        })
    }

    /// The number of frames begun so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Extent2D {
        self.viewport
    }

    fn draw_quad(&mut self, quad: &Quad) {
        self.commands.push(DrawCommand::Quad(*quad));
    }

    fn draw_text(&mut self, text: &TextBlock) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}

impl ResourceLoader for RecordingSurface {
    fn load_texture(&mut self, path: &str) -> Result<TextureId> {
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        log::debug!("Recording surface: texture '{path}' -> {id:?}");
        Ok(id)
    }

    fn load_font(&mut self, path: &str) -> Result<FontId> {
        let id = FontId(self.next_font);
        self.next_font += 1;
        log::debug!("Recording surface: font '{path}' -> {id:?}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_core::math::{Rect, Rgba, Vec2};

    #[test]
    fn records_and_clears_per_frame() {
        let mut surface = RecordingSurface::new(Extent2D::new(640, 480));
        surface.begin_frame();
        surface.draw_quad(&Quad::from_rect(
            Rect::from_min_max(Vec2::ZERO, Vec2::ONE),
            Rgba::RED,
        ));
        surface.draw_text(&TextBlock::new("hi", Vec2::ZERO, Rgba::WHITE));
        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.quads().count(), 1);
        assert_eq!(surface.texts().count(), 1);

        surface.begin_frame();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.frame_count(), 2);
    }

    #[test]
    fn resource_ids_are_sequential() {
        let mut surface = RecordingSurface::new(Extent2D::new(640, 480));
        let a = surface.load_texture("a.png").unwrap();
        let b = surface.load_texture("b.png").unwrap();
        let f = surface.load_font("font.fnt").unwrap();
        assert_eq!(a, TextureId(0));
        assert_eq!(b, TextureId(1));
        assert_eq!(f, FontId(0));
    }
}
