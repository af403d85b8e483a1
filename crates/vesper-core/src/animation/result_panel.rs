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

//! The staggered result readout shown on the result screen.

use super::clock::AnimationClock;
use super::easing::{Ease, Span};
use super::Animation;
use crate::math::{Rect, Rgba, Vec2};
use crate::render::{Surface, TextBlock};

/// One text line of the result panel.
///
/// Each line owns an independent time window inside the panel's duration.
/// Within the window the line slides from `from` to `to` while fading in;
/// outside the window it holds the window's boundary value exactly — a
/// line never moves before its window opens or after it closes.
#[derive(Debug, Clone)]
pub struct PanelLine {
    /// The text content.
    pub text: String,
    /// The line's animation window inside the panel duration.
    pub window: Span,
    /// Position when the window opens.
    pub from: Vec2,
    /// Position once the window has closed.
    pub to: Vec2,
    position: Vec2,
    alpha: f32,
}

impl PanelLine {
    const EASE: Ease = Ease::OutQuad;

    /// Creates a line that slides `from` → `to` and fades in over `window`.
    pub fn new(text: impl Into<String>, window: Span, from: Vec2, to: Vec2) -> Self {
        let mut line = Self {
            text: text.into(),
            window,
            from,
            to,
            position: from,
            alpha: 0.0,
        };
        line.recompute(0.0);
        line
    }

    /// The line's current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The line's current opacity.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    fn recompute(&mut self, at: f32) {
        let eased = self.window.eased_ratio(at, Self::EASE);
        self.position = Vec2::lerp(self.from, self.to, eased);
        self.alpha = eased;
    }
}

/// Slides and fades a column of result lines in, each on its own
/// staggered window, all derived purely from one clock.
#[derive(Debug, Clone)]
pub struct ResultPanel {
    clock: AnimationClock,
    lines: Vec<PanelLine>,
    color: Rgba,
}

impl ResultPanel {
    /// Seconds each line spends animating.
    const LINE_TIME: f32 = 0.9;
    /// Seconds between consecutive lines' window starts.
    const STAGGER: f32 = 0.4;
    /// Vertical slide distance in pixels.
    const SLIDE: f32 = 48.0;
    /// Line spacing in pixels.
    const LINE_SPACING: f32 = 64.0;

    /// Creates a panel from explicit lines and a total duration.
    pub fn new(duration: f32, lines: Vec<PanelLine>) -> Self {
        Self {
            clock: AnimationClock::new(duration),
            lines,
            color: Rgba::WHITE,
        }
    }

    /// Lays out `texts` as a centered column over `viewport`, with each
    /// line's window starting [`STAGGER`](Self::STAGGER) seconds after the
    /// previous one. The duration is derived so the last window fits.
    pub fn staggered(viewport: Rect, texts: &[&str]) -> Self {
        let center = viewport.center();
        let count = texts.len() as f32;
        let top = center.y - (count - 1.0) * 0.5 * Self::LINE_SPACING;
        let lines = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let start = i as f32 * Self::STAGGER;
                let rest = Vec2::new(center.x, top + i as f32 * Self::LINE_SPACING);
                PanelLine::new(
                    *text,
                    Span::new(start, start + Self::LINE_TIME),
                    rest + Vec2::new(0.0, Self::SLIDE),
                    rest,
                )
            })
            .collect::<Vec<_>>();
        let duration = if texts.is_empty() {
            0.0
        } else {
            (count - 1.0) * Self::STAGGER + Self::LINE_TIME
        };
        Self::new(duration, lines)
    }

    /// The panel's lines, with their current positions and opacities.
    #[inline]
    pub fn lines(&self) -> &[PanelLine] {
        &self.lines
    }
}

impl Animation for ResultPanel {
    fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        let at = self.clock.elapsed();
        for line in &mut self.lines {
            line.recompute(at);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for line in &self.lines {
            if line.alpha() > 0.0 {
                surface.draw_text(&TextBlock::new(
                    line.text.clone(),
                    line.position(),
                    self.color.with_alpha(line.alpha()),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Extent2D;

    const STEP: f32 = 1.0 / 60.0;

    fn panel() -> ResultPanel {
        ResultPanel::staggered(
            Extent2D::new(1280, 720).as_rect(),
            &["RESULT", "SCORE  12400", "WAVE   5", "PRESS CONFIRM"],
        )
    }

    #[test]
    fn all_lines_start_hidden_at_their_from_position() {
        let p = panel();
        for line in p.lines() {
            assert_eq!(line.alpha(), 0.0);
            assert_eq!(line.position(), line.from);
        }
    }

    #[test]
    fn lines_appear_in_stagger_order() {
        let mut p = panel();
        p.play();
        let mut first_visible: Vec<Option<f32>> = vec![None; p.lines().len()];
        while !p.is_finished() {
            p.update(STEP);
            for (i, line) in p.lines().iter().enumerate() {
                if line.alpha() > 0.0 && first_visible[i].is_none() {
                    first_visible[i] = Some(p.elapsed());
                }
            }
        }
        let times: Vec<f32> = first_visible.into_iter().map(|t| t.unwrap()).collect();
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1], "lines appeared out of order: {times:?}");
        }
    }

    #[test]
    fn line_holds_pre_value_before_its_window() {
        let mut p = panel();
        p.play();
        // The last line's window opens at 3 * STAGGER = 1.2 s.
        while p.elapsed() < 1.0 {
            p.update(STEP);
            let last = p.lines().last().unwrap();
            assert_eq!(last.alpha(), 0.0);
            assert_eq!(last.position(), last.from);
        }
    }

    #[test]
    fn line_holds_post_value_after_its_window() {
        let mut p = panel();
        p.play();
        while !p.is_finished() {
            p.update(STEP);
        }
        for line in p.lines() {
            assert_eq!(line.alpha(), 1.0);
            assert_eq!(line.position(), line.to);
        }
    }

    #[test]
    fn windows_overlap_mid_animation() {
        // Staggered but parallel: at some instant two lines are both
        // inside their windows.
        let mut p = panel();
        p.play();
        let mut overlapped = false;
        while !p.is_finished() {
            p.update(STEP);
            let animating = p
                .lines()
                .iter()
                .filter(|l| l.alpha() > 0.0 && l.alpha() < 1.0)
                .count();
            if animating >= 2 {
                overlapped = true;
            }
        }
        assert!(overlapped);
    }

    #[test]
    fn empty_panel_finishes_immediately() {
        let mut p = ResultPanel::staggered(Extent2D::new(640, 480).as_rect(), &[]);
        p.play();
        p.update(STEP);
        assert!(p.is_finished());
    }
}
